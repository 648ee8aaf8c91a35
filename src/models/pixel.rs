use image::Rgb;

/// Ordered sequence of RGB samples taken along a scan line
pub type PixelLine = Vec<Rgb<u8>>;

/// Black sample used to pad missing positions during band reduction
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Sum of absolute per-channel differences between two samples
///
/// This is the edge strength used by bounds detection: a large delta between
/// adjacent samples marks a color transition in the UI.
pub fn color_delta(a: &Rgb<u8>, b: &Rgb<u8>) -> u32 {
    let dr = (i32::from(a[0]) - i32::from(b[0])).unsigned_abs();
    let dg = (i32::from(a[1]) - i32::from(b[1])).unsigned_abs();
    let db = (i32::from(a[2]) - i32::from(b[2])).unsigned_abs();
    dr + dg + db
}

/// Largest pairwise channel difference within one sample
///
/// Near-gray UI chrome scores close to 0; the saturated fill color of a bar
/// scores high. Used for the color-dominance test in the fill estimator.
pub fn max_channel_diff(p: &Rgb<u8>) -> u8 {
    let Rgb([r, g, b]) = *p;
    let rg = r.abs_diff(g);
    let gb = g.abs_diff(b);
    let rb = r.abs_diff(b);
    rg.max(gb).max(rb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_delta() {
        let a = Rgb([120, 120, 120]);
        let b = Rgb([230, 110, 40]);
        // |230-120| + |110-120| + |40-120| = 110 + 10 + 80
        assert_eq!(color_delta(&a, &b), 200);
        assert_eq!(color_delta(&b, &a), 200);
        assert_eq!(color_delta(&a, &a), 0);
    }

    #[test]
    fn test_max_channel_diff() {
        assert_eq!(max_channel_diff(&Rgb([120, 120, 120])), 0);
        assert_eq!(max_channel_diff(&Rgb([230, 110, 40])), 190);
        assert_eq!(max_channel_diff(&Rgb([0, 255, 0])), 255);
    }
}
