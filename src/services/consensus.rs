//! Band consensus reduction.
//!
//! A single scan row can hit a stray glyph, a shadow, or compression noise.
//! Sampling a few adjacent rows and taking the per-position median filters
//! most of that out.

use crate::models::pixel::{PixelLine, BLACK};
use image::Rgb;

/// Reduce parallel scan lines to one consensus line via per-channel median
///
/// Position `i` of the output takes the median R, median G and median B of
/// position `i` across all input lines. The channels are independent, so the
/// output triple may not match any single sampled pixel; that approximation
/// is accepted. Lines shorter than the longest one contribute black at their
/// missing positions.
pub fn reduce_lines(lines: &[PixelLine]) -> PixelLine {
    let len = lines.iter().map(|l| l.len()).max().unwrap_or(0);
    if len == 0 {
        return Vec::new();
    }

    (0..len)
        .map(|i| {
            let mut r = Vec::with_capacity(lines.len());
            let mut g = Vec::with_capacity(lines.len());
            let mut b = Vec::with_capacity(lines.len());
            for line in lines {
                let px = line.get(i).unwrap_or(&BLACK);
                r.push(px[0]);
                g.push(px[1]);
                b.push(px[2]);
            }
            Rgb([median(&mut r), median(&mut g), median(&mut b)])
        })
        .collect()
}

/// Median of one channel's values; upper middle element for even counts
fn median(values: &mut [u8]) -> u8 {
    values.sort_unstable();
    values[values.len() / 2]
}
