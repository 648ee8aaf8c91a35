//! Bar track detection and fill estimation.
//!
//! The bar track has a near-uniform background distinct from the surrounding
//! UI chrome, so its two boundaries show up as the strongest isolated color
//! transitions along a scan line. Within the track, filled pixels carry the
//! saturated orange fill color while empty pixels stay near gray; the
//! rightmost filled pixel fixes the fill ratio, which rounds to an integer
//! value in 0..=15.

use crate::models::config::Calibration;
use crate::models::iv::{BarBounds, MAX_IV};
use crate::models::pixel::{color_delta, max_channel_diff};
use image::Rgb;

/// Locate the left/right extent of the bar track within a sampled line
///
/// Returns `None` when the line is too short, has fewer than two color
/// transitions, or the detected span is narrower than the minimum track
/// width (which guards against text glyphs and other narrow UI noise).
pub fn detect_bar_bounds(pixels: &[Rgb<u8>], cal: &Calibration) -> Option<BarBounds> {
    if pixels.len() < cal.min_bounds_samples {
        return None;
    }

    let mut edges: Vec<usize> = Vec::new();
    for i in 0..pixels.len() - 1 {
        if color_delta(&pixels[i], &pixels[i + 1]) > cal.edge_delta {
            edges.push(i);
        }
    }
    if edges.len() < 2 {
        return None;
    }

    // Anti-aliasing smears each true boundary across a few adjacent samples;
    // collapse nearby edges into one representative index (mean, floored).
    let mut groups: Vec<usize> = Vec::new();
    let mut sum = edges[0];
    let mut count = 1usize;
    let mut prev = edges[0];
    for &edge in &edges[1..] {
        if edge - prev <= cal.edge_cluster_gap {
            sum += edge;
            count += 1;
        } else {
            groups.push(sum / count);
            sum = edge;
            count = 1;
        }
        prev = edge;
    }
    groups.push(sum / count);

    if groups.len() < 2 {
        return None;
    }

    let start_x = groups[0];
    let end_x = groups[groups.len() - 1];
    if end_x - start_x < cal.min_track_width {
        return None;
    }

    Some(BarBounds { start_x, end_x })
}

/// Estimate the filled fraction of a bar track
///
/// Input is the pixel line already sliced to the detected bounds. Too few
/// samples read as an empty bar (0.0), not an error.
pub fn estimate_fill_ratio(pixels: &[Rgb<u8>], cal: &Calibration) -> f64 {
    let len = pixels.len();
    if len < cal.min_fill_samples {
        return 0.0;
    }

    // Every bar image bakes in a leading icon/padding region; wider bars
    // carry proportionally less of it.
    let left_trim = (len as f64 * left_trim_ratio(len, cal)).round() as usize;

    // Noisy, high-contrast screenshots need a higher dominance threshold or
    // the background itself starts reading as filled.
    let spreads: Vec<f64> = pixels
        .iter()
        .map(|p| f64::from(max_channel_diff(p)))
        .collect();
    let mean = spreads.iter().sum::<f64>() / len as f64;
    let variance = spreads.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / len as f64;
    let threshold = (cal.base_color_threshold + variance.sqrt() * cal.threshold_noise_scale)
        .clamp(cal.base_color_threshold, cal.max_color_threshold);

    // Rightmost pixel that is both color-dominant and red-over-blue (the
    // orange fill against neutral track background).
    let mut last_filled = 0usize;
    for (i, px) in pixels.iter().enumerate().rev() {
        let dominant = f64::from(max_channel_diff(px)) > threshold;
        let red_leaning =
            u16::from(px[0]) > u16::from(px[2]) + u16::from(cal.red_over_blue_margin);
        if dominant && red_leaning {
            last_filled = i;
            break;
        }
    }

    let effective_total = len.saturating_sub(left_trim).max(1);

    // Anti-aliased glow past the true bar end would otherwise inflate the
    // estimate by a pixel or two.
    let edge_buffer = ((effective_total as f64 * cal.edge_buffer_ratio).floor() as usize).max(1);

    let effective_filled = last_filled.saturating_sub(left_trim + edge_buffer);
    effective_filled as f64 / effective_total as f64
}

/// Map a fill ratio to an integer value in 0..=15
///
/// Noise-only detections floor to 0 and near-full bars snap to 15; between
/// those, a two-tier bias corrects the systematic under-count at low fill
/// and over-count near full. The bias values are calibration constants.
pub fn ratio_to_iv(ratio: f64, cal: &Calibration) -> u8 {
    if ratio < cal.empty_ratio {
        return 0;
    }
    if ratio > cal.full_ratio {
        return MAX_IV;
    }
    let bias = if ratio < cal.low_fill_cutoff {
        cal.low_fill_bias
    } else {
        cal.high_fill_bias
    };
    let iv = (ratio * f64::from(MAX_IV) + bias).floor();
    (iv.max(0.0) as u8).min(MAX_IV)
}

/// Estimate the integer value encoded by a bounds-sliced bar track
pub fn estimate_iv(pixels: &[Rgb<u8>], cal: &Calibration) -> u8 {
    ratio_to_iv(estimate_fill_ratio(pixels, cal), cal)
}

/// Trim fraction for a bar of `len` samples: fixed outside the
/// narrow/wide window, linearly interpolated inside it
fn left_trim_ratio(len: usize, cal: &Calibration) -> f64 {
    if len <= cal.narrow_bar_len {
        cal.narrow_trim_ratio
    } else if len > cal.wide_bar_len {
        cal.wide_trim_ratio
    } else {
        let t = (len - cal.narrow_bar_len) as f64
            / (cal.wide_bar_len - cal.narrow_bar_len) as f64;
        cal.narrow_trim_ratio + (cal.wide_trim_ratio - cal.narrow_trim_ratio) * t
    }
}
