//! Scan line and scan band sampling.
//!
//! Thin layer between the pixel source and the analysis stages: it absorbs
//! backend failures into the empty-line case and widens a single scan line
//! into a three-row consensus band.

use crate::models::pixel::PixelLine;
use crate::services::consensus::reduce_lines;
use crate::services::source::PixelSource;
use tracing::warn;

/// Band rows sit this fraction of the image height above and below the center
const BAND_HALF_HEIGHT_RATIO: f64 = 0.005;

/// Sample one horizontal scan line
///
/// Backend errors (decode failure) degrade to an empty line; so does a
/// declining backend. Callers see "no data" either way.
pub async fn sample_scan_line(
    source: &dyn PixelSource,
    y: f64,
    start_x: f64,
    end_x: f64,
    count: usize,
) -> PixelLine {
    match source.sample_line(y, start_x, end_x, count).await {
        Ok(line) => line,
        Err(e) => {
            warn!(error = %e, y, "pixel source failed, treating scan line as empty");
            Vec::new()
        }
    }
}

/// Sample a three-row band around `center_y` and reduce it to one consensus line
///
/// Rows that yield no data are skipped. One surviving row is returned as-is;
/// zero surviving rows produce an empty line.
pub async fn sample_scan_band(
    source: &dyn PixelSource,
    center_y: f64,
    start_x: f64,
    end_x: f64,
    image_height: u32,
    count: usize,
) -> PixelLine {
    let half = (f64::from(image_height) * BAND_HALF_HEIGHT_RATIO).max(1.0);

    let mut rows: Vec<PixelLine> = Vec::with_capacity(3);
    for y in [center_y - half, center_y, center_y + half] {
        let line = sample_scan_line(source, y, start_x, end_x, count).await;
        if !line.is_empty() {
            rows.push(line);
        }
    }

    match rows.len() {
        0 => Vec::new(),
        1 => rows.swap_remove(0),
        _ => reduce_lines(&rows),
    }
}
