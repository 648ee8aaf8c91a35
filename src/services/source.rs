//! Pixel-reading backend abstraction.
//!
//! The pipeline never touches image decoding directly; it asks a
//! [`PixelSource`] for evenly spaced RGB samples along one row. The bundled
//! adapter reads from a decoded `image` buffer, but anything that can answer
//! "give me N colors along row y" works: a native bitmap API, a canvas
//! readback, a test fixture.

use crate::models::pixel::PixelLine;
use crate::models::region::ImageDimensions;
use async_trait::async_trait;
use image::{DynamicImage, RgbImage};
use std::path::Path;
use thiserror::Error;

/// Hard failures at the pixel-extraction boundary
///
/// Only decode-level problems surface as errors. A backend that declines to
/// sample (feature off, unsupported platform) returns an empty line instead,
/// which downstream stages treat as "no data".
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("image has zero width or height")]
    EmptyImage,
}

/// One-method capability: sample colors along a horizontal line
#[async_trait]
pub trait PixelSource: Send + Sync {
    /// Decoded dimensions of the underlying image
    fn dimensions(&self) -> ImageDimensions;

    /// Sample `count` evenly spaced points on row `y` between `start_x` and
    /// `end_x`, clamped to image bounds. An empty line means the backend
    /// declined; it is not an error.
    async fn sample_line(
        &self,
        y: f64,
        start_x: f64,
        end_x: f64,
        count: usize,
    ) -> Result<PixelLine, SourceError>;
}

/// Pixel source backed by an already-decoded image buffer
pub struct DecodedImageSource {
    pixels: RgbImage,
}

impl DecodedImageSource {
    pub fn new(image: &DynamicImage) -> Result<Self, SourceError> {
        let pixels = image.to_rgb8();
        if pixels.width() == 0 || pixels.height() == 0 {
            return Err(SourceError::EmptyImage);
        }
        Ok(Self { pixels })
    }

    /// Decode an image file from disk
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let image = image::open(path)?;
        Self::new(&image)
    }

    fn clamp_x(&self, x: f64) -> u32 {
        (x.round().max(0.0) as u32).min(self.pixels.width() - 1)
    }

    fn clamp_y(&self, y: f64) -> u32 {
        (y.round().max(0.0) as u32).min(self.pixels.height() - 1)
    }
}

#[async_trait]
impl PixelSource for DecodedImageSource {
    fn dimensions(&self) -> ImageDimensions {
        ImageDimensions {
            width: self.pixels.width(),
            height: self.pixels.height(),
        }
    }

    async fn sample_line(
        &self,
        y: f64,
        start_x: f64,
        end_x: f64,
        count: usize,
    ) -> Result<PixelLine, SourceError> {
        if count == 0 {
            return Ok(Vec::new());
        }

        let row = self.clamp_y(y);
        let mut line = Vec::with_capacity(count);
        for i in 0..count {
            let t = if count > 1 {
                i as f64 / (count - 1) as f64
            } else {
                0.0
            };
            let x = self.clamp_x(start_x + (end_x - start_x) * t);
            line.push(*self.pixels.get_pixel(x, row));
        }
        Ok(line)
    }
}
