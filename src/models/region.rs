use serde::{Deserialize, Serialize};

/// Decoded pixel dimensions of a source screenshot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    /// Create dimensions, rejecting empty images
    pub fn new(width: u32, height: u32) -> Result<Self, String> {
        if width == 0 || height == 0 {
            return Err(format!("image dimensions must be non-zero, got {}x{}", width, height));
        }
        Ok(Self { width, height })
    }
}

/// Axis-aligned rectangle in image pixel space locating one stat bar
///
/// Coordinates are fractional because regions are derived from percentage
/// layout constants. Never mutated after creation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BarRegion {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarRegion {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Get the end coordinates
    pub fn x2(&self) -> f64 {
        self.x + self.width
    }

    pub fn y2(&self) -> f64 {
        self.y + self.height
    }

    /// Validate region dimensions
    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Check if the region contains a point
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x2() && y >= self.y && y < self.y2()
    }
}
