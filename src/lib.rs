pub mod models;
pub mod services;

pub use models::config::{Calibration, MissingAnchorPolicy, VisionConfig};
pub use models::iv::{BarAnchors, BarBounds, IvResult, MAX_IV};
pub use models::pixel::PixelLine;
pub use models::region::{BarRegion, ImageDimensions};
pub use services::layout::{calculate_bar_regions, scan_line_y, BarLayout};
pub use services::scanner::{BarScan, IvScanner, ScanReport, Stat};
pub use services::source::{DecodedImageSource, PixelSource, SourceError};
