//! Top-level IV scan orchestrator.
//!
//! Drives the pipeline stage by stage for each of the three bars: consensus
//! band across the full image width, bounds detection, fill estimation. All
//! per-bar failures degrade to a value of 0; only a disabled scanner or a
//! missing-anchor abort withholds the result entirely. Nothing here panics
//! across the boundary.

use crate::models::config::{MissingAnchorPolicy, VisionConfig};
use crate::models::iv::{BarAnchors, BarBounds, IvResult};
use crate::models::region::ImageDimensions;
use crate::services::detector::{detect_bar_bounds, estimate_fill_ratio, ratio_to_iv};
use crate::services::layout::{calculate_bar_regions, scan_line_y};
use crate::services::sampler::sample_scan_band;
use crate::services::source::PixelSource;
use serde::Serialize;
use tracing::{debug, warn};

/// The three estimated stats, in screen order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    Attack,
    Defense,
    Stamina,
}

/// Per-bar diagnostics surfaced alongside the result
///
/// Lets consumers distinguish "bounds not found" (manual entry territory)
/// from "bar legitimately empty"; the overlay renderer also feeds on this.
#[derive(Debug, Clone, Serialize)]
pub struct BarScan {
    pub stat: Stat,
    pub scan_y: f64,
    pub samples: usize,
    pub bounds: Option<BarBounds>,
    pub fill_ratio: f64,
    pub value: u8,
}

/// Full outcome of one screenshot analysis
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub result: IvResult,
    pub bars: Vec<BarScan>,
}

/// IV bar scanner
pub struct IvScanner {
    config: VisionConfig,
}

impl IvScanner {
    pub fn new(config: VisionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &VisionConfig {
        &self.config
    }

    /// Analyze one screenshot and return the three IVs
    ///
    /// `None` means analysis was not attempted (scanner disabled, or anchors
    /// missing under the abort policy) - distinct from an attempted analysis
    /// that read zeros.
    pub async fn scan(
        &self,
        source: &dyn PixelSource,
        anchors: Option<&BarAnchors>,
    ) -> Option<IvResult> {
        self.scan_with_diagnostics(source, anchors)
            .await
            .map(|report| report.result)
    }

    /// Analyze one screenshot, keeping per-bar diagnostics
    pub async fn scan_with_diagnostics(
        &self,
        source: &dyn PixelSource,
        anchors: Option<&BarAnchors>,
    ) -> Option<ScanReport> {
        if !self.config.enabled {
            debug!("scanner disabled, skipping analysis");
            return None;
        }

        let dims = source.dimensions();
        let scan_lines = self.resolve_scan_lines(&dims, anchors)?;

        let mut bars = Vec::with_capacity(3);
        for (stat, y) in scan_lines {
            let band = sample_scan_band(
                source,
                y,
                0.0,
                f64::from(dims.width.saturating_sub(1)),
                dims.height,
                dims.width as usize,
            )
            .await;

            let bounds = detect_bar_bounds(&band, &self.config.calibration);
            let track = match bounds {
                Some(b) => &band[b.start_x..b.end_x],
                None => &[],
            };
            let fill_ratio = estimate_fill_ratio(track, &self.config.calibration);
            let value = ratio_to_iv(fill_ratio, &self.config.calibration);

            debug!(
                ?stat,
                scan_y = y,
                samples = band.len(),
                ?bounds,
                fill_ratio,
                value,
                "bar analyzed"
            );

            bars.push(BarScan {
                stat,
                scan_y: y,
                samples: band.len(),
                bounds,
                fill_ratio,
                value,
            });
        }

        let result = IvResult::new(bars[0].value, bars[1].value, bars[2].value);
        debug!(?result, "scan complete");
        Some(ScanReport { result, bars })
    }

    /// Pick the scan line for each bar: anchor positions when supplied,
    /// percentage layout otherwise - or no scan at all under the abort policy
    fn resolve_scan_lines(
        &self,
        dims: &ImageDimensions,
        anchors: Option<&BarAnchors>,
    ) -> Option<[(Stat, f64); 3]> {
        let anchors = anchors.copied().unwrap_or_default();

        if let (Some(attack), Some(defense), Some(stamina)) =
            (anchors.attack, anchors.defense, anchors.stamina)
        {
            return Some([
                (Stat::Attack, attack),
                (Stat::Defense, defense),
                (Stat::Stamina, stamina),
            ]);
        }

        match self.config.on_missing_anchors {
            MissingAnchorPolicy::Abort => {
                warn!("anchor positions missing or incomplete, aborting analysis per policy");
                None
            }
            MissingAnchorPolicy::Fallback => {
                debug!("anchor positions incomplete, falling back to percentage layout");
                let layout = calculate_bar_regions(dims);
                Some([
                    (
                        Stat::Attack,
                        anchors.attack.unwrap_or_else(|| scan_line_y(&layout.attack)),
                    ),
                    (
                        Stat::Defense,
                        anchors
                            .defense
                            .unwrap_or_else(|| scan_line_y(&layout.defense)),
                    ),
                    (
                        Stat::Stamina,
                        anchors
                            .stamina
                            .unwrap_or_else(|| scan_line_y(&layout.stamina)),
                    ),
                ])
            }
        }
    }
}
