use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Calibration record revision, bumped whenever a constant is re-tuned
pub const CALIBRATION_VERSION: u32 = 2;

/// Empirically tuned constants for bounds detection and fill estimation
///
/// Every threshold the pipeline uses lives here under a name, so a
/// recalibration shows up as a diff of this record (and a version bump)
/// instead of a scattered literal change. The bias values in particular are
/// corrections fitted against real screenshots, not derived from a formula.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Calibration {
    pub version: u32,

    // Bounds detection
    /// Minimum samples required before attempting bounds detection
    pub min_bounds_samples: usize,
    /// Summed per-channel delta above which adjacent samples count as an edge
    pub edge_delta: u32,
    /// Edges within this many positions collapse into one cluster
    pub edge_cluster_gap: usize,
    /// Detected track spans narrower than this are rejected as spurious
    pub min_track_width: usize,

    // Fill estimation
    /// Minimum samples required before attempting fill estimation
    pub min_fill_samples: usize,
    /// Left-trim fraction for bars at or below `narrow_bar_len` samples
    pub narrow_trim_ratio: f64,
    /// Left-trim fraction for bars above `wide_bar_len` samples
    pub wide_trim_ratio: f64,
    pub narrow_bar_len: usize,
    pub wide_bar_len: usize,
    /// Floor of the color-dominance threshold
    pub base_color_threshold: f64,
    /// How strongly sample noise (std dev of channel spread) raises the threshold
    pub threshold_noise_scale: f64,
    /// Ceiling of the color-dominance threshold
    pub max_color_threshold: f64,
    /// A filled pixel must have R exceed B by at least this margin
    pub red_over_blue_margin: u8,
    /// Fraction of the track discarded at the right end for anti-aliased glow
    pub edge_buffer_ratio: f64,

    // Ratio-to-IV rounding
    /// Ratios below this are forced to 0
    pub empty_ratio: f64,
    /// Ratios above this are forced to 15
    pub full_ratio: f64,
    /// Bias switches from low to high at this fill ratio
    pub low_fill_cutoff: f64,
    pub low_fill_bias: f64,
    pub high_fill_bias: f64,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            version: CALIBRATION_VERSION,
            min_bounds_samples: 50,
            edge_delta: 30,
            edge_cluster_gap: 5,
            min_track_width: 80,
            min_fill_samples: 30,
            narrow_trim_ratio: 0.125,
            wide_trim_ratio: 0.07,
            narrow_bar_len: 400,
            wide_bar_len: 600,
            base_color_threshold: 25.0,
            threshold_noise_scale: 1.5,
            max_color_threshold: 80.0,
            red_over_blue_margin: 30,
            edge_buffer_ratio: 0.015,
            empty_ratio: 0.03,
            full_ratio: 0.97,
            low_fill_cutoff: 0.40,
            low_fill_bias: 0.05,
            high_fill_bias: 0.35,
        }
    }
}

/// What the scanner does when anchor positions are missing or incomplete
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MissingAnchorPolicy {
    /// Substitute scan lines from the fixed percentage layout
    Fallback,
    /// Return no result at all (analysis not attempted)
    Abort,
}

impl Default for MissingAnchorPolicy {
    fn default() -> Self {
        Self::Fallback
    }
}

/// Complete scanner configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VisionConfig {
    /// Global switch; a disabled scanner reports "not attempted" (None)
    pub enabled: bool,
    #[serde(default)]
    pub on_missing_anchors: MissingAnchorPolicy,
    #[serde(default)]
    pub calibration: Calibration,
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            on_missing_anchors: MissingAnchorPolicy::default(),
            calibration: Calibration::default(),
        }
    }
}

impl VisionConfig {
    /// Load configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        let config: VisionConfig = serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse config file: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calibration_default() {
        let cal = Calibration::default();

        assert_eq!(cal.version, CALIBRATION_VERSION);
        assert_eq!(cal.min_bounds_samples, 50);
        assert_eq!(cal.edge_delta, 30);
        assert_eq!(cal.edge_cluster_gap, 5);
        assert_eq!(cal.min_track_width, 80);
        assert_eq!(cal.min_fill_samples, 30);
        assert_eq!(cal.base_color_threshold, 25.0);
        assert_eq!(cal.max_color_threshold, 80.0);
        assert_eq!(cal.red_over_blue_margin, 30);

        // Trim interpolation endpoints must slope downward
        assert!(cal.narrow_trim_ratio > cal.wide_trim_ratio);
        assert!(cal.narrow_bar_len < cal.wide_bar_len);

        // Rounding bands must be ordered
        assert!(cal.empty_ratio < cal.low_fill_cutoff);
        assert!(cal.low_fill_cutoff < cal.full_ratio);
        assert!(cal.low_fill_bias < cal.high_fill_bias);
    }

    #[test]
    fn test_vision_config_default() {
        let config = VisionConfig::default();
        assert!(config.enabled);
        assert_eq!(config.on_missing_anchors, MissingAnchorPolicy::Fallback);
        assert_eq!(config.calibration, Calibration::default());
    }

    #[test]
    fn test_vision_config_serialization() {
        let config = VisionConfig {
            enabled: false,
            on_missing_anchors: MissingAnchorPolicy::Abort,
            calibration: Calibration::default(),
        };
        let json = serde_json::to_string_pretty(&config).unwrap();

        let deserialized: VisionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_policy_serialization() {
        assert_eq!(
            serde_json::to_string(&MissingAnchorPolicy::Fallback).unwrap(),
            "\"fallback\""
        );
        assert_eq!(
            serde_json::to_string(&MissingAnchorPolicy::Abort).unwrap(),
            "\"abort\""
        );
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        // Omitted sections fall back to defaults
        let config: VisionConfig = serde_json::from_str(r#"{"enabled": true}"#).unwrap();
        assert!(config.enabled);
        assert_eq!(config.on_missing_anchors, MissingAnchorPolicy::Fallback);
        assert_eq!(config.calibration.min_track_width, 80);
    }

    #[test]
    fn test_from_json_file() {
        let path = std::env::temp_dir().join("iv-vision-config-test.json");
        let config = VisionConfig {
            enabled: true,
            on_missing_anchors: MissingAnchorPolicy::Abort,
            calibration: Calibration::default(),
        };
        fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = VisionConfig::from_json_file(&path).unwrap();
        assert_eq!(loaded, config);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_from_json_file_missing() {
        let result = VisionConfig::from_json_file(Path::new("/nonexistent/config.json"));
        assert!(result.is_err());
    }
}
