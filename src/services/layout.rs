//! Percentage-based bar region calculator.
//!
//! The stat panel sits at a fixed relative position in the capture screen, so
//! its pixel rectangle can be derived from the screenshot dimensions alone.
//! Anchor positions from text recognition are more accurate when available;
//! these regions are the fallback, and the overlay renderer draws them either
//! way.

use crate::models::region::{BarRegion, ImageDimensions};

// Stat panel placement relative to the full screenshot
const PANEL_TOP_RATIO: f64 = 0.55;
const PANEL_HEIGHT_RATIO: f64 = 0.22;
const PANEL_WIDTH_RATIO: f64 = 0.80;

// Bar placement relative to the panel, top to bottom: Attack, Defense, Stamina
const BAR_OFFSET_RATIOS: [f64; 3] = [0.0, 0.36, 0.72];
const BAR_HEIGHT_RATIO: f64 = 0.28;

/// The stat panel and the three bar rectangles inside it
#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    pub panel: BarRegion,
    pub attack: BarRegion,
    pub defense: BarRegion,
    pub stamina: BarRegion,
}

impl BarLayout {
    /// Bars in screen order, labeled for overlays and diagnostics
    pub fn bars(&self) -> [(&'static str, &BarRegion); 3] {
        [
            ("attack", &self.attack),
            ("defense", &self.defense),
            ("stamina", &self.stamina),
        ]
    }
}

/// Compute the panel and bar rectangles for a screenshot of the given size
///
/// Pure scaling of the layout constants; always succeeds.
pub fn calculate_bar_regions(dims: &ImageDimensions) -> BarLayout {
    let width = f64::from(dims.width);
    let height = f64::from(dims.height);

    let panel = BarRegion::new(
        width * (1.0 - PANEL_WIDTH_RATIO) / 2.0,
        height * PANEL_TOP_RATIO,
        width * PANEL_WIDTH_RATIO,
        height * PANEL_HEIGHT_RATIO,
    );

    let bar = |offset_ratio: f64| {
        BarRegion::new(
            panel.x,
            panel.y + panel.height * offset_ratio,
            panel.width,
            panel.height * BAR_HEIGHT_RATIO,
        )
    };

    BarLayout {
        attack: bar(BAR_OFFSET_RATIOS[0]),
        defense: bar(BAR_OFFSET_RATIOS[1]),
        stamina: bar(BAR_OFFSET_RATIOS[2]),
        panel,
    }
}

/// Vertical midpoint of a bar region, used as its scan line when no anchor
/// position is available
pub fn scan_line_y(region: &BarRegion) -> f64 {
    region.y + region.height * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-6, "expected {} ≈ {}", a, b);
    }

    #[test]
    fn test_panel_geometry() {
        let dims = ImageDimensions::new(1000, 2000).unwrap();
        let layout = calculate_bar_regions(&dims);

        assert_close(layout.panel.x, 100.0); // centered 80% width
        assert_close(layout.panel.y, 1100.0); // 55% of height
        assert_close(layout.panel.width, 800.0);
        assert_close(layout.panel.height, 440.0); // 22% of height
    }

    #[test]
    fn test_bars_ordered_within_panel() {
        let dims = ImageDimensions::new(1080, 1920).unwrap();
        let layout = calculate_bar_regions(&dims);

        assert!(layout.attack.y < layout.defense.y);
        assert!(layout.defense.y < layout.stamina.y);

        for (_, bar) in layout.bars() {
            assert!(bar.is_valid());
            assert!(bar.y >= layout.panel.y);
            assert!(bar.y2() <= layout.panel.y2() + 1e-6);
            assert_close(bar.x, layout.panel.x);
            assert_close(bar.width, layout.panel.width);
            assert_close(bar.height, layout.panel.height * 0.28);
        }
    }

    #[test]
    fn test_regions_scale_linearly() {
        let small = calculate_bar_regions(&ImageDimensions::new(100, 200).unwrap());
        let large = calculate_bar_regions(&ImageDimensions::new(1000, 2000).unwrap());

        let pairs = [
            (&small.panel, &large.panel),
            (&small.attack, &large.attack),
            (&small.defense, &large.defense),
            (&small.stamina, &large.stamina),
        ];
        for (s, l) in pairs {
            assert_close(l.x, s.x * 10.0);
            assert_close(l.y, s.y * 10.0);
            assert_close(l.width, s.width * 10.0);
            assert_close(l.height, s.height * 10.0);
        }
    }

    #[test]
    fn test_scan_line_is_vertical_midpoint() {
        let region = BarRegion::new(100.0, 1100.0, 800.0, 120.0);
        assert_close(scan_line_y(&region), 1160.0);
    }
}
