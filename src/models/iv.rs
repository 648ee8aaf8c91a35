use serde::{Deserialize, Serialize};

/// Highest possible individual value per stat
pub const MAX_IV: u8 = 15;

/// Estimated individual values for one captured creature
///
/// Each field is computed independently from its own bar; no invariant links
/// them. A creature may legitimately score three 15s or three 0s.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct IvResult {
    pub atk: u8,
    pub def: u8,
    pub sta: u8,
}

impl IvResult {
    pub fn new(atk: u8, def: u8, sta: u8) -> Self {
        Self { atk, def, sta }
    }

    /// Sum of the three values (0-45)
    pub fn total(&self) -> u8 {
        self.atk + self.def + self.sta
    }

    /// Overall quality as a percentage of the 45-point maximum
    pub fn percent(&self) -> f64 {
        f64::from(self.total()) / f64::from(3 * MAX_IV) * 100.0
    }

    pub fn is_perfect(&self) -> bool {
        self.atk == MAX_IV && self.def == MAX_IV && self.sta == MAX_IV
    }
}

/// Detected left/right extent of a bar track within a sampled line
///
/// Indices into a `PixelLine`, excluding surrounding icon and background
/// pixels. Produced by bounds detection only when the span passes the
/// minimum-width sanity check.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BarBounds {
    pub start_x: usize,
    pub end_x: usize,
}

impl BarBounds {
    pub fn width(&self) -> usize {
        self.end_x.saturating_sub(self.start_x)
    }
}

/// Anchor Y coordinates supplied by the text-recognition collaborator
///
/// When present these locate each bar more accurately than the fixed
/// percentage layout. Any field may be missing; how the scanner reacts to an
/// incomplete set is a configuration choice.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct BarAnchors {
    pub attack: Option<f64>,
    pub defense: Option<f64>,
    pub stamina: Option<f64>,
}

impl BarAnchors {
    pub fn new(attack: f64, defense: f64, stamina: f64) -> Self {
        Self {
            attack: Some(attack),
            defense: Some(defense),
            stamina: Some(stamina),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.attack.is_some() && self.defense.is_some() && self.stamina.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iv_result_totals() {
        let result = IvResult::new(15, 14, 13);
        assert_eq!(result.total(), 42);
        assert!(!result.is_perfect());

        let perfect = IvResult::new(15, 15, 15);
        assert_eq!(perfect.total(), 45);
        assert!((perfect.percent() - 100.0).abs() < 1e-9);
        assert!(perfect.is_perfect());

        let empty = IvResult::new(0, 0, 0);
        assert_eq!(empty.total(), 0);
        assert_eq!(empty.percent(), 0.0);
    }

    #[test]
    fn test_iv_result_serialization() {
        let result = IvResult::new(12, 3, 15);
        let json = serde_json::to_string(&result).unwrap();
        let deserialized: IvResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, deserialized);
    }

    #[test]
    fn test_bar_bounds_width() {
        let bounds = BarBounds {
            start_x: 49,
            end_x: 349,
        };
        assert_eq!(bounds.width(), 300);

        let inverted = BarBounds {
            start_x: 10,
            end_x: 5,
        };
        assert_eq!(inverted.width(), 0);
    }

    #[test]
    fn test_anchors_completeness() {
        assert!(!BarAnchors::default().is_complete());

        let partial = BarAnchors {
            attack: Some(1056.0),
            defense: Some(1140.0),
            stamina: None,
        };
        assert!(!partial.is_complete());

        assert!(BarAnchors::new(1056.0, 1140.0, 1224.0).is_complete());
    }
}
