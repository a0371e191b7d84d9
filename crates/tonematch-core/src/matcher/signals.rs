//! Coarse skin signals derived from a Lab skin tone.
//!
//! Two axes only: undertone (blue–yellow bias) and depth (lightness band).
//! The thresholds are the tuned values the scoring heuristic was built
//! around; changing them changes every downstream bonus.

use crate::color::Lab;

/// Warm/cool/neutral classification of the skin tone's b-axis bias.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Undertone {
    Warm,
    Cool,
    Neutral,
}

impl Undertone {
    const WARM_B_MIN: f64 = 9.0;
    const COOL_B_MAX: f64 = -6.0;

    /// Classify a skin tone.
    ///
    /// ```text
    /// b >=  9 → Warm
    /// b <= -6 → Cool
    /// else    → Neutral
    /// ```
    pub fn of(skin: Lab) -> Self {
        if skin.b >= Self::WARM_B_MIN {
            Self::Warm
        } else if skin.b <= Self::COOL_B_MAX {
            Self::Cool
        } else {
            Self::Neutral
        }
    }
}

/// Light/medium/deep classification of the skin tone's lightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    Light,
    Medium,
    Deep,
}

impl Depth {
    const LIGHT_L_MIN: f64 = 72.0;
    const DEEP_L_MAX: f64 = 46.0;

    /// Classify a skin tone.
    ///
    /// ```text
    /// L >= 72 → Light
    /// L <= 46 → Deep
    /// else    → Medium
    /// ```
    pub fn of(skin: Lab) -> Self {
        if skin.l >= Self::LIGHT_L_MIN {
            Self::Light
        } else if skin.l <= Self::DEEP_L_MAX {
            Self::Deep
        } else {
            Self::Medium
        }
    }

    /// Acceptable |ΔL| contrast band between garment and skin, `(min, max)`.
    pub const fn contrast_band(&self) -> (f64, f64) {
        match self {
            Self::Light => (22.0, 62.0),
            Self::Deep => (20.0, 70.0),
            Self::Medium => (18.0, 55.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::hex_to_lab;

    fn lab(l: f64, a: f64, b: f64) -> Lab {
        Lab { l, a, b }
    }

    #[test]
    fn test_undertone_thresholds_are_inclusive() {
        assert_eq!(Undertone::of(lab(50.0, 0.0, 9.0)), Undertone::Warm);
        assert_eq!(Undertone::of(lab(50.0, 0.0, 8.9)), Undertone::Neutral);
        assert_eq!(Undertone::of(lab(50.0, 0.0, -6.0)), Undertone::Cool);
        assert_eq!(Undertone::of(lab(50.0, 0.0, -5.9)), Undertone::Neutral);
    }

    #[test]
    fn test_depth_thresholds_are_inclusive() {
        assert_eq!(Depth::of(lab(72.0, 0.0, 0.0)), Depth::Light);
        assert_eq!(Depth::of(lab(71.9, 0.0, 0.0)), Depth::Medium);
        assert_eq!(Depth::of(lab(46.0, 0.0, 0.0)), Depth::Deep);
        assert_eq!(Depth::of(lab(46.1, 0.0, 0.0)), Depth::Medium);
    }

    #[test]
    fn test_warm_light_skin_classifies_as_expected() {
        let skin = hex_to_lab("#F2D7C1").unwrap();
        assert_eq!(Undertone::of(skin), Undertone::Warm);
        assert_eq!(Depth::of(skin), Depth::Light);
    }

    #[test]
    fn test_contrast_band_varies_with_depth() {
        assert_eq!(Depth::Light.contrast_band(), (22.0, 62.0));
        assert_eq!(Depth::Deep.contrast_band(), (20.0, 70.0));
        assert_eq!(Depth::Medium.contrast_band(), (18.0, 55.0));
    }
}
