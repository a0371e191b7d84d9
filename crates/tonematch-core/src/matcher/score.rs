//! Per-color heuristic scoring against a skin tone.
//!
//! Each catalog color gets a total score built from five terms:
//! closeness, contrast bonus, undertone harmony, anti-washout penalty
//! and depth bonus. Higher is better. All constants are load-bearing;
//! the selection tests pin the resulting ranking.

use crate::catalog::BrandColor;
use crate::color::{Lab, delta_e};
use crate::matcher::signals::{Depth, Undertone};

// Contrast inside the depth band earns a bonus, outside it a penalty.
const CONTRAST_BONUS: f64 = 18.0;
const CONTRAST_PENALTY: f64 = -8.0;

// Undertone harmony on the color's b axis.
const TONE_BONUS: f64 = 14.0;
const TONE_PENALTY: f64 = -10.0;
const TONE_NEUTRAL_BONUS: f64 = 10.0;
const TONE_NEUTRAL_PENALTY: f64 = -4.0;
const WARM_B_MIN: f64 = 2.0;
const COOL_B_MAX: f64 = 0.0;
const NEUTRAL_B_SPAN: f64 = 6.0;

// Colors nearly identical to the skin wash the face out.
const WASHOUT_HARD: f64 = -22.0;
const WASHOUT_SOFT: f64 = -10.0;
const WASHOUT_HARD_DE: f64 = 9.0;
const WASHOUT_SOFT_DE: f64 = 13.0;

// Depth affinity on the color's lightness.
const DEEP_L_MIN: f64 = 20.0;
const LIGHT_L_TOO_DARK: f64 = 14.0;

// Closeness decays linearly from this ceiling with ΔE.
const CLOSENESS_CEILING: f64 = 42.0;

/// A catalog color with its distance and heuristic score against one skin
/// tone. Transient: built during selection, discarded after.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ScoredColor<'a> {
    pub color: &'a BrandColor,
    pub lab: Lab,
    /// ΔE (CIE76) between the color and the skin tone.
    pub distance: f64,
    /// Total heuristic score; higher ranks earlier.
    pub total: f64,
}

/// Score one catalog color against the skin tone and its derived signals.
pub(crate) fn score_color<'a>(
    color: &'a BrandColor,
    lab: Lab,
    skin: Lab,
    undertone: Undertone,
    depth: Depth,
) -> ScoredColor<'a> {
    let distance = delta_e(skin, lab);
    let contrast = (lab.l - skin.l).abs();

    let (band_min, band_max) = depth.contrast_band();
    let contrast_bonus = if contrast >= band_min && contrast <= band_max {
        CONTRAST_BONUS
    } else {
        CONTRAST_PENALTY
    };

    let tone_bonus = match undertone {
        Undertone::Warm => {
            if lab.b >= WARM_B_MIN {
                TONE_BONUS
            } else {
                TONE_PENALTY
            }
        }
        Undertone::Cool => {
            if lab.b <= COOL_B_MAX {
                TONE_BONUS
            } else {
                TONE_PENALTY
            }
        }
        Undertone::Neutral => {
            if lab.b.abs() <= NEUTRAL_B_SPAN {
                TONE_NEUTRAL_BONUS
            } else {
                TONE_NEUTRAL_PENALTY
            }
        }
    };

    let washout_penalty = if distance < WASHOUT_HARD_DE {
        WASHOUT_HARD
    } else if distance < WASHOUT_SOFT_DE {
        WASHOUT_SOFT
    } else {
        0.0
    };

    let depth_bonus = match depth {
        Depth::Deep => {
            if lab.l >= DEEP_L_MIN {
                6.0
            } else {
                -8.0
            }
        }
        Depth::Light => {
            if lab.l <= LIGHT_L_TOO_DARK {
                -10.0
            } else {
                4.0
            }
        }
        Depth::Medium => 0.0,
    };

    let closeness = (CLOSENESS_CEILING - distance).max(0.0);
    let total = closeness + contrast_bonus + tone_bonus + washout_penalty + depth_bonus;

    ScoredColor {
        color,
        lab,
        distance,
        total,
    }
}
