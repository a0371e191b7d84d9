//! Presentation copy keyed by the dominant style.
//!
//! The matcher only returns a [`BrandStyle`]; front ends look the display
//! copy up here. Static data, total over the enum.

use serde::Serialize;

use crate::catalog::BrandStyle;

/// Display copy for one style: headline, conversion subtitle, hook and CTA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleInsight {
    pub style: BrandStyle,
    pub display_name: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub hook: &'static str,
    pub cta: &'static str,
}

/// Look up the copy for a style.
pub const fn style_insight(style: BrandStyle) -> &'static StyleInsight {
    match style {
        BrandStyle::NoirIcon => &NOIR_ICON,
        BrandStyle::SandLuxe => &SAND_LUXE,
        BrandStyle::SageModern => &SAGE_MODERN,
        BrandStyle::IceRoyal => &ICE_ROYAL,
    }
}

const NOIR_ICON: StyleInsight = StyleInsight {
    style: BrandStyle::NoirIcon,
    display_name: "ICON NOIR",
    title: "Your look gets cleaner, stronger, more expensive.",
    subtitle: "These colors raise contrast and definition around the face. \
               No noise, only pieces that actually work on you.",
    hook: "If you look washed out in photos, this is the fix.",
    cta: "See the ICON NOIR pieces →",
};

const SAND_LUXE: StyleInsight = StyleInsight {
    style: BrandStyle::SandLuxe,
    display_name: "SAND LUXE",
    title: "Healthy-skin effect. Warm premium look.",
    subtitle: "Tones that harmonize the face and make everything feel \
               natural. More light, fewer second guesses.",
    hook: "This is the set that makes you go \"ok wow\" in the mirror.",
    cta: "See the SAND LUXE pieces →",
};

const SAGE_MODERN: StyleInsight = StyleInsight {
    style: BrandStyle::SageModern,
    display_name: "SAGE STUDIO",
    title: "Modern minimal. Always polished, always coherent.",
    subtitle: "Colors that declutter your palette and read instantly \
               put-together. Your style uniform.",
    hook: "Effortless outfits. Still a level up.",
    cta: "See the SAGE STUDIO pieces →",
};

const ICE_ROYAL: StyleInsight = StyleInsight {
    style: BrandStyle::IceRoyal,
    display_name: "ICE ROYAL",
    title: "More brightness. More definition. More presence.",
    subtitle: "Cool tones that sharpen the face and clear the gaze. Clean, \
               sharp, high-end.",
    hook: "If you love the clean-and-sharp effect, you are in the right place.",
    cta: "See the ICE ROYAL pieces →",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_style_has_copy() {
        for &style in BrandStyle::all() {
            let insight = style_insight(style);
            assert_eq!(insight.style, style);
            assert!(!insight.title.is_empty());
            assert!(!insight.cta.is_empty());
        }
    }
}
