//! The fixed 48-color brand catalog.
//!
//! Four styles with exactly 12 colors each, ids dense in 1..=48. The table
//! is immutable const data; callers pass it into the matcher explicitly so
//! tests can substitute synthetic catalogs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four macro styles a palette can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrandStyle {
    NoirIcon,
    SandLuxe,
    SageModern,
    IceRoyal,
}

impl BrandStyle {
    /// Human-readable label for UI copy and serialized output.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::NoirIcon => "NOIR ICON",
            Self::SandLuxe => "SAND LUXE",
            Self::SageModern => "SAGE MODERN",
            Self::IceRoyal => "ICE ROYAL",
        }
    }

    /// All styles, in catalog order. Vote loops iterate this slice so the
    /// result is independent of hash ordering.
    pub fn all() -> &'static [Self] {
        const ALL: [BrandStyle; 4] = [
            BrandStyle::NoirIcon,
            BrandStyle::SandLuxe,
            BrandStyle::SageModern,
            BrandStyle::IceRoyal,
        ];
        &ALL
    }
}

impl fmt::Display for BrandStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One catalog entry: a named brand color tagged with its macro style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BrandColor {
    /// Dense unique id, 1..=48.
    pub id: u32,
    pub style: BrandStyle,
    pub name: &'static str,
    /// Uppercase `#RRGGBB`.
    pub hex: &'static str,
}

const fn entry(id: u32, style: BrandStyle, name: &'static str, hex: &'static str) -> BrandColor {
    BrandColor {
        id,
        style,
        name,
        hex,
    }
}

/// The full brand catalog. 12 entries per style, ids 1..=48.
pub const BRAND_COLORS: [BrandColor; 48] = [
    // NOIR ICON
    entry(1, BrandStyle::NoirIcon, "Black Couture", "#0B0C0F"),
    entry(2, BrandStyle::NoirIcon, "Midnight Navy", "#121B2D"),
    entry(3, BrandStyle::NoirIcon, "Graphite Smoke", "#2A2D33"),
    entry(4, BrandStyle::NoirIcon, "Charcoal Velvet", "#3A3D45"),
    entry(5, BrandStyle::NoirIcon, "Stone Ash", "#6B6F77"),
    entry(6, BrandStyle::NoirIcon, "Pearl White", "#F4F1EC"),
    entry(7, BrandStyle::NoirIcon, "Bordeaux Secret", "#4A1F2B"),
    entry(8, BrandStyle::NoirIcon, "Plum Night", "#3A2436"),
    entry(9, BrandStyle::NoirIcon, "Espresso Ink", "#2A1C18"),
    entry(10, BrandStyle::NoirIcon, "Mocha Shadow", "#4A342C"),
    entry(11, BrandStyle::NoirIcon, "Olive Noir", "#1F2A22"),
    entry(12, BrandStyle::NoirIcon, "Steel Blue", "#2C3C52"),
    // SAND LUXE
    entry(13, BrandStyle::SandLuxe, "Ivory Silk", "#EFE7DA"),
    entry(14, BrandStyle::SandLuxe, "Champagne Mist", "#E6D6C2"),
    entry(15, BrandStyle::SandLuxe, "Oat Cashmere", "#D8C7AE"),
    entry(16, BrandStyle::SandLuxe, "Sandstone", "#C9B296"),
    entry(17, BrandStyle::SandLuxe, "Caramel Nude", "#B68F6D"),
    entry(18, BrandStyle::SandLuxe, "Honey Tan", "#A77D59"),
    entry(19, BrandStyle::SandLuxe, "Terracotta Glow", "#B06B4F"),
    entry(20, BrandStyle::SandLuxe, "Cinnamon Clay", "#8F5A3F"),
    entry(21, BrandStyle::SandLuxe, "Rose Beige", "#C9A79A"),
    entry(22, BrandStyle::SandLuxe, "Blush Almond", "#D6B8A9"),
    entry(23, BrandStyle::SandLuxe, "Toffee Brown", "#6C4B39"),
    entry(24, BrandStyle::SandLuxe, "Cocoa Earth", "#3B2B23"),
    // SAGE MODERN
    entry(25, BrandStyle::SageModern, "Sage Whisper", "#A7B1A3"),
    entry(26, BrandStyle::SageModern, "Eucalyptus", "#879686"),
    entry(27, BrandStyle::SageModern, "Olive Leaf", "#6E7A5F"),
    entry(28, BrandStyle::SageModern, "Moss Studio", "#4E5C4A"),
    entry(29, BrandStyle::SageModern, "Forest Minimal", "#2F3C33"),
    entry(30, BrandStyle::SageModern, "Clay Stone", "#A99C8F"),
    entry(31, BrandStyle::SageModern, "Warm Taupe", "#8B7D72"),
    entry(32, BrandStyle::SageModern, "Linen Gray", "#CFC9C2"),
    entry(33, BrandStyle::SageModern, "Milk Tea", "#BFAE9F"),
    entry(34, BrandStyle::SageModern, "Cedar Brown", "#5E473B"),
    entry(35, BrandStyle::SageModern, "Ocean Slate", "#4E6B73"),
    entry(36, BrandStyle::SageModern, "Dusty Teal", "#3E6A66"),
    // ICE ROYAL
    entry(37, BrandStyle::IceRoyal, "Snow White", "#FAF8F4"),
    entry(38, BrandStyle::IceRoyal, "Silver Mist", "#D9DDE2"),
    entry(39, BrandStyle::IceRoyal, "Cloud Gray", "#B6BEC9"),
    entry(40, BrandStyle::IceRoyal, "Blue Fog", "#8FA7C1"),
    entry(41, BrandStyle::IceRoyal, "Royal Denim", "#2E4C7A"),
    entry(42, BrandStyle::IceRoyal, "Deep Ocean", "#0E2A3A"),
    entry(43, BrandStyle::IceRoyal, "Icy Lilac", "#B6A7C9"),
    entry(44, BrandStyle::IceRoyal, "Lavender Smoke", "#84779A"),
    entry(45, BrandStyle::IceRoyal, "Berry Ice", "#7A3E53"),
    entry(46, BrandStyle::IceRoyal, "Cranberry Velvet", "#5A2331"),
    entry(47, BrandStyle::IceRoyal, "Cold Espresso", "#2B2323"),
    entry(48, BrandStyle::IceRoyal, "Ink Blue", "#1B2B4A"),
];

/// The brand catalog as a slice, ready to hand to the matcher.
pub fn brand_colors() -> &'static [BrandColor] {
    &BRAND_COLORS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::hex_to_lab;

    #[test]
    fn test_catalog_ids_are_dense_and_ordered() {
        for (i, c) in BRAND_COLORS.iter().enumerate() {
            assert_eq!(c.id, i as u32 + 1);
        }
    }

    #[test]
    fn test_catalog_has_twelve_entries_per_style() {
        for &style in BrandStyle::all() {
            let count = BRAND_COLORS.iter().filter(|c| c.style == style).count();
            assert_eq!(count, 12, "style {style} should have 12 entries");
        }
    }

    #[test]
    fn test_catalog_hexes_are_canonical_and_convertible() {
        for c in &BRAND_COLORS {
            assert!(c.hex.starts_with('#') && c.hex.len() == 7, "{}", c.hex);
            assert!(
                c.hex[1..]
                    .bytes()
                    .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase()),
                "{} is not uppercase hex",
                c.hex
            );
            hex_to_lab(c.hex).unwrap();
        }
    }

    #[test]
    fn test_style_labels_round_trip_display() {
        assert_eq!(BrandStyle::NoirIcon.to_string(), "NOIR ICON");
        assert_eq!(BrandStyle::all().len(), 4);
    }
}
