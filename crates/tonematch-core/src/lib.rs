//! tonematch core — skin-tone to brand-palette matching.
//!
//! This crate contains the whole matching pipeline: sRGB hex → CIE Lab
//! conversion, the fixed 48-color brand catalog, heuristic scoring and
//! diversity-constrained palette selection. Pure and synchronous; the
//! camera-facing sampler that produces skin hex strings lives elsewhere.

pub mod catalog;
pub mod color;
pub mod error;
pub mod insight;
pub mod matcher;
pub mod sample;

// Re-exports for convenience.
pub use catalog::{BRAND_COLORS, BrandColor, BrandStyle, brand_colors};
pub use color::{Lab, delta_e, hex_to_lab, normalize_hex};
pub use error::MatchError;
pub use insight::{StyleInsight, style_insight};
pub use matcher::{PaletteItem, PaletteResult, Strategy, select_palette, select_palette_with};
pub use sample::median_skin_hex;
