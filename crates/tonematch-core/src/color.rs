//! sRGB hex → CIE Lab conversion and perceptual distance (ΔE, CIE76).
//!
//! The pipeline is HEX → sRGB bytes → linear light → XYZ (D65) → Lab.
//! All math runs in `f64`; identical inputs yield identical outputs to
//! well below 1e-9.
//!
//! # Reference
//! - IEC 61966-2-1 — sRGB transfer function
//! - Lindbloom, Bruce J. — sRGB/D65 matrix and Lab companding constants

use crate::error::MatchError;

/// A color in CIE L\*a\*b\* space (D65 reference white).
///
/// `l` is lightness in [0, 100]; `a` (green–red) and `b` (blue–yellow) are
/// unbounded in principle but stay within roughly ±160 for sRGB inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

// sRGB → XYZ matrix, D65 white point.
const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
];

// D65 reference white.
const XN: f64 = 0.95047;
const YN: f64 = 1.0;
const ZN: f64 = 1.08883;

// Lab companding breakpoint (6/29)^3.
const LAB_EPSILON: f64 = 0.008856;

/// Parse a `#RRGGBB` hex string (leading `#` optional) into sRGB bytes.
pub fn hex_to_rgb(hex: &str) -> Result<[u8; 3], MatchError> {
    let s = hex.trim();
    let s = s.strip_prefix('#').unwrap_or(s);
    if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(MatchError::InvalidColorFormat(hex.to_string()));
    }
    let parse = |r: &str| {
        u8::from_str_radix(r, 16).map_err(|_| MatchError::InvalidColorFormat(hex.to_string()))
    };
    Ok([parse(&s[0..2])?, parse(&s[2..4])?, parse(&s[4..6])?])
}

/// Canonical uppercase `#RRGGBB` form of a hex color.
pub fn normalize_hex(hex: &str) -> Result<String, MatchError> {
    let [r, g, b] = hex_to_rgb(hex)?;
    Ok(format!("#{r:02X}{g:02X}{b:02X}"))
}

/// sRGB byte → linear light per IEC 61966-2-1.
///
/// ```text
/// c = byte / 255
/// linear: c <= 0.04045 → c / 12.92
///         c >  0.04045 → ((c + 0.055) / 1.055) ^ 2.4
/// ```
fn srgb_to_linear(byte: u8) -> f64 {
    let c = byte as f64 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Lab companding function.
///
/// ```text
/// f(t) = cbrt(t)            if t > 0.008856
///      = 7.787·t + 16/116   otherwise
/// ```
fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

/// Convert a `#RRGGBB` hex string to CIE Lab.
///
/// Fails with [`MatchError::InvalidColorFormat`] when the input is not a
/// 6-digit hex triplet.
pub fn hex_to_lab(hex: &str) -> Result<Lab, MatchError> {
    let [r, g, b] = hex_to_rgb(hex)?;
    let rgb = [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b)];

    let [xr, yr, zr] = SRGB_TO_XYZ;
    let x = xr[0] * rgb[0] + xr[1] * rgb[1] + xr[2] * rgb[2];
    let y = yr[0] * rgb[0] + yr[1] * rgb[1] + yr[2] * rgb[2];
    let z = zr[0] * rgb[0] + zr[1] * rgb[1] + zr[2] * rgb[2];

    let fx = lab_f(x / XN);
    let fy = lab_f(y / YN);
    let fz = lab_f(z / ZN);

    Ok(Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    })
}

/// Perceptual distance between two Lab colors (ΔE, CIE76).
///
/// Plain Euclidean distance in Lab space. Total over finite inputs.
pub fn delta_e(c1: Lab, c2: Lab) -> f64 {
    let dl = c1.l - c2.l;
    let da = c1.a - c2.a;
    let db = c1.b - c2.b;
    (dl * dl + da * da + db * db).sqrt()
}
