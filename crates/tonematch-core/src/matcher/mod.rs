//! Palette selection: skin tone in, five brand colors and a style out.
//!
//! Two strategies exist side by side and are never merged:
//!
//! - [`Strategy::Weighted`] (the default) scores every catalog color with
//!   the contrast/undertone/washout/depth heuristic, then picks five under
//!   diversity constraints (dark anchor, mid core, light lift, two accents).
//! - [`Strategy::Nearest`] simply ranks the catalog by ΔE and takes the
//!   closest five.
//!
//! Both derive the dominant style by majority vote over the picked colors,
//! breaking ties with the lowest average ΔE.

pub mod signals;

mod score;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{BrandColor, BrandStyle};
use crate::color::{Lab, delta_e, hex_to_lab};
use crate::error::MatchError;
use crate::matcher::score::{ScoredColor, score_color};
use crate::matcher::signals::{Depth, Undertone};

/// How many colors a palette holds.
pub const PALETTE_SIZE: usize = 5;

/// Selection strategy. See the module docs for the difference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Heuristic scoring with diversity-constrained picking.
    #[default]
    Weighted,
    /// Plain top-5 by ΔE. Kept as a documented alternative, not a fallback.
    Nearest,
}

/// One palette entry in the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteItem {
    pub id: u32,
    pub name: String,
    /// Uppercase `#RRGGBB`.
    pub hex: String,
    pub style: BrandStyle,
}

/// The selection result: a dominant style and an ordered 5-color palette.
///
/// The weighted strategy lists dominant-style colors first, each partition
/// ordered by descending score; the nearest strategy lists colors in
/// ascending ΔE order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteResult {
    pub style: BrandStyle,
    pub colors: Vec<PaletteItem>,
}

/// Select a palette with the default [`Strategy::Weighted`] strategy.
///
/// Fails with [`MatchError::InvalidColorFormat`] on a malformed skin hex
/// and [`MatchError::EmptyCatalog`] on an empty catalog. Pure otherwise:
/// identical inputs always produce identical output.
pub fn select_palette(skin_hex: &str, catalog: &[BrandColor]) -> Result<PaletteResult, MatchError> {
    select_palette_with(Strategy::Weighted, skin_hex, catalog)
}

/// Select a palette with an explicit strategy.
pub fn select_palette_with(
    strategy: Strategy,
    skin_hex: &str,
    catalog: &[BrandColor],
) -> Result<PaletteResult, MatchError> {
    let skin = hex_to_lab(skin_hex)?;
    if catalog.is_empty() {
        return Err(MatchError::EmptyCatalog);
    }
    match strategy {
        Strategy::Weighted => select_weighted(skin, catalog),
        Strategy::Nearest => select_nearest(skin, catalog),
    }
}

// ---------------------------------------------------------------------------
// Weighted strategy
// ---------------------------------------------------------------------------

fn select_weighted(skin: Lab, catalog: &[BrandColor]) -> Result<PaletteResult, MatchError> {
    let undertone = Undertone::of(skin);
    let depth = Depth::of(skin);
    debug!(?undertone, ?depth, l = skin.l, b = skin.b, "skin signals");

    let mut scored: Vec<ScoredColor<'_>> = catalog
        .iter()
        .map(|c| {
            let lab = hex_to_lab(c.hex)?;
            Ok(score_color(c, lab, skin, undertone, depth))
        })
        .collect::<Result<_, MatchError>>()?;

    // Descending by score; catalog id breaks exact ties so the output is
    // deterministic regardless of catalog order.
    scored.sort_by(|x, y| {
        y.total
            .partial_cmp(&x.total)
            .unwrap_or(Ordering::Equal)
            .then(x.color.id.cmp(&y.color.id))
    });

    let mut picked: Vec<ScoredColor<'_>> = Vec::with_capacity(PALETTE_SIZE);

    // Dark anchor. Light skin tolerates a slightly lighter anchor.
    let anchor_max = if depth == Depth::Light { 28.0 } else { 24.0 };
    pick_first(&mut picked, &scored, |c| c.lab.l <= anchor_max);
    // Mid core.
    pick_first(&mut picked, &scored, |c| {
        c.lab.l >= 28.0 && c.lab.l <= 58.0
    });
    // Light lift.
    pick_first(&mut picked, &scored, |c| {
        c.lab.l >= 58.0 && c.lab.l <= 82.0
    });
    // Accent by undertone.
    pick_first(&mut picked, &scored, |c| match undertone {
        Undertone::Warm => c.lab.b >= 8.0,
        Undertone::Cool => c.lab.b <= -2.0,
        Undertone::Neutral => c.lab.b.abs() <= 6.0,
    });
    // Second accent: a different style than the first pick, when possible.
    let first_style = picked.first().map(|p| p.color.style);
    pick_first(&mut picked, &scored, |c| {
        first_style.is_none_or(|s| c.color.style != s)
    });
    // Fill remaining slots by score until the palette is full.
    for c in &scored {
        if picked.len() >= PALETTE_SIZE {
            break;
        }
        if picked.iter().all(|p| p.color.id != c.color.id) {
            picked.push(*c);
        }
    }

    let style = dominant_style(picked.iter().map(|c| (c.color.style, c.distance)));
    debug!(%style, picks = ?picked.iter().map(|c| c.color.id).collect::<Vec<_>>(), "weighted pick");

    // Dominant style first, then by descending score within each partition.
    picked.sort_by(|x, y| {
        let xs = x.color.style != style;
        let ys = y.color.style != style;
        xs.cmp(&ys).then(
            y.total
                .partial_cmp(&x.total)
                .unwrap_or(Ordering::Equal)
                .then(x.color.id.cmp(&y.color.id)),
        )
    });

    Ok(PaletteResult {
        style,
        colors: picked.iter().map(|c| palette_item(c.color)).collect(),
    })
}

/// Push the first color matching `filter` that has not been picked yet.
fn pick_first<'a>(
    picked: &mut Vec<ScoredColor<'a>>,
    scored: &[ScoredColor<'a>],
    filter: impl Fn(&ScoredColor<'a>) -> bool,
) {
    if let Some(found) = scored
        .iter()
        .find(|c| filter(c) && picked.iter().all(|p| p.color.id != c.color.id))
    {
        picked.push(*found);
    }
}

// ---------------------------------------------------------------------------
// Nearest strategy
// ---------------------------------------------------------------------------

fn select_nearest(skin: Lab, catalog: &[BrandColor]) -> Result<PaletteResult, MatchError> {
    let mut ranked: Vec<(&BrandColor, f64)> = catalog
        .iter()
        .map(|c| Ok((c, delta_e(skin, hex_to_lab(c.hex)?))))
        .collect::<Result<_, MatchError>>()?;

    ranked.sort_by(|x, y| {
        x.1.partial_cmp(&y.1)
            .unwrap_or(Ordering::Equal)
            .then(x.0.id.cmp(&y.0.id))
    });
    ranked.truncate(PALETTE_SIZE);

    let style = dominant_style(ranked.iter().map(|(c, d)| (c.style, *d)));
    debug!(%style, picks = ?ranked.iter().map(|(c, _)| c.id).collect::<Vec<_>>(), "nearest pick");

    // Unlike the weighted strategy, output order stays ascending by
    // distance; this variant predates the dominant-first presentation.
    Ok(PaletteResult {
        style,
        colors: ranked.iter().map(|(c, _)| palette_item(c)).collect(),
    })
}

// ---------------------------------------------------------------------------
// Style vote
// ---------------------------------------------------------------------------

/// Majority vote over the picked colors' styles. A tie goes to the style
/// whose picked colors sit closest to the skin on average; styles with no
/// picks count as infinitely far.
fn dominant_style(picks: impl Iterator<Item = (BrandStyle, f64)>) -> BrandStyle {
    let styles = BrandStyle::all();

    let mut votes = [0usize; 4];
    let mut dist_sum = [0.0f64; 4];
    for (style, distance) in picks {
        let i = match style {
            BrandStyle::NoirIcon => 0,
            BrandStyle::SandLuxe => 1,
            BrandStyle::SageModern => 2,
            BrandStyle::IceRoyal => 3,
        };
        votes[i] += 1;
        dist_sum[i] += distance;
    }

    let avg = |i: usize| {
        if votes[i] > 0 {
            dist_sum[i] / votes[i] as f64
        } else {
            f64::INFINITY
        }
    };

    // SAND LUXE is the seed so an all-ways tie resolves the same way the
    // brand's stylists default.
    let mut best = 1;
    for i in 0..styles.len() {
        if votes[i] > votes[best] || (votes[i] == votes[best] && avg(i) < avg(best)) {
            best = i;
        }
    }
    styles[best]
}

fn palette_item(c: &BrandColor) -> PaletteItem {
    PaletteItem {
        id: c.id,
        name: c.name.to_string(),
        hex: c.hex.to_uppercase(),
        style: c.style,
    }
}
