//! End-to-end selection behavior over the real brand catalog.

use tonematch_core::{
    BRAND_COLORS, BrandColor, BrandStyle, MatchError, Strategy, hex_to_lab, median_skin_hex,
    select_palette, select_palette_with,
};

fn assert_palette_shape(result: &tonematch_core::PaletteResult) {
    assert_eq!(result.colors.len(), 5);
    let mut ids: Vec<u32> = result.colors.iter().map(|c| c.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 5, "picked ids must be unique");
    for c in &result.colors {
        assert!(c.hex.starts_with('#') && c.hex.len() == 7, "{}", c.hex);
        assert!(
            c.hex[1..]
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b)),
            "{} is not uppercase hex",
            c.hex
        );
    }
}

#[test]
fn test_output_shape_holds_across_skin_tones() {
    for skin in ["#9C8576", "#F2D7C1", "#3A2E28", "#E8C4A0", "#777777"] {
        for strategy in [Strategy::Weighted, Strategy::Nearest] {
            let result = select_palette_with(strategy, skin, &BRAND_COLORS).unwrap();
            assert_palette_shape(&result);
        }
    }
}

#[test]
fn test_medium_skin_gets_a_dark_anchor_and_a_light_lift() {
    let result = select_palette("#9C8576", &BRAND_COLORS).unwrap();
    let lightness: Vec<f64> = result
        .colors
        .iter()
        .map(|c| hex_to_lab(&c.hex).unwrap().l)
        .collect();
    assert!(
        lightness.iter().any(|&l| l <= 24.0),
        "no dark anchor in {lightness:?}"
    );
    assert!(
        lightness.iter().any(|&l| (58.0..=82.0).contains(&l)),
        "no light lift in {lightness:?}"
    );
}

#[test]
fn test_warm_light_skin_gets_a_warm_accent() {
    // #F2D7C1 sits at L ≈ 87.6, b ≈ 14.3: light depth, warm undertone.
    // The accent filter must land at least one color with b >= 8.
    let result = select_palette("#F2D7C1", &BRAND_COLORS).unwrap();
    let warm_accents = result
        .colors
        .iter()
        .filter(|c| hex_to_lab(&c.hex).unwrap().b >= 8.0)
        .count();
    assert!(warm_accents >= 1);
}

#[test]
fn test_washout_guard_rejects_a_color_identical_to_the_skin() {
    let mut catalog: Vec<BrandColor> = BRAND_COLORS.to_vec();
    catalog.push(BrandColor {
        id: 49,
        style: BrandStyle::SandLuxe,
        name: "Skin Clone",
        hex: "#9C8576",
    });
    let result = select_palette("#9C8576", &catalog).unwrap();
    assert!(
        result.colors.iter().all(|c| c.id != 49),
        "a color identical to the skin must never be recommended"
    );
}

#[test]
fn test_invalid_input_produces_no_partial_result() {
    for bad in ["", "#12345", "zzzzzz", "#9C85", "#9C8576AA"] {
        let err = select_palette(bad, &BRAND_COLORS).unwrap_err();
        assert!(matches!(err, MatchError::InvalidColorFormat(_)), "{bad}");
    }
}

#[test]
fn test_sampler_pipeline_feeds_the_matcher() {
    // Noisy scan readings stabilize to a base hex, then match as usual.
    let readings = ["#A18773", "#9C8576", "#9A8374", "#9E8678", "#9B8475"];
    let base = median_skin_hex(&readings).unwrap();
    let result = select_palette(&base, &BRAND_COLORS).unwrap();
    assert_palette_shape(&result);
}

#[test]
fn test_result_serializes_with_style_labels_intact() {
    let result = select_palette("#9C8576", &BRAND_COLORS).unwrap();
    let json = serde_json::to_string(&result).unwrap();
    let back: tonematch_core::PaletteResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
}
