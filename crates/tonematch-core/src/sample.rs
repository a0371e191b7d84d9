//! Skin sample stabilization.
//!
//! A sampler usually produces many noisy readings per scan. The per-channel
//! median is robust against specular highlights and shadowed pixels, so it
//! is the aggregation of choice before matching. How the samples were
//! measured (camera frame, upload, multiple regions) is the sampler's
//! business; this module only sees hex strings.

use crate::color::hex_to_rgb;
use crate::error::MatchError;

/// Collapse one or more `#RRGGBB` samples into a single stabilized hex.
///
/// Per-channel median; an even number of samples averages the middle pair
/// and rounds. Fails with [`MatchError::EmptySample`] on an empty slice and
/// [`MatchError::InvalidColorFormat`] if any sample is malformed.
pub fn median_skin_hex<S: AsRef<str>>(samples: &[S]) -> Result<String, MatchError> {
    if samples.is_empty() {
        return Err(MatchError::EmptySample);
    }

    let mut channels: [Vec<u8>; 3] = [
        Vec::with_capacity(samples.len()),
        Vec::with_capacity(samples.len()),
        Vec::with_capacity(samples.len()),
    ];
    for s in samples {
        let [r, g, b] = hex_to_rgb(s.as_ref())?;
        channels[0].push(r);
        channels[1].push(g);
        channels[2].push(b);
    }

    let r = channel_median(&mut channels[0]);
    let g = channel_median(&mut channels[1]);
    let b = channel_median(&mut channels[2]);
    Ok(format!("#{r:02X}{g:02X}{b:02X}"))
}

fn channel_median(values: &mut [u8]) -> u8 {
    values.sort_unstable();
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        values[mid]
    } else {
        let avg = (values[mid - 1] as f64 + values[mid] as f64) / 2.0;
        avg.round().clamp(0.0, 255.0) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_sample_normalizes_in_place() {
        assert_eq!(median_skin_hex(&["9c8576"]).unwrap(), "#9C8576");
    }

    #[test]
    fn test_odd_count_takes_the_middle_value() {
        let samples = ["#A08070", "#9C8576", "#988272"];
        assert_eq!(median_skin_hex(&samples).unwrap(), "#9C8272");
    }

    #[test]
    fn test_even_count_averages_the_middle_pair() {
        let samples = ["#A08070", "#988272"];
        // r (152+160)/2 = 156, g (128+130)/2 = 129, b (112+114)/2 = 113
        assert_eq!(median_skin_hex(&samples).unwrap(), "#9C8171");
    }

    #[test]
    fn test_median_resists_outliers() {
        let samples = ["#9C8576", "#9C8576", "#9C8576", "#9C8576", "#FFFFFF"];
        assert_eq!(median_skin_hex(&samples).unwrap(), "#9C8576");
    }

    #[test]
    fn test_empty_input_is_an_error() {
        let none: [&str; 0] = [];
        assert_eq!(median_skin_hex(&none).unwrap_err(), MatchError::EmptySample);
    }

    #[test]
    fn test_one_bad_sample_poisons_the_batch() {
        let samples = ["#9C8576", "oops"];
        assert!(matches!(
            median_skin_hex(&samples),
            Err(MatchError::InvalidColorFormat(_))
        ));
    }
}
