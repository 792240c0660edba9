//! Resolves a bare or anchored numeric token to a body-weight update.
//!
//! Anchoring plus the plausibility band is the sole disambiguation against
//! tonnage and other numeric mentions, so only whole-line forms are accepted.

use crate::text::{compiled, parse_number};
use crate::types::WeightData;
use regex::Regex;
use std::sync::OnceLock;

/// Plausibility band, exclusive at both ends.
const MIN_BODY_WEIGHT_KG: f64 = 20.0;
const MAX_BODY_WEIGHT_KG: f64 = 500.0;

static KEYWORD_ANCHORED: OnceLock<Regex> = OnceLock::new();
static UNIT_ANCHORED: OnceLock<Regex> = OnceLock::new();

pub(crate) fn extract(text: &str) -> Option<WeightData> {
    let keyword_anchored = compiled(
        &KEYWORD_ANCHORED,
        r"^(?:vikten|vikt|väger|weight)\s*:?\s*(\d+(?:[.,]\d+)?)\s*(?:kg|kilo)?$",
    );
    let unit_anchored = compiled(&UNIT_ANCHORED, r"^(\d+(?:[.,]\d+)?)\s*(?:kg|kilo)$");

    let weight_kg = keyword_anchored
        .captures(text)
        .or_else(|| unit_anchored.captures(text))
        .and_then(|caps| parse_number(caps.get(1)?.as_str()))?;

    (weight_kg > MIN_BODY_WEIGHT_KG && weight_kg < MAX_BODY_WEIGHT_KG)
        .then_some(WeightData { weight_kg })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_anchor_accepts_plausible_values() {
        assert_eq!(
            extract("vikt 82.5").map(|w| w.weight_kg),
            Some(82.5)
        );
        assert_eq!(extract("vikt 82,5").map(|w| w.weight_kg), Some(82.5));
        assert_eq!(extract("väger 95 kg").map(|w| w.weight_kg), Some(95.0));
    }

    #[test]
    fn unit_anchor_accepts_bare_weights() {
        assert_eq!(extract("80 kg").map(|w| w.weight_kg), Some(80.0));
        assert_eq!(extract("80kg").map(|w| w.weight_kg), Some(80.0));
        assert_eq!(extract("72 kilo").map(|w| w.weight_kg), Some(72.0));
    }

    #[test]
    fn band_boundaries_are_exclusive() {
        assert!(extract("20 kg").is_none());
        assert!(extract("500 kg").is_none());
        assert_eq!(extract("20.5 kg").map(|w| w.weight_kg), Some(20.5));
        assert_eq!(extract("499.9 kg").map(|w| w.weight_kg), Some(499.9));
    }

    #[test]
    fn unanchored_numbers_fall_through() {
        assert!(extract("82.5").is_none());
        assert!(extract("80 kg bänkpress").is_none());
        assert!(extract("").is_none());
    }
}
