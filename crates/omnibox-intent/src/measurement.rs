//! Resolves a body-measurement keyword, optionally bilateral, with an
//! optional centimeter value in either order.

use crate::lexicon::{BODY_SITES, MEASUREMENT_WORDS};
use crate::text::{compiled, find_in_table, find_word, parse_number, remove_span};
use crate::types::MeasurementData;
use regex::Regex;
use std::sync::OnceLock;

static VALUE_RE: OnceLock<Regex> = OnceLock::new();

pub(crate) fn extract(text: &str) -> Option<MeasurementData> {
    if let Some((span, site)) = find_in_table(text, BODY_SITES) {
        let rest = remove_span(text, span);
        let value_re = compiled(&VALUE_RE, r"\b(\d+(?:[.,]\d+)?)\s*(?:cm)?\b");
        let value_cm = value_re
            .captures(&rest)
            .and_then(|caps| parse_number(caps.get(1)?.as_str()));
        return Some(MeasurementData {
            site: Some(site),
            value_cm,
        });
    }

    // A bare measurement word opens the generic measurement view.
    MEASUREMENT_WORDS
        .iter()
        .find(|word| find_word(text, word).is_some())
        .map(|_| MeasurementData {
            site: None,
            value_cm: None,
        })
}
