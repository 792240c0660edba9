//! Resolves exercise type, duration, intensity, distance, pace, tonnage,
//! heart rate and subtype out of one line of text.
//!
//! Numeric tokens are heavily ambiguous here ("20" can be minutes, kilograms
//! or kilometers), so every consumed span is removed from the text before the
//! next numeric rule runs: a tonnage figure must never be re-read as a
//! duration, and a pace like "5:30 min/km" must never be read as 30 minutes.

use crate::lexicon;
use crate::text::{compiled, find_in_table, find_word, parse_number, remove_span};
use crate::types::{ExerciseData, ExerciseSubtype, ExerciseType, Intensity};
use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;
use tracing::trace;

/// A bare kg figure above this is never a single lift, so it is always read
/// as tonnage regardless of context.
const SINGLE_LIFT_MAX_KG: f64 = 300.0;
const DEFAULT_DURATION_MIN: u32 = 30;

static TON_RE: OnceLock<Regex> = OnceLock::new();
static SETS_RE: OnceLock<Regex> = OnceLock::new();
static BARE_KG_RE: OnceLock<Regex> = OnceLock::new();
static HR_PAIR_RE: OnceLock<Regex> = OnceLock::new();
static HR_SINGLE_RE: OnceLock<Regex> = OnceLock::new();
static HR_TRAILING_RE: OnceLock<Regex> = OnceLock::new();
static DIST_KM_RE: OnceLock<Regex> = OnceLock::new();
static DIST_MIL_RE: OnceLock<Regex> = OnceLock::new();
static PACE_AT_RE: OnceLock<Regex> = OnceLock::new();
static PACE_COLON_RE: OnceLock<Regex> = OnceLock::new();
static PACE_TEMPO_RE: OnceLock<Regex> = OnceLock::new();
static PACE_DECIMAL_RE: OnceLock<Regex> = OnceLock::new();
static DUR_MINUTES_RE: OnceLock<Regex> = OnceLock::new();
static DUR_HOURS_RE: OnceLock<Regex> = OnceLock::new();

pub(crate) fn extract(text: &str) -> Option<ExerciseData> {
    let mut working = text.to_string();

    let mut exercise_type = match find_in_table(&working, lexicon::EXERCISE_TYPES) {
        Some((span, ty)) => {
            working = remove_span(&working, span);
            Some(ty)
        }
        None => None,
    };

    // Lift keywords mark strength context for a bare kg figure.
    let mut lift_context = false;
    while let Some(span) = find_lift_keyword(&working) {
        lift_context = true;
        working = remove_span(&working, span);
    }

    let mut subtype: Option<ExerciseSubtype> = None;
    let mut tonnage_kg: Option<f64> = None;
    (working, tonnage_kg, subtype) =
        resolve_tonnage(working, exercise_type, lift_context, tonnage_kg, subtype);

    // Intensity and subtype keywords are read without consuming them here:
    // "ultra" feeds both tables, and leftovers are stripped again for notes.
    let intensity = find_in_table(&working, lexicon::INTENSITY_KEYWORDS)
        .map(|(_, intensity)| intensity)
        .unwrap_or_default();

    let mut avg_heart_rate: Option<u32> = None;
    let mut max_heart_rate: Option<u32> = None;
    let hr_pair = compiled(
        &HR_PAIR_RE,
        r"\b(?:puls|pulse|hr|bpm)\s*:?\s*(\d{2,3})\s*/\s*(\d{2,3})\b",
    );
    let hr_single = compiled(&HR_SINGLE_RE, r"\b(?:puls|pulse|hr)\s*:?\s*(\d{2,3})\b");
    let hr_trailing = compiled(&HR_TRAILING_RE, r"\b(\d{2,3})\s*bpm\b");
    if let Some(caps) = hr_pair.captures(&working) {
        avg_heart_rate = integer_capture(&caps, 1);
        max_heart_rate = integer_capture(&caps, 2);
        working = remove_span(&working, capture_span(&caps));
    } else if let Some(caps) = hr_single
        .captures(&working)
        .or_else(|| hr_trailing.captures(&working))
    {
        avg_heart_rate = integer_capture(&caps, 1);
        working = remove_span(&working, capture_span(&caps));
    }

    let mut distance_km: Option<f64> = None;
    let km_re = compiled(
        &DIST_KM_RE,
        r"\b(\d+(?:[.,]\d+)?)\s*(?:kilometrar|kilometer|km)\b",
    );
    let mil_re = compiled(&DIST_MIL_RE, r"\b(\d+(?:[.,]\d+)?)\s*mil\b");
    if let Some(caps) = km_re.captures(&working) {
        distance_km = caps.get(1).and_then(|m| parse_number(m.as_str()));
        working = remove_span(&working, capture_span(&caps));
    } else if let Some(caps) = mil_re.captures(&working) {
        // Swedish "mil": ten kilometers.
        distance_km = caps
            .get(1)
            .and_then(|m| parse_number(m.as_str()))
            .map(|n| n * 10.0);
        working = remove_span(&working, capture_span(&caps));
    }

    let mut pace_sec_per_km: Option<f64> = None;
    (working, pace_sec_per_km) = resolve_pace(working, pace_sec_per_km);

    let (remainder, explicit_duration) = resolve_duration(working);
    working = remainder;
    let duration_min = match explicit_duration {
        Some(minutes) => minutes.round().max(0.0) as u32,
        None => match distance_km {
            Some(km) => {
                let pace = pace_sec_per_km
                    .unwrap_or_else(|| lexicon::default_pace_sec_per_km(intensity));
                ((km * pace) / 60.0).round().max(0.0) as u32
            }
            None => DEFAULT_DURATION_MIN,
        },
    };

    if let Some((_, found)) = find_in_table(&working, lexicon::SUBTYPE_KEYWORDS) {
        subtype = Some(found);
    }

    if exercise_type.is_none() {
        if subtype.map_or(false, ExerciseSubtype::is_running_subtype) {
            exercise_type = Some(ExerciseType::Running);
        } else if tonnage_kg.is_some() {
            exercise_type = Some(ExerciseType::Strength);
        }
    }

    // A bare duration is not enough: it is ambiguous with other numeric
    // intents and is left to the lower-priority extractors.
    if exercise_type.is_none()
        && tonnage_kg.is_none()
        && distance_km.is_none()
        && avg_heart_rate.is_none()
    {
        return None;
    }

    let notes = collect_notes(&working);
    Some(ExerciseData {
        exercise_type: exercise_type.unwrap_or(ExerciseType::Other),
        duration_min,
        intensity,
        notes,
        subtype,
        tonnage_kg,
        distance_km,
        avg_heart_rate,
        max_heart_rate,
    })
}

fn resolve_tonnage(
    mut working: String,
    exercise_type: Option<ExerciseType>,
    lift_context: bool,
    mut tonnage_kg: Option<f64>,
    mut subtype: Option<ExerciseSubtype>,
) -> (String, Option<f64>, Option<ExerciseSubtype>) {
    let ton_re = compiled(&TON_RE, r"\b(\d+(?:[.,]\d+)?)\s*ton\b");
    let sets_re = compiled(
        &SETS_RE,
        r"\b(\d+)\s*[x×*]\s*(\d+)\s*[x×*]\s*(\d+(?:[.,]\d+)?)\s*(?:kg|kilo)?\b",
    );
    let bare_kg_re = compiled(&BARE_KG_RE, r"\b(\d+(?:[.,]\d+)?)\s*(?:kg|kilo)\b");

    if let Some(caps) = ton_re.captures(&working) {
        if let Some(tons) = caps.get(1).and_then(|m| parse_number(m.as_str())) {
            tonnage_kg = Some(tons * 1000.0);
            subtype = Some(ExerciseSubtype::Tonnage);
            working = remove_span(&working, capture_span(&caps));
            return (working, tonnage_kg, subtype);
        }
    }

    if let Some(caps) = sets_re.captures(&working) {
        let sets = caps.get(1).and_then(|m| parse_number(m.as_str()));
        let reps = caps.get(2).and_then(|m| parse_number(m.as_str()));
        let weight = caps.get(3).and_then(|m| parse_number(m.as_str()));
        if let (Some(sets), Some(reps), Some(weight)) = (sets, reps, weight) {
            tonnage_kg = Some(sets * reps * weight);
            subtype = Some(ExerciseSubtype::Tonnage);
            working = remove_span(&working, capture_span(&caps));
            return (working, tonnage_kg, subtype);
        }
    }

    if let Some(caps) = bare_kg_re.captures(&working) {
        if let Some(weight) = caps.get(1).and_then(|m| parse_number(m.as_str())) {
            let strength_context =
                lift_context || exercise_type == Some(ExerciseType::Strength);
            if strength_context || weight > SINGLE_LIFT_MAX_KG {
                trace!(weight, "bare kg figure read as tonnage");
                tonnage_kg = Some(weight);
                subtype = Some(ExerciseSubtype::Tonnage);
                working = remove_span(&working, capture_span(&caps));
            }
        }
    }

    (working, tonnage_kg, subtype)
}

fn resolve_pace(mut working: String, mut pace: Option<f64>) -> (String, Option<f64>) {
    let at_re = compiled(&PACE_AT_RE, r"@\s*(\d{1,2}):(\d{2})\b");
    let colon_re = compiled(&PACE_COLON_RE, r"\b(\d{1,2}):(\d{2})\s*(?:min/km|/km)");
    let tempo_re = compiled(&PACE_TEMPO_RE, r"\btempo\s*:?\s*(\d{1,2}):(\d{2})\b");
    let decimal_re = compiled(&PACE_DECIMAL_RE, r"\b(\d+(?:[.,]\d+)?)\s*min/km");

    for re in [at_re, colon_re, tempo_re] {
        if let Some(caps) = re.captures(&working) {
            let minutes = integer_capture(&caps, 1);
            let seconds = integer_capture(&caps, 2);
            if let (Some(minutes), Some(seconds)) = (minutes, seconds) {
                pace = Some(f64::from(minutes) * 60.0 + f64::from(seconds));
                working = remove_span(&working, capture_span(&caps));
                return (working, pace);
            }
        }
    }
    if let Some(caps) = decimal_re.captures(&working) {
        if let Some(minutes) = caps.get(1).and_then(|m| parse_number(m.as_str())) {
            pace = Some(minutes * 60.0);
            working = remove_span(&working, capture_span(&caps));
        }
    }
    (working, pace)
}

/// Explicit duration needs a unit suffix; a bare number never counts.
fn resolve_duration(mut working: String) -> (String, Option<f64>) {
    let minutes_re = compiled(
        &DUR_MINUTES_RE,
        r"\b(\d+(?:[.,]\d+)?)\s*(?:minuters|minuter|minutes|minute|mins|min)\b",
    );
    let hours_re = compiled(
        &DUR_HOURS_RE,
        r"\b(\d+(?:[.,]\d+)?)\s*(?:timmar|timme|tim|hours|hour|hrs|hr|h)\b",
    );
    if let Some(caps) = minutes_re.captures(&working) {
        if let Some(minutes) = caps.get(1).and_then(|m| parse_number(m.as_str())) {
            working = remove_span(&working, capture_span(&caps));
            return (working, Some(minutes));
        }
    }
    if let Some(caps) = hours_re.captures(&working) {
        if let Some(hours) = caps.get(1).and_then(|m| parse_number(m.as_str())) {
            working = remove_span(&working, capture_span(&caps));
            return (working, Some(hours * 60.0));
        }
    }
    (working, None)
}

fn find_lift_keyword(text: &str) -> Option<Range<usize>> {
    lexicon::LIFT_KEYWORDS
        .iter()
        .find_map(|keyword| find_word(text, keyword))
}

fn capture_span(caps: &regex::Captures<'_>) -> Range<usize> {
    caps.get(0).map(|m| m.range()).unwrap_or(0..0)
}

fn integer_capture(caps: &regex::Captures<'_>, index: usize) -> Option<u32> {
    caps.get(index).and_then(|m| m.as_str().parse::<u32>().ok())
}

/// Whatever survived every consumed span and keyword becomes free-text notes.
fn collect_notes(working: &str) -> Option<String> {
    let mut residue = working.to_string();
    loop {
        if let Some((span, _)) = find_in_table(&residue, lexicon::INTENSITY_KEYWORDS) {
            residue = remove_span(&residue, span);
            continue;
        }
        if let Some((span, _)) = find_in_table(&residue, lexicon::SUBTYPE_KEYWORDS) {
            residue = remove_span(&residue, span);
            continue;
        }
        break;
    }
    let residue = residue.trim().to_string();
    residue
        .chars()
        .any(char::is_alphabetic)
        .then_some(residue)
}
