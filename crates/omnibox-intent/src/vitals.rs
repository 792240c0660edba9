//! Recognizes sleep, hydration, caffeine and step-count mentions.

use crate::text::{compiled, parse_number};
use crate::types::{VitalType, VitalsData};
use regex::Regex;
use std::sync::OnceLock;

/// Milligrams of caffeine per cup of coffee, keyed by potency modifier.
const COFFEE_WEAK_MG: f64 = 60.0;
const COFFEE_NORMAL_MG: f64 = 100.0;
const COFFEE_STRONG_MG: f64 = 150.0;
/// Per-can caffeine: the brand keyword versus a generic energy drink.
const NOCCO_MG: f64 = 180.0;
const ENERGY_GENERIC_MG: f64 = 80.0;

static SLEEP_NUMBER_FIRST: OnceLock<Regex> = OnceLock::new();
static SLEEP_KEYWORD_FIRST: OnceLock<Regex> = OnceLock::new();
static SLEEP_BARE_HOURS: OnceLock<Regex> = OnceLock::new();
static STEPS_NUMBER_FIRST: OnceLock<Regex> = OnceLock::new();
static STEPS_KEYWORD_FIRST: OnceLock<Regex> = OnceLock::new();
static CAFFEINE_NUMBER_FIRST: OnceLock<Regex> = OnceLock::new();
static CAFFEINE_KEYWORD_FIRST: OnceLock<Regex> = OnceLock::new();
static COFFEE_RE: OnceLock<Regex> = OnceLock::new();
static ENERGY_RE: OnceLock<Regex> = OnceLock::new();
static WATER_RE: OnceLock<Regex> = OnceLock::new();

/// Try every vitals sub-rule in priority order; first match wins.
pub(crate) fn extract(text: &str) -> Option<VitalsData> {
    extract_sleep(text)
        .or_else(|| extract_steps(text))
        .or_else(|| extract_caffeine_mg(text))
        .or_else(|| extract_coffee(text))
        .or_else(|| extract_energy_drink(text))
        .or_else(|| extract_water(text))
}

fn extract_sleep(text: &str) -> Option<VitalsData> {
    let number_first = compiled(
        &SLEEP_NUMBER_FIRST,
        r"\b(\d+(?:[.,]\d+)?)\s*(?:timmar|timme|tim|hours|hour|hrs|h)?\s*(?:sömn|sovit|sov|sleep|slept)\b",
    );
    let keyword_first = compiled(
        &SLEEP_KEYWORD_FIRST,
        r"\b(?:sömn|sovit|sov|sleep|slept)\s*:?\s*(\d+(?:[.,]\d+)?)\b",
    );
    let hours = number_first
        .captures(text)
        .or_else(|| keyword_first.captures(text))
        .and_then(|caps| parse_number(caps.get(1)?.as_str()));
    if let Some(hours) = hours {
        return Some(sleep(hours));
    }

    // A bare "<n>h" token is only sleep when it stands alone and the value is
    // plausible as a night; anything else is left for the exercise extractor.
    let bare = compiled(
        &SLEEP_BARE_HOURS,
        r"^(\d+(?:[.,]\d+)?)\s*(?:timmar|timme|tim|hours|hour|hrs|h)$",
    );
    let caps = bare.captures(text)?;
    let hours = parse_number(caps.get(1)?.as_str())?;
    (hours > 2.0 && hours < 16.0).then(|| sleep(hours))
}

fn sleep(hours: f64) -> VitalsData {
    VitalsData {
        vital_type: VitalType::Sleep,
        amount: hours,
        caffeine_mg: None,
    }
}

fn extract_steps(text: &str) -> Option<VitalsData> {
    let number_first = compiled(&STEPS_NUMBER_FIRST, r"\b(\d+)\s*(?:steg|steps)\b");
    let keyword_first = compiled(&STEPS_KEYWORD_FIRST, r"\b(?:steg|steps)\s*:?\s*(\d+)\b");
    let count = number_first
        .captures(text)
        .or_else(|| keyword_first.captures(text))
        .and_then(|caps| parse_number(caps.get(1)?.as_str()))?;
    Some(VitalsData {
        vital_type: VitalType::Steps,
        amount: count,
        caffeine_mg: None,
    })
}

fn extract_caffeine_mg(text: &str) -> Option<VitalsData> {
    let number_first = compiled(
        &CAFFEINE_NUMBER_FIRST,
        r"\b(\d+(?:[.,]\d+)?)\s*(?:mg\s*)?(?:caffeine|koffein|caf)\b",
    );
    let keyword_first = compiled(
        &CAFFEINE_KEYWORD_FIRST,
        r"\b(?:caffeine|koffein|caf)\s*:?\s*(\d+(?:[.,]\d+)?)\s*(?:mg)?\b",
    );
    let milligrams = number_first
        .captures(text)
        .or_else(|| keyword_first.captures(text))
        .and_then(|caps| parse_number(caps.get(1)?.as_str()))?;
    // An explicit milligram figure is logged as one coffee with that load.
    Some(VitalsData {
        vital_type: VitalType::Coffee,
        amount: 1.0,
        caffeine_mg: Some(milligrams),
    })
}

fn extract_coffee(text: &str) -> Option<VitalsData> {
    let re = compiled(
        &COFFEE_RE,
        r"\b(?:(\d+)\s*)?(?:(svagt|svaga|svag|starkt|starka|stark)\s+)?(?:koppar\s+)?(?:kaffe|coffee)\b",
    );
    let caps = re.captures(text)?;
    let count = caps
        .get(1)
        .and_then(|m| parse_number(m.as_str()))
        .unwrap_or(1.0);
    let per_cup = match caps.get(2).map(|m| m.as_str()) {
        Some("svag" | "svagt" | "svaga") => COFFEE_WEAK_MG,
        Some("stark" | "starkt" | "starka") => COFFEE_STRONG_MG,
        _ => COFFEE_NORMAL_MG,
    };
    Some(VitalsData {
        vital_type: VitalType::Coffee,
        amount: count,
        caffeine_mg: Some(per_cup * count),
    })
}

fn extract_energy_drink(text: &str) -> Option<VitalsData> {
    let re = compiled(
        &ENERGY_RE,
        r"\b(?:(\d+)\s*)?(nocco|energidryck|energidrycker|energy\s*drink|energydrink)\b",
    );
    let caps = re.captures(text)?;
    let count = caps
        .get(1)
        .and_then(|m| parse_number(m.as_str()))
        .unwrap_or(1.0);
    let (vital_type, per_can) = match caps.get(2).map(|m| m.as_str()) {
        Some("nocco") => (VitalType::Nocco, NOCCO_MG),
        _ => (VitalType::Energy, ENERGY_GENERIC_MG),
    };
    Some(VitalsData {
        vital_type,
        amount: count,
        caffeine_mg: Some(per_can * count),
    })
}

fn extract_water(text: &str) -> Option<VitalsData> {
    let re = compiled(
        &WATER_RE,
        r"\b(?:(\d+)\s*)?(?:glas\s+)?(?:vatten|water)\b",
    );
    let caps = re.captures(text)?;
    let count = caps
        .get(1)
        .and_then(|m| parse_number(m.as_str()))
        .unwrap_or(1.0);
    Some(VitalsData {
        vital_type: VitalType::Water,
        amount: count,
        caffeine_mg: None,
    })
}
