//! Resolves a meal type, a quantity+unit pair and a residual food-name query.

use crate::lexicon::{self, LEADING_FILLERS, MEAL_TYPES, TRAILING_FILLERS};
use crate::text::{compiled, find_in_table, parse_number, remove_span};
use crate::types::{FoodData, FoodUnit, MealType};
use regex::Regex;
use std::sync::OnceLock;
use time::OffsetDateTime;

/// Quantity used when a food name was given without any amount.
const DEFAULT_QUANTITY_G: f64 = 100.0;

static QUANTITY_UNIT_RE: OnceLock<Regex> = OnceLock::new();
static PURE_NUMBER_RE: OnceLock<Regex> = OnceLock::new();

pub(crate) fn extract(text: &str, now: OffsetDateTime) -> Option<FoodData> {
    let mut working = text.to_string();

    let mut meal_type: Option<MealType> = None;
    if let Some((span, meal)) = find_in_table(&working, MEAL_TYPES) {
        meal_type = Some(meal);
        working = remove_span(&working, span);
    }

    // The alternation mirrors lexicon::FOOD_UNITS, longest spelling first.
    let quantity_re = compiled(
        &QUANTITY_UNIT_RE,
        r"\b(\d+(?:[.,]\d+)?)\s*(milliliter|deciliter|matskedar|portioner|teskedar|kilogram|servings|matsked|stycken|portion|serving|tesked|pieces|liter|styck|piece|kilo|gram|port|tbsp|msk|tsk|tsp|pcs|kg|gr|dl|ml|st|g|l)\b",
    );
    let mut quantity: Option<f64> = None;
    let mut unit = FoodUnit::Gram;
    if let Some(caps) = quantity_re.captures(&working) {
        let amount = caps.get(1).and_then(|m| parse_number(m.as_str()));
        let resolved = caps
            .get(2)
            .and_then(|m| lexicon::food_unit(m.as_str()));
        if let (Some(amount), Some((canonical, factor))) = (amount, resolved) {
            quantity = Some(amount * factor);
            unit = canonical;
            let span = caps.get(0).map(|m| m.range()).unwrap_or(0..0);
            working = remove_span(&working, span);
        }
    }

    let query = strip_fillers(&working);
    if query.is_empty() || is_pure_number(&query) {
        return None;
    }

    let meal_type = meal_type.or_else(|| Some(meal_for_hour(now.hour())));
    if quantity.is_none() {
        quantity = Some(DEFAULT_QUANTITY_G);
        unit = FoodUnit::Gram;
    }

    Some(FoodData {
        query,
        quantity,
        unit,
        meal_type,
    })
}

fn strip_fillers(text: &str) -> String {
    let mut words: Vec<&str> = text.split_whitespace().collect();
    while let Some(first) = words.first() {
        if LEADING_FILLERS.contains(first) {
            words.remove(0);
        } else {
            break;
        }
    }
    while let Some(last) = words.last() {
        if TRAILING_FILLERS.contains(last) {
            words.pop();
        } else {
            break;
        }
    }
    words.join(" ")
}

fn is_pure_number(text: &str) -> bool {
    let re = compiled(&PURE_NUMBER_RE, r"^\d+(?:[.,]\d+)?$");
    re.is_match(text)
}

/// Meal type inferred from the wall clock when none was stated.
fn meal_for_hour(hour: u8) -> MealType {
    match hour {
        5..=9 => MealType::Breakfast,
        10..=13 => MealType::Lunch,
        17..=20 => MealType::Dinner,
        _ => MealType::Snack,
    }
}
