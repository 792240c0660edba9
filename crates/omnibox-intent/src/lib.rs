//! Omnibox Intent Parser
//!
//! This crate turns one line of free-text input from a health/fitness/
//! nutrition tracker — predominantly Swedish, with mixed numerals,
//! abbreviations and occasional English — into exactly one typed [`Intent`]:
//! an exercise session, a food entry, a body-weight update, a vital-sign
//! reading, a body measurement, a navigation command, or a generic search.
//!
//! The pipeline is pure and synchronous: raw text → normalized text → a date
//! pass → an ordered cascade of extractors → the first matching intent, with
//! search as the total fallback. Lexical ambiguity (the token "20" might mean
//! minutes, kilograms or kilometers) is resolved by keyword anchoring, unit
//! suffixes and magnitude thresholds inside the extractors; the cascade order
//! below is the single place that understands fallback semantics.

mod calories;
mod date;
mod exercise;
mod food;
mod lexicon;
mod measurement;
mod navigate;
mod text;
mod types;
mod vitals;
mod weight;

pub use calories::calculate_calories;
pub use types::{
    BodySite, ExerciseData, ExerciseSubtype, ExerciseType, FoodData, FoodUnit, Intensity, Intent,
    IntentKind, MealType, MeasurementData, NavigateData, SearchData, VitalType, VitalsData,
    VocabularyError, WeightData,
};

use time::OffsetDateTime;

/// Date-stripped text plus the wall clock, as seen by each extractor.
struct ExtractorInput<'a> {
    text: &'a str,
    now: OffsetDateTime,
}

type Extractor = fn(&ExtractorInput<'_>) -> Option<IntentKind>;

/// The cascade, in strict priority order. The first extractor to return a
/// result wins; the order is part of the observable behavior.
const CASCADE: &[(&str, Extractor)] = &[
    ("vitals", vitals_step),
    ("navigate", navigate_step),
    ("exercise", exercise_step),
    ("weight", weight_step),
    ("measurement", measurement_step),
    ("food", food_step),
];

fn vitals_step(input: &ExtractorInput<'_>) -> Option<IntentKind> {
    vitals::extract(input.text).map(IntentKind::Vitals)
}

fn navigate_step(input: &ExtractorInput<'_>) -> Option<IntentKind> {
    navigate::extract(input.text).map(IntentKind::Navigate)
}

fn exercise_step(input: &ExtractorInput<'_>) -> Option<IntentKind> {
    exercise::extract(input.text).map(IntentKind::Exercise)
}

fn weight_step(input: &ExtractorInput<'_>) -> Option<IntentKind> {
    weight::extract(input.text).map(IntentKind::Weight)
}

fn measurement_step(input: &ExtractorInput<'_>) -> Option<IntentKind> {
    measurement::extract(input.text).map(IntentKind::Measurement)
}

fn food_step(input: &ExtractorInput<'_>) -> Option<IntentKind> {
    food::extract(input.text, input.now).map(IntentKind::Food)
}

/// Classify one line of omnibox input.
///
/// Total over every input: when nothing structured is recognized the result
/// is a [`IntentKind::Search`] carrying the original, unmodified line. `now`
/// is only used to resolve relative dates and to infer a meal type from the
/// hour of day.
pub fn parse_omnibox_input(text: &str, now: OffsetDateTime) -> Intent {
    let lowered = text.trim().to_lowercase();
    let extraction = date::extract_date(&lowered, now.date());
    let input = ExtractorInput {
        text: &extraction.remainder,
        now,
    };

    for (name, step) in CASCADE.iter().copied() {
        if let Some(kind) = step(&input) {
            tracing::debug!(extractor = name, "omnibox line classified");
            return Intent::new(kind, extraction.date);
        }
    }

    tracing::debug!("omnibox line fell through to search");
    Intent::new(
        IntentKind::Search(SearchData {
            query: text.to_string(),
        }),
        extraction.date,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::{Date, Duration, Month, PrimitiveDateTime, Time};

    fn now() -> OffsetDateTime {
        let date = Date::from_calendar_date(2024, Month::March, 16).expect("valid test date");
        let time = Time::from_hms(12, 0, 0).expect("valid test time");
        PrimitiveDateTime::new(date, time).assume_utc()
    }

    #[test]
    fn sleep_line_becomes_a_vitals_intent() {
        let intent = parse_omnibox_input("7h sömn", now());
        assert_eq!(intent.date, None);
        match intent.kind {
            IntentKind::Vitals(v) => {
                assert_eq!(v.vital_type, VitalType::Sleep);
                assert_eq!(v.amount, 7.0);
            }
            other => panic!("expected vitals, got {other:?}"),
        }
    }

    #[test]
    fn dated_run_resolves_yesterday() {
        let intent = parse_omnibox_input("igår 5km löpning 30min", now());
        assert_eq!(intent.date, Some(now().date() - Duration::days(1)));
        match intent.kind {
            IntentKind::Exercise(e) => {
                assert_eq!(e.exercise_type, ExerciseType::Running);
                assert_eq!(e.distance_km, Some(5.0));
                assert_eq!(e.duration_min, 30);
            }
            other => panic!("expected exercise, got {other:?}"),
        }
    }

    #[test]
    fn weight_line_becomes_a_weight_intent() {
        let intent = parse_omnibox_input("vikt 82.5", now());
        match intent.kind {
            IntentKind::Weight(w) => assert_eq!(w.weight_kg, 82.5),
            other => panic!("expected weight, got {other:?}"),
        }
    }

    #[test]
    fn food_line_resolves_quantity_unit_and_meal() {
        let intent = parse_omnibox_input("200g kyckling lunch", now());
        match intent.kind {
            IntentKind::Food(f) => {
                assert_eq!(f.query, "kyckling");
                assert_eq!(f.quantity, Some(200.0));
                assert_eq!(f.unit, FoodUnit::Gram);
                assert_eq!(f.meal_type, Some(MealType::Lunch));
            }
            other => panic!("expected food, got {other:?}"),
        }
    }

    #[test]
    fn coffee_count_multiplies_caffeine() {
        let intent = parse_omnibox_input("3 kaffe", now());
        match intent.kind {
            IntentKind::Vitals(v) => {
                assert_eq!(v.vital_type, VitalType::Coffee);
                assert_eq!(v.amount, 3.0);
                assert_eq!(v.caffeine_mg, Some(300.0));
            }
            other => panic!("expected vitals, got {other:?}"),
        }
    }

    #[test]
    fn empty_input_is_a_search() {
        let intent = parse_omnibox_input("", now());
        assert_eq!(intent.date, None);
        assert_eq!(
            intent.kind,
            IntentKind::Search(SearchData {
                query: String::new()
            })
        );
    }

    #[test]
    fn ambiguous_small_kg_falls_through_to_search() {
        // 20 is on the exclusive weight boundary and there is no other
        // context, so nothing structured may claim it.
        let intent = parse_omnibox_input("20kg", now());
        assert_eq!(
            intent.kind,
            IntentKind::Search(SearchData {
                query: "20kg".to_string()
            })
        );

        // One step above the boundary it is a weight update.
        let intent = parse_omnibox_input("21kg", now());
        assert!(matches!(intent.kind, IntentKind::Weight(_)));
    }

    #[test]
    fn vitals_outrank_exercise_when_both_could_match() {
        let intent = parse_omnibox_input("sömn 8 efter löpning", now());
        assert!(matches!(intent.kind, IntentKind::Vitals(_)));
    }

    #[test]
    fn navigation_outranks_exercise() {
        let intent = parse_omnibox_input("gå till träning", now());
        match intent.kind {
            IntentKind::Navigate(n) => assert_eq!(n.route, "/training"),
            other => panic!("expected navigate, got {other:?}"),
        }
    }

    #[test]
    fn search_keeps_the_verbatim_input() {
        // A bare number is rejected by every extractor, including food; the
        // search payload must carry the input exactly as typed, untrimmed.
        let intent = parse_omnibox_input("  12345  ", now());
        assert_eq!(
            intent.kind,
            IntentKind::Search(SearchData {
                query: "  12345  ".to_string()
            })
        );
    }

    #[test]
    fn free_text_lines_become_food_queries() {
        // The food extractor is the last structured rule: a plain name with
        // no quantity becomes a 100 g food query for the current meal.
        let intent = parse_omnibox_input("kycklinggryta", now());
        match intent.kind {
            IntentKind::Food(f) => {
                assert_eq!(f.query, "kycklinggryta");
                assert_eq!(f.quantity, Some(100.0));
            }
            other => panic!("expected food, got {other:?}"),
        }
    }

    #[test]
    fn parsing_is_deterministic() {
        let lines = [
            "7h sömn",
            "igår 5km löpning 30min",
            "vikt 82.5",
            "200g kyckling lunch",
            "3 kaffe",
            "midja 80",
            "gå till recept",
            "nonsens utan struktur",
        ];
        for line in lines {
            assert_eq!(parse_omnibox_input(line, now()), parse_omnibox_input(line, now()));
        }
    }

    #[test]
    fn every_input_yields_an_intent() {
        let awkward = [
            "",
            " ",
            "-",
            "@",
            "kg",
            "min",
            "0-0",
            "999999999999999999999999",
            "x×x",
            "åäö",
        ];
        for line in awkward {
            // Must classify or fall through to search, never panic.
            let _ = parse_omnibox_input(line, now());
        }
    }
}
