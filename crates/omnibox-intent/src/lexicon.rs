//! Static surface-form tables shared by the extractors.
//!
//! Every table is ordered longest surface form first. The scanners try entries
//! in table order, so a longer, more specific stem ("löpning") always wins
//! over a shorter prefix that also matches ("löp"). Tests at the bottom pin
//! that ordering.

use crate::types::{BodySite, ExerciseSubtype, ExerciseType, FoodUnit, Intensity, MealType};

/// Exercise-type keywords, Swedish stems first with English synonyms mixed in.
pub(crate) const EXERCISE_TYPES: &[(&str, ExerciseType)] = &[
    ("styrketräning", ExerciseType::Strength),
    ("träningspass", ExerciseType::Other),
    ("promenerade", ExerciseType::Walking),
    ("styrkepass", ExerciseType::Strength),
    ("stretching", ExerciseType::Yoga),
    ("löprunda", ExerciseType::Running),
    ("sprungit", ExerciseType::Running),
    ("spinning", ExerciseType::Cycling),
    ("swimming", ExerciseType::Swimming),
    ("promenad", ExerciseType::Walking),
    ("vandring", ExerciseType::Walking),
    ("vandrade", ExerciseType::Walking),
    ("cykeltur", ExerciseType::Cycling),
    ("yogapass", ExerciseType::Yoga),
    ("träning", ExerciseType::Other),
    ("tränade", ExerciseType::Other),
    ("löpning", ExerciseType::Running),
    ("jogging", ExerciseType::Running),
    ("joggade", ExerciseType::Running),
    ("running", ExerciseType::Running),
    ("cykling", ExerciseType::Cycling),
    ("cyklade", ExerciseType::Cycling),
    ("cycling", ExerciseType::Cycling),
    ("simning", ExerciseType::Swimming),
    ("simmade", ExerciseType::Swimming),
    ("gympass", ExerciseType::Strength),
    ("walking", ExerciseType::Walking),
    ("springa", ExerciseType::Running),
    ("workout", ExerciseType::Other),
    ("löptur", ExerciseType::Running),
    ("sprang", ExerciseType::Running),
    ("cyklat", ExerciseType::Cycling),
    ("styrka", ExerciseType::Strength),
    ("träna", ExerciseType::Other),
    ("löpte", ExerciseType::Running),
    ("gång", ExerciseType::Walking),
    ("cykla", ExerciseType::Cycling),
    ("cykel", ExerciseType::Cycling),
    ("simma", ExerciseType::Swimming),
    ("spinn", ExerciseType::Cycling),
    ("crawl", ExerciseType::Swimming),
    ("yoga", ExerciseType::Yoga),
    ("gick", ExerciseType::Walking),
    ("jogg", ExerciseType::Running),
    ("walk", ExerciseType::Walking),
    ("hike", ExerciseType::Walking),
    ("swim", ExerciseType::Swimming),
    ("bike", ExerciseType::Cycling),
    ("pass", ExerciseType::Other),
    ("löp", ExerciseType::Running),
    ("gym", ExerciseType::Strength),
    ("mtb", ExerciseType::Cycling),
    ("run", ExerciseType::Running),
    ("sim", ExerciseType::Swimming),
];

/// Lift keywords: their presence marks strength context for a bare `kg` figure.
pub(crate) const LIFT_KEYWORDS: &[&str] = &[
    "militärpress",
    "skivstång",
    "bänkpress",
    "axelpress",
    "marklyft",
    "deadlift",
    "knäböj",
    "hantlar",
    "hantel",
    "squats",
    "squat",
    "bänk",
    "bench",
    "press",
    "lyfte",
    "lyft",
    "curl",
];

pub(crate) const INTENSITY_KEYWORDS: &[(&str, Intensity)] = &[
    ("intensivt", Intensity::High),
    ("måttligt", Intensity::Moderate),
    ("intensiv", Intensity::High),
    ("måttlig", Intensity::Moderate),
    ("moderate", Intensity::Moderate),
    ("normal", Intensity::Moderate),
    ("medium", Intensity::Moderate),
    ("lugnt", Intensity::Low),
    ("medel", Intensity::Moderate),
    ("ultra", Intensity::Ultra),
    ("tufft", Intensity::High),
    ("hård", Intensity::High),
    ("hårt", Intensity::High),
    ("lätt", Intensity::Low),
    ("tuff", Intensity::High),
    ("lugn", Intensity::Low),
    ("easy", Intensity::Low),
    ("hard", Intensity::High),
    ("high", Intensity::High),
    ("hög", Intensity::High),
    ("låg", Intensity::Low),
    ("low", Intensity::Low),
    ("max", Intensity::Ultra),
];

/// Running-flavored subtype keywords; they also drive type inference when no
/// explicit exercise-type keyword matched.
pub(crate) const SUBTYPE_KEYWORDS: &[(&str, ExerciseSubtype)] = &[
    ("intervaller", ExerciseSubtype::Interval),
    ("competition", ExerciseSubtype::Competition),
    ("ultralopp", ExerciseSubtype::Ultra),
    ("intervall", ExerciseSubtype::Interval),
    ("långpass", ExerciseSubtype::LongRun),
    ("interval", ExerciseSubtype::Interval),
    ("long run", ExerciseSubtype::LongRun),
    ("marathon", ExerciseSubtype::Race),
    ("tävling", ExerciseSubtype::Competition),
    ("maraton", ExerciseSubtype::Race),
    ("longrun", ExerciseSubtype::LongRun),
    ("ultra", ExerciseSubtype::Ultra),
    ("lopp", ExerciseSubtype::Race),
    ("race", ExerciseSubtype::Race),
];

pub(crate) const MEAL_TYPES: &[(&str, MealType)] = &[
    ("kvällsmål", MealType::Dinner),
    ("morgonmål", MealType::Breakfast),
    ("kvällsmat", MealType::Dinner),
    ("mellanmål", MealType::Snack),
    ("breakfast", MealType::Breakfast),
    ("middagen", MealType::Dinner),
    ("beverage", MealType::Beverage),
    ("frukost", MealType::Breakfast),
    ("lunchen", MealType::Lunch),
    ("mellis", MealType::Snack),
    ("frulle", MealType::Breakfast),
    ("middag", MealType::Dinner),
    ("dinner", MealType::Dinner),
    ("supper", MealType::Dinner),
    ("snacks", MealType::Snack),
    ("dricka", MealType::Beverage),
    ("snack", MealType::Snack),
    ("lunch", MealType::Lunch),
    ("dryck", MealType::Beverage),
    ("drink", MealType::Beverage),
    ("fika", MealType::Snack),
];

/// Food-unit spellings with their canonical unit and exact conversion factor.
pub(crate) const FOOD_UNITS: &[(&str, FoodUnit, f64)] = &[
    ("milliliter", FoodUnit::Milliliter, 1.0),
    ("deciliter", FoodUnit::Milliliter, 100.0),
    ("matskedar", FoodUnit::Gram, 15.0),
    ("portioner", FoodUnit::Portion, 1.0),
    ("teskedar", FoodUnit::Gram, 5.0),
    ("kilogram", FoodUnit::Gram, 1000.0),
    ("servings", FoodUnit::Portion, 1.0),
    ("matsked", FoodUnit::Gram, 15.0),
    ("stycken", FoodUnit::Piece, 1.0),
    ("portion", FoodUnit::Portion, 1.0),
    ("serving", FoodUnit::Portion, 1.0),
    ("tesked", FoodUnit::Gram, 5.0),
    ("pieces", FoodUnit::Piece, 1.0),
    ("liter", FoodUnit::Milliliter, 1000.0),
    ("styck", FoodUnit::Piece, 1.0),
    ("piece", FoodUnit::Piece, 1.0),
    ("kilo", FoodUnit::Gram, 1000.0),
    ("gram", FoodUnit::Gram, 1.0),
    ("port", FoodUnit::Portion, 1.0),
    ("tbsp", FoodUnit::Gram, 15.0),
    ("msk", FoodUnit::Gram, 15.0),
    ("tsk", FoodUnit::Gram, 5.0),
    ("tsp", FoodUnit::Gram, 5.0),
    ("pcs", FoodUnit::Piece, 1.0),
    ("kg", FoodUnit::Gram, 1000.0),
    ("gr", FoodUnit::Gram, 1.0),
    ("dl", FoodUnit::Milliliter, 100.0),
    ("ml", FoodUnit::Milliliter, 1.0),
    ("st", FoodUnit::Piece, 1.0),
    ("g", FoodUnit::Gram, 1.0),
    ("l", FoodUnit::Milliliter, 1000.0),
];

/// Resolve one unit spelling to its canonical unit and factor.
pub(crate) fn food_unit(surface: &str) -> Option<(FoodUnit, f64)> {
    FOOD_UNITS
        .iter()
        .find(|(s, _, _)| *s == surface)
        .map(|(_, unit, factor)| (*unit, *factor))
}

/// Body-measurement keywords. Un-prefixed aliases default to the left side.
pub(crate) const BODY_SITES: &[(&str, BodySite)] = &[
    ("vänster underarm", BodySite::ForearmLeft),
    ("höger underarm", BodySite::ForearmRight),
    ("vänster lår", BodySite::ThighLeft),
    ("vänster arm", BodySite::ArmLeft),
    ("vänster vad", BodySite::CalfLeft),
    ("höger lår", BodySite::ThighRight),
    ("höger arm", BodySite::ArmRight),
    ("höger vad", BodySite::CalfRight),
    ("bröstkorg", BodySite::Chest),
    ("midjemått", BodySite::Waist),
    ("shoulders", BodySite::Shoulders),
    ("underarm", BodySite::ForearmLeft),
    ("forearm", BodySite::ForearmLeft),
    ("höfter", BodySite::Hips),
    ("bröst", BodySite::Chest),
    ("biceps", BodySite::ArmLeft),
    ("axlar", BodySite::Shoulders),
    ("midja", BodySite::Waist),
    ("nacke", BodySite::Neck),
    ("thigh", BodySite::ThighLeft),
    ("waist", BodySite::Waist),
    ("chest", BodySite::Chest),
    ("höft", BodySite::Hips),
    ("hals", BodySite::Neck),
    ("neck", BodySite::Neck),
    ("hips", BodySite::Hips),
    ("calf", BodySite::CalfLeft),
    ("lår", BodySite::ThighLeft),
    ("arm", BodySite::ArmLeft),
    ("vad", BodySite::CalfLeft),
];

/// Bare words that open the generic measurement view with no site selected.
pub(crate) const MEASUREMENT_WORDS: &[&str] =
    &["measurements", "kroppsmått", "measurement", "mått"];

/// Navigation destinations, matched as plain substrings in table order.
pub(crate) const NAV_DESTINATIONS: &[(&str, &str)] = &[
    ("meal planning", "/meal-planning"),
    ("matplanering", "/meal-planning"),
    ("measurements", "/measurements"),
    ("competition", "/competition"),
    ("kroppsmått", "/measurements"),
    ("livsmedel", "/food"),
    ("skafferi", "/pantry"),
    ("kalorier", "/calories"),
    ("calories", "/calories"),
    ("tävling", "/competition"),
    ("träning", "/training"),
    ("training", "/training"),
    ("recipes", "/recipes"),
    ("profile", "/profile"),
    ("recept", "/recipes"),
    ("profil", "/profile"),
    ("pantry", "/pantry"),
    ("weight", "/weight"),
    ("sömn", "/sleep"),
    ("sleep", "/sleep"),
    ("mått", "/measurements"),
    ("vikt", "/weight"),
    ("food", "/food"),
    ("mat", "/food"),
];

/// Leading phrases that turn a line into a navigation command.
pub(crate) const NAV_TRIGGERS: &[&str] = &[
    "navigera till",
    "navigate to",
    "gå till",
    "navigate",
    "navigera",
    "go to",
];

/// Filler words stripped from the ends of a food query.
pub(crate) const LEADING_FILLERS: &[&str] = &[
    "jag", "ska", "vill", "logga", "lägg", "lägga", "åt", "ät", "äta", "hade", "en", "ett",
];
pub(crate) const TRAILING_FILLERS: &[&str] = &["till", "som", "för", "på", "i"];

/// MET coefficient per exercise type and intensity.
pub(crate) fn met_coefficient(exercise_type: ExerciseType, intensity: Intensity) -> f64 {
    use ExerciseType::*;
    use Intensity::*;
    match (exercise_type, intensity) {
        (Running, Low) => 7.0,
        (Running, Moderate) => 9.8,
        (Running, High) => 11.5,
        (Running, Ultra) => 12.8,
        (Cycling, Low) => 5.5,
        (Cycling, Moderate) => 7.5,
        (Cycling, High) => 10.0,
        (Cycling, Ultra) => 12.0,
        (Strength, Low) => 3.0,
        (Strength, Moderate) => 5.0,
        (Strength, High) => 6.0,
        (Strength, Ultra) => 8.0,
        (Walking, Low) => 2.8,
        (Walking, Moderate) => 3.5,
        (Walking, High) => 4.5,
        (Walking, Ultra) => 5.0,
        (Swimming, Low) => 5.0,
        (Swimming, Moderate) => 7.0,
        (Swimming, High) => 9.8,
        (Swimming, Ultra) => 11.0,
        (Yoga, Low) => 2.0,
        (Yoga, Moderate) => 3.0,
        (Yoga, High | Ultra) => 4.0,
        (Other, Low) => 3.0,
        (Other, Moderate) => 5.0,
        (Other, High) => 7.0,
        (Other, Ultra) => 8.0,
    }
}

/// Default pace per intensity, in seconds per kilometer, used to derive a
/// duration from a distance when no pace was stated.
pub(crate) fn default_pace_sec_per_km(intensity: Intensity) -> f64 {
    match intensity {
        Intensity::Low => 420.0,
        Intensity::Moderate => 360.0,
        Intensity::High => 300.0,
        Intensity::Ultra => 270.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_longest_first(surfaces: impl Iterator<Item = &'static str>, table: &str) {
        let lengths: Vec<usize> = surfaces.map(str::len).collect();
        assert!(
            lengths.windows(2).all(|w| w[0] >= w[1]),
            "{table} must be ordered longest surface form first"
        );
    }

    #[test]
    fn tables_are_ordered_longest_first() {
        assert_longest_first(EXERCISE_TYPES.iter().map(|(s, _)| *s), "EXERCISE_TYPES");
        assert_longest_first(LIFT_KEYWORDS.iter().copied(), "LIFT_KEYWORDS");
        assert_longest_first(
            INTENSITY_KEYWORDS.iter().map(|(s, _)| *s),
            "INTENSITY_KEYWORDS",
        );
        assert_longest_first(SUBTYPE_KEYWORDS.iter().map(|(s, _)| *s), "SUBTYPE_KEYWORDS");
        assert_longest_first(MEAL_TYPES.iter().map(|(s, _)| *s), "MEAL_TYPES");
        assert_longest_first(FOOD_UNITS.iter().map(|(s, _, _)| *s), "FOOD_UNITS");
        assert_longest_first(BODY_SITES.iter().map(|(s, _)| *s), "BODY_SITES");
        assert_longest_first(MEASUREMENT_WORDS.iter().copied(), "MEASUREMENT_WORDS");
        assert_longest_first(NAV_DESTINATIONS.iter().map(|(s, _)| *s), "NAV_DESTINATIONS");
        assert_longest_first(NAV_TRIGGERS.iter().copied(), "NAV_TRIGGERS");
    }

    #[test]
    fn unit_factors_are_exact() {
        assert_eq!(food_unit("kg"), Some((FoodUnit::Gram, 1000.0)));
        assert_eq!(food_unit("l"), Some((FoodUnit::Milliliter, 1000.0)));
        assert_eq!(food_unit("dl"), Some((FoodUnit::Milliliter, 100.0)));
        assert_eq!(food_unit("msk"), Some((FoodUnit::Gram, 15.0)));
        assert_eq!(food_unit("tsk"), Some((FoodUnit::Gram, 5.0)));
        assert_eq!(food_unit("st"), Some((FoodUnit::Piece, 1.0)));
        assert_eq!(food_unit("portion"), Some((FoodUnit::Portion, 1.0)));
        assert_eq!(food_unit("oz"), None);
    }

    #[test]
    fn every_unit_spelling_resolves() {
        for (surface, unit, factor) in FOOD_UNITS {
            assert_eq!(food_unit(surface), Some((*unit, *factor)));
        }
    }

    #[test]
    fn met_rises_with_intensity_for_running() {
        let low = met_coefficient(ExerciseType::Running, Intensity::Low);
        let moderate = met_coefficient(ExerciseType::Running, Intensity::Moderate);
        let high = met_coefficient(ExerciseType::Running, Intensity::High);
        let ultra = met_coefficient(ExerciseType::Running, Intensity::Ultra);
        assert!(low < moderate && moderate < high && high < ultra);
    }
}
