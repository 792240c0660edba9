//! MET-based calorie estimation, sharing the exercise vocabulary.

use crate::lexicon::met_coefficient;
use crate::types::{ExerciseType, Intensity};

/// Estimate kilocalories burned for an exercise session.
///
/// Uses the standard MET formula (MET × body weight in kg × hours). A
/// non-finite or non-positive body weight yields 0; like the interpreter
/// itself, this never fails.
pub fn calculate_calories(
    exercise_type: ExerciseType,
    duration_min: u32,
    intensity: Intensity,
    body_weight_kg: f64,
) -> u32 {
    if !body_weight_kg.is_finite() || body_weight_kg <= 0.0 {
        return 0;
    }
    let met = met_coefficient(exercise_type, intensity);
    let hours = f64::from(duration_min) / 60.0;
    (met * body_weight_kg * hours).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_an_hour_at_moderate_pace() {
        // 9.8 MET * 80 kg * 1 h
        assert_eq!(
            calculate_calories(ExerciseType::Running, 60, Intensity::Moderate, 80.0),
            784
        );
    }

    #[test]
    fn shorter_sessions_scale_linearly() {
        assert_eq!(
            calculate_calories(ExerciseType::Running, 30, Intensity::Moderate, 80.0),
            392
        );
    }

    #[test]
    fn degenerate_weights_yield_zero() {
        assert_eq!(
            calculate_calories(ExerciseType::Running, 60, Intensity::High, 0.0),
            0
        );
        assert_eq!(
            calculate_calories(ExerciseType::Running, 60, Intensity::High, f64::NAN),
            0
        );
        assert_eq!(
            calculate_calories(ExerciseType::Yoga, 0, Intensity::Low, 80.0),
            0
        );
    }
}
