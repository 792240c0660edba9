//! Typed intent model produced by the interpreter.
//!
//! One `Intent` is constructed per parsed line and is immutable afterwards;
//! the caller maps it into persisted records.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use time::Date;

/// The structured classification result of parsing one input line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    /// Which loggable action the line describes.
    pub kind: IntentKind,
    /// Calendar date resolved from the line, when one was mentioned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<Date>,
}

impl Intent {
    pub fn new(kind: IntentKind, date: Option<Date>) -> Self {
        Self { kind, date }
    }
}

/// Payload variants, one per loggable action category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    Exercise(ExerciseData),
    Food(FoodData),
    Weight(WeightData),
    Vitals(VitalsData),
    Measurement(MeasurementData),
    Navigate(NavigateData),
    Search(SearchData),
}

/// A recognized exercise session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseData {
    pub exercise_type: ExerciseType,
    /// Session length in whole minutes.
    pub duration_min: u32,
    pub intensity: Intensity,
    /// Free text left over after every recognized token was consumed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtype: Option<ExerciseSubtype>,
    /// Total lifted weight across sets and reps, in kilograms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tonnage_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_heart_rate: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_heart_rate: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseType {
    Running,
    Cycling,
    Strength,
    Walking,
    Swimming,
    Yoga,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Low,
    Moderate,
    High,
    Ultra,
}

impl Default for Intensity {
    fn default() -> Self {
        Intensity::Moderate
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseSubtype {
    Default,
    Interval,
    LongRun,
    Race,
    Competition,
    Ultra,
    Tonnage,
}

impl ExerciseSubtype {
    /// Subtypes written by runners; used when inferring an exercise type from
    /// a subtype keyword alone.
    pub(crate) fn is_running_subtype(self) -> bool {
        matches!(
            self,
            ExerciseSubtype::Interval
                | ExerciseSubtype::LongRun
                | ExerciseSubtype::Race
                | ExerciseSubtype::Competition
                | ExerciseSubtype::Ultra
        )
    }
}

/// A recognized food entry: residual name query plus normalized quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodData {
    /// Residual free-text name used to look up the food item.
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    /// Canonical unit the quantity was normalized to.
    pub unit: FoodUnit,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<MealType>,
}

/// Canonical food units used internally regardless of input spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodUnit {
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "ml")]
    Milliliter,
    #[serde(rename = "st")]
    Piece,
    #[serde(rename = "portion")]
    Portion,
}

impl FoodUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            FoodUnit::Gram => "g",
            FoodUnit::Milliliter => "ml",
            FoodUnit::Piece => "st",
            FoodUnit::Portion => "portion",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    Beverage,
}

/// A body-weight update, plausibility-checked at extraction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightData {
    /// Strictly between 20 and 500.
    pub weight_kg: f64,
}

/// A vital-sign reading: sleep, hydration, caffeine or step count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalsData {
    pub vital_type: VitalType,
    /// Hours for sleep, a count for everything else.
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caffeine_mg: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VitalType {
    Sleep,
    Water,
    Coffee,
    Nocco,
    Energy,
    Steps,
}

/// A body measurement, optionally bilateral.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<BodySite>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_cm: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodySite {
    Waist,
    Hips,
    Chest,
    ThighLeft,
    ThighRight,
    ArmLeft,
    ArmRight,
    CalfLeft,
    CalfRight,
    Neck,
    Shoulders,
    ForearmLeft,
    ForearmRight,
}

/// An explicit navigation command resolved to an application route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigateData {
    pub route: String,
}

/// Fallback: nothing structured was recognized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchData {
    /// The original, unmodified input line.
    pub query: String,
}

/// Error returned when a vocabulary word cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabularyError {
    #[error("unknown exercise type: {0}")]
    ExerciseType(String),
    #[error("unknown intensity: {0}")]
    Intensity(String),
}

impl FromStr for ExerciseType {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "running" | "löpning" => Ok(ExerciseType::Running),
            "cycling" | "cykling" => Ok(ExerciseType::Cycling),
            "strength" | "styrka" => Ok(ExerciseType::Strength),
            "walking" | "promenad" => Ok(ExerciseType::Walking),
            "swimming" | "simning" => Ok(ExerciseType::Swimming),
            "yoga" => Ok(ExerciseType::Yoga),
            "other" | "övrigt" => Ok(ExerciseType::Other),
            other => Err(VocabularyError::ExerciseType(other.to_string())),
        }
    }
}

impl FromStr for Intensity {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" | "låg" => Ok(Intensity::Low),
            "moderate" | "medel" => Ok(Intensity::Moderate),
            "high" | "hög" => Ok(Intensity::High),
            "ultra" => Ok(Intensity::Ultra),
            other => Err(VocabularyError::Intensity(other.to_string())),
        }
    }
}
