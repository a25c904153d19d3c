//! Core domain types for the Bmical system.
//!
//! This module defines the fundamental types used throughout the system:
//! - Unit systems and raw measurements
//! - BMI categories and their published bands
//! - Computed results and their presentation metadata
//! - Recorded history entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Measurement Types
// ============================================================================

/// Unit system a measurement was taken in
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    /// Centimetres and kilograms
    #[default]
    Metric,
    /// Inches and pounds
    Imperial,
}

impl UnitSystem {
    /// Unit label for heights in this system
    pub fn height_unit(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "cm",
            UnitSystem::Imperial => "in",
        }
    }

    /// Unit label for weights in this system
    pub fn weight_unit(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "kg",
            UnitSystem::Imperial => "lbs",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::Metric => write!(f, "metric"),
            UnitSystem::Imperial => write!(f, "imperial"),
        }
    }
}

impl std::str::FromStr for UnitSystem {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "si" | "cm" | "kg" => Ok(UnitSystem::Metric),
            "imperial" | "us" | "in" | "lbs" => Ok(UnitSystem::Imperial),
            _ => Err(crate::Error::Other(format!("unknown unit system: {}", s))),
        }
    }
}

/// A raw height/weight reading in the chosen unit system
///
/// Height is centimetres (metric) or inches (imperial); weight is
/// kilograms or pounds. The engine accepts any positive values; range
/// limits belong to the presentation layer collecting the input.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Measurement {
    pub height: f64,
    pub weight: f64,
    pub units: UnitSystem,
}

impl Measurement {
    /// Metric reading: height in centimetres, weight in kilograms
    pub fn metric(height_cm: f64, weight_kg: f64) -> Self {
        Self {
            height: height_cm,
            weight: weight_kg,
            units: UnitSystem::Metric,
        }
    }

    /// Imperial reading: height in inches, weight in pounds
    pub fn imperial(height_in: f64, weight_lbs: f64) -> Self {
        Self {
            height: height_in,
            weight: weight_lbs,
            units: UnitSystem::Imperial,
        }
    }
}

// ============================================================================
// Category Types
// ============================================================================

/// BMI band, ordered lightest to heaviest
#[derive(
    Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
    SeverelyObese,
    MorbidlyObese,
}

impl BmiCategory {
    /// All categories in band order
    pub const ALL: [BmiCategory; 6] = [
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::Obese,
        BmiCategory::SeverelyObese,
        BmiCategory::MorbidlyObese,
    ];

    /// Human-readable band name
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
            BmiCategory::SeverelyObese => "Severely Obese",
            BmiCategory::MorbidlyObese => "Morbidly Obese",
        }
    }

    /// Closed [lower, upper] bounds of this band as published
    ///
    /// The one-decimal upper bounds leave 0.1-wide gaps between
    /// neighbouring bands; see [`crate::engine::classify_exact`].
    pub fn bounds(&self) -> (f64, f64) {
        match self {
            BmiCategory::Underweight => (0.0, 18.4),
            BmiCategory::Normal => (18.5, 24.9),
            BmiCategory::Overweight => (25.0, 29.9),
            BmiCategory::Obese => (30.0, 34.9),
            BmiCategory::SeverelyObese => (35.0, 39.9),
            BmiCategory::MorbidlyObese => (40.0, f64::INFINITY),
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Severity tag the presentation layer uses to colour a result
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Success,
    Warning,
    Danger,
}

/// Fixed meal-slot suggestions for a category
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct DietPlan {
    pub breakfast: &'static str,
    pub lunch: &'static str,
    pub dinner: &'static str,
    pub tip: &'static str,
}

// ============================================================================
// Result and History Types
// ============================================================================

/// Outcome of one BMI computation
///
/// Derived deterministically from a [`Measurement`]; never mutated after
/// creation. `value` is rounded to two decimal places.
#[derive(Clone, Debug, Serialize)]
pub struct BmiResult {
    pub value: f64,
    pub category: BmiCategory,
    pub emoji: &'static str,
    pub tone: Tone,
    pub advice: &'static str,
    pub plan: &'static DietPlan,
}

/// A recorded calculation in the session history
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub recorded_at: DateTime<Utc>,
    pub value: f64,
    pub category: BmiCategory,
}

impl HistoryEntry {
    /// Build an entry from a computed result, stamped at `recorded_at`
    pub fn from_result(result: &BmiResult, recorded_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            recorded_at,
            value: result.value,
            category: result.category,
        }
    }
}
