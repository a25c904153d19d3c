//! BMI computation and classification.
//!
//! The engine is pure: a [`Measurement`] goes in, a [`BmiResult`] comes
//! out, and nothing is mutated. Formulas:
//! - Metric: `bmi = weight_kg / (height_cm / 100)^2`
//! - Imperial: `bmi = (weight_lbs / height_in^2) * 703`

use crate::advice::category_info;
use crate::{BmiCategory, BmiResult, Error, Measurement, Result, UnitSystem};

/// Compute the BMI for a measurement and classify it
///
/// The value is rounded to two decimal places before classification, so
/// the reported value and category always agree. Fails with
/// [`Error::InvalidMeasurement`] when height or weight is not positive.
pub fn compute_bmi(measurement: &Measurement) -> Result<BmiResult> {
    if measurement.height <= 0.0 || measurement.weight <= 0.0 {
        return Err(Error::InvalidMeasurement {
            height: measurement.height,
            weight: measurement.weight,
        });
    }

    let raw = match measurement.units {
        UnitSystem::Metric => measurement.weight / (measurement.height / 100.0).powi(2),
        UnitSystem::Imperial => {
            (measurement.weight / (measurement.height * measurement.height)) * 703.0
        }
    };

    let value = round2(raw);
    let category = classify(value);
    tracing::debug!(
        "computed BMI {} ({}) from {} {} / {} {}",
        value,
        category,
        measurement.height,
        measurement.units.height_unit(),
        measurement.weight,
        measurement.units.weight_unit(),
    );

    let info = category_info(category);
    Ok(BmiResult {
        value,
        category,
        emoji: info.emoji,
        tone: info.tone,
        advice: info.advice,
        plan: &info.plan,
    })
}

/// Classify a BMI value with the literal published comparisons
///
/// The bands are closed intervals with one-decimal bounds, evaluated in
/// order. That leaves five 0.1-wide gaps (18.4 to 18.5, 24.9 to 25.0,
/// 29.9 to 30.0, 34.9 to 35.0, 39.9 to 40.0) that no band claims; a
/// value inside a gap returns `None`.
pub fn classify_exact(value: f64) -> Option<BmiCategory> {
    if value <= 18.4 {
        Some(BmiCategory::Underweight)
    } else if (18.5..=24.9).contains(&value) {
        Some(BmiCategory::Normal)
    } else if (25.0..=29.9).contains(&value) {
        Some(BmiCategory::Overweight)
    } else if (30.0..=34.9).contains(&value) {
        Some(BmiCategory::Obese)
    } else if (35.0..=39.9).contains(&value) {
        Some(BmiCategory::SeverelyObese)
    } else if value >= 40.0 {
        Some(BmiCategory::MorbidlyObese)
    } else {
        None
    }
}

/// Total classification over all finite non-negative values
///
/// Agrees with [`classify_exact`] everywhere a band claims the value; a
/// value inside one of the inter-band gaps resolves to the band below
/// it, so 24.95 reports Normal and 39.95 reports Severely Obese.
pub fn classify(value: f64) -> BmiCategory {
    classify_exact(value).unwrap_or_else(|| {
        if value < 18.5 {
            BmiCategory::Underweight
        } else if value < 25.0 {
            BmiCategory::Normal
        } else if value < 30.0 {
            BmiCategory::Overweight
        } else if value < 35.0 {
            BmiCategory::Obese
        } else {
            BmiCategory::SeverelyObese
        }
    })
}

/// Round to two decimal places, half away from zero
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
