//! User profile and BMI model.
//!
//! The profile is external input to the tagger pipeline: the tagger never
//! reads it, only the response generator and the fallback prompt builder do.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppError;

/// Self-reported gender, used only to pick supplementary advice sentences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
    Other,
}

/// Age bracket used by the response generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeBracket {
    /// Under 18.
    Minor,
    /// 18 through 64.
    Adult,
    /// 65 and over.
    Senior,
}

impl AgeBracket {
    pub fn from_age(age: u8) -> Self {
        match age {
            0..=17 => AgeBracket::Minor,
            18..=64 => AgeBracket::Adult,
            _ => AgeBracket::Senior,
        }
    }
}

/// BMI category at standard WHO cutoffs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// A computed BMI value with its category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bmi {
    /// BMI value rounded to one decimal.
    pub value: f64,
    pub category: BmiCategory,
}

impl Bmi {
    /// Compute BMI from height in centimeters and weight in kilograms.
    pub fn compute(height_cm: f64, weight_kg: f64) -> Result<Self, AppError> {
        if height_cm <= 0.0 || weight_kg <= 0.0 {
            return Err(AppError::Validation(
                "Please enter both height and weight".to_string(),
            ));
        }

        let height_m = height_cm / 100.0;
        let raw = weight_kg / (height_m * height_m);
        let value = (raw * 10.0).round() / 10.0;

        let category = if value < 18.5 {
            BmiCategory::Underweight
        } else if value < 25.0 {
            BmiCategory::NormalWeight
        } else if value < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        };

        Ok(Self { value, category })
    }

    /// User-facing summary line.
    pub fn message(&self) -> String {
        format!("Your BMI is {} ({})", self.value, self.category.label())
    }
}

/// User profile supplied by the caller of the chat pipeline.
///
/// Everything is optional; missing fields simply produce fewer supplementary
/// sentences and less fallback prompt context.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UserProfile {
    /// Height in centimeters.
    #[validate(range(min = 30.0, max = 300.0))]
    pub height_cm: Option<f64>,
    /// Weight in kilograms.
    #[validate(range(min = 2.0, max = 650.0))]
    pub weight_kg: Option<f64>,
    /// Age in years.
    #[validate(range(min = 1, max = 130))]
    pub age: Option<u8>,
    pub gender: Option<Gender>,
}

impl UserProfile {
    /// Derived BMI, when both height and weight are present and plausible.
    pub fn bmi(&self) -> Option<Bmi> {
        match (self.height_cm, self.weight_kg) {
            (Some(h), Some(w)) => Bmi::compute(h, w).ok(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_formula_and_rounding() {
        let bmi = Bmi::compute(170.0, 65.0).unwrap();
        assert_eq!(bmi.value, 22.5);
        assert_eq!(bmi.category, BmiCategory::NormalWeight);
        assert_eq!(bmi.message(), "Your BMI is 22.5 (Normal weight)");
    }

    #[test]
    fn test_bmi_category_boundaries() {
        // 100 kg over 2 m -> exactly 25.0, which is Overweight (< 25 is Normal)
        let bmi = Bmi::compute(200.0, 100.0).unwrap();
        assert_eq!(bmi.value, 25.0);
        assert_eq!(bmi.category, BmiCategory::Overweight);

        let bmi = Bmi::compute(200.0, 73.0).unwrap();
        assert_eq!(bmi.value, 18.3);
        assert_eq!(bmi.category, BmiCategory::Underweight);

        let bmi = Bmi::compute(200.0, 120.0).unwrap();
        assert_eq!(bmi.category, BmiCategory::Obese);
    }

    #[test]
    fn test_bmi_rejects_missing_measurements() {
        assert!(Bmi::compute(0.0, 70.0).is_err());
        assert!(Bmi::compute(170.0, 0.0).is_err());
    }

    #[test]
    fn test_age_brackets() {
        assert_eq!(AgeBracket::from_age(17), AgeBracket::Minor);
        assert_eq!(AgeBracket::from_age(18), AgeBracket::Adult);
        assert_eq!(AgeBracket::from_age(64), AgeBracket::Adult);
        assert_eq!(AgeBracket::from_age(65), AgeBracket::Senior);
    }

    #[test]
    fn test_profile_bmi_requires_both_measurements() {
        let profile = UserProfile {
            height_cm: Some(170.0),
            ..UserProfile::default()
        };
        assert!(profile.bmi().is_none());

        let profile = UserProfile {
            height_cm: Some(170.0),
            weight_kg: Some(65.0),
            ..UserProfile::default()
        };
        assert_eq!(profile.bmi().unwrap().value, 22.5);
    }

    #[test]
    fn test_profile_validation_ranges() {
        let profile = UserProfile {
            height_cm: Some(1000.0),
            ..UserProfile::default()
        };
        assert!(profile.validate().is_err());

        let profile = UserProfile {
            height_cm: Some(170.0),
            weight_kg: Some(65.0),
            age: Some(30),
            gender: Some(Gender::Other),
        };
        assert!(profile.validate().is_ok());
    }
}
