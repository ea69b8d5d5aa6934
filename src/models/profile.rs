//! Biometric profile model
//!
//! A profile is a complete snapshot of the user's biometrics. It is replaced
//! wholesale on every edit; the budget calculators always read a fully-formed
//! snapshot, never a partially updated one.

use serde::{Deserialize, Serialize};

/// Biological sex as reported at signup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
    Other,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
            Sex::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "male" => Sex::Male,
            "female" => Sex::Female,
            _ => Sex::Other,
        }
    }
}

/// Self-reported activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
}

impl ActivityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightly_active",
            ActivityLevel::ModeratelyActive => "moderately_active",
            ActivityLevel::VeryActive => "very_active",
        }
    }

    /// Unrecognized levels fall back to sedentary, the most conservative
    /// energy multiplier.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "lightly_active" => ActivityLevel::LightlyActive,
            "moderately_active" => ActivityLevel::ModeratelyActive,
            "very_active" => ActivityLevel::VeryActive,
            _ => ActivityLevel::Sedentary,
        }
    }
}

/// Diabetes classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiabetesClass {
    Type2,
    PreDiabetes,
    NoDiabetes,
    Unspecified,
}

impl DiabetesClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiabetesClass::Type2 => "type2",
            DiabetesClass::PreDiabetes => "pre_diabetes",
            DiabetesClass::NoDiabetes => "no_diabetes",
            DiabetesClass::Unspecified => "unspecified",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "type2" => DiabetesClass::Type2,
            "pre_diabetes" => DiabetesClass::PreDiabetes,
            "no_diabetes" => DiabetesClass::NoDiabetes,
            _ => DiabetesClass::Unspecified,
        }
    }
}

/// Weight goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    LoseWeight,
    MaintainWeight,
    GainWeight,
}

impl Goal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::LoseWeight => "lose_weight",
            Goal::MaintainWeight => "maintain_weight",
            Goal::GainWeight => "gain_weight",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "lose_weight" => Goal::LoseWeight,
            "gain_weight" => Goal::GainWeight,
            _ => Goal::MaintainWeight,
        }
    }
}

/// A complete biometric snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiometricProfile {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: u32,
    pub sex: Sex,
    pub activity: ActivityLevel,
    pub diabetes: DiabetesClass,
    pub goal: Goal,
}

impl BiometricProfile {
    /// Whether the snapshot can feed the energy calculator.
    ///
    /// Non-positive weight, height, or age would drive the BMR formulas into
    /// nonsense (negative energy, division by zero in BMI), so budgets are
    /// refused rather than computed.
    pub fn is_calculable(&self) -> bool {
        self.weight_kg > 0.0 && self.height_cm > 0.0 && self.age_years > 0
    }
}
