//! Derived budget models
//!
//! The energy and macro budgets are computed from one profile snapshot and
//! persisted alongside it, never independently of the profile version that
//! produced them.

use serde::{Deserialize, Serialize};

/// BMI weight-status classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BmiStatus {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BmiStatus::Underweight => "underweight",
            BmiStatus::Normal => "normal",
            BmiStatus::Overweight => "overweight",
            BmiStatus::Obese => "obese",
        }
    }
}

/// Daily energy budget derived from a biometric snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyBudget {
    /// Total daily energy expenditure, kcal/day
    pub tdee: u32,
    /// Body mass index, rounded to one decimal
    pub bmi: f64,
    pub bmi_status: BmiStatus,
}

/// Daily macronutrient budget in grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroBudget {
    pub carb_grams: u32,
    pub protein_grams: u32,
    pub fat_grams: u32,
}
