//! Energy budget calculation
//!
//! BMR via the revised Harris-Benedict equations, scaled by activity level
//! and a diabetes adjustment to give TDEE, plus BMI classification.

use crate::models::{
    ActivityLevel, BiometricProfile, BmiStatus, DiabetesClass, EnergyBudget, Sex,
};

use super::{BudgetError, BudgetResult};

/// Derive the daily energy budget from a biometric snapshot.
///
/// Deterministic: the same snapshot always yields the same budget. Refuses
/// snapshots with non-positive weight, height, or age.
pub fn calculate_energy_budget(profile: &BiometricProfile) -> BudgetResult<EnergyBudget> {
    if !profile.is_calculable() {
        return Err(BudgetError::InvalidProfile);
    }

    let bmr = basal_metabolic_rate(profile);
    let tdee = bmr * activity_multiplier(profile.activity) * diabetes_adjustment(profile.diabetes);

    let bmi = round_one_decimal(profile.weight_kg / (profile.height_cm / 100.0).powi(2));

    Ok(EnergyBudget {
        tdee: tdee.round() as u32,
        bmi,
        bmi_status: classify_bmi(bmi),
    })
}

/// Revised Harris-Benedict BMR (kcal/day).
///
/// For `Sex::Other` the male and female equations are averaged
/// coefficient-wise. That is an averaging policy carried over from the
/// stored budgets this crate must stay compatible with, not a third
/// physiological formula.
fn basal_metabolic_rate(profile: &BiometricProfile) -> f64 {
    let w = profile.weight_kg;
    let h = profile.height_cm;
    let a = f64::from(profile.age_years);

    match profile.sex {
        Sex::Male => 88.362 + 13.397 * w + 4.799 * h - 5.677 * a,
        Sex::Female => 447.593 + 9.247 * w + 3.098 * h - 4.330 * a,
        Sex::Other => 267.9775 + 11.322 * w + 3.9485 * h - 5.0035 * a,
    }
}

fn activity_multiplier(activity: ActivityLevel) -> f64 {
    match activity {
        ActivityLevel::Sedentary => 1.20,
        ActivityLevel::LightlyActive => 1.375,
        ActivityLevel::ModeratelyActive => 1.55,
        ActivityLevel::VeryActive => 1.725,
    }
}

/// Applied after activity scaling: diabetic users get a reduced target.
fn diabetes_adjustment(diabetes: DiabetesClass) -> f64 {
    match diabetes {
        DiabetesClass::Type2 => 0.90,
        DiabetesClass::PreDiabetes => 0.95,
        DiabetesClass::NoDiabetes | DiabetesClass::Unspecified => 1.00,
    }
}

/// Classify a BMI that has already been rounded to one decimal.
///
/// Cut points 18.5 / 24.9 / 29.9, matching the stored budgets.
fn classify_bmi(bmi: f64) -> BmiStatus {
    if bmi < 18.5 {
        BmiStatus::Underweight
    } else if bmi < 24.9 {
        BmiStatus::Normal
    } else if bmi < 29.9 {
        BmiStatus::Overweight
    } else {
        BmiStatus::Obese
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
