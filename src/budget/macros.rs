//! Macro budget calculation
//!
//! Splits a TDEE into daily carb/protein/fat gram targets. The percentage
//! split is a pure lookup on (diabetes class, goal); only the gram conversion
//! depends on the TDEE.

use crate::models::{DiabetesClass, Goal, MacroBudget};

/// Calorie density: 4 kcal per gram of carbohydrate or protein, 9 per gram of fat
const KCAL_PER_GRAM_CARB: f64 = 4.0;
const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Derive the daily macro budget from a TDEE.
pub fn calculate_macro_budget(tdee: u32, diabetes: DiabetesClass, goal: Goal) -> MacroBudget {
    let (carb_pct, protein_pct, fat_pct) = macro_split(diabetes, goal);

    let tdee = f64::from(tdee);
    MacroBudget {
        carb_grams: (tdee * carb_pct / KCAL_PER_GRAM_CARB).round() as u32,
        protein_grams: (tdee * protein_pct / KCAL_PER_GRAM_PROTEIN).round() as u32,
        fat_grams: (tdee * fat_pct / KCAL_PER_GRAM_FAT).round() as u32,
    }
}

/// Percentage split (carb, protein, fat) for a diabetes class and goal.
///
/// The goal deltas are applied on top of the base split without
/// renormalizing, so the adjusted percentages may not sum to exactly 1.0.
/// Stored budgets were produced this way; renormalizing would shift every
/// downstream gram total.
fn macro_split(diabetes: DiabetesClass, goal: Goal) -> (f64, f64, f64) {
    let (mut carb, mut protein, mut fat) = match diabetes {
        DiabetesClass::Type2 => (0.40, 0.30, 0.30),
        DiabetesClass::PreDiabetes => (0.45, 0.25, 0.30),
        DiabetesClass::NoDiabetes => (0.50, 0.20, 0.30),
        DiabetesClass::Unspecified => (0.45, 0.25, 0.30),
    };

    match goal {
        Goal::LoseWeight => {
            carb -= 0.05;
            protein += 0.05;
        }
        Goal::GainWeight => {
            carb += 0.05;
            protein += 0.05;
            fat -= 0.10;
        }
        Goal::MaintainWeight => {}
    }

    (carb, protein, fat)
}
