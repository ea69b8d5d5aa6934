//! Budget calculators
//!
//! Pure functions deriving energy, macro, and per-meal budgets from a
//! biometric snapshot, plus the MET-based exercise calorie formula. No I/O
//! and no side effects; the service layer wires these to the document store.

mod energy;
mod exercise;
mod macros;
mod meals;

pub use energy::calculate_energy_budget;
pub use exercise::calories_burned;
pub use macros::calculate_macro_budget;
pub use meals::{evaluate_meal_carbs, CarbRecommendation, MealCarbCeilings};

use thiserror::Error;

/// Calculator error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BudgetError {
    /// Weight, height, or age is missing or non-positive; producing a budget
    /// would mean NaN or negative energy, so the result is refused instead.
    #[error("profile has non-positive weight, height, or age")]
    InvalidProfile,
}

/// Result type for budget calculations
pub type BudgetResult<T> = Result<T, BudgetError>;
