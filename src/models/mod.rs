//! Data models
//!
//! Rust structs representing the engine's document entities.

mod budget;
mod diary;
mod exercise;
mod food_entry;
mod profile;
mod totals;

pub use budget::{BmiStatus, EnergyBudget, MacroBudget};
pub use diary::{DayTotals, DiaryLedger, MealBucket, MealSlot, Meals};
pub use exercise::ExerciseEntry;
pub use food_entry::FoodEntry;
pub use profile::{ActivityLevel, BiometricProfile, DiabetesClass, Goal, Sex};
pub use totals::MacroTotals;
