//! Exercise entry model
//!
//! A logged activity with its derived calorie burn. Calories are computed
//! from the MET value and the user's body weight at logging time (see
//! `budget::exercise`), then cached on the entry.

use serde::{Deserialize, Serialize};

/// An exercise session logged against a day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    pub name: String,
    pub duration_minutes: f64,
    /// Derived at logging time, kcal
    pub calories: u32,
}
