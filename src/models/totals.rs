//! Shared macro-total data structure
//!
//! Used across food entries, meal buckets, and day summaries.

use serde::{Deserialize, Serialize};

/// The four running totals tracked per meal and per day
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTotals {
    #[serde(default)]
    pub calories: u32,
    #[serde(default)]
    pub carbs: u32, // grams
    #[serde(default)]
    pub protein: u32, // grams
    #[serde(default)]
    pub fat: u32, // grams
}

impl MacroTotals {
    /// Create a new MacroTotals with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// Add another set of totals to this one
    pub fn add(&self, other: &MacroTotals) -> Self {
        Self {
            calories: self.calories + other.calories,
            carbs: self.carbs + other.carbs,
            protein: self.protein + other.protein,
            fat: self.fat + other.fat,
        }
    }

    /// Subtract another set of totals, clamping each field at zero.
    ///
    /// Returns the result and whether any field actually hit the clamp,
    /// which indicates the stored aggregates had drifted from their items.
    pub fn saturating_sub(&self, other: &MacroTotals) -> (Self, bool) {
        let clamped = other.calories > self.calories
            || other.carbs > self.carbs
            || other.protein > self.protein
            || other.fat > self.fat;
        let result = Self {
            calories: self.calories.saturating_sub(other.calories),
            carbs: self.carbs.saturating_sub(other.carbs),
            protein: self.protein.saturating_sub(other.protein),
            fat: self.fat.saturating_sub(other.fat),
        };
        (result, clamped)
    }
}

impl std::ops::Add for MacroTotals {
    type Output = MacroTotals;

    fn add(self, other: MacroTotals) -> MacroTotals {
        MacroTotals::add(&self, &other)
    }
}

impl std::iter::Sum for MacroTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(MacroTotals::zero(), |acc, t| acc + t)
    }
}
