//! Catalog templates and recognition adaptation
//!
//! The food and exercise catalogs live in external services; they hand the
//! engine templates (per-100g nutrition, MET values) that are turned into
//! ledger entries here. The camera/barcode recognition pipeline is equally
//! external; its payload is adapted into a `FoodEntry` verbatim, with no
//! assumption about how it was produced.

use serde::{Deserialize, Serialize};

use crate::models::{FoodEntry, MacroTotals};

/// A catalog food with nutrition per 100 g
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodTemplate {
    pub name: String,
    pub per_100g: MacroTotals,
}

impl FoodTemplate {
    /// Build a ledger entry for a portion of the given gram weight.
    ///
    /// Values scale linearly and round to whole units, matching how the
    /// source lists report them.
    pub fn to_entry(&self, grams: f64) -> FoodEntry {
        let factor = grams / 100.0;
        let scale = |per_100: u32| (f64::from(per_100) * factor).round() as u32;

        FoodEntry::new(
            self.name.clone(),
            format!("{grams:.0} g"),
            MacroTotals {
                calories: scale(self.per_100g.calories),
                carbs: scale(self.per_100g.carbs),
                protein: scale(self.per_100g.protein),
                fat: scale(self.per_100g.fat),
            },
        )
    }
}

/// A catalog activity with its MET intensity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseTemplate {
    pub name: String,
    pub met: f64,
}

/// Candidate food produced by the recognition pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognizedFood {
    pub name: String,
    /// Display amount as reported by the recognizer, e.g. "1 portion"
    #[serde(default)]
    pub amount: Option<String>,
    pub calories: u32,
    pub carbs: u32,
    pub protein: u32,
    pub fat: u32,
}

impl RecognizedFood {
    /// Adapt the recognition payload into a ledger entry
    pub fn into_entry(self) -> FoodEntry {
        FoodEntry::new(
            self.name,
            self.amount.unwrap_or_else(|| "1 portion".to_string()),
            MacroTotals {
                calories: self.calories,
                carbs: self.carbs,
                protein: self.protein,
                fat: self.fat,
            },
        )
    }
}
