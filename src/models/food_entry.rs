//! Food entry model
//!
//! A logged food item inside one meal bucket. Entries come from catalog
//! search, the recognition pipeline, or manual input; by the time they reach
//! the ledger their nutritional fields are already integers.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::MacroTotals;

/// A food item logged against a meal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodEntry {
    /// Unique within the containing bucket
    pub id: String,
    pub name: String,
    /// Display amount, e.g. "150 g" or "1 slice"
    pub amount: String,
    #[serde(flatten)]
    pub totals: MacroTotals,
}

impl FoodEntry {
    /// Build an entry with a fresh id
    pub fn new(name: impl Into<String>, amount: impl Into<String>, totals: MacroTotals) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            amount: amount.into(),
            totals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_assigns_distinct_ids() {
        let totals = MacroTotals { calories: 300, carbs: 40, protein: 10, fat: 5 };
        let a = FoodEntry::new("Toast", "1 slice", totals);
        let b = FoodEntry::new("Toast", "1 slice", totals);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_totals_flatten_in_document() {
        let entry = FoodEntry::new(
            "Apple",
            "100 g",
            MacroTotals { calories: 52, carbs: 14, protein: 0, fat: 0 },
        );
        let doc = serde_json::to_value(&entry).unwrap();
        assert_eq!(doc["calories"], 52);
        assert_eq!(doc["carbs"], 14);
        assert!(doc.get("totals").is_none());
    }
}
