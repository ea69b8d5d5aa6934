//! Diary ledger model
//!
//! One ledger per (user, date): three meal buckets plus the day's exercises.
//! Each bucket carries cached totals that must always equal the sum over its
//! items. The add/remove operations below are the only mutation paths and
//! keep that invariant.

use serde::{Deserialize, Serialize};

use super::{ExerciseEntry, FoodEntry, MacroTotals};

/// Meal slot enum
///
/// An enumerated tag, not a localized label. Presentation decides what to
/// call "breakfast" in the user's locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "breakfast" => Some(MealSlot::Breakfast),
            "lunch" => Some(MealSlot::Lunch),
            "dinner" => Some(MealSlot::Dinner),
            _ => None,
        }
    }
}

/// One meal's items and cached totals
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealBucket {
    #[serde(default)]
    pub items: Vec<FoodEntry>,
    #[serde(flatten)]
    pub totals: MacroTotals,
}

impl MealBucket {
    /// Append an entry and fold its values into the cached totals
    pub fn add_entry(&mut self, entry: FoodEntry) {
        self.totals = self.totals.add(&entry.totals);
        self.items.push(entry);
    }

    /// Remove an entry by id, decrementing the cached totals.
    ///
    /// Each total is floored at zero; a clamp firing means the cached values
    /// had drifted from the items, which is an upstream consistency bug worth
    /// flagging. Once the last item is gone the totals are forced to exact
    /// zeros so no residue survives. An unknown id leaves the bucket
    /// untouched and returns `None`.
    pub fn remove_entry(&mut self, entry_id: &str) -> Option<FoodEntry> {
        let index = self.items.iter().position(|item| item.id == entry_id)?;
        let entry = self.items.remove(index);

        let (remaining, clamped) = self.totals.saturating_sub(&entry.totals);
        if clamped {
            tracing::warn!(
                entry_id = %entry.id,
                "meal totals were lower than the removed entry; clamped to zero \
                 (cached totals had drifted from items)"
            );
        }
        self.totals = remaining;

        if self.items.is_empty() {
            self.totals = MacroTotals::zero();
        }

        Some(entry)
    }

    /// Recompute the totals from scratch over the items
    pub fn recomputed_totals(&self) -> MacroTotals {
        self.items.iter().map(|item| item.totals).sum()
    }

    /// Total carbs consumed in this meal, for budget evaluation
    pub fn carbs_consumed(&self) -> u32 {
        self.totals.carbs
    }
}

/// The three meal buckets of one day
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meals {
    pub breakfast: MealBucket,
    pub lunch: MealBucket,
    pub dinner: MealBucket,
}

impl Meals {
    pub fn bucket(&self, slot: MealSlot) -> &MealBucket {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
        }
    }

    pub fn bucket_mut(&mut self, slot: MealSlot) -> &mut MealBucket {
        match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Dinner => &mut self.dinner,
        }
    }
}

/// The full diary for one (user, date)
///
/// A missing stored document is equivalent to the `Default` ledger: empty
/// buckets with zero totals and no exercises.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiaryLedger {
    #[serde(default)]
    pub meals: Meals,
    /// Insertion order is display order
    #[serde(default)]
    pub exercises: Vec<ExerciseEntry>,
}

/// Day totals produced by summarizing a ledger
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTotals {
    pub food_calories: u32,
    pub carbs: u32,
    pub protein: u32,
    pub fat: u32,
    pub exercise_calories: u32,
    /// food − exercise, reported as-is (may be negative)
    pub net_calories: i64,
}

impl DiaryLedger {
    /// Summarize the day: consumed totals, burned calories, and net
    pub fn day_totals(&self) -> DayTotals {
        let consumed: MacroTotals = MealSlot::ALL
            .iter()
            .map(|&slot| self.meals.bucket(slot).totals)
            .sum();
        let exercise_calories: u32 = self.exercises.iter().map(|e| e.calories).sum();

        DayTotals {
            food_calories: consumed.calories,
            carbs: consumed.carbs,
            protein: consumed.protein,
            fat: consumed.fat,
            exercise_calories,
            net_calories: i64::from(consumed.calories) - i64::from(exercise_calories),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, calories: u32, carbs: u32, protein: u32, fat: u32) -> FoodEntry {
        FoodEntry::new(name, "1 serving", MacroTotals { calories, carbs, protein, fat })
    }

    #[test]
    fn test_add_entry_updates_totals() {
        let mut bucket = MealBucket::default();
        bucket.add_entry(entry("Rice", 200, 45, 4, 0));
        bucket.add_entry(entry("Chicken", 165, 0, 31, 4));

        assert_eq!(bucket.items.len(), 2);
        assert_eq!(bucket.totals.calories, 365);
        assert_eq!(bucket.totals.carbs, 45);
        assert_eq!(bucket.totals.protein, 35);
        assert_eq!(bucket.totals.fat, 4);
        assert_eq!(bucket.totals, bucket.recomputed_totals());
    }

    #[test]
    fn test_remove_entry_updates_totals() {
        let mut bucket = MealBucket::default();
        let rice = entry("Rice", 200, 45, 4, 0);
        let rice_id = rice.id.clone();
        bucket.add_entry(rice);
        bucket.add_entry(entry("Chicken", 165, 0, 31, 4));

        let removed = bucket.remove_entry(&rice_id).unwrap();
        assert_eq!(removed.name, "Rice");
        assert_eq!(bucket.items.len(), 1);
        assert_eq!(bucket.totals.calories, 165);
        assert_eq!(bucket.totals, bucket.recomputed_totals());
    }

    #[test]
    fn test_remove_last_entry_resets_to_exact_zero() {
        // Scenario: one entry in, same entry out -> all four totals exactly 0
        let mut bucket = MealBucket::default();
        let toast = entry("Toast", 300, 40, 10, 5);
        let id = toast.id.clone();
        bucket.add_entry(toast);

        bucket.remove_entry(&id).unwrap();
        assert!(bucket.items.is_empty());
        assert_eq!(bucket.totals, MacroTotals::zero());
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut bucket = MealBucket::default();
        bucket.add_entry(entry("Rice", 200, 45, 4, 0));
        let before = bucket.clone();

        assert!(bucket.remove_entry("no-such-id").is_none());
        assert_eq!(bucket, before);
    }

    #[test]
    fn test_remove_clamps_drifted_totals() {
        // Simulate a document whose cached totals drifted below its items
        let mut bucket = MealBucket::default();
        let big = entry("Big meal", 800, 90, 30, 25);
        let id = big.id.clone();
        bucket.items.push(big);
        bucket.totals = MacroTotals { calories: 100, carbs: 10, protein: 5, fat: 2 };

        bucket.remove_entry(&id).unwrap();
        assert_eq!(bucket.totals, MacroTotals::zero());
    }

    #[test]
    fn test_totals_invariant_over_operation_sequences() {
        let mut bucket = MealBucket::default();
        let mut ids = Vec::new();
        for i in 0..10u32 {
            let e = entry(&format!("Item {i}"), 100 + i, 10 + i, i, i / 2);
            ids.push(e.id.clone());
            bucket.add_entry(e);
            assert_eq!(bucket.totals, bucket.recomputed_totals());
        }
        // Remove in a scrambled order
        for id in ids.iter().rev().step_by(2).chain(ids.iter().step_by(2)) {
            bucket.remove_entry(id).unwrap();
            assert_eq!(bucket.totals, bucket.recomputed_totals());
        }
        assert!(bucket.items.is_empty());
        assert_eq!(bucket.totals, MacroTotals::zero());
    }

    #[test]
    fn test_empty_ledger_summarizes_to_zero() {
        let ledger = DiaryLedger::default();
        assert_eq!(ledger.day_totals(), DayTotals::default());
    }

    #[test]
    fn test_day_totals_and_negative_net() {
        let mut ledger = DiaryLedger::default();
        ledger.meals.bucket_mut(MealSlot::Breakfast).add_entry(entry("Oats", 150, 27, 5, 3));
        ledger.meals.bucket_mut(MealSlot::Lunch).add_entry(entry("Salad", 90, 12, 3, 4));
        ledger.exercises.push(ExerciseEntry {
            name: "Running".into(),
            duration_minutes: 60.0,
            calories: 441,
        });

        let totals = ledger.day_totals();
        assert_eq!(totals.food_calories, 240);
        assert_eq!(totals.carbs, 39);
        assert_eq!(totals.exercise_calories, 441);
        assert_eq!(totals.net_calories, -201);
    }

    #[test]
    fn test_ledger_document_shape() {
        // Missing fields deserialize as an empty ledger, matching the
        // missing-document-equals-empty-ledger store contract
        let ledger: DiaryLedger = serde_json::from_str("{}").unwrap();
        assert_eq!(ledger, DiaryLedger::default());

        let ledger: DiaryLedger =
            serde_json::from_str(r#"{"exercises":[{"name":"Walking","duration_minutes":20.0,"calories":70}]}"#)
                .unwrap();
        assert_eq!(ledger.exercises.len(), 1);
        assert_eq!(ledger.meals, Meals::default());
    }
}
