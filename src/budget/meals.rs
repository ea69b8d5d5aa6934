//! Per-meal carb allocation
//!
//! Splits the daily carb budget across the three meal slots and evaluates a
//! meal's consumption against its ceiling. Ceilings are recomputed on every
//! read and never persisted per meal.

use serde::{Deserialize, Serialize};

use crate::models::{MealBucket, MealSlot};

/// Fallback daily carb budget (grams) when no macro budget is stored
const DEFAULT_DAILY_CARB_GRAMS: u32 = 200;

const LUNCH_SHARE: f64 = 0.40;
const BREAKFAST_DINNER_SHARE: f64 = 0.30;

/// Carb ceilings for one day's meals, in grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealCarbCeilings {
    pub breakfast: u32,
    pub lunch: u32,
    pub dinner: u32,
}

impl MealCarbCeilings {
    /// Allocate a daily carb budget across the meal slots.
    ///
    /// Lunch gets 40%, breakfast and dinner 30% each. `None` falls back to
    /// the 200 g default used before a macro budget exists.
    pub fn from_daily(daily_carb_grams: Option<u32>) -> Self {
        let daily = f64::from(daily_carb_grams.unwrap_or(DEFAULT_DAILY_CARB_GRAMS));
        Self {
            breakfast: (daily * BREAKFAST_DINNER_SHARE).round() as u32,
            lunch: (daily * LUNCH_SHARE).round() as u32,
            dinner: (daily * BREAKFAST_DINNER_SHARE).round() as u32,
        }
    }

    pub fn for_slot(&self, slot: MealSlot) -> u32 {
        match slot {
            MealSlot::Breakfast => self.breakfast,
            MealSlot::Lunch => self.lunch,
            MealSlot::Dinner => self.dinner,
        }
    }
}

/// Whether a meal sits within its carb recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarbRecommendation {
    Within,
    Over,
}

/// Compare a meal's consumed carbs against its ceiling.
///
/// Strictly greater-than: consuming exactly the ceiling is still compliant.
pub fn evaluate_meal_carbs(bucket: &MealBucket, ceiling: u32) -> CarbRecommendation {
    if bucket.carbs_consumed() > ceiling {
        CarbRecommendation::Over
    } else {
        CarbRecommendation::Within
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FoodEntry, MacroTotals};

    #[test]
    fn test_allocation_shares() {
        // Daily 234 g -> breakfast/dinner round(70.2) = 70, lunch round(93.6) = 94
        let ceilings = MealCarbCeilings::from_daily(Some(234));
        assert_eq!(ceilings.breakfast, 70);
        assert_eq!(ceilings.lunch, 94);
        assert_eq!(ceilings.dinner, 70);
    }

    #[test]
    fn test_breakfast_always_equals_dinner() {
        for daily in [0, 1, 150, 200, 234, 333, 500] {
            let ceilings = MealCarbCeilings::from_daily(Some(daily));
            assert_eq!(ceilings.breakfast, ceilings.dinner);
            assert_eq!(ceilings.lunch, (f64::from(daily) * 0.4).round() as u32);
            assert_eq!(ceilings.breakfast, (f64::from(daily) * 0.3).round() as u32);
        }
    }

    #[test]
    fn test_default_daily_budget() {
        let ceilings = MealCarbCeilings::from_daily(None);
        assert_eq!(ceilings, MealCarbCeilings { breakfast: 60, lunch: 80, dinner: 60 });
    }

    fn bucket_with_carbs(carbs: u32) -> MealBucket {
        let mut bucket = MealBucket::default();
        bucket.add_entry(FoodEntry::new(
            "Pasta",
            "1 plate",
            MacroTotals { calories: carbs * 4, carbs, protein: 0, fat: 0 },
        ));
        bucket
    }

    #[test]
    fn test_evaluation_is_strictly_greater_than() {
        assert_eq!(evaluate_meal_carbs(&bucket_with_carbs(69), 70), CarbRecommendation::Within);
        assert_eq!(evaluate_meal_carbs(&bucket_with_carbs(70), 70), CarbRecommendation::Within);
        assert_eq!(evaluate_meal_carbs(&bucket_with_carbs(71), 70), CarbRecommendation::Over);
    }
}
