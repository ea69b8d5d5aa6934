//! Diary operations
//!
//! Add/remove food and exercise entries for one (user, date) ledger. Food
//! writes merge only the `meals` field of the stored document and exercise
//! writes only the `exercises` field, so the two never clobber each other.

use serde::{Deserialize, Serialize};

use crate::budget::{calories_burned, evaluate_meal_carbs, CarbRecommendation, MealCarbCeilings};
use crate::catalog::{ExerciseTemplate, FoodTemplate, RecognizedFood};
use crate::models::{DiaryLedger, ExerciseEntry, FoodEntry, MacroTotals, MealBucket, MealSlot};
use crate::store::{Database, DiaryDocument, ProfileDocument};

use super::{parse_date, ServiceError, ServiceResult};

/// Manual food input (from search lists or free entry)
#[derive(Debug, Clone, Deserialize)]
pub struct FoodEntryInput {
    pub name: String,
    pub amount: String,
    pub calories: u32,
    pub carbs: u32,
    pub protein: u32,
    pub fat: u32,
}

/// One meal's view: items, totals, and its carb recommendation
#[derive(Debug, Serialize)]
pub struct MealView {
    pub slot: MealSlot,
    pub items: Vec<FoodEntry>,
    pub totals: MacroTotals,
    pub carb_ceiling: u32,
    pub recommendation: CarbRecommendation,
}

/// Response for get_diary
#[derive(Debug, Serialize)]
pub struct DiaryView {
    pub user_id: String,
    pub date: String,
    pub meals: Vec<MealView>,
    pub exercises: Vec<ExerciseEntry>,
    pub ceilings: MealCarbCeilings,
}

/// Response for the food mutations
#[derive(Debug, Serialize)]
pub struct MealMutationResponse {
    pub date: String,
    pub slot: MealSlot,
    /// Id of the affected entry
    pub entry_id: String,
    pub totals: MacroTotals,
    pub carb_ceiling: u32,
    pub recommendation: CarbRecommendation,
}

/// Response for add_exercise / remove_exercise
#[derive(Debug, Serialize)]
pub struct ExerciseMutationResponse {
    pub date: String,
    pub exercises: Vec<ExerciseEntry>,
    pub total_exercise_calories: u32,
}

/// Daily carb budget from the stored macro budget, if any
fn daily_carb_budget(db: &Database, user_id: &str) -> ServiceResult<Option<u32>> {
    let conn = db.get_conn()?;
    Ok(ProfileDocument::get(&conn, user_id)?.map(|doc| doc.macros.carb_grams))
}

/// Get the ledger for a date with per-meal ceilings and recommendation flags.
///
/// Ceilings are recomputed from the stored carb budget on every read.
pub fn get_diary(db: &Database, user_id: &str, date: &str) -> ServiceResult<DiaryView> {
    parse_date(date)?;

    let ceilings = MealCarbCeilings::from_daily(daily_carb_budget(db, user_id)?);
    let conn = db.get_conn()?;
    let ledger = DiaryDocument::load(&conn, user_id, date)?;

    let meals = MealSlot::ALL
        .iter()
        .map(|&slot| meal_view(ledger.meals.bucket(slot), slot, &ceilings))
        .collect();

    Ok(DiaryView {
        user_id: user_id.to_string(),
        date: date.to_string(),
        meals,
        exercises: ledger.exercises,
        ceilings,
    })
}

fn meal_view(bucket: &MealBucket, slot: MealSlot, ceilings: &MealCarbCeilings) -> MealView {
    let ceiling = ceilings.for_slot(slot);
    MealView {
        slot,
        items: bucket.items.clone(),
        totals: bucket.totals,
        carb_ceiling: ceiling,
        recommendation: evaluate_meal_carbs(bucket, ceiling),
    }
}

/// Add a manually entered food to a meal
pub fn add_food(
    db: &Database,
    user_id: &str,
    date: &str,
    slot: MealSlot,
    input: FoodEntryInput,
) -> ServiceResult<MealMutationResponse> {
    let entry = FoodEntry::new(
        input.name,
        input.amount,
        MacroTotals {
            calories: input.calories,
            carbs: input.carbs,
            protein: input.protein,
            fat: input.fat,
        },
    );
    append_food(db, user_id, date, slot, entry)
}

/// Add a catalog food, scaled to the given portion in grams
pub fn add_food_from_template(
    db: &Database,
    user_id: &str,
    date: &str,
    slot: MealSlot,
    template: &FoodTemplate,
    grams: f64,
) -> ServiceResult<MealMutationResponse> {
    append_food(db, user_id, date, slot, template.to_entry(grams))
}

/// Add a food recognized by the camera/barcode pipeline
pub fn add_recognized_food(
    db: &Database,
    user_id: &str,
    date: &str,
    slot: MealSlot,
    payload: RecognizedFood,
) -> ServiceResult<MealMutationResponse> {
    append_food(db, user_id, date, slot, payload.into_entry())
}

fn append_food(
    db: &Database,
    user_id: &str,
    date: &str,
    slot: MealSlot,
    entry: FoodEntry,
) -> ServiceResult<MealMutationResponse> {
    parse_date(date)?;

    let ceilings = MealCarbCeilings::from_daily(daily_carb_budget(db, user_id)?);
    let entry_id = entry.id.clone();

    let mut ledger = {
        let conn = db.get_conn()?;
        DiaryDocument::load(&conn, user_id, date)?
    };
    let bucket = ledger.meals.bucket_mut(slot);
    bucket.add_entry(entry);
    let totals = bucket.totals;

    db.with_conn_mut(|conn| DiaryDocument::merge_meals(conn, user_id, date, &ledger.meals))?;

    let ceiling = ceilings.for_slot(slot);
    let recommendation = evaluate_meal_carbs(ledger.meals.bucket(slot), ceiling);
    tracing::debug!(user_id, date, slot = slot.as_str(), %entry_id, "food entry added");

    Ok(MealMutationResponse {
        date: date.to_string(),
        slot,
        entry_id,
        totals,
        carb_ceiling: ceiling,
        recommendation,
    })
}

/// Remove a food entry by id.
///
/// An unknown id is reported as `EntryNotFound`; the stored document is not
/// rewritten in that case.
pub fn remove_food(
    db: &Database,
    user_id: &str,
    date: &str,
    slot: MealSlot,
    entry_id: &str,
) -> ServiceResult<MealMutationResponse> {
    parse_date(date)?;

    let ceilings = MealCarbCeilings::from_daily(daily_carb_budget(db, user_id)?);

    let mut ledger = {
        let conn = db.get_conn()?;
        DiaryDocument::load(&conn, user_id, date)?
    };
    let bucket = ledger.meals.bucket_mut(slot);
    let removed = bucket
        .remove_entry(entry_id)
        .ok_or_else(|| ServiceError::EntryNotFound(entry_id.to_string()))?;
    let totals = bucket.totals;

    db.with_conn_mut(|conn| DiaryDocument::merge_meals(conn, user_id, date, &ledger.meals))?;

    let ceiling = ceilings.for_slot(slot);
    let recommendation = evaluate_meal_carbs(ledger.meals.bucket(slot), ceiling);
    tracing::debug!(user_id, date, slot = slot.as_str(), entry_id = %removed.id, "food entry removed");

    Ok(MealMutationResponse {
        date: date.to_string(),
        slot,
        entry_id: removed.id,
        totals,
        carb_ceiling: ceiling,
        recommendation,
    })
}

/// Log an activity, deriving its calorie burn from the stored body weight.
///
/// Fails with `MissingWeightForExercise` when the user has no profile; a
/// silent zero would misrepresent energy expenditure.
pub fn add_exercise(
    db: &Database,
    user_id: &str,
    date: &str,
    template: &ExerciseTemplate,
    duration_minutes: f64,
) -> ServiceResult<ExerciseMutationResponse> {
    parse_date(date)?;

    let weight_kg = {
        let conn = db.get_conn()?;
        ProfileDocument::get(&conn, user_id)?
            .map(|doc| doc.profile.weight_kg)
            .filter(|w| *w > 0.0)
            .ok_or(ServiceError::MissingWeightForExercise)?
    };

    let entry = ExerciseEntry {
        name: template.name.clone(),
        duration_minutes,
        calories: calories_burned(template.met, weight_kg, duration_minutes),
    };

    let mut ledger = {
        let conn = db.get_conn()?;
        DiaryDocument::load(&conn, user_id, date)?
    };
    ledger.exercises.push(entry);

    db.with_conn_mut(|conn| {
        DiaryDocument::merge_exercises(conn, user_id, date, &ledger.exercises)
    })?;

    tracing::debug!(user_id, date, exercise = %template.name, "exercise logged");

    Ok(exercise_response(date, ledger))
}

/// Remove a logged activity by its position in the list
pub fn remove_exercise(
    db: &Database,
    user_id: &str,
    date: &str,
    index: usize,
) -> ServiceResult<ExerciseMutationResponse> {
    parse_date(date)?;

    let mut ledger = {
        let conn = db.get_conn()?;
        DiaryDocument::load(&conn, user_id, date)?
    };
    if index >= ledger.exercises.len() {
        return Err(ServiceError::EntryNotFound(format!("exercise #{index}")));
    }
    ledger.exercises.remove(index);

    db.with_conn_mut(|conn| {
        DiaryDocument::merge_exercises(conn, user_id, date, &ledger.exercises)
    })?;

    Ok(exercise_response(date, ledger))
}

fn exercise_response(date: &str, ledger: DiaryLedger) -> ExerciseMutationResponse {
    let total_exercise_calories = ledger.exercises.iter().map(|e| e.calories).sum();
    ExerciseMutationResponse {
        date: date.to_string(),
        exercises: ledger.exercises,
        total_exercise_calories,
    }
}
