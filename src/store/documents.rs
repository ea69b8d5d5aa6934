//! Profile and diary documents
//!
//! Read/write/merge access to the two document tables. Diary writes use
//! merge-on-existing-document semantics: only the top-level keys present in
//! the partial document are replaced, so a meals-only write never clobbers
//! the exercises list and vice versa.

use rusqlite::{params, Connection};
use serde_json::Value;

use crate::models::{
    BiometricProfile, DiaryLedger, EnergyBudget, ExerciseEntry, MacroBudget, Meals,
};

use super::connection::DbResult;

/// The per-user profile document: the biometric snapshot together with the
/// budgets derived from it.
///
/// The three parts are always written as one document so a budget can never
/// outlive the profile version that produced it.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ProfileDocument {
    pub profile: BiometricProfile,
    pub energy: EnergyBudget,
    pub macros: MacroBudget,
}

impl ProfileDocument {
    /// Get a user's profile document
    pub fn get(conn: &Connection, user_id: &str) -> DbResult<Option<Self>> {
        let mut stmt = conn.prepare("SELECT doc FROM profile_documents WHERE user_id = ?1")?;

        let result = stmt.query_row([user_id], |row| row.get::<_, String>(0));
        match result {
            Ok(doc) => Ok(Some(serde_json::from_str(&doc)?)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Set or replace a user's profile document (idempotent overwrite)
    pub fn set(conn: &Connection, user_id: &str, doc: &Self) -> DbResult<()> {
        let payload = serde_json::to_string(doc)?;
        conn.execute(
            r#"
            INSERT INTO profile_documents (user_id, doc)
            VALUES (?1, ?2)
            ON CONFLICT(user_id) DO UPDATE SET
                doc = excluded.doc,
                updated_at = datetime('now')
            "#,
            params![user_id, payload],
        )?;
        Ok(())
    }
}

/// Diary document access for one (user, date) key
pub struct DiaryDocument;

impl DiaryDocument {
    /// Load the ledger for a date. A missing document is an empty ledger.
    pub fn load(conn: &Connection, user_id: &str, date: &str) -> DbResult<DiaryLedger> {
        let mut stmt =
            conn.prepare("SELECT doc FROM diary_documents WHERE user_id = ?1 AND date = ?2")?;

        let result = stmt.query_row(params![user_id, date], |row| row.get::<_, String>(0));
        match result {
            Ok(doc) => Ok(serde_json::from_str(&doc)?),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(DiaryLedger::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Merge only the meal buckets into the stored document
    pub fn merge_meals(
        conn: &mut Connection,
        user_id: &str,
        date: &str,
        meals: &Meals,
    ) -> DbResult<()> {
        let partial = serde_json::json!({ "meals": meals });
        Self::merge(conn, user_id, date, partial)
    }

    /// Merge only the exercise list into the stored document
    pub fn merge_exercises(
        conn: &mut Connection,
        user_id: &str,
        date: &str,
        exercises: &[ExerciseEntry],
    ) -> DbResult<()> {
        let partial = serde_json::json!({ "exercises": exercises });
        Self::merge(conn, user_id, date, partial)
    }

    /// Read-modify-write a partial document under a transaction.
    ///
    /// Top-level keys of `partial` replace their counterparts in the stored
    /// document; every other key is preserved.
    fn merge(conn: &mut Connection, user_id: &str, date: &str, partial: Value) -> DbResult<()> {
        let tx = conn.transaction()?;

        let existing: Option<String> = {
            let mut stmt =
                tx.prepare("SELECT doc FROM diary_documents WHERE user_id = ?1 AND date = ?2")?;
            match stmt.query_row(params![user_id, date], |row| row.get(0)) {
                Ok(doc) => Some(doc),
                Err(rusqlite::Error::QueryReturnedNoRows) => None,
                Err(e) => return Err(e.into()),
            }
        };

        let mut doc: Value = match existing {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Value::Object(serde_json::Map::new()),
        };

        if let (Value::Object(target), Value::Object(incoming)) = (&mut doc, partial) {
            for (key, value) in incoming {
                target.insert(key, value);
            }
        }

        let payload = serde_json::to_string(&doc)?;
        tx.execute(
            r#"
            INSERT INTO diary_documents (user_id, date, doc)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(user_id, date) DO UPDATE SET
                doc = excluded.doc,
                updated_at = datetime('now')
            "#,
            params![user_id, date, payload],
        )?;

        tx.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ActivityLevel, DiabetesClass, FoodEntry, Goal, MacroTotals, MealSlot, Sex,
    };
    use crate::store::Database;

    fn test_profile_doc() -> ProfileDocument {
        let profile = BiometricProfile {
            weight_kg: 70.0,
            height_cm: 170.0,
            age_years: 30,
            sex: Sex::Male,
            activity: ActivityLevel::ModeratelyActive,
            diabetes: DiabetesClass::Type2,
            goal: Goal::MaintainWeight,
        };
        let energy = crate::budget::calculate_energy_budget(&profile).unwrap();
        let macros = crate::budget::calculate_macro_budget(energy.tdee, profile.diabetes, profile.goal);
        ProfileDocument { profile, energy, macros }
    }

    #[test]
    fn test_profile_roundtrip_and_overwrite() {
        let db = Database::in_memory().unwrap();
        let conn = db.get_conn().unwrap();

        assert!(ProfileDocument::get(&conn, "alice").unwrap().is_none());

        let doc = test_profile_doc();
        ProfileDocument::set(&conn, "alice", &doc).unwrap();
        let stored = ProfileDocument::get(&conn, "alice").unwrap().unwrap();
        assert_eq!(stored.energy, doc.energy);
        assert_eq!(stored.macros, doc.macros);

        // Overwrite is idempotent
        ProfileDocument::set(&conn, "alice", &doc).unwrap();
        let stored = ProfileDocument::get(&conn, "alice").unwrap().unwrap();
        assert_eq!(stored.macros, doc.macros);
    }

    #[test]
    fn test_missing_diary_is_empty_ledger() {
        let db = Database::in_memory().unwrap();
        let conn = db.get_conn().unwrap();

        let ledger = DiaryDocument::load(&conn, "alice", "2025-01-09").unwrap();
        assert_eq!(ledger, DiaryLedger::default());
    }

    #[test]
    fn test_meal_merge_preserves_exercises() {
        let db = Database::in_memory().unwrap();

        // Write exercises first
        let exercises = vec![ExerciseEntry {
            name: "Running".into(),
            duration_minutes: 30.0,
            calories: 221,
        }];
        db.with_conn_mut(|conn| {
            DiaryDocument::merge_exercises(conn, "alice", "2025-01-09", &exercises)
        })
        .unwrap();

        // Then write meals only
        let mut meals = Meals::default();
        meals.bucket_mut(MealSlot::Lunch).add_entry(FoodEntry::new(
            "Rice",
            "150 g",
            MacroTotals { calories: 195, carbs: 42, protein: 5, fat: 0 },
        ));
        db.with_conn_mut(|conn| DiaryDocument::merge_meals(conn, "alice", "2025-01-09", &meals))
            .unwrap();

        let conn = db.get_conn().unwrap();
        let ledger = DiaryDocument::load(&conn, "alice", "2025-01-09").unwrap();
        assert_eq!(ledger.exercises, exercises);
        assert_eq!(ledger.meals.lunch.items.len(), 1);
        assert_eq!(ledger.meals.lunch.totals.carbs, 42);
    }

    #[test]
    fn test_exercise_merge_preserves_meals() {
        let db = Database::in_memory().unwrap();

        let mut meals = Meals::default();
        meals.bucket_mut(MealSlot::Breakfast).add_entry(FoodEntry::new(
            "Oats",
            "40 g",
            MacroTotals { calories: 150, carbs: 27, protein: 5, fat: 3 },
        ));
        db.with_conn_mut(|conn| DiaryDocument::merge_meals(conn, "alice", "2025-01-09", &meals))
            .unwrap();

        let exercises = vec![ExerciseEntry {
            name: "Walking".into(),
            duration_minutes: 20.0,
            calories: 70,
        }];
        db.with_conn_mut(|conn| {
            DiaryDocument::merge_exercises(conn, "alice", "2025-01-09", &exercises)
        })
        .unwrap();

        let conn = db.get_conn().unwrap();
        let ledger = DiaryDocument::load(&conn, "alice", "2025-01-09").unwrap();
        assert_eq!(ledger.meals.breakfast.totals.calories, 150);
        assert_eq!(ledger.exercises.len(), 1);
    }

    #[test]
    fn test_diaries_are_scoped_by_user_and_date() {
        let db = Database::in_memory().unwrap();

        let exercises = vec![ExerciseEntry {
            name: "Cycling".into(),
            duration_minutes: 45.0,
            calories: 300,
        }];
        db.with_conn_mut(|conn| {
            DiaryDocument::merge_exercises(conn, "alice", "2025-01-09", &exercises)
        })
        .unwrap();

        let conn = db.get_conn().unwrap();
        assert!(DiaryDocument::load(&conn, "bob", "2025-01-09").unwrap().exercises.is_empty());
        assert!(DiaryDocument::load(&conn, "alice", "2025-01-10").unwrap().exercises.is_empty());
    }
}
