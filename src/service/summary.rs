//! Summary operations
//!
//! Day and period roll-ups over the diary ledgers, with the stored budgets
//! attached for comparison.

use chrono::Duration;
use serde::Serialize;

use crate::models::{DayTotals, EnergyBudget, MacroBudget};
use crate::store::{Database, DiaryDocument, ProfileDocument};

use super::{parse_date, ServiceResult};

/// Response for day_summary
#[derive(Debug, Serialize)]
pub struct DaySummaryResponse {
    pub user_id: String,
    pub date: String,
    pub totals: DayTotals,
    pub energy_budget: Option<EnergyBudget>,
    pub macro_budget: Option<MacroBudget>,
}

/// One day inside a period summary
#[derive(Debug, Serialize)]
pub struct PeriodDay {
    pub date: String,
    pub totals: DayTotals,
}

/// Response for period_summary
#[derive(Debug, Serialize)]
pub struct PeriodSummaryResponse {
    pub user_id: String,
    pub start_date: String,
    pub end_date: String,
    pub days: Vec<PeriodDay>,
    pub total_food_calories: u64,
    pub total_exercise_calories: u64,
    pub net_calories: i64,
}

/// Summarize one day's consumption against the stored budgets
pub fn day_summary(db: &Database, user_id: &str, date: &str) -> ServiceResult<DaySummaryResponse> {
    parse_date(date)?;

    let conn = db.get_conn()?;
    let ledger = DiaryDocument::load(&conn, user_id, date)?;
    let profile_doc = ProfileDocument::get(&conn, user_id)?;

    Ok(DaySummaryResponse {
        user_id: user_id.to_string(),
        date: date.to_string(),
        totals: ledger.day_totals(),
        energy_budget: profile_doc.as_ref().map(|doc| doc.energy),
        macro_budget: profile_doc.map(|doc| doc.macros),
    })
}

/// Summarize an inclusive date range, one entry per day plus period totals
pub fn period_summary(
    db: &Database,
    user_id: &str,
    start_date: &str,
    end_date: &str,
) -> ServiceResult<PeriodSummaryResponse> {
    let start = parse_date(start_date)?;
    let end = parse_date(end_date)?;

    let conn = db.get_conn()?;
    let mut days = Vec::new();
    let mut cursor = start;
    while cursor <= end {
        let date = cursor.format("%Y-%m-%d").to_string();
        let totals = DiaryDocument::load(&conn, user_id, &date)?.day_totals();
        days.push(PeriodDay { date, totals });
        cursor += Duration::days(1);
    }

    let total_food_calories: u64 = days.iter().map(|d| u64::from(d.totals.food_calories)).sum();
    let total_exercise_calories: u64 =
        days.iter().map(|d| u64::from(d.totals.exercise_calories)).sum();

    Ok(PeriodSummaryResponse {
        user_id: user_id.to_string(),
        start_date: start_date.to_string(),
        end_date: end_date.to_string(),
        days,
        total_food_calories,
        total_exercise_calories,
        net_calories: total_food_calories as i64 - total_exercise_calories as i64,
    })
}
