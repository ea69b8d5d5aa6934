//! Profile operations
//!
//! Saving a profile recomputes both budgets from the new snapshot and
//! persists all three together, so stored budgets always match the profile
//! version that produced them.

use serde::Serialize;

use crate::budget::{calculate_energy_budget, calculate_macro_budget};
use crate::models::{BiometricProfile, EnergyBudget, MacroBudget};
use crate::store::{Database, ProfileDocument};

use super::{ServiceError, ServiceResult};

/// Response for save_profile / get_profile
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user_id: String,
    pub profile: BiometricProfile,
    pub energy: EnergyBudget,
    pub macros: MacroBudget,
}

/// Save a biometric snapshot and the budgets derived from it.
///
/// Refuses snapshots the energy calculator cannot handle; nothing is
/// persisted in that case.
pub fn save_profile(
    db: &Database,
    user_id: &str,
    profile: &BiometricProfile,
) -> ServiceResult<ProfileResponse> {
    let energy = calculate_energy_budget(profile)?;
    let macros = calculate_macro_budget(energy.tdee, profile.diabetes, profile.goal);

    let doc = ProfileDocument { profile: profile.clone(), energy, macros };
    let conn = db.get_conn()?;
    ProfileDocument::set(&conn, user_id, &doc)?;

    tracing::debug!(user_id, tdee = energy.tdee, "profile saved with derived budgets");

    Ok(ProfileResponse {
        user_id: user_id.to_string(),
        profile: profile.clone(),
        energy,
        macros,
    })
}

/// Get a user's profile and derived budgets
pub fn get_profile(db: &Database, user_id: &str) -> ServiceResult<ProfileResponse> {
    let conn = db.get_conn()?;
    let doc = ProfileDocument::get(&conn, user_id)?
        .ok_or_else(|| ServiceError::ProfileNotFound(user_id.to_string()))?;

    Ok(ProfileResponse {
        user_id: user_id.to_string(),
        profile: doc.profile,
        energy: doc.energy,
        macros: doc.macros,
    })
}
