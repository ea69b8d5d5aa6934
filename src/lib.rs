//! Glucolog
//!
//! Energy and macronutrient budget engine for a diabetes food/exercise
//! diary: derives daily energy and macro targets from a biometric snapshot,
//! distributes the carb budget across meals, keeps per-meal running totals
//! consistent as entries come and go, and evaluates consumption against
//! budget. Persistence is a small key-value document store; the UI,
//! recognition pipeline, and catalogs live outside this crate.

pub mod budget;
pub mod catalog;
pub mod models;
pub mod service;
pub mod store;

pub use budget::{BudgetError, CarbRecommendation, MealCarbCeilings};
pub use models::{
    BiometricProfile, DiaryLedger, EnergyBudget, FoodEntry, MacroBudget, MealSlot,
};
pub use service::{ServiceError, ServiceResult};
pub use store::Database;
