//! Engine operations
//!
//! The operations layer the surrounding app calls: profile maintenance,
//! diary mutation, and summaries. Every function takes the acting user and
//! date explicitly; there is no ambient "current user" or "today".

pub mod diary;
pub mod profile;
pub mod summary;

use chrono::NaiveDate;
use thiserror::Error;

use crate::budget::BudgetError;
use crate::store::DbError;

/// Operation error types
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Db(#[from] DbError),

    #[error(transparent)]
    Budget(#[from] BudgetError),

    /// The referenced entry is not in the bucket; the stored ledger is
    /// left unchanged.
    #[error("entry '{0}' not found in the meal bucket")]
    EntryNotFound(String),

    /// Logging exercise needs a known body weight. Defaulting to zero would
    /// silently misreport expenditure, so the add is refused until the
    /// profile exists.
    #[error("cannot derive exercise calories without a stored body weight")]
    MissingWeightForExercise,

    #[error("no profile stored for user '{0}'")]
    ProfileNotFound(String),

    #[error("invalid diary date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Result type for engine operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Validate a diary date key
pub(crate) fn parse_date(date: &str) -> ServiceResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| ServiceError::InvalidDate(date.to_string()))
}
