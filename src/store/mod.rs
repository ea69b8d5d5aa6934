//! Document store module
//!
//! Handles the SQLite-backed key-value document repository: one profile
//! document per user, one diary document per (user, date).

pub mod connection;
pub mod documents;
pub mod migrations;

pub use connection::{Database, DbError, DbResult};
pub use documents::{DiaryDocument, ProfileDocument};
