//! Document store connection management
//!
//! Provides SQLite connection pooling for the profile and diary document
//! tables.

use std::path::Path;
use std::sync::Arc;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::OpenFlags;
use thiserror::Error;

/// Store error types
#[derive(Debug, Error)]
pub enum DbError {
    #[error("Database connection error: {0}")]
    Connection(#[from] r2d2::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Malformed stored document: {0}")]
    MalformedDocument(#[from] serde_json::Error),
}

/// Result type for store operations
pub type DbResult<T> = Result<T, DbError>;

/// Document store connection pool wrapper
#[derive(Clone)]
pub struct Database {
    pool: Arc<Pool<SqliteConnectionManager>>,
}

impl Database {
    /// Create a new connection pool backed by a database file
    pub fn new<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let manager = SqliteConnectionManager::file(path)
            .with_flags(
                OpenFlags::SQLITE_OPEN_READ_WRITE
                    | OpenFlags::SQLITE_OPEN_CREATE
                    | OpenFlags::SQLITE_OPEN_URI,
            )
            .with_init(|conn| {
                conn.execute_batch(
                    "PRAGMA foreign_keys = ON;
                     PRAGMA journal_mode = WAL;
                     PRAGMA synchronous = NORMAL;
                     PRAGMA temp_store = MEMORY;",
                )?;
                Ok(())
            });

        Self::from_manager(manager)
    }

    /// Create an in-memory store (used by tests)
    pub fn in_memory() -> DbResult<Self> {
        // A uniquely named shared-cache database keeps every pooled
        // connection on the same store without leaking between instances
        let name = format!("file:memdb-{}?mode=memory&cache=shared", uuid::Uuid::new_v4());
        let manager = SqliteConnectionManager::file(name)
            .with_flags(
                OpenFlags::SQLITE_OPEN_READ_WRITE
                    | OpenFlags::SQLITE_OPEN_CREATE
                    | OpenFlags::SQLITE_OPEN_URI,
            );
        Self::from_manager(manager)
    }

    fn from_manager(manager: SqliteConnectionManager) -> DbResult<Self> {
        let pool = Pool::builder().max_size(10).build(manager)?;
        let db = Self { pool: Arc::new(pool) };

        let conn = db.get_conn()?;
        super::migrations::run_migrations(&conn)?;
        Ok(db)
    }

    /// Get a connection from the pool
    pub fn get_conn(&self) -> DbResult<PooledConnection<SqliteConnectionManager>> {
        Ok(self.pool.get()?)
    }

    /// Execute a closure with a mutable connection (for transactions)
    pub fn with_conn_mut<F, T>(&self, f: F) -> DbResult<T>
    where
        F: FnOnce(&mut rusqlite::Connection) -> DbResult<T>,
    {
        let mut conn = self.get_conn()?;
        f(&mut conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_store_runs_migrations() {
        let db = Database::in_memory().unwrap();
        let conn = db.get_conn().unwrap();

        let version: i32 = conn
            .query_row(
                "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(version, 1);

        // Both document tables exist and are empty
        for table in ["profile_documents", "diary_documents"] {
            let count: i64 = conn
                .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
                .unwrap();
            assert_eq!(count, 0);
        }
    }
}
