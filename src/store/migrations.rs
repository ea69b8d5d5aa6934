//! Document store migrations
//!
//! Schema creation and migration logic for the document tables.

use rusqlite::Connection;

use super::connection::DbResult;

/// Run all migrations to bring the store up to the current schema version
pub fn run_migrations(conn: &Connection) -> DbResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        )",
        [],
    )?;

    let current_version: i32 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
            [],
            |row| row.get(0),
        )
        .unwrap_or(0);

    if current_version < 1 {
        migrate_v1(conn)?;
        conn.execute("INSERT INTO schema_migrations (version) VALUES (1)", [])?;
    }

    Ok(())
}

/// Migration v1: document tables
fn migrate_v1(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(
        r#"
        -- ============================================
        -- PROFILE DOCUMENTS
        -- One JSON document per user: biometric snapshot
        -- plus the budgets derived from it
        -- ============================================
        CREATE TABLE profile_documents (
            user_id TEXT PRIMARY KEY,
            doc TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        -- ============================================
        -- DIARY DOCUMENTS
        -- One JSON document per (user, ISO date):
        -- meal buckets and exercises
        -- ============================================
        CREATE TABLE diary_documents (
            user_id TEXT NOT NULL,
            date TEXT NOT NULL,              -- ISO date: "2025-01-09"
            doc TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at TEXT NOT NULL DEFAULT (datetime('now')),
            PRIMARY KEY (user_id, date)
        );
        "#,
    )?;

    Ok(())
}
