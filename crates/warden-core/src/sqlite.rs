//! SQLite-backed option store.
//!
//! Mirrors a shared options table: one row per `(scope, name)`, JSON text
//! value column, last-writer-wins via `INSERT OR REPLACE`.

use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::Context;
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::Value;
use warden_host_api::{OptionStore, Scope, StoreError};

/// DDL for the options table.
pub const OPTIONS_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS options (
    scope TEXT NOT NULL,
    name  TEXT NOT NULL,
    value TEXT NOT NULL,
    PRIMARY KEY (scope, name)
);
"#;

/// SQLite-backed [`OptionStore`].
#[derive(Clone)]
pub struct SqliteOptions {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteOptions {
    /// Open (or create) a database file and ensure the schema exists.
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let conn = Connection::open(path).context("failed to open sqlite db")?;
        Self::from_conn(conn)
    }

    /// Fresh in-memory database.
    pub fn memory() -> anyhow::Result<Self> {
        let conn =
            Connection::open_in_memory().context("failed to open in-memory sqlite db")?;
        Self::from_conn(conn)
    }

    fn from_conn(conn: Connection) -> anyhow::Result<Self> {
        conn.execute_batch(OPTIONS_SCHEMA)
            .context("failed to init options schema")?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }
}

fn db_err(e: rusqlite::Error) -> StoreError {
    StoreError::Backend(e.to_string())
}

impl OptionStore for SqliteOptions {
    fn read(&self, scope: Scope, name: &str) -> Result<Option<Value>, StoreError> {
        let conn = self.conn.lock().unwrap();
        let raw: Option<String> = conn
            .query_row(
                "SELECT value FROM options WHERE scope = ?1 AND name = ?2",
                params![scope.as_str(), name],
                |row| row.get(0),
            )
            .optional()
            .map_err(db_err)?;

        // A row that does not parse as JSON is treated as absent; the record
        // codec coerces everything else.
        Ok(raw.and_then(|s| serde_json::from_str(&s).ok()))
    }

    fn write(&self, scope: Scope, name: &str, value: Value) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&value)?;
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT OR REPLACE INTO options (scope, name, value) VALUES (?1, ?2, ?3)",
            params![scope.as_str(), name, raw],
        )
        .map_err(db_err)?;
        Ok(())
    }
}
