//! SQLite connection and schema shared by the catalog, user, list and
//! activity stores.
//!
//! A single connection backs every store so that a membership change and its
//! activity entry can be written in one transaction.

mod error;

pub use error::*;

use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::Connection;

/// Busy timeout applied when none is configured.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// SQLite-backed store for titles, users, list memberships and activity.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (or create) the database file and its tables.
    ///
    /// `busy_timeout` bounds how long any statement waits on a locked
    /// database before failing with [`StoreError::Unavailable`].
    pub fn new(path: &Path, busy_timeout: Duration) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        Self::configure(&conn, busy_timeout)?;
        Self::initialize_schema(&conn)?;
        tracing::debug!(path = %path.display(), "Opened SQLite store");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create an in-memory store (useful for testing).
    pub fn in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        Self::configure(&conn, DEFAULT_BUSY_TIMEOUT)?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn configure(conn: &Connection, busy_timeout: Duration) -> Result<(), StoreError> {
        conn.busy_timeout(busy_timeout)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(())
    }

    fn initialize_schema(conn: &Connection) -> Result<(), StoreError> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT NOT NULL UNIQUE,
                credential TEXT,
                created_at TEXT NOT NULL
            );

            -- Catalog entries, immutable once inserted
            CREATE TABLE IF NOT EXISTS titles (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                imdb_id TEXT NOT NULL UNIQUE,
                title TEXT NOT NULL,
                -- Lowercased title for case-insensitive search, beyond ASCII
                title_folded TEXT NOT NULL,
                synopsis TEXT NOT NULL DEFAULT '',
                released INTEGER NOT NULL,
                imdbrating REAL NOT NULL DEFAULT 0
            );

            CREATE INDEX IF NOT EXISTS idx_titles_released ON titles(released);
            CREATE INDEX IF NOT EXISTS idx_titles_imdbrating ON titles(imdbrating);

            CREATE TABLE IF NOT EXISTS title_genres (
                title_id INTEGER NOT NULL REFERENCES titles(id) ON DELETE CASCADE,
                position INTEGER NOT NULL,
                genre TEXT NOT NULL,
                PRIMARY KEY (title_id, genre)
            );

            CREATE INDEX IF NOT EXISTS idx_title_genres_genre ON title_genres(genre);

            -- One row per (user, title); the primary key is the uniqueness constraint
            CREATE TABLE IF NOT EXISTS user_favorites (
                user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                title_id INTEGER NOT NULL REFERENCES titles(id) ON DELETE CASCADE,
                added_at TEXT NOT NULL,
                PRIMARY KEY (user_id, title_id)
            );

            CREATE TABLE IF NOT EXISTS user_watch_later (
                user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                title_id INTEGER NOT NULL REFERENCES titles(id) ON DELETE CASCADE,
                added_at TEXT NOT NULL,
                PRIMARY KEY (user_id, title_id)
            );

            -- Append-only activity ledger
            CREATE TABLE IF NOT EXISTS user_activities (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL REFERENCES users(id),
                title_id INTEGER NOT NULL REFERENCES titles(id),
                activity_type TEXT NOT NULL,
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_user_activities_user_id ON user_activities(user_id);
            "#,
        )?;

        Ok(())
    }

    /// Lock the connection for the duration of one store operation.
    pub(crate) fn conn(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn
            .lock()
            .map_err(|_| StoreError::Database("connection mutex poisoned".to_string()))
    }
}

/// Fixed-width UTC timestamp so that text ordering matches time ordering.
pub(crate) fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(crate) fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, StoreError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StoreError::Database(format!("Invalid timestamp {:?}: {}", raw, e)))
}
