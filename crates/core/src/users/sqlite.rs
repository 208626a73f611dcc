use chrono::Utc;
use rusqlite::params;

use super::{User, UserStore};
use crate::store::{format_timestamp, parse_timestamp, SqliteStore, StoreError};

fn row_to_user(row: &rusqlite::Row) -> rusqlite::Result<(i64, String, String)> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?))
}

fn into_user((id, username, created_at): (i64, String, String)) -> Result<User, StoreError> {
    Ok(User {
        id,
        username,
        created_at: parse_timestamp(&created_at)?,
    })
}

impl UserStore for SqliteStore {
    fn ensure_user(&self, username: &str) -> Result<User, StoreError> {
        let conn = self.conn()?;

        let inserted = conn.execute(
            "INSERT INTO users (username, created_at) VALUES (?, ?)
             ON CONFLICT(username) DO NOTHING",
            params![username, format_timestamp(&Utc::now())],
        )?;
        if inserted > 0 {
            tracing::info!(username, "Provisioned user");
        }

        let row = conn.query_row(
            "SELECT id, username, created_at FROM users WHERE username = ?",
            params![username],
            row_to_user,
        )?;
        into_user(row)
    }
}
