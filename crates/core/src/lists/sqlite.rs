use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};

use super::{AddOutcome, ListKind, ListStore};
use crate::activity::{append_activity, ActivityEntry};
use crate::catalog::{find_title, load_genres, row_to_title, Title, TITLE_COLUMNS};
use crate::store::{format_timestamp, SqliteStore, StoreError};

fn require_user(conn: &Connection, user_id: i64) -> Result<(), StoreError> {
    conn.query_row("SELECT 1 FROM users WHERE id = ?", params![user_id], |_| Ok(()))
        .optional()?
        .ok_or_else(|| StoreError::NotFound(format!("user {}", user_id)))
}

impl ListStore for SqliteStore {
    fn list(&self, user_id: i64, kind: ListKind) -> Result<Vec<Title>, StoreError> {
        let conn = self.conn()?;

        let sql = format!(
            "SELECT {} FROM titles t
             JOIN {} m ON m.title_id = t.id
             WHERE m.user_id = ?
             ORDER BY m.added_at ASC, m.rowid ASC",
            TITLE_COLUMNS,
            kind.table()
        );

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params![user_id], row_to_title)?;

        let mut titles = Vec::new();
        for row in rows {
            let mut title = row?;
            title.genres = load_genres(&conn, title.id)?;
            titles.push(title);
        }
        Ok(titles)
    }

    fn add(&self, user_id: i64, imdb_id: &str, kind: ListKind) -> Result<AddOutcome, StoreError> {
        let mut conn = self.conn()?;
        // Take the write lock up front so the membership check and the
        // ledger append cannot interleave with another writer.
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        require_user(&tx, user_id)?;
        let title = find_title(&tx, imdb_id)?;

        let sql = format!(
            "INSERT INTO {} (user_id, title_id, added_at) VALUES (?, ?, ?)
             ON CONFLICT(user_id, title_id) DO NOTHING",
            kind.table()
        );
        let inserted = tx.execute(
            &sql,
            params![user_id, title.id, format_timestamp(&Utc::now())],
        )?;

        if inserted == 0 {
            // Nothing written; dropping the transaction rolls back.
            return Ok(AddOutcome::AlreadyPresent);
        }

        let entry = append_activity(&tx, user_id, title.id, kind.added_activity())?;
        tx.commit()?;

        Ok(AddOutcome::Added(entry))
    }

    fn remove(
        &self,
        user_id: i64,
        imdb_id: &str,
        kind: ListKind,
    ) -> Result<ActivityEntry, StoreError> {
        let mut conn = self.conn()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        require_user(&tx, user_id)?;
        let title = find_title(&tx, imdb_id)?;

        let sql = format!(
            "DELETE FROM {} WHERE user_id = ? AND title_id = ?",
            kind.table()
        );
        let deleted = tx.execute(&sql, params![user_id, title.id])?;

        if deleted == 0 {
            return Err(StoreError::NotFound(format!(
                "{} {} for user {}",
                kind.as_str(),
                imdb_id,
                user_id
            )));
        }

        let entry = append_activity(&tx, user_id, title.id, kind.removed_activity())?;
        tx.commit()?;

        Ok(entry)
    }
}
