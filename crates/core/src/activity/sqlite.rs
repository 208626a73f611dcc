use chrono::{SubsecRound, Utc};
use rusqlite::{params, Connection};

use super::{
    ActivityEntry, ActivityFeedItem, ActivityKind, ActivityLedger, ActivityTitle, ActivityUser,
};
use crate::store::{format_timestamp, parse_timestamp, SqliteStore, StoreError};

/// Append one entry. Callers pass the transaction that made the membership
/// change so both commit or roll back together.
pub(crate) fn append_activity(
    conn: &Connection,
    user_id: i64,
    title_id: i64,
    kind: ActivityKind,
) -> Result<ActivityEntry, StoreError> {
    // Stored with microsecond precision; truncate so the returned entry
    // matches what a later read yields.
    let created_at = Utc::now().trunc_subsecs(6);

    conn.execute(
        "INSERT INTO user_activities (user_id, title_id, activity_type, created_at)
         VALUES (?, ?, ?, ?)",
        params![user_id, title_id, kind.as_str(), format_timestamp(&created_at)],
    )?;

    Ok(ActivityEntry {
        id: conn.last_insert_rowid(),
        user_id,
        title_id,
        activity_type: kind,
        created_at,
    })
}

impl ActivityLedger for SqliteStore {
    fn feed(&self) -> Result<Vec<ActivityFeedItem>, StoreError> {
        let conn = self.conn()?;

        let mut stmt = conn.prepare(
            "SELECT a.id, a.user_id, a.title_id, a.activity_type, a.created_at,
                    u.username, t.imdb_id, t.title
             FROM user_activities a
             JOIN users u ON u.id = a.user_id
             JOIN titles t ON t.id = a.title_id
             ORDER BY a.id DESC",
        )?;

        let rows = stmt.query_map([], |row| {
            let id: i64 = row.get(0)?;
            let user_id: i64 = row.get(1)?;
            let title_id: i64 = row.get(2)?;
            let activity_type: String = row.get(3)?;
            let created_at: String = row.get(4)?;
            let username: String = row.get(5)?;
            let imdb_id: String = row.get(6)?;
            let title: String = row.get(7)?;

            Ok((id, user_id, title_id, activity_type, created_at, username, imdb_id, title))
        })?;

        let mut items = Vec::new();
        for row in rows {
            let (id, user_id, title_id, activity_type, created_at, username, imdb_id, title) =
                row?;

            let activity_type = ActivityKind::parse(&activity_type).ok_or_else(|| {
                StoreError::Database(format!("Unknown activity type: {}", activity_type))
            })?;

            items.push(ActivityFeedItem {
                entry: ActivityEntry {
                    id,
                    user_id,
                    title_id,
                    activity_type,
                    created_at: parse_timestamp(&created_at)?,
                },
                user: ActivityUser { username },
                title: ActivityTitle { imdb_id, title },
            });
        }

        Ok(items)
    }
}
