//! SQLite-backed title catalog and search executor.

use rusqlite::{params, Connection, OptionalExtension, ToSql};

use super::{NewTitle, SearchResult, Title, TitleCatalog};
use crate::metrics;
use crate::query::{SortOrder, TitleQuery};
use crate::store::{SqliteStore, StoreError};

pub(crate) const TITLE_COLUMNS: &str = "t.id, t.imdb_id, t.title, t.synopsis, t.released, t.imdbrating";

impl SqliteStore {
    /// Insert a title into the catalog.
    ///
    /// The catalog is otherwise read-only; this exists for fixtures and
    /// tests. Duplicate genres are stored once, keeping their first position.
    pub fn insert_title(&self, new: &NewTitle) -> Result<Title, StoreError> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        tx.execute(
            "INSERT INTO titles (imdb_id, title, title_folded, synopsis, released, imdbrating)
             VALUES (?, ?, ?, ?, ?, ?)",
            params![
                &new.imdb_id,
                &new.title,
                fold_case(&new.title),
                &new.synopsis,
                new.released,
                new.imdb_rating,
            ],
        )?;
        let id = tx.last_insert_rowid();

        for (position, genre) in new.genres.iter().enumerate() {
            tx.execute(
                "INSERT OR IGNORE INTO title_genres (title_id, position, genre) VALUES (?, ?, ?)",
                params![id, position as i64, genre],
            )?;
        }

        let title = find_title(&tx, &new.imdb_id)?;
        tx.commit()?;
        Ok(title)
    }
}

impl TitleCatalog for SqliteStore {
    fn search(&self, query: &TitleQuery) -> Result<SearchResult, StoreError> {
        let conn = self.conn()?;
        let (sql, params) = build_search_sql(query);

        let param_refs: Vec<&dyn ToSql> = params.iter().map(|p| p.as_ref()).collect();

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(param_refs.as_slice(), row_to_title)?;

        let mut titles = Vec::new();
        for row in rows {
            let mut title = row?;
            title.genres = load_genres(&conn, title.id)?;
            titles.push(title);
        }

        tracing::debug!(
            title = %query.title,
            genres = ?query.genres,
            min_year = query.min_year,
            max_year = query.max_year,
            sort = ?query.sort,
            page = query.page,
            results = titles.len(),
            "Catalog search"
        );
        metrics::SEARCH_RESULTS
            .with_label_values(&[query.sort.as_str()])
            .observe(titles.len() as f64);

        Ok(SearchResult::from(titles))
    }

    fn get(&self, imdb_id: &str) -> Result<Title, StoreError> {
        let conn = self.conn()?;
        find_title(&conn, imdb_id)
    }
}

/// Look up a title by external id on an open connection or transaction.
pub(crate) fn find_title(conn: &Connection, imdb_id: &str) -> Result<Title, StoreError> {
    let sql = format!("SELECT {} FROM titles t WHERE t.imdb_id = ?", TITLE_COLUMNS);
    let mut title = conn
        .query_row(&sql, params![imdb_id], row_to_title)
        .optional()?
        .ok_or_else(|| StoreError::NotFound(format!("title {}", imdb_id)))?;

    title.genres = load_genres(conn, title.id)?;
    Ok(title)
}

/// Load the genres of a title in catalog order.
pub(crate) fn load_genres(conn: &Connection, title_id: i64) -> Result<Vec<String>, StoreError> {
    let mut stmt =
        conn.prepare("SELECT genre FROM title_genres WHERE title_id = ? ORDER BY position")?;
    let rows = stmt.query_map(params![title_id], |row| row.get(0))?;

    let mut genres = Vec::new();
    for row in rows {
        genres.push(row?);
    }
    Ok(genres)
}

/// Convert a row selected with [`TITLE_COLUMNS`] (genres loaded separately).
pub(crate) fn row_to_title(row: &rusqlite::Row) -> rusqlite::Result<Title> {
    Ok(Title {
        id: row.get(0)?,
        imdb_id: row.get(1)?,
        title: row.get(2)?,
        synopsis: row.get(3)?,
        genres: Vec::new(),
        released: row.get(4)?,
        imdb_rating: row.get(5)?,
    })
}

fn order_by(sort: SortOrder) -> &'static str {
    // Ties fall back to insertion order.
    match sort {
        SortOrder::Latest => "t.released DESC, t.id ASC",
        SortOrder::Oldest => "t.released ASC, t.id ASC",
        SortOrder::HighestRated => "t.imdbrating DESC, t.id ASC",
        SortOrder::LowestRated => "t.imdbrating ASC, t.id ASC",
    }
}

/// Case folding shared by stored titles and search fragments.
///
/// SQLite's `LIKE` only ignores case for ASCII, so both sides are folded
/// here and compared as-is.
fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// Escape LIKE wildcards so the fragment matches literally.
fn escape_like(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len());
    for c in fragment.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn build_search_sql(query: &TitleQuery) -> (String, Vec<Box<dyn ToSql>>) {
    // Bounds are not reordered: min > max matches nothing.
    let mut conditions = vec!["t.released >= ?", "t.released <= ?"];
    let mut params: Vec<Box<dyn ToSql>> = vec![Box::new(query.min_year), Box::new(query.max_year)];

    if !query.title.is_empty() {
        conditions.push("t.title_folded LIKE ? ESCAPE '\\'");
        params.push(Box::new(format!(
            "%{}%",
            escape_like(&fold_case(&query.title))
        )));
    }

    for genre in &query.genres {
        conditions.push(
            "EXISTS (SELECT 1 FROM title_genres g WHERE g.title_id = t.id AND g.genre = ?)",
        );
        params.push(Box::new(genre.clone()));
    }

    params.push(Box::new(i64::from(query.limit())));

    let sql = format!(
        "SELECT {} FROM titles t WHERE {} ORDER BY {} LIMIT ?",
        TITLE_COLUMNS,
        conditions.join(" AND "),
        order_by(query.sort)
    );

    (sql, params)
}
