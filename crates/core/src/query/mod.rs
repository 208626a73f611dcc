//! Normalization of raw search parameters into a [`TitleQuery`].
//!
//! Building a query never fails: anything malformed is replaced by its
//! default.

mod types;

pub use types::*;

impl TitleQuery {
    /// Build a normalized query from raw client parameters.
    ///
    /// `latest_year` is the default upper year bound when `maxYear` is
    /// missing or not a number.
    pub fn from_raw(raw: &RawTitleQuery, latest_year: i32) -> Self {
        Self {
            title: raw.title.clone().unwrap_or_default(),
            genres: raw.genres.as_deref().map(parse_genres).unwrap_or_default(),
            min_year: parse_year(raw.min_year.as_deref()).unwrap_or(0),
            max_year: parse_year(raw.max_year.as_deref()).unwrap_or(latest_year),
            sort: raw
                .sort
                .as_deref()
                .map(SortOrder::parse)
                .unwrap_or_default(),
            page: parse_page(raw.page.as_deref()),
        }
    }
}

/// Upper-case the first character and leave the rest untouched.
///
/// `"aCtion"` becomes `"ACtion"`, not `"Action"`.
pub fn capitalize_first(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Tokens are taken exactly as written between commas; only empty ones
/// are dropped.
fn parse_genres(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter(|token| !token.is_empty())
        .map(capitalize_first)
        .collect()
}

fn parse_year(raw: Option<&str>) -> Option<i32> {
    raw.and_then(|value| value.trim().parse().ok())
}

fn parse_page(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}
