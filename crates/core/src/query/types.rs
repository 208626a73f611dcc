use serde::{Deserialize, Serialize};

/// Number of titles added to the result cap per page.
pub const PAGE_SIZE: u32 = 50;

/// Latest release year used as the default upper bound.
pub const DEFAULT_LATEST_YEAR: i32 = 2022;

/// Search parameters exactly as received from the client.
///
/// Every field is kept as an optional string so that malformed values can be
/// coerced to defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTitleQuery {
    pub title: Option<String>,
    /// Comma-separated genre list.
    pub genres: Option<String>,
    pub min_year: Option<String>,
    pub max_year: Option<String>,
    pub sort: Option<String>,
    pub page: Option<String>,
}

impl RawTitleQuery {
    /// Collect parameters from decoded query-string pairs.
    ///
    /// A key given more than once keeps its first value; unknown keys are
    /// ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut raw = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "title" => &mut raw.title,
                "genres" => &mut raw.genres,
                "minYear" => &mut raw.min_year,
                "maxYear" => &mut raw.max_year,
                "sort" => &mut raw.sort,
                "page" => &mut raw.page,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        raw
    }
}

/// Result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Most recent release first.
    #[default]
    Latest,
    /// Oldest release first.
    Oldest,
    /// Best rating first.
    HighestRated,
    /// Worst rating first.
    LowestRated,
}

impl SortOrder {
    /// Unrecognized keys, including the empty string, resolve to `Latest`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "oldest" => SortOrder::Oldest,
            "highestrated" => SortOrder::HighestRated,
            "lowestrated" => SortOrder::LowestRated,
            _ => SortOrder::Latest,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Latest => "latest",
            SortOrder::Oldest => "oldest",
            SortOrder::HighestRated => "highestrated",
            SortOrder::LowestRated => "lowestrated",
        }
    }
}

/// Normalized search specification consumed by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleQuery {
    /// Case-insensitive substring; empty matches everything.
    pub title: String,
    /// Every genre here must be present on a matching title.
    pub genres: Vec<String>,
    /// Inclusive lower bound on release year.
    pub min_year: i32,
    /// Inclusive upper bound on release year.
    pub max_year: i32,
    pub sort: SortOrder,
    /// 1-based page number, always at least 1.
    pub page: u32,
}

impl Default for TitleQuery {
    fn default() -> Self {
        Self {
            title: String::new(),
            genres: Vec::new(),
            min_year: 0,
            max_year: DEFAULT_LATEST_YEAR,
            sort: SortOrder::Latest,
            page: 1,
        }
    }
}

impl TitleQuery {
    /// Maximum number of titles returned for this page.
    ///
    /// Pages grow the returned prefix: page 2 yields the first 100 results.
    pub fn limit(&self) -> u32 {
        self.page.saturating_mul(PAGE_SIZE)
    }
}
