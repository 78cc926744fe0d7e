use serde::{Deserialize, Deserializer, Serialize};

use super::aggregate::Project;
use super::filter::ALL_FILTER_KEY;

/// Query string of `GET /api/projects`.
///
/// Parsing is lenient the way a query string usually is: `featured` is true
/// for any value except empty or `0`/`false`, and a `limit` that is not a
/// positive number means "no limit".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectListQuery {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub featured: bool,
    #[serde(default, deserialize_with = "lenient_limit")]
    pub limit: Option<usize>,
}

impl ProjectListQuery {
    pub fn category_filter(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty() && *c != ALL_FILTER_KEY)
    }

    /// Category, then featured, then limit.
    pub fn apply(&self, records: &[Project]) -> Vec<Project> {
        let category = self.category_filter();
        let limit = self.limit.unwrap_or(usize::MAX);
        records
            .iter()
            .filter(|p| category.map_or(true, |c| p.category == c))
            .filter(|p| !self.featured || p.featured)
            .take(limit)
            .cloned()
            .collect()
    }
}

/// Envelope returned by the projects endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectListResponse {
    pub success: bool,
    pub data: Vec<Project>,
    pub count: usize,
}

impl ProjectListResponse {
    pub fn ok(data: Vec<Project>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            success: false,
            data: Vec::new(),
            count: 0,
        }
    }
}

fn lenient_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(match raw.as_deref().map(str::trim) {
        None | Some("") | Some("0") => false,
        Some(value) => !value.eq_ignore_ascii_case("false"),
    })
}

fn lenient_limit<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<usize>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|limit| *limit > 0))
}
