//! Page-level settings for the catalog pipeline.
//!
//! Element ids and catalog locations default to what the static site
//! ships; the candidate list can be overridden per page with
//! `<meta name="catalog-sources" content="a.json, /b.json">`.

use contracts::domain::a001_project::view::HIGHLIGHTS_LIMIT;

/// Relative location, works for project sites and local servers.
pub const RELATIVE_CATALOG: &str = "assets/data/projects.json";
/// Absolute location, works for root-hosted sites.
pub const ABSOLUTE_CATALOG: &str = "/assets/data/projects.json";
pub const SOURCES_META_NAME: &str = "catalog-sources";

/// Ids of the elements the stats are written into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatIds {
    pub total: String,
    pub categories: String,
    pub featured: String,
    pub tags: String,
}

impl Default for StatIds {
    fn default() -> Self {
        Self {
            total: "totalProjects".to_string(),
            categories: "totalCategories".to_string(),
            featured: "featuredProjects".to_string(),
            tags: "totalTechnologies".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    /// Candidate catalog locations, tried in order.
    pub candidates: Vec<String>,
    /// Card container, also the fallback markup source.
    pub catalog_id: String,
    pub filter_id: String,
    pub highlights_id: String,
    pub highlights_limit: usize,
    pub stats: StatIds,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            candidates: default_candidates(),
            catalog_id: "allProjects".to_string(),
            filter_id: "filterButtons".to_string(),
            highlights_id: "projectGrid".to_string(),
            highlights_limit: HIGHLIGHTS_LIMIT,
            stats: StatIds::default(),
        }
    }
}

impl PageConfig {
    /// Defaults, with the candidate list taken from the page's meta tag when
    /// it names at least one location.
    pub fn from_document() -> Self {
        let mut config = Self::default();

        let meta = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| {
                d.query_selector(&format!("meta[name=\"{SOURCES_META_NAME}\"]"))
                    .ok()
                    .flatten()
            })
            .and_then(|m| m.get_attribute("content"));

        if let Some(content) = meta {
            let candidates = parse_sources(&content);
            if !candidates.is_empty() {
                log::debug!("catalog sources from page: {candidates:?}");
                config.candidates = candidates;
            }
        }
        config
    }
}

pub fn default_candidates() -> Vec<String> {
    vec![RELATIVE_CATALOG.to_string(), ABSOLUTE_CATALOG.to_string()]
}

/// Comma separated locations, blanks dropped.
pub fn parse_sources(content: &str) -> Vec<String> {
    content
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_candidates_relative_first() {
        let config = PageConfig::default();
        assert_eq!(
            config.candidates,
            vec!["assets/data/projects.json", "/assets/data/projects.json"]
        );
        assert_eq!(config.highlights_limit, 3);
    }

    #[test]
    fn test_parse_sources() {
        assert_eq!(
            parse_sources(" data.json, ,https://cdn.example/p.json ,"),
            vec!["data.json", "https://cdn.example/p.json"]
        );
        assert!(parse_sources("  , ").is_empty());
    }
}
