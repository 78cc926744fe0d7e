//! Rebuilding records from pre-rendered catalog markup.
//!
//! The parser only talks to [`MarkupContainer`] / [`MarkupEntry`], so the
//! same rules apply to the browser DOM and to in-memory fixtures.

use super::aggregate::{
    is_code_host, non_blank, normalize_category, normalize_tags, Project, UNTITLED_PROJECT,
};

pub const ENTRY_SELECTOR: &str = "article";
pub const IMAGE_SELECTOR: &str = "img";
pub const HEADING_LINK_SELECTOR: &str = "h3 a";
pub const HEADING_SELECTOR: &str = "h3 span, h3";
pub const FEATURED_SELECTOR: &str = ".inline-flex.items-center, .featured, .badge";
pub const DESCRIPTION_SELECTOR: &str = "p";
pub const TAG_SELECTOR: &str = ".tag";
/// Suffix of the `data-*` attribute carrying the category.
pub const CATEGORY_DATA_KEY: &str = "category";

/// Read-only view of one rendered entry. Selector arguments are CSS
/// selectors relative to the entry.
pub trait MarkupEntry {
    /// Value of `data-<key>` on the entry itself.
    fn data(&self, key: &str) -> Option<String>;
    /// Attribute of the first descendant matching `selector`.
    fn attribute(&self, selector: &str, name: &str) -> Option<String>;
    /// Text content of the first descendant matching `selector`.
    fn text(&self, selector: &str) -> Option<String>;
    /// Text content of every descendant matching `selector`, in document order.
    fn texts(&self, selector: &str) -> Vec<String>;
    fn contains(&self, selector: &str) -> bool;
}

pub trait MarkupContainer {
    type Entry: MarkupEntry;

    /// Entry nodes in document order.
    fn entries(&self) -> Vec<Self::Entry>;
}

/// Best-effort reconstruction; a missing container is an empty catalog.
pub fn parse_fallback<C: MarkupContainer>(container: Option<&C>) -> Vec<Project> {
    let Some(container) = container else {
        log::debug!("no fallback container present");
        return Vec::new();
    };
    let records: Vec<Project> = container.entries().iter().map(parse_entry).collect();
    log::info!("reconstructed {} projects from fallback markup", records.len());
    records
}

pub fn parse_entry<E: MarkupEntry>(entry: &E) -> Project {
    let mut url = None;
    let mut repository_url = None;

    let name = if entry.contains(HEADING_LINK_SELECTOR) {
        match non_blank(entry.attribute(HEADING_LINK_SELECTOR, "href")) {
            Some(href) if is_code_host(&href) => repository_url = Some(href),
            Some(href) if href != "#" => url = Some(href),
            _ => {}
        }
        entry.text(HEADING_LINK_SELECTOR)
    } else {
        entry.text(HEADING_SELECTOR)
    };

    Project {
        name: non_blank(name).unwrap_or_else(|| UNTITLED_PROJECT.to_string()),
        description: entry
            .text(DESCRIPTION_SELECTOR)
            .map(|d| d.trim().to_string())
            .unwrap_or_default(),
        category: normalize_category(entry.data(CATEGORY_DATA_KEY)),
        tags: normalize_tags(entry.texts(TAG_SELECTOR)),
        image: non_blank(entry.attribute(IMAGE_SELECTOR, "src")),
        url,
        repository_url,
        featured: entry.contains(FEATURED_SELECTOR),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default, Clone)]
    struct FakeEntry {
        data: HashMap<String, String>,
        attributes: HashMap<(String, String), String>,
        texts: HashMap<String, Vec<String>>,
        markers: Vec<String>,
    }

    impl FakeEntry {
        fn with_data(mut self, key: &str, value: &str) -> Self {
            self.data.insert(key.into(), value.into());
            self
        }

        fn with_attr(mut self, selector: &str, name: &str, value: &str) -> Self {
            self.attributes
                .insert((selector.into(), name.into()), value.into());
            self
        }

        fn with_text(mut self, selector: &str, value: &str) -> Self {
            self.texts
                .entry(selector.into())
                .or_default()
                .push(value.into());
            self
        }

        fn with_marker(mut self, selector: &str) -> Self {
            self.markers.push(selector.into());
            self
        }
    }

    impl MarkupEntry for FakeEntry {
        fn data(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn attribute(&self, selector: &str, name: &str) -> Option<String> {
            self.attributes
                .get(&(selector.to_string(), name.to_string()))
                .cloned()
        }

        fn text(&self, selector: &str) -> Option<String> {
            self.texts.get(selector).and_then(|t| t.first().cloned())
        }

        fn texts(&self, selector: &str) -> Vec<String> {
            self.texts.get(selector).cloned().unwrap_or_default()
        }

        fn contains(&self, selector: &str) -> bool {
            self.markers.iter().any(|m| m == selector)
                || self.texts.contains_key(selector)
                || self.attributes.keys().any(|(s, _)| s == selector)
        }
    }

    struct FakeContainer(Vec<FakeEntry>);

    impl MarkupContainer for FakeContainer {
        type Entry = FakeEntry;

        fn entries(&self) -> Vec<FakeEntry> {
            self.0.clone()
        }
    }

    #[test]
    fn test_missing_container_is_empty() {
        assert!(parse_fallback::<FakeContainer>(None).is_empty());
    }

    #[test]
    fn test_container_without_entries_is_empty() {
        assert!(parse_fallback(Some(&FakeContainer(vec![]))).is_empty());
    }

    #[test]
    fn test_heading_only_entry() {
        let entry = FakeEntry::default()
            .with_data("category", "library")
            .with_text(HEADING_SELECTOR, "C");

        let records = parse_fallback(Some(&FakeContainer(vec![entry])));

        assert_eq!(records, vec![Project::new("C", "library")]);
        let record = &records[0];
        assert_eq!(record.image_src(), "");
        assert_eq!(record.description, "");
        assert!(record.tags.is_empty());
        assert!(!record.featured);
    }

    #[test]
    fn test_full_entry() {
        let entry = FakeEntry::default()
            .with_data("category", "web")
            .with_attr(IMAGE_SELECTOR, "src", "assets/img/a.png")
            .with_attr(HEADING_LINK_SELECTOR, "href", "https://github.com/me/a")
            .with_text(HEADING_LINK_SELECTOR, "  Atlas ")
            .with_text(DESCRIPTION_SELECTOR, " A map. ")
            .with_text(DESCRIPTION_SELECTOR, "second paragraph")
            .with_text(TAG_SELECTOR, "rust")
            .with_text(TAG_SELECTOR, " ")
            .with_text(TAG_SELECTOR, "wasm")
            .with_marker(FEATURED_SELECTOR);

        let project = parse_entry(&entry);

        assert_eq!(project.name, "Atlas");
        assert_eq!(project.category, "web");
        assert_eq!(project.image.as_deref(), Some("assets/img/a.png"));
        assert_eq!(
            project.repository_url.as_deref(),
            Some("https://github.com/me/a")
        );
        assert_eq!(project.url, None);
        assert_eq!(project.description, "A map.");
        assert_eq!(project.tags, vec!["rust", "wasm"]);
        assert!(project.featured);
    }

    #[test]
    fn test_link_classification() {
        let plain = FakeEntry::default()
            .with_attr(HEADING_LINK_SELECTOR, "href", "https://atlas.example")
            .with_text(HEADING_LINK_SELECTOR, "Atlas");
        let project = parse_entry(&plain);
        assert_eq!(project.url.as_deref(), Some("https://atlas.example"));
        assert_eq!(project.repository_url, None);

        let placeholder = FakeEntry::default()
            .with_attr(HEADING_LINK_SELECTOR, "href", "#")
            .with_text(HEADING_LINK_SELECTOR, "Atlas");
        let project = parse_entry(&placeholder);
        assert_eq!(project.url, None);
        assert_eq!(project.repository_url, None);
    }

    #[test]
    fn test_featured_card_heading_reads_back_as_name() {
        // Rendered card: name in `h3 span`, badge beside the heading.
        let source = Project::new("Atlas", "web")
            .with_description("A map.")
            .with_tags(["rust", "wasm"])
            .featured(true);
        let card = FakeEntry::default()
            .with_data("category", &source.category)
            .with_text(HEADING_SELECTOR, &source.name)
            .with_marker(FEATURED_SELECTOR)
            .with_text(DESCRIPTION_SELECTOR, &source.description)
            .with_text(TAG_SELECTOR, "rust")
            .with_text(TAG_SELECTOR, "wasm");

        assert_eq!(parse_entry(&card), source);
    }

    #[test]
    fn test_blank_entry_still_valid() {
        let project = parse_entry(&FakeEntry::default().with_data("category", ""));
        assert_eq!(project.name, UNTITLED_PROJECT);
        assert_eq!(project.category, "other");
        assert!(project.tags.is_empty());
    }
}
