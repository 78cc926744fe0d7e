//! DOM side of the markup fallback: the pre-rendered `article` entries in the
//! catalog container, read through `web_sys`.

use contracts::domain::a001_project::markup::{
    parse_fallback, MarkupContainer, MarkupEntry, ENTRY_SELECTOR,
};
use contracts::domain::a001_project::Project;
use wasm_bindgen::JsCast;
use web_sys::Element;

pub struct DomEntry(Element);

impl DomEntry {
    fn first(&self, selector: &str) -> Option<Element> {
        self.0.query_selector(selector).ok().flatten()
    }
}

impl MarkupEntry for DomEntry {
    fn data(&self, key: &str) -> Option<String> {
        self.0.get_attribute(&format!("data-{key}"))
    }

    fn attribute(&self, selector: &str, name: &str) -> Option<String> {
        self.first(selector)?.get_attribute(name)
    }

    fn text(&self, selector: &str) -> Option<String> {
        self.first(selector)?.text_content()
    }

    fn texts(&self, selector: &str) -> Vec<String> {
        let Ok(nodes) = self.0.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.text_content())
            .collect()
    }

    fn contains(&self, selector: &str) -> bool {
        self.first(selector).is_some()
    }
}

pub struct DomContainer(Element);

impl MarkupContainer for DomContainer {
    type Entry = DomEntry;

    fn entries(&self) -> Vec<DomEntry> {
        let Ok(nodes) = self.0.query_selector_all(ENTRY_SELECTOR) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(DomEntry)
            .collect()
    }
}

/// Records rebuilt from the container's current markup.
///
/// Must run before anything is rendered into the container.
pub fn read_fallback(container: Option<&Element>) -> Vec<Project> {
    let container = container.cloned().map(DomContainer);
    parse_fallback(container.as_ref())
}
