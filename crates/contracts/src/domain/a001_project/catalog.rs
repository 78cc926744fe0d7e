use std::sync::Arc;

use super::acquisition::Acquisition;
use super::aggregate::{normalize_records, Project};

/// Where the records of a [`Catalog`] came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogOrigin {
    Remote { location: String },
    Markup,
}

/// The immutable record sequence for one page view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub origin: CatalogOrigin,
    pub records: Arc<[Project]>,
}

impl Catalog {
    pub fn is_remote(&self) -> bool {
        matches!(self.origin, CatalogOrigin::Remote { .. })
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Turn an acquisition outcome into records.
///
/// `fallback` runs only when every candidate failed; a fetched empty array is
/// kept as an empty catalog.
pub fn resolve_catalog<F>(acquisition: Acquisition, fallback: F) -> Catalog
where
    F: FnOnce() -> Vec<Project>,
{
    match acquisition {
        Acquisition::Records { location, records } => Catalog {
            origin: CatalogOrigin::Remote { location },
            records: normalize_records(records).into(),
        },
        Acquisition::NoData { failures } => {
            log::warn!(
                "all {} catalog candidates failed; reading fallback markup",
                failures.len()
            );
            Catalog {
                origin: CatalogOrigin::Markup,
                records: fallback().into(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::Cell;

    #[test]
    fn test_remote_records_are_normalized() {
        let acquisition = Acquisition::Records {
            location: "assets/data/projects.json".into(),
            records: vec![json!({ "name": "A", "category": "web" }), json!(null)],
        };

        let catalog = resolve_catalog(acquisition, || panic!("fallback must not run"));

        assert!(catalog.is_remote());
        assert_eq!(catalog.records.len(), 1);
        assert_eq!(catalog.records[0].category, "web");
    }

    #[test]
    fn test_empty_remote_does_not_consult_fallback() {
        let called = Cell::new(false);
        let acquisition = Acquisition::Records {
            location: "/assets/data/projects.json".into(),
            records: vec![],
        };

        let catalog = resolve_catalog(acquisition, || {
            called.set(true);
            vec![Project::new("C", "library")]
        });

        assert!(!called.get());
        assert!(catalog.is_empty());
        assert!(catalog.is_remote());
    }

    #[test]
    fn test_no_data_uses_fallback() {
        let catalog = resolve_catalog(Acquisition::NoData { failures: vec![] }, || {
            vec![Project::new("C", "library")]
        });

        assert_eq!(catalog.origin, CatalogOrigin::Markup);
        assert_eq!(catalog.records[0].name, "C");
    }
}
