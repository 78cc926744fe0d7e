use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::aggregate::Project;

/// Summary numbers shown next to the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub count: usize,
    pub categories: usize,
    pub featured: usize,
    /// Distinct tags, compared case-sensitively.
    pub tags: usize,
}

pub fn compute_stats<'a, I>(records: I) -> CatalogStats
where
    I: IntoIterator<Item = &'a Project>,
{
    let mut count = 0;
    let mut featured = 0;
    let mut categories = HashSet::new();
    let mut tags = HashSet::new();

    for project in records {
        count += 1;
        if project.featured {
            featured += 1;
        }
        categories.insert(project.category.as_str());
        tags.extend(project.tags.iter().map(String::as_str));
    }

    CatalogStats {
        count,
        categories: categories.len(),
        featured,
        tags: tags.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Project> {
        vec![
            Project::new("A", "web").with_tags(["x"]).featured(true),
            Project::new("B", "tooling").with_tags(["x", "y"]),
        ]
    }

    #[test]
    fn test_compute_stats() {
        assert_eq!(
            compute_stats(&sample()),
            CatalogStats {
                count: 2,
                categories: 2,
                featured: 1,
                tags: 2,
            }
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(compute_stats(&Vec::<Project>::new()), CatalogStats::default());
    }

    #[test]
    fn test_tags_are_case_sensitive() {
        let records = vec![Project::new("A", "web").with_tags(["Rust", "rust", "rust"])];
        assert_eq!(compute_stats(&records).tags, 2);
    }

    #[test]
    fn test_idempotent() {
        let records = sample();
        assert_eq!(compute_stats(&records), compute_stats(&records));
    }
}
