use std::collections::BTreeSet;

use super::aggregate::Project;

pub const ALL_PROJECTS_LABEL: &str = "All Projects";
/// `data-filter` value of the "all" control.
pub const ALL_FILTER_KEY: &str = "all";

/// The one active category selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum FilterState {
    #[default]
    All,
    Category(String),
}

impl FilterState {
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            FilterState::All => true,
            FilterState::Category(category) => project.category == *category,
        }
    }

    /// Filtered view over `records`, source order kept.
    ///
    /// The iterator borrows only `records`, not the filter.
    pub fn apply<'r>(&self, records: &'r [Project]) -> impl Iterator<Item = &'r Project> + 'r {
        let state = self.clone();
        records.iter().filter(move |p| state.matches(p))
    }

    pub fn key(&self) -> &str {
        match self {
            FilterState::All => ALL_FILTER_KEY,
            FilterState::Category(category) => category,
        }
    }
}

/// Distinct categories, ascending.
pub fn categories(records: &[Project]) -> Vec<String> {
    records
        .iter()
        .map(|p| p.category.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Button text for a category: first character uppercased.
pub fn category_label(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterControl {
    pub filter: FilterState,
    pub label: String,
}

/// Filter controls derived from a record set.
///
/// Controls hold no active flag of their own: the bar stores a single
/// [`FilterState`] and every control is active iff it carries that state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBar {
    controls: Vec<FilterControl>,
    active: FilterState,
}

impl FilterBar {
    pub fn from_records(records: &[Project]) -> Self {
        let controls = std::iter::once(FilterControl {
            filter: FilterState::All,
            label: ALL_PROJECTS_LABEL.to_string(),
        })
        .chain(categories(records).into_iter().map(|category| FilterControl {
            label: category_label(&category),
            filter: FilterState::Category(category),
        }))
        .collect();

        Self {
            controls,
            active: FilterState::All,
        }
    }

    pub fn controls(&self) -> &[FilterControl] {
        &self.controls
    }

    pub fn active(&self) -> &FilterState {
        &self.active
    }

    pub fn is_active(&self, control: &FilterControl) -> bool {
        control.filter == self.active
    }

    pub fn labels(&self) -> Vec<&str> {
        self.controls.iter().map(|c| c.label.as_str()).collect()
    }

    /// Switch the active control. Unknown filters are refused and leave the
    /// current one in place.
    pub fn activate(&mut self, filter: FilterState) -> bool {
        if !self.controls.iter().any(|c| c.filter == filter) {
            log::warn!("ignoring unknown filter {:?}", filter.key());
            return false;
        }
        self.active = filter;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Project> {
        vec![
            Project::new("A", "web"),
            Project::new("B", "tooling"),
            Project::new("C", "web"),
            Project::new("D", "game"),
        ]
    }

    #[test]
    fn test_controls_sorted_with_leading_all() {
        let bar = FilterBar::from_records(&sample());
        assert_eq!(bar.labels(), vec!["All Projects", "Game", "Tooling", "Web"]);
        assert_eq!(bar.active(), &FilterState::All);
    }

    #[test]
    fn test_exactly_one_active_after_any_activation() {
        let mut bar = FilterBar::from_records(&sample());
        let sequence = [
            FilterState::Category("web".into()),
            FilterState::Category("missing".into()),
            FilterState::Category("game".into()),
            FilterState::All,
            FilterState::Category("tooling".into()),
        ];
        for filter in sequence {
            bar.activate(filter);
            let active = bar.controls().iter().filter(|c| bar.is_active(c)).count();
            assert_eq!(active, 1);
        }
        assert_eq!(bar.active(), &FilterState::Category("tooling".into()));
    }

    #[test]
    fn test_unknown_filter_refused() {
        let mut bar = FilterBar::from_records(&sample());
        bar.activate(FilterState::Category("web".into()));
        assert!(!bar.activate(FilterState::Category("Web".into())));
        assert_eq!(bar.active(), &FilterState::Category("web".into()));
    }

    #[test]
    fn test_exact_match_not_containment() {
        let records = vec![Project::new("A", "web"), Project::new("B", "webgl")];
        let filter = FilterState::Category("web".into());
        let names: Vec<&str> = filter.apply(&records).map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["A"]);
    }

    #[test]
    fn test_union_of_category_views_reconstructs_source() {
        let records = sample();
        let mut rebuilt: Vec<&Project> = Vec::new();
        for category in categories(&records) {
            let filter = FilterState::Category(category.clone());
            let view: Vec<&Project> = filter.apply(&records).collect();
            assert!(view.iter().all(|p| p.category == category));
            let source_order: Vec<&Project> =
                records.iter().filter(|p| p.category == category).collect();
            assert_eq!(view, source_order);
            rebuilt.extend(view);
        }
        assert_eq!(rebuilt.len(), records.len());
        for project in &records {
            assert!(rebuilt.contains(&project));
        }
    }

    #[test]
    fn test_filtered_view_outlives_filter() {
        let records = sample();
        let view: Vec<&Project> = {
            let filter = FilterState::Category("web".into());
            filter.apply(&records).collect()
        };
        assert!(view.iter().all(|p| p.category == "web"));
        assert!(!view.is_empty());
    }

    #[test]
    fn test_category_label() {
        assert_eq!(category_label("tooling"), "Tooling");
        assert_eq!(category_label("éclair"), "Éclair");
        assert_eq!(category_label(""), "");
        assert_eq!(FilterState::All.key(), "all");
    }
}
