use contracts::domain::a001_project::FilterState;
use leptos::prelude::*;

/// Active filter of the catalog page; starts at "all".
pub fn create_state() -> RwSignal<FilterState> {
    RwSignal::new(FilterState::default())
}
