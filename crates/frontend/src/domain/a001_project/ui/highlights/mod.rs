use super::card::{EmptyPlaceholder, ProjectCard};
use crate::shared::dom_utils::into_html_element;
use contracts::domain::a001_project::{highlights, render_plan, CardList, Catalog, Project};
use leptos::prelude::*;
use web_sys::Element;

#[component]
pub fn HighlightsGrid(projects: Vec<Project>) -> impl IntoView {
    match render_plan(&projects) {
        CardList::Empty => view! { <EmptyPlaceholder /> }.into_any(),
        CardList::Cards(cards) => cards
            .iter()
            .cloned()
            .map(|project| view! { <ProjectCard project=project /> })
            .collect_view()
            .into_any(),
    }
}

/// Home page grid: the first featured projects of a fetched, non-empty
/// catalog.
///
/// Left untouched otherwise, so the page's static content stays visible.
pub fn mount_highlights(grid: Element, catalog: &Catalog, limit: usize) -> Result<(), String> {
    if !catalog.is_remote() || catalog.is_empty() {
        log::debug!("highlights skipped: no fetched projects");
        return Ok(());
    }
    let projects = highlights(&catalog.records, limit);

    let grid = into_html_element(grid)?;
    grid.set_inner_html("");
    leptos::mount::mount_to(grid, move || view! { <HighlightsGrid projects=projects /> })
        .forget();
    Ok(())
}
