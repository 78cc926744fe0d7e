pub mod state;

use self::state::create_state;
use super::card::{EmptyPlaceholder, ProjectCard};
use crate::shared::dom_utils::{into_html_element, set_text_by_id};
use crate::shared::page_config::StatIds;
use contracts::domain::a001_project::{
    CardList, CatalogStats, CatalogView, FilterBar, FilterState, Project,
};
use leptos::prelude::*;
use std::sync::Arc;
use web_sys::Element;

const FILTER_ACTIVE_CLASS: &str = "filter-btn bg-brand-600 text-white border-brand-600";
const FILTER_INACTIVE_CLASS: &str = "filter-btn bg-slate-100 dark:bg-slate-700 text-slate-700 dark:text-slate-300 border-slate-300 dark:border-slate-600";

/// One button per filter control. `filter` is the single source of truth:
/// a button is active exactly when its state equals the signal.
#[component]
pub fn FilterButtons(bar: FilterBar, filter: RwSignal<FilterState>) -> impl IntoView {
    bar.controls()
        .iter()
        .cloned()
        .map(|control| {
            let target = control.filter.clone();
            let key = target.key().to_string();
            let is_active = move || filter.with(|f| *f == target);
            let pressed = is_active.clone();
            let on_click = {
                let target = control.filter.clone();
                move |_| filter.set(target.clone())
            };
            view! {
                <button
                    class=move || if is_active() { FILTER_ACTIVE_CLASS } else { FILTER_INACTIVE_CLASS }
                    data-filter=key
                    aria-pressed=move || pressed().to_string()
                    on:click=on_click
                >
                    {control.label}
                </button>
            }
        })
        .collect_view()
}

/// Cards for the current view, or the empty-state placeholder.
#[component]
pub fn ProjectCards(#[prop(into)] catalog: Signal<CatalogView>) -> impl IntoView {
    move || {
        catalog.with(|v| match v.cards() {
            CardList::Empty => view! { <EmptyPlaceholder /> }.into_any(),
            CardList::Cards(cards) => cards
                .iter()
                .cloned()
                .map(|project| view! { <ProjectCard project=project /> })
                .collect_view()
                .into_any(),
        })
    }
}

fn write_stats(ids: &StatIds, stats: CatalogStats) {
    set_text_by_id(&ids.total, &stats.count.to_string());
    set_text_by_id(&ids.categories, &stats.categories.to_string());
    set_text_by_id(&ids.featured, &stats.featured.to_string());
    set_text_by_id(&ids.tags, &stats.tags.to_string());
}

/// Mount the catalog page: filter buttons into `filter_surface` (when the
/// page has one), cards into `container`, stats into the stat elements.
///
/// `container` is cleared first; any fallback markup it held must already
/// have been read.
pub fn mount_catalog(
    container: Element,
    filter_surface: Option<Element>,
    records: Arc<[Project]>,
    stat_ids: StatIds,
) -> Result<(), String> {
    let container = into_html_element(container)?;
    let filter_surface = filter_surface.map(into_html_element).transpose()?;

    let owner = Owner::new();
    owner.with(move || {
        let filter = create_state();
        let bar = FilterBar::from_records(&records);
        let has_records = !records.is_empty();
        let catalog =
            Memo::new(move |_| CatalogView::with_filter(records.clone(), filter.get()));

        // An empty catalog gets the placeholder only, no filter buttons.
        if let Some(surface) = filter_surface.filter(|_| has_records) {
            surface.set_inner_html("");
            leptos::mount::mount_to(surface, move || {
                view! { <FilterButtons bar=bar filter=filter /> }
            })
            .forget();
        }

        container.set_inner_html("");
        leptos::mount::mount_to(container, move || {
            Effect::new(move |_| {
                let stats = catalog.with(|v| v.stats());
                log::debug!("catalog view updated: {stats:?}");
                write_stats(&stat_ids, stats);
            });
            view! { <ProjectCards catalog=catalog /> }
        })
        .forget();
    });
    // The page view lives as long as the document.
    std::mem::forget(owner);
    Ok(())
}
