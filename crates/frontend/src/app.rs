use crate::domain::a001_project::api::HttpCatalogSource;
use crate::domain::a001_project::markup::read_fallback;
use crate::domain::a001_project::ui::card::{FAILED_CLASS, FAILED_MESSAGE};
use crate::domain::a001_project::ui::highlights::mount_highlights;
use crate::domain::a001_project::ui::list::mount_catalog;
use crate::shared::dom_utils::{document, element_by_id};
use crate::shared::page_config::PageConfig;
use contracts::domain::a001_project::{acquire, resolve_catalog, CatalogOrigin};

/// Run the catalog pipeline once for this page load.
pub fn launch() {
    let config = PageConfig::from_document();
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = bootstrap(&config).await {
            log::error!("Failed to initialize projects: {e}");
            show_failure(&config);
        }
    });
}

async fn bootstrap(config: &PageConfig) -> Result<(), String> {
    let document = document()?;
    let container = document.get_element_by_id(&config.catalog_id);
    let grid = document.get_element_by_id(&config.highlights_id);

    if container.is_none() && grid.is_none() {
        log::debug!("no catalog surfaces on this page");
        return Ok(());
    }

    let acquisition = acquire(&HttpCatalogSource, &config.candidates).await;
    let catalog = resolve_catalog(acquisition, || read_fallback(container.as_ref()));

    match &catalog.origin {
        CatalogOrigin::Remote { location } => {
            log::info!("{} projects loaded from {location}", catalog.records.len())
        }
        CatalogOrigin::Markup => {
            log::warn!("{} projects rebuilt from page markup", catalog.records.len())
        }
    }

    if let Some(container) = container {
        mount_catalog(
            container,
            document.get_element_by_id(&config.filter_id),
            catalog.records.clone(),
            config.stats.clone(),
        )?;
    }

    if let Some(grid) = grid {
        mount_highlights(grid, &catalog, config.highlights_limit)?;
    }

    Ok(())
}

fn show_failure(config: &PageConfig) {
    if let Some(container) = element_by_id(&config.catalog_id) {
        container.set_inner_html(&format!("<p class=\"{FAILED_CLASS}\">{FAILED_MESSAGE}</p>"));
    }
}
