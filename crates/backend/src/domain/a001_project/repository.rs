use async_trait::async_trait;
use contracts::domain::a001_project::{
    acquire, resolve_catalog, Catalog, CatalogSource, Project, SourceFailure,
};
use once_cell::sync::OnceCell;
use serde_json::Value;
use std::sync::Arc;

/// Reads catalog documents from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileCatalogSource;

#[async_trait(?Send)]
impl CatalogSource for FileCatalogSource {
    async fn fetch(&self, location: &str) -> Result<Value, SourceFailure> {
        let contents = tokio::fs::read_to_string(location)
            .await
            .map_err(|e| SourceFailure::Unreachable(format!("{location}: {e}")))?;
        parse_document(&contents)
    }
}

pub fn parse_document(contents: &str) -> Result<Value, SourceFailure> {
    serde_json::from_str(contents).map_err(|e| SourceFailure::MalformedPayload(e.to_string()))
}

static CATALOG: OnceCell<Arc<[Project]>> = OnceCell::new();

/// Load the catalog from the first readable candidate file.
///
/// Returns `None` when every candidate failed; the server has no markup to
/// fall back to.
pub async fn load(candidates: &[String]) -> Option<Arc<[Project]>> {
    let acquisition = acquire(&FileCatalogSource, candidates).await;
    if acquisition.is_no_data() {
        tracing::error!("No catalog file could be read from {:?}", candidates);
        return None;
    }
    let catalog: Catalog = resolve_catalog(acquisition, Vec::new);
    tracing::info!("Catalog loaded: {} projects", catalog.records.len());
    Some(catalog.records)
}

/// Store the loaded catalog for the handlers. Only the first call has an effect.
pub fn install(records: Arc<[Project]>) {
    if CATALOG.set(records).is_err() {
        tracing::warn!("Catalog already installed, ignoring reload");
    }
}

pub fn get() -> Option<&'static Arc<[Project]>> {
    CATALOG.get()
}
