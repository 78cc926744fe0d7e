use async_trait::async_trait;
use contracts::domain::a001_project::{CatalogSource, SourceFailure};
use gloo_net::http::Request;
use serde_json::Value;
use web_sys::RequestCache;

/// Fetches the catalog document over HTTP, bypassing the browser cache so a
/// fresh deployment is never shadowed by a stale copy.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpCatalogSource;

#[async_trait(?Send)]
impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self, location: &str) -> Result<Value, SourceFailure> {
        let response = Request::get(location)
            .cache(RequestCache::NoStore)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| SourceFailure::Unreachable(format!("Request failed: {}", e)))?;

        if !response.ok() {
            return Err(SourceFailure::InvalidStatus(response.status()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| SourceFailure::MalformedPayload(format!("Failed to parse response: {}", e)))
    }
}
