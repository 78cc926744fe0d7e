use axum::http::{header, Method};
use axum::{middleware, routing::get, Router};
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::{handlers, system};

/// All application routes. Anything not matched is served from `site_root`.
pub fn configure_routes(site_root: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/projects", get(handlers::a001_project::list))
        .fallback_service(ServeDir::new(site_root))
        .layer(middleware::from_fn(system::middleware::request_logger))
        .layer(cors)
}
