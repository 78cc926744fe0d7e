use axum::{extract::Query, http::StatusCode, Json};
use contracts::domain::a001_project::{ProjectListQuery, ProjectListResponse};

use crate::domain::a001_project;

/// GET /api/projects?category=&featured=&limit=
pub async fn list(
    Query(query): Query<ProjectListQuery>,
) -> (StatusCode, Json<ProjectListResponse>) {
    match a001_project::service::list(&query) {
        Some(response) => (StatusCode::OK, Json(response)),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ProjectListResponse::unavailable()),
        ),
    }
}
