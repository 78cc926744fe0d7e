use super::repository;
use contracts::domain::a001_project::{Project, ProjectListQuery, ProjectListResponse};

/// Projects matching `query`, or `None` when no catalog was loaded.
pub fn list(query: &ProjectListQuery) -> Option<ProjectListResponse> {
    let records = repository::get()?;
    Some(list_from(records, query))
}

pub fn list_from(records: &[Project], query: &ProjectListQuery) -> ProjectListResponse {
    let data = query.apply(records);
    tracing::debug!(
        "projects query {:?} -> {} of {} records",
        query,
        data.len(),
        records.len()
    );
    ProjectListResponse::ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_from_counts_filtered_data() {
        let records = vec![
            Project::new("A", "web").featured(true),
            Project::new("B", "tooling"),
        ];
        let query = ProjectListQuery {
            category: Some("tooling".into()),
            ..Default::default()
        };

        let response = list_from(&records, &query);

        assert!(response.success);
        assert_eq!(response.count, 1);
        assert_eq!(response.data[0].name, "B");
    }
}
