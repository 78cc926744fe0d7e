//! Project catalog: records, acquisition, markup fallback and the
//! presentation model shared by the frontend and the backend.

pub mod acquisition;
pub mod aggregate;
pub mod catalog;
pub mod dto;
pub mod error;
pub mod filter;
pub mod markup;
pub mod stats;
pub mod view;

pub use acquisition::{acquire, Acquisition, CandidateFailure, CatalogSource};
pub use aggregate::{Project, ProjectDto};
pub use catalog::{resolve_catalog, Catalog, CatalogOrigin};
pub use dto::{ProjectListQuery, ProjectListResponse};
pub use error::{RecordError, SourceFailure};
pub use filter::{FilterBar, FilterControl, FilterState};
pub use stats::{compute_stats, CatalogStats};
pub use view::{highlights, render_plan, CardList, CatalogView};
