//! Search orchestration against the upstream provider

mod executor;
mod models;
mod pagination;

pub use executor::CompanySearch;
pub use models::{EmployeePage, SearchPage, SearchRequest};
pub use pagination::{page_bounds, slice_page};

use thiserror::Error;

/// Failures surfaced by the search flows
#[derive(Debug, Error)]
pub enum SearchError {
    /// The filter-search endpoint returned something other than an ID list
    #[error("Unexpected response format from API")]
    UnexpectedFormat,
    /// Transport or upstream HTTP failure
    #[error(transparent)]
    Upstream(#[from] anyhow::Error),
}
