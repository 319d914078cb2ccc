//! Corelens: a thin proxy server for the Coresignal company/employee data API
//!
//! Accepts search requests from a web client, forwards them to the upstream
//! data provider with pagination and rate-limit delays, and reshapes the
//! responses into a simplified JSON contract.

pub mod catalog;
pub mod config;
pub mod network;
pub mod provider;
pub mod search;
pub mod translator;
pub mod web;

pub use config::Settings;
pub use search::{CompanySearch, SearchError};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hard cap on companies collected per page, regardless of the client's limit
pub const MAX_PAGE_SIZE: usize = 3;

/// Hard cap on employee records collected per lookup
pub const MAX_EMPLOYEE_FETCH: usize = 5;
