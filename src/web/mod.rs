//! Web server module
//!
//! Provides the HTTP API and the dropdown index page.

mod handlers;
mod routes;
mod state;
mod templates;

pub use routes::create_router;
pub use state::AppState;
pub use templates::Templates;
