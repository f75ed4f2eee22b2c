// server/src/lib.rs

//! HTTP service for the digital-goods storefront.
//!
//! Maps the catalog and cart store operations onto a JSON-over-HTTP surface:
//! request parsing and validation happen here, one store operation runs under
//! one lock acquisition, and the result is translated back into status codes
//! and `{success, message}` bodies. No other business logic belongs in this
//! crate; the stores themselves live in the `storefront` library.

// Declare modules for the application
pub mod config;
pub mod errors;
pub mod state;
pub mod web;

// Re-export key items so the binary and the integration tests can assemble
// the application the same way.
pub use crate::config::AppConfig;
pub use crate::errors::{AppError, Result};
pub use crate::state::AppState;
pub use crate::web::configure_app_routes;
