// server/src/state.rs
use crate::config::AppConfig;
use std::sync::Arc;
use storefront::{CatalogStore, SharedCart};

/// Shared application state, cloned into every worker.
///
/// The stores are injected here rather than living as module globals: the
/// catalog is immutable behind an `Arc`, and the one process-wide cart is
/// reached through its `SharedCart` handle.
#[derive(Clone)]
pub struct AppState {
  pub catalog: Arc<CatalogStore>,
  pub cart: SharedCart,
  pub config: Arc<AppConfig>, // Share loaded config
}
