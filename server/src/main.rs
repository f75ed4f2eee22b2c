// server/src/main.rs

use storefront_server::config::AppConfig;
use storefront_server::errors::json_error_config;
use storefront_server::state::AppState;
use storefront_server::web::configure_app_routes;

use actix_cors::Cors;
use actix_web::{web as actix_data, App, HttpServer}; // Renamed web to actix_data
use std::sync::Arc;
use storefront::{CartStore, CatalogStore, SharedCart};
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

// Main function
#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting storefront server...");

  // Load application configuration
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg), // Arc the config for sharing
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      panic!("Configuration error: {}", e);
    }
  };

  // Seed the catalog and start with an empty cart. Both live for the whole
  // process; a restart resets the cart.
  let catalog = Arc::new(CatalogStore::seeded());
  let cart = SharedCart::new(CartStore::new());
  tracing::info!(products = catalog.len(), "Catalog seeded.");

  // Create AppState
  let app_state = AppState {
    catalog,
    cart,
    config: app_config.clone(), // Clone Arc for AppState
  };

  // Configure and Start Actix Web Server
  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .app_data(json_error_config())
      .wrap(Cors::permissive()) // The demo client calls cross-origin
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
