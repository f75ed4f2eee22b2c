// server/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let products = app_state.catalog.list();

  info!("Successfully listed {} products.", products.len());

  // The catalog is fixed for the process lifetime; the response is the bare
  // product array the demo client consumes.
  Ok(HttpResponse::Ok().json(products))
}
