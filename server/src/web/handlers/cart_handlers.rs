// server/src/web/handlers/cart_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;
use storefront::ProductId;

// --- Request DTOs ---

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequestPayload {
  // Optional so a missing field surfaces as our own 400, not a serde reject.
  pub product_id: Option<ProductId>,
}

#[derive(Deserialize, Debug)]
pub struct UpdateQuantityRequestPayload {
  pub quantity: i32,
}

// --- Handler Implementations ---
//
// Mutation responses carry the full updated cart and the item count, so the
// client can re-render from the response without issuing a second read. The
// snapshot is taken under the same write guard as the mutation; lock guards
// never cross an `.await`.

#[instrument(name = "handler::get_cart", skip(app_state))]
pub async fn get_cart_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let view = app_state.cart.read().view(&app_state.catalog);
  Ok(HttpResponse::Ok().json(view))
}

#[instrument(
    name = "handler::add_item",
    skip(app_state, payload),
    fields(product_id = ?payload.product_id)
)]
pub async fn add_item_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<AddItemRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let product_id = payload
    .product_id
    .ok_or_else(|| AppError::Validation("productId is required".to_string()))?;

  // Resolve the product up front; the 404 carries the id, the 200 the name.
  let product = app_state.catalog.get(product_id).cloned().ok_or_else(|| {
    warn!("Add to cart rejected: product {} is not in the catalog.", product_id);
    AppError::NotFound(format!("Product with ID {} not found.", product_id))
  })?;

  let (line, cart_view, cart_count) = {
    let mut cart = app_state.cart.write();
    let line = cart.add(&app_state.catalog, product_id)?;
    (line, cart.view(&app_state.catalog), cart.item_count())
  };

  info!(
    "Added product {} to cart. Line quantity: {}, cart count: {}.",
    product_id, line.quantity, cart_count
  );

  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "message": format!("{} added to cart", product.name),
      "cart": cart_view,
      "cartCount": cart_count
  })))
}

#[instrument(name = "handler::remove_item", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn remove_item_handler(
  app_state: web::Data<AppState>,
  path: web::Path<ProductId>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  // Removing an id with no line is a 404.
  let (removed, cart_view, cart_count) = {
    let mut cart = app_state.cart.write();
    let removed = cart.remove(product_id)?;
    (removed, cart.view(&app_state.catalog), cart.item_count())
  };

  let product_name = app_state
    .catalog
    .get(removed.product_id)
    .map(|p| p.name.clone())
    .unwrap_or_else(|| "Item".to_string());

  info!("Removed product {} from cart. Cart count: {}.", product_id, cart_count);

  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "message": format!("{} removed from cart", product_name),
      "cart": cart_view,
      "cartCount": cart_count
  })))
}

#[instrument(
    name = "handler::update_quantity",
    skip(app_state, path, payload),
    fields(product_id = %path.as_ref(), quantity = payload.quantity)
)]
pub async fn update_quantity_handler(
  app_state: web::Data<AppState>,
  path: web::Path<ProductId>,
  payload: web::Json<UpdateQuantityRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  let (updated, cart_view, cart_count) = {
    let mut cart = app_state.cart.write();
    let updated = cart.set_quantity(product_id, payload.quantity);
    (updated, cart.view(&app_state.catalog), cart.item_count())
  };

  match updated {
    Some(line) => info!(
      "Set quantity of product {} to {}. Cart count: {}.",
      product_id, line.quantity, cart_count
    ),
    // No matching line is a silent no-op on the wire.
    None => warn!("Quantity update targeted product {} with no cart line; nothing changed.", product_id),
  }

  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "cart": cart_view,
      "cartCount": cart_count
  })))
}

#[instrument(name = "handler::clear_cart", skip(app_state))]
pub async fn clear_cart_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  app_state.cart.write().clear();

  info!("Cart cleared.");

  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "message": "Cart cleared",
      "cart": [],
      "cartCount": 0
  })))
}
