// server/src/web/routes.rs

use actix_web::web;
use serde_json::json;

use crate::state::AppState;

// Health/info payload for the root path: enumerates the API surface so a
// fresh checkout can poke the service and see what it speaks.
async fn service_info_handler(app_state: web::Data<AppState>) -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(json!({
    "status": "ok",
    "service": "storefront-server",
    "version": env!("CARGO_PKG_VERSION"),
    "baseUrl": app_state.config.app_base_url,
    "endpoints": {
      "GET /api/products": "List the product catalog",
      "GET /api/cart": "Read the cart (denormalized lines)",
      "POST /api/cart": "Add one unit of a product ({ productId })",
      "PUT /api/cart/{id}": "Set a cart line's quantity ({ quantity })",
      "DELETE /api/cart/{id}": "Remove a cart line",
      "DELETE /api/cart": "Clear the cart"
    }
  }))
}

// This function is called in `main.rs` (and by the integration tests) to
// configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    // Service Info / Health Route
    .route("/", web::get().to(service_info_handler))
    .service(
      web::scope("/api")
        // Catalog Routes
        .route(
          "/products",
          web::get().to(crate::web::handlers::product_handlers::list_products_handler),
        )
        // Cart Routes
        .service(
          web::scope("/cart")
            .service(
              web::resource("")
                .route(web::get().to(crate::web::handlers::cart_handlers::get_cart_handler))
                .route(web::post().to(crate::web::handlers::cart_handlers::add_item_handler))
                .route(web::delete().to(crate::web::handlers::cart_handlers::clear_cart_handler)),
            )
            .service(
              web::resource("/{product_id}")
                .route(web::put().to(crate::web::handlers::cart_handlers::update_quantity_handler))
                .route(web::delete().to(crate::web::handlers::cart_handlers::remove_item_handler)),
            ),
        ),
    );
}
