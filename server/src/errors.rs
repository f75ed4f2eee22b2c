// server/src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use storefront::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Store Error: {source}")]
  Store {
    #[from] // Allows conversion from storefront::StoreError
    source: StoreError,
  },

  #[error("Internal Server Error: {0}")]
  Internal(String), // For miscellaneous errors
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::Validation(m) => HttpResponse::BadRequest().json(json!({"success": false, "message": m})),
      AppError::NotFound(m) => HttpResponse::NotFound().json(json!({"success": false, "message": m})),
      // 500-class responses keep the wire message generic; the detail is in the log line above.
      AppError::Config(_) => {
        HttpResponse::InternalServerError().json(json!({"success": false, "message": "Configuration issue"}))
      }
      AppError::Store { source } => match source {
        StoreError::UnknownProduct { .. } | StoreError::LineNotFound { .. } => {
          HttpResponse::NotFound().json(json!({"success": false, "message": source.to_string()}))
        }
      },
      AppError::Internal(_) => {
        HttpResponse::InternalServerError().json(json!({"success": false, "message": "An internal error occurred"}))
      }
    }
  }
}

/// JSON extractor configuration routing body deserialization failures through
/// [`AppError::Validation`], so a missing or malformed field gets the same
/// `{success: false, message}` shape as every other rejection.
pub fn json_error_config() -> actix_web::web::JsonConfig {
  actix_web::web::JsonConfig::default()
    .error_handler(|err, _req| AppError::Validation(format!("Invalid request body: {}", err)).into())
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
