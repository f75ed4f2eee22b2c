// core/src/error.rs
use thiserror::Error;

use crate::catalog::ProductId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
  #[error("Product not found in catalog: {product_id}")]
  UnknownProduct { product_id: ProductId },

  #[error("No cart line for product: {product_id}")]
  LineNotFound { product_id: ProductId },
}

pub type StoreResult<T, E = StoreError> = std::result::Result<T, E>;
