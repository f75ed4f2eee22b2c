// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use storefront::{CatalogStore, Product};

/// Two-product catalog used by the cart tests.
pub fn demo_catalog() -> CatalogStore {
  CatalogStore::new(vec![
    Product::new(1, "Premium UI Kit", 49.0, "https://picsum.photos/210"),
    Product::new(2, "Icon Bundle", 29.0, "https://picsum.photos/211"),
  ])
}

/// An id no demo catalog contains.
pub const MISSING_PRODUCT_ID: u32 = 99;
