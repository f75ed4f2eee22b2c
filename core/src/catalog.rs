// core/src/catalog.rs

//! The product catalog: a fixed set of purchasable digital goods.

use serde::Serialize;

/// Stable identifier of a product. Assigned by the seed data, never reused.
pub type ProductId = u32;

#[derive(Debug, Clone, Serialize)]
pub struct Product {
  pub id: ProductId,
  pub name: String,
  /// Unit price in dollars. Always positive.
  pub price: f64,
  /// URL of the product image.
  pub image: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub category: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  /// Average review rating on a 0-5 scale, when any reviews exist.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub rating: Option<f32>,
}

impl Product {
  pub fn new(id: ProductId, name: impl Into<String>, price: f64, image: impl Into<String>) -> Self {
    Product {
      id,
      name: name.into(),
      price,
      image: image.into(),
      category: None,
      description: None,
      rating: None,
    }
  }
}

/// Read-only store over the product list. Populated once at startup;
/// there are no create/update/delete operations for products.
#[derive(Debug, Clone)]
pub struct CatalogStore {
  products: Vec<Product>,
}

impl CatalogStore {
  pub fn new(products: Vec<Product>) -> Self {
    tracing::debug!(count = products.len(), "Catalog store initialized.");
    CatalogStore { products }
  }

  /// The demo catalog the storefront ships with.
  pub fn seeded() -> Self {
    CatalogStore::new(vec![
      Product::new(1, "UI Kit Template", 25.0, "https://picsum.photos/200"),
      Product::new(2, "Digital Illustration", 15.0, "https://picsum.photos/201"),
      Product::new(3, "Logo Pack", 10.0, "https://picsum.photos/202"),
    ])
  }

  /// Returns the full fixed product set. Never fails.
  pub fn list(&self) -> &[Product] {
    &self.products
  }

  pub fn get(&self, id: ProductId) -> Option<&Product> {
    self.products.iter().find(|p| p.id == id)
  }

  pub fn contains(&self, id: ProductId) -> bool {
    self.get(id).is_some()
  }

  pub fn len(&self) -> usize {
    self.products.len()
  }

  pub fn is_empty(&self) -> bool {
    self.products.is_empty()
  }
}
