// core/src/cart.rs

//! The shopping cart: one mutable, process-lifetime list of cart lines.
//!
//! There is exactly one cart per process and it is shared by every caller;
//! there are no sessions and no per-user isolation. [`CartStore`] holds the
//! lines and the operations on them, [`SharedCart`] layers shared ownership
//! on top for the request-handling side.

use chrono::{DateTime, Utc};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use serde::Serialize;
use std::sync::Arc;

use crate::catalog::{CatalogStore, ProductId};
use crate::error::{StoreError, StoreResult};

/// One entry in the cart: a product and the quantity requested.
///
/// At most one line exists per product id; adding the same product again
/// increments the existing line instead of inserting a duplicate.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
  pub product_id: ProductId,
  pub quantity: i32,
  /// Set when the line is first inserted, unchanged by later increments.
  pub added_at: DateTime<Utc>,
}

/// A denormalized cart read: the line joined with the product fields the
/// client renders, so no second lookup is needed on the consumer side.
/// `id` is the product id; clients key removals on it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
  pub id: ProductId,
  pub name: String,
  pub price: f64,
  pub image: String,
  pub quantity: i32,
  pub added_at: DateTime<Utc>,
}

/// The cart itself: cart lines in insertion order.
///
/// All operations are synchronous and complete with a bounded number of
/// scans. Mutations validate against the catalog where noted but never
/// touch it; the catalog is read-only for the process lifetime.
#[derive(Debug, Default)]
pub struct CartStore {
  lines: Vec<CartLine>,
}

impl CartStore {
  pub fn new() -> Self {
    CartStore { lines: Vec::new() }
  }

  /// Raw lines in insertion order.
  pub fn lines(&self) -> &[CartLine] {
    &self.lines
  }

  pub fn len(&self) -> usize {
    self.lines.len()
  }

  pub fn is_empty(&self) -> bool {
    self.lines.is_empty()
  }

  /// Sum of all line quantities. This is the `cartCount` clients display.
  pub fn item_count(&self) -> i32 {
    self.lines.iter().map(|line| line.quantity).sum()
  }

  /// Denormalized view of the cart, joining each line with its product.
  /// Empty cart yields an empty vec. Lines are only ever created for
  /// products present in the catalog, so the join cannot drop entries.
  pub fn view(&self, catalog: &CatalogStore) -> Vec<CartLineView> {
    self
      .lines
      .iter()
      .filter_map(|line| {
        catalog.get(line.product_id).map(|product| CartLineView {
          id: product.id,
          name: product.name.clone(),
          price: product.price,
          image: product.image.clone(),
          quantity: line.quantity,
          added_at: line.added_at,
        })
      })
      .collect()
  }

  /// Adds one unit of `product_id` to the cart.
  ///
  /// Increments the existing line if there is one, otherwise inserts a new
  /// line with quantity 1 and the current timestamp. Fails with
  /// [`StoreError::UnknownProduct`] when the id is not in the catalog, in
  /// which case the cart is left untouched.
  ///
  /// Returns a snapshot of the affected line.
  pub fn add(&mut self, catalog: &CatalogStore, product_id: ProductId) -> StoreResult<CartLine> {
    if !catalog.contains(product_id) {
      return Err(StoreError::UnknownProduct { product_id });
    }

    if let Some(line) = self.lines.iter_mut().find(|line| line.product_id == product_id) {
      line.quantity += 1;
      tracing::debug!(product_id, quantity = line.quantity, "Cart line incremented.");
      return Ok(line.clone());
    }

    let line = CartLine {
      product_id,
      quantity: 1,
      added_at: Utc::now(),
    };
    self.lines.push(line.clone());
    tracing::debug!(product_id, "Cart line inserted.");
    Ok(line)
  }

  /// Removes the one line matching `product_id` and returns it.
  ///
  /// Fails with [`StoreError::LineNotFound`] when no line matches; removing
  /// an absent id is an error here, not a silent success.
  pub fn remove(&mut self, product_id: ProductId) -> StoreResult<CartLine> {
    let index = self
      .lines
      .iter()
      .position(|line| line.product_id == product_id)
      .ok_or(StoreError::LineNotFound { product_id })?;

    let line = self.lines.remove(index);
    tracing::debug!(product_id, "Cart line removed.");
    Ok(line)
  }

  /// Sets the matching line's quantity to `quantity` and returns a snapshot
  /// of it, or `None` (a silent no-op) when no line matches.
  ///
  /// Any integer is accepted, zero and negatives included; the line stays in
  /// the cart as-is rather than being removed, and `item_count` follows the
  /// raw sum.
  pub fn set_quantity(&mut self, product_id: ProductId, quantity: i32) -> Option<CartLine> {
    let line = self.lines.iter_mut().find(|line| line.product_id == product_id)?;
    line.quantity = quantity;
    tracing::debug!(product_id, quantity, "Cart line quantity set.");
    Some(line.clone())
  }

  /// Unconditionally empties the cart. Always succeeds.
  pub fn clear(&mut self) {
    let dropped = self.lines.len();
    self.lines.clear();
    tracing::debug!(dropped, "Cart cleared.");
  }
}

/// A handle to the one process-wide cart, providing shared ownership and
/// interior mutability using parking_lot::RwLock.
///
/// IMPORTANT: Lock guards obtained from this struct are blocking and MUST NOT
/// be held across `.await` suspension points in asynchronous code. Take the
/// write lock for the full read-modify-write of a single operation so the
/// operation is atomic with respect to other callers; nothing here spans
/// multiple operations.
#[derive(Debug)]
pub struct SharedCart(Arc<RwLock<CartStore>>);

impl SharedCart {
  pub fn new(store: CartStore) -> Self {
    SharedCart(Arc::new(RwLock::new(store)))
  }

  /// Acquires a read lock.
  /// The returned guard MUST be dropped before any `.await` point.
  pub fn read(&self) -> RwLockReadGuard<'_, CartStore> {
    self.0.read()
  }

  /// Acquires a write lock.
  /// The returned guard MUST be dropped before any `.await` point.
  pub fn write(&self) -> RwLockWriteGuard<'_, CartStore> {
    self.0.write()
  }

  /// Attempts to acquire a read lock without blocking.
  pub fn try_read(&self) -> Option<RwLockReadGuard<'_, CartStore>> {
    self.0.try_read()
  }

  /// Attempts to acquire a write lock without blocking.
  pub fn try_write(&self) -> Option<RwLockWriteGuard<'_, CartStore>> {
    self.0.try_write()
  }
}

impl Clone for SharedCart {
  fn clone(&self) -> Self {
    SharedCart(Arc::clone(&self.0))
  }
}

impl Default for SharedCart {
  fn default() -> Self {
    Self::new(CartStore::new())
  }
}
