// tests/cart_store_tests.rs
mod common; // Reference the common module

use common::*;
use storefront::{CartStore, SharedCart, StoreError};

#[test]
fn test_add_inserts_new_line_with_quantity_one() {
  let catalog = demo_catalog();
  let mut cart = CartStore::new();

  let line = cart.add(&catalog, 1).expect("add of a catalog product succeeds");

  assert_eq!(line.product_id, 1);
  assert_eq!(line.quantity, 1);
  assert_eq!(cart.len(), 1);
  assert_eq!(cart.item_count(), 1);
  assert_eq!(cart.lines()[0].added_at, line.added_at);
}

#[test]
fn test_add_increments_existing_line_by_exactly_one() {
  let catalog = demo_catalog();
  let mut cart = CartStore::new();

  cart.add(&catalog, 1).unwrap();
  let before = cart.lines()[0].clone();

  let line = cart.add(&catalog, 1).unwrap();

  assert_eq!(line.quantity, before.quantity + 1);
  assert_eq!(cart.len(), 1, "repeated add must not duplicate the line");
  assert_eq!(cart.item_count(), 2);
  // The first-insert timestamp is unchanged by later increments.
  assert_eq!(cart.lines()[0].added_at, before.added_at);
}

#[test]
fn test_add_unknown_product_fails_and_never_mutates_the_cart() {
  let catalog = demo_catalog();
  let mut cart = CartStore::new();
  cart.add(&catalog, 1).unwrap();

  let err = cart.add(&catalog, MISSING_PRODUCT_ID).unwrap_err();

  assert_eq!(
    err,
    StoreError::UnknownProduct {
      product_id: MISSING_PRODUCT_ID
    }
  );
  assert_eq!(cart.len(), 1);
  assert_eq!(cart.item_count(), 1);
}

#[test]
fn test_remove_removes_exactly_the_matching_line() {
  let catalog = demo_catalog();
  let mut cart = CartStore::new();
  cart.add(&catalog, 1).unwrap();
  cart.add(&catalog, 2).unwrap();

  let removed = cart.remove(1).expect("line for product 1 exists");

  assert_eq!(removed.product_id, 1);
  assert_eq!(cart.len(), 1);
  assert_eq!(cart.lines()[0].product_id, 2);
}

#[test]
fn test_remove_missing_line_is_an_error() {
  let catalog = demo_catalog();
  let mut cart = CartStore::new();
  cart.add(&catalog, 1).unwrap();

  let err = cart.remove(MISSING_PRODUCT_ID).unwrap_err();

  assert_eq!(
    err,
    StoreError::LineNotFound {
      product_id: MISSING_PRODUCT_ID
    }
  );
  assert_eq!(cart.len(), 1, "a failed remove must not touch the cart");
}

#[test]
fn test_set_quantity_updates_the_matching_line() {
  let catalog = demo_catalog();
  let mut cart = CartStore::new();
  cart.add(&catalog, 1).unwrap();

  let updated = cart.set_quantity(1, 5).expect("line for product 1 exists");

  assert_eq!(updated.quantity, 5);
  assert_eq!(cart.item_count(), 5);
}

#[test]
fn test_set_quantity_on_absent_id_is_a_silent_noop() {
  let catalog = demo_catalog();
  let mut cart = CartStore::new();
  cart.add(&catalog, 1).unwrap();

  assert!(cart.set_quantity(MISSING_PRODUCT_ID, 5).is_none());
  assert_eq!(cart.len(), 1);
  assert_eq!(cart.item_count(), 1);
}

#[test]
fn test_set_quantity_accepts_zero_and_negative_without_removing_the_line() {
  let catalog = demo_catalog();
  let mut cart = CartStore::new();
  cart.add(&catalog, 1).unwrap();
  cart.add(&catalog, 2).unwrap();

  cart.set_quantity(1, 0);
  cart.set_quantity(2, -3);

  // Recorded behavior: the lines stay, and the count follows the raw sum.
  assert_eq!(cart.len(), 2);
  assert_eq!(cart.lines()[0].quantity, 0);
  assert_eq!(cart.lines()[1].quantity, -3);
  assert_eq!(cart.item_count(), -3);
}

#[test]
fn test_clear_empties_the_cart_regardless_of_prior_state() {
  let catalog = demo_catalog();
  let mut cart = CartStore::new();

  cart.clear(); // Clearing an empty cart succeeds too.
  assert!(cart.is_empty());

  cart.add(&catalog, 1).unwrap();
  cart.add(&catalog, 1).unwrap();
  cart.add(&catalog, 2).unwrap();
  cart.clear();

  assert!(cart.is_empty());
  assert_eq!(cart.item_count(), 0);
  assert!(cart.view(&catalog).is_empty());
}

#[test]
fn test_view_joins_product_fields_onto_each_line() {
  let catalog = demo_catalog();
  let mut cart = CartStore::new();
  cart.add(&catalog, 2).unwrap();
  cart.add(&catalog, 2).unwrap();

  let view = cart.view(&catalog);

  assert_eq!(view.len(), 1);
  assert_eq!(view[0].id, 2);
  assert_eq!(view[0].name, "Icon Bundle");
  assert_eq!(view[0].price, 29.0);
  assert_eq!(view[0].image, "https://picsum.photos/211");
  assert_eq!(view[0].quantity, 2);
  assert_eq!(view[0].added_at, cart.lines()[0].added_at);
}

#[test]
fn test_view_is_idempotent_without_intervening_mutation() {
  let catalog = demo_catalog();
  let mut cart = CartStore::new();
  cart.add(&catalog, 1).unwrap();
  cart.add(&catalog, 2).unwrap();

  let first = serde_json::to_value(cart.view(&catalog)).unwrap();
  let second = serde_json::to_value(cart.view(&catalog)).unwrap();

  assert_eq!(first, second);
}

#[test]
fn test_view_preserves_insertion_order() {
  let catalog = demo_catalog();
  let mut cart = CartStore::new();
  cart.add(&catalog, 2).unwrap();
  cart.add(&catalog, 1).unwrap();
  cart.add(&catalog, 2).unwrap();

  let ids: Vec<u32> = cart.view(&catalog).iter().map(|line| line.id).collect();
  assert_eq!(ids, vec![2, 1]);
}

// The end-to-end store walk: add(1) twice, add(2), remove(1), clear, with
// the cart and count checked at every milestone.
#[test]
fn test_full_cart_walkthrough() {
  let catalog = demo_catalog();
  let mut cart = CartStore::new();

  cart.add(&catalog, 1).unwrap();
  assert_eq!(cart.len(), 1);
  assert_eq!(cart.lines()[0].quantity, 1);
  assert_eq!(cart.item_count(), 1);

  cart.add(&catalog, 1).unwrap();
  assert_eq!(cart.len(), 1);
  assert_eq!(cart.lines()[0].quantity, 2);
  assert_eq!(cart.item_count(), 2);

  cart.add(&catalog, 2).unwrap();
  assert_eq!(cart.len(), 2);
  assert_eq!(cart.item_count(), 3);

  cart.remove(1).unwrap();
  assert_eq!(cart.len(), 1);
  assert_eq!(cart.lines()[0].product_id, 2);
  assert_eq!(cart.item_count(), 1);

  cart.clear();
  assert!(cart.is_empty());
  assert_eq!(cart.item_count(), 0);
}

#[test]
fn test_shared_cart_clones_see_the_same_cart() {
  let catalog = demo_catalog();
  let shared = SharedCart::default();
  let other = shared.clone();

  shared.write().add(&catalog, 1).unwrap();

  // Every handle reaches the one process-wide cart.
  assert_eq!(other.read().item_count(), 1);

  other.write().clear();
  assert!(shared.read().is_empty());
}

#[test]
fn test_shared_cart_try_write_fails_while_a_reader_holds_the_lock() {
  let shared = SharedCart::default();

  let guard = shared.read();
  assert!(shared.try_write().is_none());
  drop(guard);

  assert!(shared.try_write().is_some());
}
