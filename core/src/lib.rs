// src/lib.rs

//! Storefront: catalog and in-memory cart stores for a digital-goods shop.
//!
//! This crate holds the domain side of the storefront:
//!  - A read-only [`CatalogStore`] seeded once at startup.
//!  - A mutable [`CartStore`] with increment-or-insert add semantics.
//!  - Denormalized cart reads that join product fields onto each line.
//!  - A [`SharedCart`] handle giving the request layer clonable shared
//!    ownership of the one process-wide cart.
//!
//! The stores are synchronous; every operation completes with a bounded
//! number of scans over small in-memory vectors. Sharing and locking are
//! the caller's concern and live entirely in `SharedCart`.

// Declare modules according to the planned structure
pub mod catalog;
pub mod cart;
pub mod error;

// --- Re-exports for the Public API ---

// Core types that users will interact with frequently
pub use crate::catalog::{CatalogStore, Product, ProductId};
pub use crate::cart::{CartLine, CartLineView, CartStore, SharedCart};

pub use crate::error::{StoreError, StoreResult};
