//! # bookstall-store: Catalog and Cart Persistence
//!
//! The persistence layer for Bookstall. The core crate owns the cart
//! *logic*; this crate owns where the lines live between sessions and
//! where product records come from.
//!
//! ## Modules
//!
//! - [`catalog`] - Static product catalog with async read queries
//! - [`storage`] - The `CartStorage` seam and its implementations
//! - [`cart_store`] - The owned cart aggregate wired to storage
//! - [`error`] - Persistence error types
//!
//! ## Failure Policy
//!
//! Storage read/parse failures never surface to the shopper: hydration
//! falls back to an empty cart and failed saves are logged and dropped.
//! Catalog misses return `None`, never an error.

pub mod cart_store;
pub mod catalog;
pub mod error;
pub mod storage;

pub use cart_store::CartStore;
pub use catalog::Catalog;
pub use error::{StoreError, StoreResult};
pub use storage::{CartStorage, JsonFileStorage, MemoryStorage};

/// Name of the persisted cart blob.
///
/// [`storage::JsonFileStorage`] maps it to `<dir>/<name>.json`.
pub const CART_STORE_NAME: &str = "bookstall-cart";
