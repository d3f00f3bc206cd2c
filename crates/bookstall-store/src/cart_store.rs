//! # Cart Store
//!
//! The authoritative record of what the shopper intends to purchase:
//! the cart aggregate wired to a storage adapter.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Cart Store Lifecycle                            │
//! │                                                                     │
//! │  open(storage)                                                      │
//! │       │                                                             │
//! │       ├── blob present & valid ──► hydrated cart                    │
//! │       ├── blob absent ───────────► empty cart                       │
//! │       └── blob corrupt ──────────► empty cart (warn-logged)         │
//! │                                                                     │
//! │  add / remove / set_quantity / clear                                │
//! │       │                                                             │
//! │       └── mutate cart, then persist the full line list              │
//! │           (a failed save is warn-logged, never surfaced)            │
//! │                                                                     │
//! │  Consumers never touch lines directly; every mutation goes          │
//! │  through this store.                                                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Sharing
//! The store is single-owner by design; the specified execution model
//! is one user session reacting to discrete events. Callers that share
//! it across tasks must wrap it in a mutex.

use tracing::{debug, warn};

use bookstall_core::cart::{Cart, CartTotals};
use bookstall_core::error::CoreResult;
use bookstall_core::money::TaxRate;
use bookstall_core::types::Product;

use crate::storage::CartStorage;

/// The cart aggregate plus its persistence adapter.
#[derive(Debug)]
pub struct CartStore<S: CartStorage> {
    cart: Cart,
    storage: S,
}

impl<S: CartStorage> CartStore<S> {
    /// Opens the store, hydrating from storage.
    ///
    /// Absent or corrupt persisted data yields an empty cart; the
    /// failure is logged and never surfaced to the shopper.
    pub fn open(storage: S) -> Self {
        let cart = match storage.load() {
            Ok(Some(lines)) => {
                debug!(lines = lines.len(), "Cart hydrated from storage");
                Cart::from_lines(lines)
            }
            Ok(None) => Cart::new(),
            Err(err) => {
                warn!(error = %err, "Failed to hydrate cart, starting empty");
                Cart::new()
            }
        };

        CartStore { cart, storage }
    }

    /// Adds a product (merging with an existing line), then persists.
    pub fn add(&mut self, product: &Product, quantity: u32) -> CoreResult<()> {
        self.cart.add(product, quantity)?;
        self.persist();
        Ok(())
    }

    /// Removes the line for `product_id` (no-op if absent), then persists.
    pub fn remove(&mut self, product_id: &str) {
        self.cart.remove(product_id);
        self.persist();
    }

    /// Sets a line's quantity absolutely (0 removes), then persists.
    pub fn set_quantity(&mut self, product_id: &str, quantity: u32) {
        self.cart.set_quantity(product_id, quantity);
        self.persist();
    }

    /// Empties the cart unconditionally, then persists.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.persist();
    }

    /// Read access to the cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// True iff the cart holds no lines.
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Current totals at the given tax rate.
    pub fn totals(&self, rate: TaxRate) -> CartTotals {
        CartTotals::compute(&self.cart, rate)
    }

    /// Writes the full line list to storage. Failures are logged and
    /// dropped: worst case is a stale blob, not a broken session.
    fn persist(&mut self) {
        if let Err(err) = self.storage.save(self.cart.lines()) {
            warn!(error = %err, "Failed to persist cart");
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{JsonFileStorage, MemoryStorage};
    use bookstall_core::SALES_TAX_BPS;

    fn test_book(id: &str, price_minor: i64) -> Product {
        Product::new(id, &format!("Book {}", id), "Test Author", price_minor)
    }

    fn pairs<S: CartStorage>(store: &CartStore<S>) -> Vec<(String, u32)> {
        store
            .cart()
            .lines()
            .iter()
            .map(|l| (l.product.id.clone(), l.quantity))
            .collect()
    }

    #[test]
    fn test_open_with_no_blob_starts_empty() {
        let store = CartStore::open(MemoryStorage::new());
        assert!(store.is_empty());
    }

    #[test]
    fn test_open_with_corrupt_blob_starts_empty() {
        let store = CartStore::open(MemoryStorage::with_blob("{{{ not json"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_every_mutation_persists() {
        let mut store = CartStore::open(MemoryStorage::new());
        store.add(&test_book("1", 1000), 1).unwrap();
        assert!(store.storage.blob().is_some());

        store.set_quantity("1", 4);
        let after_update = store.storage.blob().unwrap().to_string();
        assert!(after_update.contains("\"quantity\":4"));

        store.clear();
        assert_eq!(store.storage.blob(), Some("[]"));
    }

    #[test]
    fn test_persist_then_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();

        let mut store = CartStore::open(JsonFileStorage::new(dir.path(), "bookstall-cart"));
        store.add(&test_book("latest-1", 10_000), 2).unwrap();
        store.add(&test_book("pride-3", 14_000), 1).unwrap();
        store.set_quantity("latest-1", 3);
        let expected = pairs(&store);

        // A fresh session over the same blob sees the same cart
        let reloaded = CartStore::open(JsonFileStorage::new(dir.path(), "bookstall-cart"));
        assert_eq!(pairs(&reloaded), expected);
        assert_eq!(reloaded.cart().subtotal().minor(), 44_000);
    }

    #[test]
    fn test_totals_passthrough() {
        let mut store = CartStore::open(MemoryStorage::new());
        store.add(&test_book("1", 10_000), 1).unwrap();

        let totals = store.totals(TaxRate::from_bps(SALES_TAX_BPS));
        assert_eq!(totals.total.minor(), 10_800);
    }

    #[test]
    fn test_zero_quantity_add_rejected_and_not_persisted() {
        let mut store = CartStore::open(MemoryStorage::new());
        assert!(store.add(&test_book("1", 1000), 0).is_err());
        assert!(store.is_empty());
        assert!(store.storage.blob().is_none());
    }
}
