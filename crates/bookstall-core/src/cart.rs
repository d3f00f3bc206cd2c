//! # Cart Aggregate
//!
//! The single source of truth for what a shopper intends to purchase.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Cart Operations                                 │
//! │                                                                     │
//! │  UI Action                Cart Method            State Change       │
//! │  ─────────                ───────────            ────────────       │
//! │                                                                     │
//! │  Add to cart ───────────► add(product, qty) ───► merge or append    │
//! │                                                                     │
//! │  Change quantity ───────► set_quantity(id, n) ─► line.quantity = n  │
//! │                                                                     │
//! │  Remove line ───────────► remove(id) ──────────► lines.retain(..)   │
//! │                                                                     │
//! │  Clear ─────────────────► clear() ─────────────► lines.clear()      │
//! │                                                                     │
//! │  Totals display ────────► subtotal() etc. ─────► (read only)        │
//! │                                                                     │
//! │  Derived reads recompute on every call; nothing is cached.          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CartError, CoreResult};
use crate::money::{Money, TaxRate};
use crate::types::Product;

// =============================================================================
// Cart Line
// =============================================================================

/// One entry in the cart: a product and the quantity of it requested.
///
/// ## Design Notes
/// - `id`: synthetic composite key, never equal to the product id
/// - `product`: frozen value snapshot taken at add time, so the line
///   displays consistent data even if the catalog is regenerated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Line id, unique per line, generated at creation time.
    pub id: String,

    /// Product snapshot (frozen at add time).
    pub product: Product,

    /// Quantity in cart. Always >= 1.
    pub quantity: u32,

    /// When this line was added to the cart.
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a new cart line from a product snapshot and quantity.
    fn from_product(product: &Product, quantity: u32) -> Self {
        CartLine {
            id: format!("cart-{}-{}", product.id, Uuid::new_v4()),
            product: product.clone(),
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Calculates the line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.product.price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - At most one line per product id (adding the same product merges)
/// - Line quantities are always >= 1 (zero behaves like removal)
/// - Line order is insertion order (stable for display)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Rebuilds a cart from a persisted line list.
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        Cart { lines }
    }

    /// Adds a product to the cart, or increases quantity if already present.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity increases by `quantity`
    /// - Product not in cart: appended as a new line with a fresh id
    /// - `quantity == 0`: rejected with [`CartError::ZeroQuantity`]
    ///
    /// No upper bound is enforced here; input surfaces clamp to
    /// [`crate::MAX_LINE_QUANTITY`].
    pub fn add(&mut self, product: &Product, quantity: u32) -> CoreResult<()> {
        if quantity == 0 {
            return Err(CartError::ZeroQuantity);
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += quantity;
            return Ok(());
        }

        self.lines.push(CartLine::from_product(product, quantity));
        Ok(())
    }

    /// Removes the line for `product_id`. No-op (not an error) if absent.
    pub fn remove(&mut self, product_id: &str) {
        self.lines.retain(|l| l.product.id != product_id);
    }

    /// Sets the quantity of a line to exactly `quantity` (not additive).
    ///
    /// ## Behavior
    /// - `quantity == 0`: equivalent to [`Cart::remove`]
    /// - Product not in cart: no-op
    pub fn set_quantity(&mut self, product_id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product_id) {
            line.quantity = quantity;
        }
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Returns the lines in display order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Returns the number of distinct lines in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity across all lines.
    ///
    /// The original storefront surfaced this as its "item count".
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Calculates the subtotal: Σ price × quantity, before tax.
    pub fn subtotal(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(), |acc, l| acc + l.line_total())
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Totals summary, computed from a cart and a tax rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    pub total_quantity: u32,
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
}

impl CartTotals {
    /// Computes the current totals. Nothing is cached; call again after
    /// any mutation.
    pub fn compute(cart: &Cart, rate: TaxRate) -> Self {
        let subtotal = cart.subtotal();
        let tax = subtotal.tax(rate);
        CartTotals {
            line_count: cart.line_count(),
            total_quantity: cart.total_quantity(),
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SALES_TAX_BPS;

    fn test_book(id: &str, price_minor: i64) -> Product {
        Product::new(id, &format!("Book {}", id), "Test Author", price_minor)
    }

    #[test]
    fn test_add_new_line() {
        let mut cart = Cart::new();
        let book = test_book("1", 999);

        cart.add(&book, 2).unwrap();

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.subtotal().minor(), 1998);
    }

    #[test]
    fn test_add_same_product_merges() {
        let mut cart = Cart::new();
        let book = test_book("1", 999);

        cart.add(&book, 2).unwrap();
        cart.add(&book, 3).unwrap();

        // Still one line; quantity is the sum of all added quantities
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_quantity(), 5);
    }

    #[test]
    fn test_add_zero_quantity_rejected() {
        let mut cart = Cart::new();
        let book = test_book("1", 999);

        assert_eq!(cart.add(&book, 0), Err(CartError::ZeroQuantity));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_line_id_is_synthetic() {
        let mut cart = Cart::new();
        let book = test_book("1", 999);

        cart.add(&book, 1).unwrap();
        let line = &cart.lines()[0];
        assert_ne!(line.id, book.id);
        assert!(line.id.starts_with("cart-1-"));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add(&test_book("1", 999), 1).unwrap();

        cart.remove("nope");
        assert_eq!(cart.line_count(), 1);

        cart.remove("1");
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_is_absolute() {
        let mut cart = Cart::new();
        cart.add(&test_book("1", 1000), 5).unwrap();

        cart.set_quantity("1", 2);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.subtotal().minor(), 2000);

        // Absent product: no-op
        cart.set_quantity("nope", 7);
        assert_eq!(cart.total_quantity(), 2);
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let mut cart = Cart::new();
        cart.add(&test_book("1", 1000), 3).unwrap();

        cart.set_quantity("1", 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_subtotal_idempotent() {
        let mut cart = Cart::new();
        cart.add(&test_book("1", 10_000), 2).unwrap();
        cart.add(&test_book("2", 5_000), 1).unwrap();

        let first = cart.subtotal();
        assert_eq!(first.minor(), 25_000);
        assert_eq!(cart.subtotal(), first);
        assert_eq!(cart.subtotal(), first);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(&test_book("1", 999), 2).unwrap();
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Money::zero());
    }

    #[test]
    fn test_totals_with_flat_tax() {
        let mut cart = Cart::new();
        cart.add(&test_book("1", 10_000), 1).unwrap();

        let totals = CartTotals::compute(&cart, TaxRate::from_bps(SALES_TAX_BPS));
        assert_eq!(totals.subtotal.minor(), 10_000);
        assert_eq!(totals.tax.minor(), 800); // 8%
        assert_eq!(totals.total.minor(), 10_800);
        assert_eq!(totals.line_count, 1);
        assert_eq!(totals.total_quantity, 1);
    }

    #[test]
    fn test_lines_round_trip_through_json() {
        let mut cart = Cart::new();
        cart.add(&test_book("1", 10_000), 2).unwrap();
        cart.add(&test_book("2", 5_000), 1).unwrap();

        let blob = serde_json::to_string(cart.lines()).unwrap();
        let lines: Vec<CartLine> = serde_json::from_str(&blob).unwrap();
        let restored = Cart::from_lines(lines);

        let pairs = |c: &Cart| {
            c.lines()
                .iter()
                .map(|l| (l.product.id.clone(), l.quantity))
                .collect::<Vec<_>>()
        };
        assert_eq!(pairs(&restored), pairs(&cart));
    }
}
