//! # bookstall-core: Pure Business Logic for Bookstall
//!
//! This crate is the heart of the storefront. It contains all business
//! logic as pure functions and owned aggregates with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Bookstall Architecture                          │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐    │
//! │  │                 Outer surface (kiosk / web UI)              │    │
//! │  │   Catalog view ──► Cart view ──► Checkout ──► Confirmation  │    │
//! │  └──────────────────────────┬──────────────────────────────────┘    │
//! │                             │                                       │
//! │  ┌──────────────────────────▼──────────────────────────────────┐    │
//! │  │              ★ bookstall-core (THIS CRATE) ★                │    │
//! │  │                                                             │    │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌───────┐  │    │
//! │  │  │  types  │ │  money  │ │  cart   │ │  forms  │ │format │  │    │
//! │  │  │ Product │ │  Money  │ │  Cart   │ │Shipping │ │ price │  │    │
//! │  │  │  slugs  │ │ TaxRate │ │CartLine │ │ Payment │ │ card  │  │    │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └─────────┘ └───────┘  │    │
//! │  │                                                             │    │
//! │  │  NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS          │    │
//! │  └──────────────────────────┬──────────────────────────────────┘    │
//! │                             │                                       │
//! │  ┌──────────────────────────▼──────────────────────────────────┐    │
//! │  │           bookstall-store (catalog + persistence)           │    │
//! │  └─────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, slugs)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The cart aggregate and its derived totals
//! - [`forms`] - Checkout form drafts and field validation
//! - [`format`] - Display formatting (price, card number, expiry)
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: same input, same output
//! 2. **No I/O**: storage and network access is FORBIDDEN here
//! 3. **Integer money**: all amounts are minor units (i64), never floats
//! 4. **Explicit errors**: typed errors, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use bookstall_core::cart::Cart;
//! use bookstall_core::types::Product;
//!
//! let book = Product::new("latest-1", "Midnight in the Morgue", "Chika Unigwe", 10_000);
//!
//! let mut cart = Cart::new();
//! cart.add(&book, 2).unwrap();
//! assert_eq!(cart.subtotal().minor(), 20_000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod format;
pub mod forms;
pub mod money;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bookstall_core::Money` instead of
// `use bookstall_core::money::Money`

pub use cart::{Cart, CartLine, CartTotals};
pub use error::{CartError, CoreResult};
pub use forms::{FieldErrors, PaymentInfo, ShippingInfo};
pub use money::{Money, TaxRate};
pub use types::Product;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Flat sales tax applied to the cart subtotal, in basis points (800 = 8%).
///
/// ## Why a constant?
/// The storefront charges a single flat rate. It lives in the core (not
/// the display layer) so every surface computes the same total.
pub const SALES_TAX_BPS: u32 = 800;

/// Maximum quantity a single cart line may be raised to by the UI.
///
/// ## Policy, not invariant
/// The cart itself does not enforce this; input surfaces clamp to it
/// before calling [`Cart::add`] or [`Cart::set_quantity`].
pub const MAX_LINE_QUANTITY: u32 = 99;

/// Default country code pre-selected on the shipping form.
pub const DEFAULT_COUNTRY: &str = "US";
