//! # Error Types
//!
//! Domain-specific error types for bookstall-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Error Types                                │
//! │                                                                     │
//! │  bookstall-core errors (this file)                                  │
//! │  └── CartError      - Cart mutation rejections                      │
//! │                                                                     │
//! │  bookstall-store errors (separate crate)                            │
//! │  └── StoreError     - Persistence read/write failures               │
//! │                                                                     │
//! │  bookstall-checkout errors (separate crate)                         │
//! │  └── GatewayError   - Payment gateway outcomes                      │
//! │                                                                     │
//! │  Form validation does NOT use these types: per-field problems are   │
//! │  collected in forms::FieldErrors and surfaced inline, never raised. │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Each variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Cart Error
// =============================================================================

/// Rejected cart mutations.
///
/// The cart's operations are otherwise total: removing or re-quantifying
/// an absent product is a no-op, not an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// A zero quantity was passed to an add operation.
    ///
    /// ## When This Occurs
    /// - An input surface forwards an empty/cleared quantity field
    ///
    /// Zero is rejected rather than silently accepted so displayed
    /// totals can never drift from what the shopper actually asked for.
    #[error("quantity must be at least 1")]
    ZeroQuantity,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CartError.
pub type CoreResult<T> = Result<T, CartError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(CartError::ZeroQuantity.to_string(), "quantity must be at least 1");
    }
}
