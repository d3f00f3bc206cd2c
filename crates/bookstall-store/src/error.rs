//! # Persistence Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Error Propagation                               │
//! │                                                                     │
//! │  std::io::Error / serde_json::Error                                 │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  StoreError (this module) ← categorized via #[from]                 │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  CartStore ← absorbs it: warn-log + empty-cart fallback             │
//! │                                                                     │
//! │  Storage problems are never fatal and never shown to the shopper.   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Cart persistence errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the blob file failed.
    #[error("cart storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The blob exists but is not a valid line list.
    #[error("cart blob is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corrupt_message_includes_cause() {
        let parse_err = serde_json::from_str::<Vec<i64>>("not json").unwrap_err();
        let err = StoreError::from(parse_err);
        assert!(err.to_string().starts_with("cart blob is corrupt"));
    }
}
