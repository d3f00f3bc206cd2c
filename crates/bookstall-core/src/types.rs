//! # Domain Types
//!
//! Core domain types used throughout Bookstall.
//!
//! ## Dual-Key Identity Pattern
//! Every product has:
//! - `id`: unique within the catalog - used for cart/lookup relations
//! - `slug`: derived from the title - human-readable, used in URLs

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A book available for sale.
///
/// Constructed once at catalog load time from static data and treated
/// as immutable thereafter. Cart lines embed a value snapshot of the
/// product, so a record never changes underneath a shopper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier within the catalog (e.g. "latest-1").
    pub id: String,

    /// URL slug derived from the title.
    pub slug: String,

    /// Display title.
    pub title: String,

    /// Author name.
    pub author: String,

    /// Price in minor currency units.
    pub price_minor: i64,

    /// Optional rating, 1-5.
    pub rating: Option<u8>,

    /// Optional category label.
    pub category: Option<String>,

    /// Optional long-form description.
    pub description: Option<String>,

    /// Image reference (path or URL).
    pub image: String,
}

impl Product {
    /// Creates a product with the slug derived from the title and all
    /// optional fields empty.
    pub fn new(id: &str, title: &str, author: &str, price_minor: i64) -> Self {
        Product {
            id: id.to_string(),
            slug: slugify(title),
            title: title.to_string(),
            author: author.to_string(),
            price_minor,
            rating: None,
            category: None,
            description: None,
            image: String::new(),
        }
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_minor(self.price_minor)
    }
}

// =============================================================================
// Slugs
// =============================================================================

/// Derives a URL slug from a title: lowercase, runs of whitespace
/// collapsed to a single hyphen.
///
/// ```rust
/// use bookstall_core::types::slugify;
///
/// assert_eq!(slugify("Midnight in the Morgue"), "midnight-in-the-morgue");
/// ```
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

// =============================================================================
// Unit Tests
// =============================================================================
