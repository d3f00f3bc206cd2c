//! # Checkout Forms
//!
//! Mutable draft state for the two checkout forms, with pure validation
//! producing a field-keyed error map.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Validation Layers                               │
//! │                                                                     │
//! │  Layer 1: Input formatting (format.rs)                              │
//! │  ├── Card digits grouped, expiry slash inserted, zip digits only    │
//! │  └── Applied as the shopper types, BEFORE validation ever runs      │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE - submission validation                       │
//! │  ├── Regenerates a fresh FieldErrors map per call                   │
//! │  └── All-or-nothing verdict: valid iff the map is empty             │
//! │                                                                     │
//! │  Shipping and payment each own an INDEPENDENT error map, so         │
//! │  validating one form never clears the other's errors.               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both drafts are created empty at checkout start, mutated field by
//! field, and discarded when the checkout session ends. Neither is
//! persisted.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::DEFAULT_COUNTRY;

// =============================================================================
// Field Errors
// =============================================================================

/// A sparse mapping from field name to a human-readable message.
///
/// Absence of a key means that field is valid. Each validation call
/// regenerates the whole map; nothing is merged incrementally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    /// Creates an empty error map.
    pub fn new() -> Self {
        FieldErrors(BTreeMap::new())
    }

    /// Records an error for a field.
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Returns the message for a field, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// True iff no field has an error.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with errors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates (field, message) pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

// =============================================================================
// Shipping Info
// =============================================================================

/// Shipping address draft, mutated field by field from user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    /// Country code. Pre-selected, never validated.
    pub country: String,
}

impl Default for ShippingInfo {
    fn default() -> Self {
        ShippingInfo {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            country: DEFAULT_COUNTRY.to_string(),
        }
    }
}

/// Validates a shipping draft, regenerating the full error map.
///
/// Every "required" check trims first. The zip code's digit-stripping
/// happens at input time, so only presence is checked here. Country
/// always has a default and is never validated.
pub fn validate_shipping(info: &ShippingInfo) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if info.first_name.trim().is_empty() {
        errors.insert("first_name", "First name is required");
    }
    if info.last_name.trim().is_empty() {
        errors.insert("last_name", "Last name is required");
    }
    if info.email.trim().is_empty() {
        errors.insert("email", "Email is required");
    } else if !looks_like_email(&info.email) {
        errors.insert("email", "Email is invalid");
    }
    if info.phone.trim().is_empty() {
        errors.insert("phone", "Phone number is required");
    }
    if info.address.trim().is_empty() {
        errors.insert("address", "Address is required");
    }
    if info.city.trim().is_empty() {
        errors.insert("city", "City is required");
    }
    if info.state.trim().is_empty() {
        errors.insert("state", "State is required");
    }
    if info.zip_code.trim().is_empty() {
        errors.insert("zip_code", "ZIP code is required");
    }

    errors
}

/// Loose email shape check: something, `@`, something, `.`, something,
/// with no whitespace anywhere. Deliberately not RFC-grade; the mail
/// provider has the final word.
fn looks_like_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

// =============================================================================
// Payment Info
// =============================================================================

/// Payment card draft.
///
/// `card_number` and `expiry_date` hold the display-formatted strings
/// (grouped digits, `MM/YY`); formatting is applied at input time via
/// [`crate::format`], not here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentInfo {
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub cardholder_name: String,
}

/// Validates a payment draft, regenerating the full error map.
///
/// Rules (per the storefront's scope):
/// - card number: spaces stripped, required, at least 13 digits
/// - expiry: required, literal `MM/YY` two-digit/two-digit shape
/// - cvv: required, at least 3 characters
/// - cardholder name: non-blank after trim
///
/// No Luhn check, no expiry-in-future check, no brand detection.
pub fn validate_payment(info: &PaymentInfo) -> FieldErrors {
    let mut errors = FieldErrors::new();

    let digits: String = info.card_number.chars().filter(|c| *c != ' ').collect();
    if digits.is_empty() {
        errors.insert("card_number", "Card number is required");
    } else if digits.len() < 13 {
        errors.insert("card_number", "Card number is invalid");
    }

    if info.expiry_date.is_empty() {
        errors.insert("expiry_date", "Expiry date is required");
    } else if !is_expiry_shape(&info.expiry_date) {
        errors.insert("expiry_date", "Expiry date is invalid");
    }

    if info.cvv.is_empty() {
        errors.insert("cvv", "CVV is required");
    } else if info.cvv.len() < 3 {
        errors.insert("cvv", "CVV is invalid");
    }

    if info.cardholder_name.trim().is_empty() {
        errors.insert("cardholder_name", "Cardholder name is required");
    }

    errors
}

/// Literal `DD/DD` shape: exactly two digits, a slash, two digits.
fn is_expiry_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 5
        && bytes[0].is_ascii_digit()
        && bytes[1].is_ascii_digit()
        && bytes[2] == b'/'
        && bytes[3].is_ascii_digit()
        && bytes[4].is_ascii_digit()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_shipping() -> ShippingInfo {
        ShippingInfo {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@doe.dev".to_string(),
            phone: "555-0100".to_string(),
            address: "1 Market St".to_string(),
            city: "Lagos".to_string(),
            state: "LA".to_string(),
            zip_code: "10001".to_string(),
            country: DEFAULT_COUNTRY.to_string(),
        }
    }

    fn filled_payment() -> PaymentInfo {
        PaymentInfo {
            card_number: "4111 1111 1111 1111".to_string(),
            expiry_date: "12/26".to_string(),
            cvv: "123".to_string(),
            cardholder_name: "Jane Doe".to_string(),
        }
    }

    #[test]
    fn test_shipping_all_valid() {
        assert!(validate_shipping(&filled_shipping()).is_empty());
    }

    #[test]
    fn test_shipping_blank_first_name_only() {
        let mut info = filled_shipping();
        info.first_name = "   ".to_string();

        let errors = validate_shipping(&info);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("first_name"), Some("First name is required"));
    }

    #[test]
    fn test_shipping_malformed_email() {
        let mut info = filled_shipping();
        info.email = "not-an-email".to_string();

        let errors = validate_shipping(&info);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("email"), Some("Email is invalid"));
    }

    #[test]
    fn test_shipping_all_blank() {
        let errors = validate_shipping(&ShippingInfo::default());
        // Everything but the defaulted country errors
        assert_eq!(errors.len(), 8);
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert!(errors.get("country").is_none());
    }

    #[test]
    fn test_email_shapes() {
        assert!(looks_like_email("a@b.c"));
        assert!(looks_like_email("jane.doe@mail.example.org"));
        assert!(!looks_like_email("not-an-email"));
        assert!(!looks_like_email("@b.c"));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("a@.c"));
        assert!(!looks_like_email("a b@c.d"));
    }

    #[test]
    fn test_payment_all_valid() {
        assert!(validate_payment(&filled_payment()).is_empty());

        // Ungrouped card numbers validate too
        let mut info = filled_payment();
        info.card_number = "4111111111111111".to_string();
        assert!(validate_payment(&info).is_empty());
    }

    #[test]
    fn test_payment_short_card_number() {
        let mut info = filled_payment();
        info.card_number = "123".to_string();

        let errors = validate_payment(&info);
        assert_eq!(errors.get("card_number"), Some("Card number is invalid"));
    }

    #[test]
    fn test_payment_missing_fields() {
        let errors = validate_payment(&PaymentInfo::default());
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get("card_number"), Some("Card number is required"));
        assert_eq!(errors.get("expiry_date"), Some("Expiry date is required"));
        assert_eq!(errors.get("cvv"), Some("CVV is required"));
        assert_eq!(
            errors.get("cardholder_name"),
            Some("Cardholder name is required")
        );
    }

    #[test]
    fn test_payment_expiry_shape() {
        let mut info = filled_payment();
        for bad in ["1226", "1/26", "12/2", "12-26", "ab/cd"] {
            info.expiry_date = bad.to_string();
            assert_eq!(
                validate_payment(&info).get("expiry_date"),
                Some("Expiry date is invalid"),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_payment_short_cvv() {
        let mut info = filled_payment();
        info.cvv = "12".to_string();
        assert_eq!(validate_payment(&info).get("cvv"), Some("CVV is invalid"));
    }

    #[test]
    fn test_errors_regenerated_wholesale() {
        let mut info = filled_shipping();
        info.city = String::new();
        assert_eq!(validate_shipping(&info).len(), 1);

        // Fixing the field leaves a clean map on the next call
        info.city = "Lagos".to_string();
        assert!(validate_shipping(&info).is_empty());
    }
}
