//! # Display Formatting
//!
//! Presentation collaborators: currency display and input-time
//! formatting for the payment form.
//!
//! Input-time formatting runs as the shopper types, so by the time
//! [`crate::forms::validate_payment`] reads a field it already holds
//! the grouped/slash-inserted shape.

use crate::money::Money;

/// Currency symbol used for display.
pub const CURRENCY_SYMBOL: &str = "₦";

// =============================================================================
// Price Formatting
// =============================================================================

/// Formats a money amount as a localized currency string with
/// thousands grouping, e.g. `₦10,000.00`.
pub fn format_price(amount: Money) -> String {
    let sign = if amount.minor() < 0 { "-" } else { "" };
    format!(
        "{}{}{}.{:02}",
        sign,
        CURRENCY_SYMBOL,
        group_thousands(amount.major().abs()),
        amount.minor_part()
    )
}

/// Inserts `,` separators every three digits: 1234567 → "1,234,567".
fn group_thousands(n: i64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

// =============================================================================
// Card Input Formatting
// =============================================================================

/// Groups a raw card-number entry into space-separated blocks of four.
///
/// Non-digits are stripped and input is capped at 16 digits. Fewer than
/// four digits pass through ungrouped.
///
/// ```rust
/// use bookstall_core::format::format_card_number;
///
/// assert_eq!(format_card_number("4111-1111 1111x1111"), "4111 1111 1111 1111");
/// assert_eq!(format_card_number("41"), "41");
/// ```
pub fn format_card_number(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).take(16).collect();
    if digits.len() < 4 {
        return digits;
    }

    digits
        .as_bytes()
        .chunks(4)
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Inserts the slash into a raw expiry entry: "1226" → "12/26".
///
/// Non-digits are stripped; one digit passes through; input is capped
/// at four digits (`MM/YY`).
pub fn format_expiry(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).take(4).collect();
    if digits.len() >= 2 {
        format!("{}/{}", &digits[..2], &digits[2..])
    } else {
        digits
    }
}

/// Strips everything but ASCII digits (used for zip/cvv input fields).
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Money::from_minor(1_000_000)), "₦10,000.00");
        assert_eq!(format_price(Money::from_minor(123_456_789)), "₦1,234,567.89");
        assert_eq!(format_price(Money::from_minor(100)), "₦1.00");
        assert_eq!(format_price(Money::from_minor(1)), "₦0.01");
        assert_eq!(format_price(Money::from_minor(0)), "₦0.00");
        assert_eq!(format_price(Money::from_minor(-1234)), "-₦12.34");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_format_card_number() {
        assert_eq!(format_card_number("4111111111111111"), "4111 1111 1111 1111");
        assert_eq!(format_card_number("4111 1111"), "4111 1111");
        assert_eq!(format_card_number("4111-1111-1"), "4111 1111 1");
        // Fewer than four digits pass through
        assert_eq!(format_card_number("41"), "41");
        // Capped at 16 digits
        assert_eq!(
            format_card_number("41111111111111112222"),
            "4111 1111 1111 1111"
        );
        assert_eq!(format_card_number(""), "");
    }

    #[test]
    fn test_format_expiry() {
        assert_eq!(format_expiry("1226"), "12/26");
        assert_eq!(format_expiry("12"), "12/");
        assert_eq!(format_expiry("1"), "1");
        assert_eq!(format_expiry("12/26"), "12/26");
        assert_eq!(format_expiry("12269"), "12/26");
        assert_eq!(format_expiry(""), "");
    }

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("100-01"), "10001");
        assert_eq!(digits_only("abc"), "");
    }
}
