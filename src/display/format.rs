//! Currency and date formatting
//!
//! Stateless helpers shared by every view. Output follows en-US conventions:
//! comma thousands separators, two fraction digits, `Jul 15, 2023` dates.

use chrono::NaiveDateTime;

use crate::models::Money;

/// Default currency code used when none is configured
pub const DEFAULT_CURRENCY: &str = "USD";

/// Symbol for a known ISO 4217 currency code
///
/// Unknown codes have no symbol; `format_currency` falls back to the code.
pub fn currency_symbol(code: &str) -> Option<&'static str> {
    let symbol = match code.trim().to_ascii_uppercase().as_str() {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        "INR" => "₹",
        "CAD" => "CA$",
        "AUD" => "A$",
        "CNY" => "CN¥",
        _ => return None,
    };
    Some(symbol)
}

/// Format an amount with exactly two fraction digits
///
/// # Examples
/// ```
/// use expense_tracker::display::format_currency;
/// use expense_tracker::models::Money;
///
/// assert_eq!(format_currency(Money::from_cents(120050), "USD"), "$1,200.50");
/// assert_eq!(format_currency(Money::from_cents(-999), "EUR"), "-€9.99");
/// assert_eq!(format_currency(Money::from_cents(1000), "CHF"), "CHF 10.00");
/// ```
pub fn format_currency(amount: Money, currency_code: &str) -> String {
    match currency_symbol(currency_code) {
        Some(symbol) => amount.format_with_symbol(symbol),
        None => {
            let prefix = format!("{} ", currency_code.trim().to_ascii_uppercase());
            amount.format_with_symbol(&prefix)
        }
    }
}

/// Format a decimal amount, rounding half away from zero to the cent
///
/// Non-finite input has no currency rendering and is returned as-is.
pub fn format_decimal_currency(amount: f64, currency_code: &str) -> String {
    match Money::from_decimal(amount) {
        Some(money) => format_currency(money, currency_code),
        None => amount.to_string(),
    }
}

/// Compact human date, e.g. `Jul 15, 2023`
pub fn format_date(date: NaiveDateTime) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_currency_usd() {
        assert_eq!(format_currency(Money::from_cents(4599), "USD"), "$45.99");
        assert_eq!(format_currency(Money::zero(), DEFAULT_CURRENCY), "$0.00");
        assert_eq!(format_currency(Money::from_cents(120000), "usd"), "$1,200.00");
        assert_eq!(format_currency(Money::from_cents(-3250), "USD"), "-$32.50");
    }

    #[test]
    fn test_format_currency_other_codes() {
        assert_eq!(format_currency(Money::from_cents(50000), "GBP"), "£500.00");
        assert_eq!(format_currency(Money::from_cents(123456), "JPY"), "¥1,234.56");
        assert_eq!(format_currency(Money::from_cents(-100), "chf"), "-CHF 1.00");
    }

    #[test]
    fn test_format_decimal_rounds() {
        assert_eq!(format_decimal_currency(10.456, "USD"), "$10.46");
        assert_eq!(format_decimal_currency(10.454, "USD"), "$10.45");
        assert_eq!(format_decimal_currency(1234567.891, "USD"), "$1,234,567.89");
        assert_eq!(format_decimal_currency(-0.5, "USD"), "-$0.50");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2023, 7, 15)
            .unwrap()
            .and_hms_opt(18, 45, 0)
            .unwrap();
        assert_eq!(format_date(date), "Jul 15, 2023");

        let date = NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(format_date(date), "Jan 5, 2024");
    }
}
