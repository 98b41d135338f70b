//! Money helpers.
//!
//! Amounts are stored as integer minor units (cents). Display strings are
//! produced here and nowhere else, always from the stored integer.

use rust_decimal::Decimal;

/// Formats an amount in cents as a US-dollar display string, e.g. `123456` as `$1,234.56`.
pub fn format_currency(amount_in_minor_units: i64) -> String {
    let sign = if amount_in_minor_units < 0 { "-" } else { "" };
    let cents = amount_in_minor_units.unsigned_abs();
    let dollars = (cents / 100).to_string();

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, digit) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}${grouped}.{:02}", cents % 100)
}

/// Converts cents to an exact major-unit value with two decimal places.
pub fn minor_to_major(amount_in_minor_units: i64) -> Decimal {
    Decimal::new(amount_in_minor_units, 2)
}
