//! Lenient parsing of currency-formatted strings.

use crate::value::Value;

/// Parses a number-like string such as `"$12.50/g"`.
///
/// Every character that is not an ASCII digit or a decimal point is dropped.
/// What remains is read up to the second decimal point, if any. An empty or
/// unreadable remainder yields `0.0`.
///
/// ```
/// use budfinder_seeker::parse_numeric;
///
/// assert_eq!(parse_numeric("$12.50/g"), 12.5);
/// assert_eq!(parse_numeric("$1,200"), 1200.0);
/// assert_eq!(parse_numeric("market price"), 0.0);
/// ```
pub fn parse_numeric(raw: &str) -> f64 {
    let mut digits = String::with_capacity(raw.len());
    let mut seen_point = false;

    for c in raw.chars() {
        match c {
            '0'..='9' => digits.push(c),
            '.' if !seen_point => {
                seen_point = true;
                digits.push(c);
            }
            '.' => break,
            _ => {}
        }
    }

    digits.parse::<f64>().unwrap_or(0.0)
}

/// Reads a price field value.
///
/// Strings are parsed with [`parse_numeric`], numbers are taken as-is, and an
/// absent field counts as a price of zero.
pub fn parse_price(value: &Value<'_>) -> f64 {
    match value {
        Value::Text(s) => parse_numeric(s),
        Value::Number(n) => n.to_f64(),
        Value::Tags(_) | Value::None => 0.0,
    }
}
