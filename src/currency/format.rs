//! Vietnamese-locale currency formatting
//!
//! Output follows vi-VN conventions: `.` groups thousands, `,` separates
//! decimals, and the symbol trails the number after a no-break space.
//! At most two fraction digits are shown and trailing zeros are dropped.

/// Currency used when none is given
pub const DEFAULT_CURRENCY: &str = "VND";

const GROUP_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';
const SYMBOL_SEPARATOR: char = '\u{a0}';
const MAX_FRACTION_DIGITS: usize = 2;

/// Display symbol for well-known codes in the vi-VN locale
pub fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "VND" => Some("₫"),
        "USD" => Some("US$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("JP¥"),
        _ => None,
    }
}

/// Format `amount` as money in `currency_code`, e.g. `1.234.567,5 ₫`.
///
/// Codes without a known symbol are shown as the upper-cased code.
pub fn format_currency(amount: f64, currency_code: &str) -> String {
    let code = currency_code.trim().to_ascii_uppercase();
    let number = format_number(amount);

    match currency_symbol(&code) {
        Some(symbol) => format!("{}{}{}", number, SYMBOL_SEPARATOR, symbol),
        None => format!("{}{}{}", number, SYMBOL_SEPARATOR, code),
    }
}

/// [`format_currency`] in the default currency
pub fn format_vnd(amount: f64) -> String {
    format_currency(amount, DEFAULT_CURRENCY)
}

fn format_number(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    if amount.is_infinite() {
        return format!("{}∞", sign);
    }

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + whole.len() / 3 + 1);
    out.push_str(sign);
    out.push_str(&group_digits(whole));
    if !fraction.is_empty() {
        out.push(DECIMAL_SEPARATOR);
        out.push_str(fraction);
    }
    out
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}

/// Read a string produced by [`format_currency`] back into a number.
///
/// Everything after the no-break space is the symbol or code and is ignored.
/// Returns `None` when no digits are present.
pub fn parse_currency(text: &str) -> Option<f64> {
    let number = text.split_once(SYMBOL_SEPARATOR).map_or(text, |(number, _)| number);
    let negative = number.trim_start().starts_with('-');
    let normalized: String = number
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == DECIMAL_SEPARATOR)
        .map(|c| if c == DECIMAL_SEPARATOR { '.' } else { c })
        .collect();

    if !normalized.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    let value: f64 = normalized.parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_vnd() {
        assert_eq!(format_vnd(1_000_000.0), "1.000.000\u{a0}₫");
        assert_eq!(format_vnd(0.0), "0\u{a0}₫");
        assert_eq!(format_vnd(999.0), "999\u{a0}₫");
        assert_eq!(format_vnd(47.348), "47,35\u{a0}₫");
        assert_eq!(format_vnd(1234.5), "1.234,5\u{a0}₫");
    }

    #[test]
    fn test_format_other_currencies() {
        assert_eq!(format_currency(1234.56, "USD"), "1.234,56\u{a0}US$");
        assert_eq!(format_currency(0.5, "btc"), "0,5\u{a0}BTC");
        assert_eq!(format_currency(12.0, "EUR"), "12\u{a0}€");
    }

    #[test]
    fn test_format_negative_and_degenerate() {
        assert_eq!(format_vnd(-2_500.0), "-2.500\u{a0}₫");
        assert_eq!(format_vnd(f64::NAN), "NaN\u{a0}₫");
        assert_eq!(format_vnd(f64::INFINITY), "∞\u{a0}₫");
        assert_eq!(format_vnd(f64::NEG_INFINITY), "-∞\u{a0}₫");
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("1"), "1");
        assert_eq!(group_digits("123"), "123");
        assert_eq!(group_digits("1234"), "1.234");
        assert_eq!(group_digits("123456789"), "123.456.789");
    }

    #[test]
    fn test_parse_formatted_values() {
        assert_eq!(parse_currency("1.234.567,89\u{a0}₫"), Some(1_234_567.89));
        assert_eq!(parse_currency("-2.500\u{a0}₫"), Some(-2500.0));
        assert_eq!(parse_currency(&format_currency(45_000.0, "USD")), Some(45_000.0));
        assert_eq!(parse_currency("NaN\u{a0}₫"), None);
        assert_eq!(parse_currency("US$"), None);
    }

    #[test]
    fn test_parse_ignores_digits_in_code() {
        assert_eq!(format_currency(5.0, "X1Y"), "5\u{a0}X1Y");
        assert_eq!(parse_currency(&format_currency(5.0, "X1Y")), Some(5.0));
        assert_eq!(parse_currency(&format_currency(-1234.5, "A2B3")), Some(-1234.5));
        assert_eq!(parse_currency("\u{a0}X1Y"), None);
    }
}
