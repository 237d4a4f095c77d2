use std::fmt::Display;

use serde::Deserialize;

use crate::digits::to_khmer_digits;
use crate::error::{LocaleError, Result};
use crate::locale::NumberLocale;

/// Appended after the amount unless the caller overrides it.
pub const DEFAULT_CURRENCY_SYMBOL: &str = " រៀល";

/// Largest fraction digit count accepted by [`format_currency`].
pub const MAX_FRACTION_DIGITS: usize = 20;

/// Converts a number or numeric string to Khmer digits.
///
/// The value is rendered with its `Display` impl first, so no grouping is
/// added. Signs, decimal points, exponent markers and any other non-digit
/// characters are left where they are.
///
/// ```
/// use khmer_locale::format_number;
///
/// assert_eq!(format_number(2024), "២០២៤");
/// assert_eq!(format_number("-3.5"), "-៣.៥");
/// ```
pub fn format_number(value: impl Display) -> String {
    to_khmer_digits(&value.to_string())
}

/// Options for [`format_currency`]. Field names deserialize in camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatOptions {
    pub locale: String,
    pub minimum_fraction_digits: usize,
    pub maximum_fraction_digits: usize,
    pub currency_symbol: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            locale: "en-US".to_string(),
            minimum_fraction_digits: 0,
            maximum_fraction_digits: 2,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

/// Formats `amount` with locale grouping, Khmer digits and a currency suffix.
///
/// Fraction digits beyond `maximum_fraction_digits` are rounded half away from
/// zero; trailing zeros are dropped down to `minimum_fraction_digits`.
pub fn format_currency(amount: f64, options: &FormatOptions) -> Result<String> {
    if !amount.is_finite() {
        return Err(LocaleError::mismatch(
            "format_currency",
            "a finite number",
            amount.to_string(),
        ));
    }
    let (min, max) = (options.minimum_fraction_digits, options.maximum_fraction_digits);
    if min > max || max > MAX_FRACTION_DIGITS {
        return Err(LocaleError::FractionRange { min, max });
    }

    let locale = NumberLocale::resolve(&options.locale);
    let grouped = render_grouped(amount, &locale, min, max);
    Ok(format!("{}{}", format_number(grouped), options.currency_symbol))
}

/// Renders `amount` as an ASCII-digit string with the locale's separators.
pub(crate) fn render_grouped(amount: f64, locale: &NumberLocale, min: usize, max: usize) -> String {
    // Display gives the shortest round-trip representation, never an exponent.
    let repr = amount.abs().to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes())
        .map(|b| b - b'0')
        .collect();
    let mut int_len = int_part.len();
    let mut frac_len = frac_part.len();

    if frac_len > max {
        let keep = int_len + max;
        let round_up = digits[keep] >= 5;
        digits.truncate(keep);
        frac_len = max;
        if round_up && increment(&mut digits) {
            digits.insert(0, 1);
            int_len += 1;
        }
    }
    while frac_len > min && digits.last() == Some(&0) {
        digits.pop();
        frac_len -= 1;
    }
    while frac_len < min {
        digits.push(0);
        frac_len += 1;
    }

    let mut out = String::with_capacity(digits.len() + int_len / 3 + 2);
    if amount.is_sign_negative() {
        out.push('-');
    }
    for (i, d) in digits[..int_len].iter().enumerate() {
        if i > 0 && (int_len - i) % 3 == 0 {
            out.push(locale.group);
        }
        out.push((b'0' + d) as char);
    }
    if frac_len > 0 {
        out.push(locale.decimal);
        out.extend(digits[int_len..].iter().map(|d| (b'0' + d) as char));
    }
    out
}

/// Adds one unit in the last place. Returns true when the carry overflows.
fn increment(digits: &mut [u8]) -> bool {
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return false;
        }
    }
    true
}
