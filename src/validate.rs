//! Format checks for Cambodian numbers in international form.
//!
//! These are shape checks only. Nothing is trimmed or rewritten before
//! matching, and only ASCII digits count as digits.

use once_cell::sync::Lazy;
use regex::Regex;

// +855-<area code, 2 or 3 digits>-<local number, 6 or 7 digits>
static LANDLINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+855-?[0-9]{2,3}-?[0-9]{6,7}$").expect("Valid regex pattern"));

// +855-<prefix, 2 digits>-<7 digits>; the domestic leading 0 is dropped.
static MOBILE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+855-?[0-9]{2}-?[0-9]{7}$").expect("Valid regex pattern"));

static NATIONAL_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("Valid regex pattern"));

/// e.g. `+855-23-123456` or `+855-237-1234567`.
pub fn validate_landline(phone: &str) -> bool {
    LANDLINE.is_match(phone)
}

/// e.g. `+855-12-3456789`. Domestic forms such as `012345678` are rejected.
pub fn validate_mobile(phone: &str) -> bool {
    MOBILE.is_match(phone)
}

/// National identity card number: exactly ten ASCII digits.
pub fn validate_national_id(id: &str) -> bool {
    NATIONAL_ID.is_match(id)
}
