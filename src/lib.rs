//! Khmer localization helpers.
//!
//! Digit substitution, date and currency rendering with Khmer digits, a naive
//! character-level Khmer to Latin transliteration, text normalization for
//! comparison, and format checks for Cambodian phone numbers and ID cards.
//!
//! Every function here is pure and works over immutable static tables, so all
//! of them can be called from any number of threads at once.

pub mod date;
pub mod digits;
pub mod error;
pub mod locale;
pub mod normalize;
pub mod number;
pub mod request;
pub mod transliteration;
pub mod validate;

pub use date::{format_date, format_timestamp, format_ymd, DateFormatOptions};
pub use digits::{to_arabic_digits, to_khmer_digits};
pub use error::{LocaleError, Result};
pub use locale::NumberLocale;
pub use normalize::normalize_text;
pub use number::{format_currency, format_number, FormatOptions};
pub use request::{Request, Response};
pub use transliteration::{khmer_to_latin, ScanMode, Transliterator};
pub use validate::{validate_landline, validate_mobile, validate_national_id};
