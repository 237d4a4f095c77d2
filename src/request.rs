//! Dynamically typed requests, as read from JSON by the batch CLI.
//!
//! Payloads arrive as [`serde_json::Value`], so the type checks the typed API
//! gets from the compiler happen here at runtime instead. A payload of the
//! wrong shape yields [`LocaleError::TypeMismatch`]; validators answer `false`.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::date::{format_date, format_timestamp, DateFormatOptions};
use crate::error::{LocaleError, Result};
use crate::normalize::normalize_text;
use crate::number::{format_currency, format_number, FormatOptions};
use crate::transliteration::{ScanMode, Transliterator};
use crate::validate::{validate_landline, validate_mobile, validate_national_id};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    Number {
        value: Value,
    },
    Currency {
        amount: Value,
        #[serde(default)]
        options: FormatOptions,
    },
    /// `date` is `YYYY-MM-DD`, an RFC 3339 timestamp, or epoch milliseconds.
    /// Instants are shifted by `offset_minutes` east of UTC before rendering.
    Date {
        date: Value,
        #[serde(default)]
        options: DateFormatOptions,
        #[serde(default)]
        offset_minutes: i32,
    },
    Translit {
        text: Value,
        #[serde(default)]
        codepoint: bool,
    },
    Normalize {
        text: Value,
    },
    Landline {
        value: Value,
    },
    Mobile {
        value: Value,
    },
    NationalId {
        value: Value,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Text(String),
    Valid(bool),
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn expect_text<'a>(operation: &'static str, value: &'a Value) -> Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| LocaleError::mismatch(operation, "a string", kind(value)))
}

fn matches_str(value: &Value, check: fn(&str) -> bool) -> Response {
    Response::Valid(value.as_str().is_some_and(check))
}

// serde_json's own Display keeps `1.0` and writes `1e21`; go through the
// primitive so the output matches `format_number` on the same value.
fn render_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        format_number(i)
    } else if let Some(u) = n.as_u64() {
        format_number(u)
    } else {
        format_number(n.as_f64().unwrap_or(f64::NAN))
    }
}

fn render_date(date: &Value, options: &DateFormatOptions, offset_minutes: i32) -> Result<String> {
    let invalid = || LocaleError::mismatch("format_date", "a valid date", date.to_string());
    let offset = FixedOffset::east_opt(offset_minutes.saturating_mul(60)).ok_or_else(|| {
        LocaleError::mismatch("format_date", "a UTC offset within one day", offset_minutes.to_string())
    })?;

    match date {
        Value::String(s) => {
            if let Ok(day) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
                return Ok(format_date(&day, options));
            }
            let instant = DateTime::parse_from_rfc3339(s).map_err(|_| invalid())?;
            Ok(format_timestamp(instant.with_timezone(&Utc), offset, options))
        }
        Value::Number(n) => {
            let millis = n.as_i64().ok_or_else(invalid)?;
            let instant = DateTime::<Utc>::from_timestamp_millis(millis).ok_or_else(invalid)?;
            Ok(format_timestamp(instant, offset, options))
        }
        other => Err(LocaleError::mismatch("format_date", "a date", kind(other))),
    }
}

impl Request {
    pub fn run(&self) -> Result<Response> {
        let response = match self {
            Request::Number { value } => match value {
                Value::Number(n) => Response::Text(render_number(n)),
                Value::String(s) => Response::Text(format_number(s)),
                other => {
                    return Err(LocaleError::mismatch(
                        "format_number",
                        "a number or numeric string",
                        kind(other),
                    ))
                }
            },
            Request::Currency { amount, options } => {
                let amount = amount.as_f64().ok_or_else(|| {
                    LocaleError::mismatch("format_currency", "a number", kind(amount))
                })?;
                Response::Text(format_currency(amount, options)?)
            }
            Request::Date { date, options, offset_minutes } => {
                Response::Text(render_date(date, options, *offset_minutes)?)
            }
            Request::Translit { text, codepoint } => {
                let text = expect_text("khmer_to_latin", text)?;
                let mode = if *codepoint { ScanMode::Codepoint } else { ScanMode::LongestMatch };
                Response::Text(Transliterator::new(mode).transliterate(text))
            }
            Request::Normalize { text } => {
                Response::Text(normalize_text(expect_text("normalize_text", text)?))
            }
            Request::Landline { value } => matches_str(value, validate_landline),
            Request::Mobile { value } => matches_str(value, validate_mobile),
            Request::NationalId { value } => matches_str(value, validate_national_id),
        };
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(raw: Value) -> Result<Response> {
        serde_json::from_value::<Request>(raw).unwrap().run()
    }

    fn text(s: &str) -> Result<Response> {
        Ok(Response::Text(s.to_string()))
    }

    #[test]
    fn test_number_accepts_numbers_and_strings() {
        assert_eq!(run(json!({"op": "number", "value": 42})), text("៤២"));
        assert_eq!(run(json!({"op": "number", "value": "3.14"})), text("៣.១៤"));
        assert!(run(json!({"op": "number", "value": true})).is_err());
    }

    #[test]
    fn test_number_matches_typed_formatting() {
        assert_eq!(run(json!({"op": "number", "value": 1.0})), text("១"));
        assert_eq!(run(json!({"op": "number", "value": 1.0})), text(&format_number(1.0)));
        assert_eq!(run(json!({"op": "number", "value": 1e21})), text(&format_number(1e21)));
        assert_eq!(run(json!({"op": "number", "value": -2.5})), text("-២.៥"));
        assert_eq!(run(json!({"op": "number", "value": u64::MAX})), text(&format_number(u64::MAX)));
    }

    #[test]
    fn test_currency_requires_number() {
        assert_eq!(
            run(json!({"op": "currency", "amount": 1234.5})),
            text("១,២៣៤.៥ រៀល")
        );
        let err = run(json!({"op": "currency", "amount": "1234.5"})).unwrap_err();
        assert_eq!(
            err,
            LocaleError::TypeMismatch {
                operation: "format_currency",
                expected: "a number",
                found: "string".to_string(),
            }
        );
    }

    #[test]
    fn test_date_inputs() {
        assert_eq!(run(json!({"op": "date", "date": "2024-07-03"})), text("៣/៧/២០២៤"));
        assert_eq!(
            run(json!({"op": "date", "date": "2024-03-31T20:00:00Z", "offset_minutes": 420})),
            text("១/៤/២០២៤")
        );
        // 2024-07-03T00:00:00Z
        assert_eq!(run(json!({"op": "date", "date": 1719964800000i64})), text("៣/៧/២០២៤"));
        assert!(run(json!({"op": "date", "date": "not a date"})).is_err());
        assert!(run(json!({"op": "date", "date": null})).is_err());
    }

    #[test]
    fn test_translit_modes() {
        assert_eq!(run(json!({"op": "translit", "text": "ខ\u{17BB}\u{17C6}"})), text("khom"));
        assert_eq!(
            run(json!({"op": "translit", "text": "ខ\u{17BB}\u{17C6}", "codepoint": true})),
            text("kho\u{17C6}")
        );
        assert!(run(json!({"op": "translit", "text": 5})).is_err());
    }

    #[test]
    fn test_normalize_requires_text() {
        assert_eq!(run(json!({"op": "normalize", "text": " A  b "})), text("a b"));
        assert!(run(json!({"op": "normalize", "text": ["a"]})).is_err());
    }

    #[test]
    fn test_validators_never_fail() {
        assert_eq!(
            run(json!({"op": "mobile", "value": "+855-12-3456789"})),
            Ok(Response::Valid(true))
        );
        assert_eq!(
            run(json!({"op": "national_id", "value": 1234567890})),
            Ok(Response::Valid(false))
        );
        assert_eq!(run(json!({"op": "landline", "value": null})), Ok(Response::Valid(false)));
    }

    #[test]
    fn test_response_serializes_bare() {
        assert_eq!(serde_json::to_string(&Response::Valid(true)).unwrap(), "true");
        assert_eq!(serde_json::to_string(&Response::Text("១".into())).unwrap(), "\"១\"");
    }
}
