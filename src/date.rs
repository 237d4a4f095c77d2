use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Utc};
use serde::Deserialize;

use crate::error::{LocaleError, Result};
use crate::number::format_number;

/// The only layout there is. Other template strings render the same way.
pub const DAY_MONTH_YEAR: &str = "DD/MM/YYYY";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DateFormatOptions {
    pub format: String,
    pub delimiter: String,
}

impl Default for DateFormatOptions {
    fn default() -> Self {
        DateFormatOptions {
            format: DAY_MONTH_YEAR.to_string(),
            delimiter: "/".to_string(),
        }
    }
}

/// Renders day, month and year in Khmer digits joined by the delimiter.
///
/// Components are not zero padded: the 3rd of July 2024 becomes `៣/៧/២០២៤`.
pub fn format_date<D: Datelike>(date: &D, options: &DateFormatOptions) -> String {
    if options.format != DAY_MONTH_YEAR {
        tracing::debug!(format = %options.format, "unrecognized date template, using DD/MM/YYYY");
    }
    let sep = &options.delimiter;
    format!(
        "{}{sep}{}{sep}{}",
        format_number(date.day()),
        format_number(date.month()),
        format_number(date.year()),
    )
}

/// Formats an instant as seen from a fixed UTC offset.
pub fn format_timestamp(
    instant: DateTime<Utc>,
    offset: FixedOffset,
    options: &DateFormatOptions,
) -> String {
    format_date(&instant.with_timezone(&offset), options)
}

/// Formats a calendar date given as numbers, rejecting impossible dates.
pub fn format_ymd(year: i32, month: u32, day: u32, options: &DateFormatOptions) -> Result<String> {
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        LocaleError::mismatch("format_date", "a valid date", format!("{year}-{month}-{day}"))
    })?;
    Ok(format_date(&date, options))
}
