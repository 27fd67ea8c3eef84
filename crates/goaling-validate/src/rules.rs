//! Per-row format rules for upload CSVs.

use chrono::{Datelike, NaiveDate, Weekday};
use thiserror::Error;

/// A single row failing one of the format rules.
///
/// The `Display` text is what ends up (prefixed with the row number) in the
/// report's error list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    DateFormat(String),
    #[error("Not a Monday: {date} is a {weekday}")]
    NotMonday { date: String, weekday: String },
    #[error("Invalid number: {0}")]
    NumberFormat(String),
    #[error("Negative value: {0}")]
    NegativeValue(String),
    #[error("Too many decimals for AHT: {0}")]
    TooManyDecimals(String),
    #[error("Expected 3 decimals for {metric}: {value}")]
    WrongDecimalCount { metric: String, value: String },
}

/// Check that a date is `YYYY-MM-DD` and falls on a Monday.
pub(crate) fn check_date(raw: &str) -> Result<NaiveDate, RowError> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| RowError::DateFormat(raw.to_string()))?;
    if date.weekday() != Weekday::Mon {
        return Err(RowError::NotMonday {
            date: raw.to_string(),
            weekday: date.format("%A").to_string(),
        });
    }
    Ok(date)
}

/// Check that a goal value is a non-negative number with the right decimal
/// precision for its metric.
///
/// AHT values may carry up to 3 decimals; every other metric (including
/// unrecognized ones) must carry exactly 3. The decimal rule only applies
/// when the raw text contains a decimal point, so whole numbers pass.
pub(crate) fn check_value(raw: &str, metric: &str) -> Result<f64, RowError> {
    let value: f64 = raw
        .parse()
        .map_err(|_| RowError::NumberFormat(raw.to_string()))?;
    if value < 0.0 {
        return Err(RowError::NegativeValue(raw.to_string()));
    }

    if let Some((_, frac)) = raw.split_once('.') {
        let decimals = frac.len();
        if metric == "AHT" {
            if decimals > 3 {
                return Err(RowError::TooManyDecimals(raw.to_string()));
            }
        } else if decimals != 3 {
            return Err(RowError::WrongDecimalCount {
                metric: metric.to_string(),
                value: raw.to_string(),
            });
        }
    }

    Ok(value)
}
