//! Turns spreadsheet cell text into numbers and dates.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use num_traits::FromPrimitive;
use rust_decimal::Decimal;

use super::ImportError;

/// Characters removed before a numeric cell is parsed.
const STRIPPED_CHARS: [char; 5] = ['$', '€', '£', '¥', ','];

/// Date layouts accepted by [`parse_date`], tried in order.
const DATE_FORMATS: [&str; 10] = [
    "%Y-%m-%d",
    "%m/%d/%y",
    "%m/%d/%Y",
    "%Y/%m/%d",
    "%m-%d-%Y",
    "%d.%m.%Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%d %b %Y",
    "%d %B %Y",
];

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// A raw cell value handed to [`sanitize_numeric`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawNumber<'a> {
    Missing,
    Number(f64),
    Text(&'a str),
}

impl<'a> From<&'a str> for RawNumber<'a> {
    fn from(value: &'a str) -> Self {
        RawNumber::Text(value)
    }
}

impl<'a> From<Option<&'a str>> for RawNumber<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(RawNumber::Missing, RawNumber::Text)
    }
}

impl From<f64> for RawNumber<'_> {
    fn from(value: f64) -> Self {
        RawNumber::Number(value)
    }
}

/// Parses a messy spreadsheet value into a decimal.
///
/// Missing and empty values are zero, as are `"-"` placeholders and NaN.
/// Currency symbols, comma thousands separators and whitespace are ignored;
/// underscore digit separators are rejected.
/// Anything else that does not read as a number is a parse failure naming
/// the original value.
pub fn sanitize_numeric<'a>(value: impl Into<RawNumber<'a>>) -> Result<Decimal, ImportError> {
    match value.into() {
        RawNumber::Missing => Ok(Decimal::ZERO),
        RawNumber::Number(n) => {
            if n.is_nan() {
                return Ok(Decimal::ZERO);
            }
            Decimal::from_f64(n).ok_or_else(|| ImportError::parse(n.to_string()))
        }
        RawNumber::Text(raw) => {
            let cleaned: String = raw
                .chars()
                .filter(|c| !c.is_whitespace() && !STRIPPED_CHARS.contains(c))
                .collect();

            if cleaned.is_empty() || cleaned == "-" {
                return Ok(Decimal::ZERO);
            }

            // `Decimal::from_str` accepts `1_000`
            if cleaned.contains('_') {
                return Err(ImportError::parse(raw));
            }

            Decimal::from_str(&cleaned)
                .or_else(|_| Decimal::from_scientific(&cleaned))
                .map_err(|_| ImportError::parse(raw))
        }
    }
}

/// Best-effort date parsing.
///
/// Blank input and unrecognised layouts both yield `None`; a bad date never
/// blocks an import.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive());
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
                .map(|dt| dt.date())
        })
}
