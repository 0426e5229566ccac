//! Lenient ISO-8601 timestamp parsing
//!
//! Accepts the profile emitted by the verification service:
//!
//! ```text
//! 2021-06-01T10:00:00Z
//! 2021-06-01T10:00:00.123456+01:00
//! 2021-06-01T10:00:00+0100
//! 2021-06-01 10:00:00        (no offset, read as UTC)
//! 2021-06-01                 (midnight UTC)
//! ```
//!
//! The shape is checked against an anchored grammar before chrono reads the
//! fields, so stray whitespace, signed years and single-digit time fields are
//! rejected. Callers that must never fail (the response models) discard the
//! error with `.ok()`.

use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset};
use regex::Regex;
use thiserror::Error;

/// Errors that can occur when parsing a timestamp
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    /// Input was empty
    #[error("empty date string")]
    Empty,

    /// Input does not follow the accepted ISO-8601 profile
    #[error("malformed date: {0}")]
    Malformed(String),

    /// Input has the right shape but names an impossible date, time or offset
    #[error("date out of range: {0}")]
    OutOfRange(String),
}

/// `date [(T|space) HH:MM [:SS [.fraction]] [Z | ±HH[[:]MM]]]`
static GRAMMAR: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<date>[0-9]{4}-[0-9]{1,2}-[0-9]{1,2})(?:[T ](?P<hour>[0-9]{2}):(?P<minute>[0-9]{2})(?::(?P<second>[0-9]{2})(?P<fraction>\.[0-9]+)?)?(?P<tz>Z|[+-][0-9]{2}(?::?[0-9]{2})?)?)?$",
    )
    .ok()
});

/// Layout of the normalized text handed to chrono
const NORMALIZED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%#z";

/// Parse an ISO-8601 timestamp into a date-time carrying its UTC offset
///
/// # Examples
///
/// ```
/// use doc_scan_checks::date::parse_date;
///
/// let dt = parse_date("2021-06-01T10:00:00+02:00").unwrap();
/// assert_eq!(dt.offset().local_minus_utc(), 7200);
/// assert!(parse_date("2021-13-40").is_err());
/// assert!(parse_date(" 2021-06-01T10:00:00Z").is_err());
/// ```
pub fn parse_date(text: &str) -> Result<DateTime<FixedOffset>, DateParseError> {
    if text.is_empty() {
        return Err(DateParseError::Empty);
    }

    let normalized = normalize(text).ok_or_else(|| DateParseError::Malformed(text.to_string()))?;

    DateTime::parse_from_str(&normalized, NORMALIZED_FORMAT)
        .map_err(|_| DateParseError::OutOfRange(text.to_string()))
}

/// Rewrite a grammar-conforming timestamp into [`NORMALIZED_FORMAT`]
///
/// Missing time fields become zero and a missing or `Z` offset becomes UTC.
fn normalize(text: &str) -> Option<String> {
    let caps = GRAMMAR.as_ref()?.captures(text)?;
    let part = |name: &str, default: &'static str| caps.name(name).map_or(default, |m| m.as_str());

    let tz = match part("tz", "Z") {
        "Z" => "+00:00",
        offset => offset,
    };

    Some(format!(
        "{}T{}:{}:{}{}{tz}",
        part("date", ""),
        part("hour", "00"),
        part("minute", "00"),
        part("second", "00"),
        part("fraction", ""),
    ))
}
