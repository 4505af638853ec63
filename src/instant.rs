// 🕐 Instant Layer - Resolve date-like inputs to epoch milliseconds
// Accepts text, epoch-millisecond numbers, and chrono values

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// INSTANT
// ============================================================================

/// Instant - a point in time as milliseconds since the Unix epoch
///
/// Every accepted input resolves to an Instant before any arithmetic runs.
/// Negative values are times before 1970.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Instant(i64);

impl Instant {
    /// Create an instant from raw epoch milliseconds
    pub fn from_millis(millis: i64) -> Self {
        Instant(millis)
    }

    /// Epoch milliseconds carried by this instant
    pub fn millis(&self) -> i64 {
        self.0
    }

    /// Convert back to a chrono timestamp
    ///
    /// Returns None when the value falls outside chrono's representable
    /// calendar range (raw epoch-millisecond inputs can exceed it).
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.0)
    }
}

// ============================================================================
// INVALID DATE ERROR
// ============================================================================

/// Raised when an input cannot be resolved to a valid instant
///
/// Carries the offending input and the reason, so callers can report
/// exactly what was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDateError {
    /// The input that failed, rendered as text
    pub input: String,

    /// Why it could not be resolved
    pub reason: String,
}

impl InvalidDateError {
    /// No supported text format matched
    pub fn unparseable(input: &str) -> Self {
        InvalidDateError {
            input: input.to_string(),
            reason: "no supported format matched (ISO-8601, YYYY-MM-DD, MM/DD/YYYY)"
                .to_string(),
        }
    }

    /// The instant exists but cannot be expressed as a calendar date
    pub fn out_of_range(millis: i64) -> Self {
        InvalidDateError {
            input: format!("{}ms", millis),
            reason: "epoch milliseconds outside the representable calendar range".to_string(),
        }
    }
}

impl std::fmt::Display for InvalidDateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid date input '{}': {}", self.input, self.reason)
    }
}

impl std::error::Error for InvalidDateError {}

// ============================================================================
// DATE INPUT
// ============================================================================

/// DateInput - the three input shapes every operation accepts
///
/// Mirrors what callers actually hold: text from a form or a file, an epoch
/// millisecond count, or an already-constructed chrono value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DateInput {
    /// A date or date-time string in one of the supported formats
    Text(String),

    /// Milliseconds since the Unix epoch
    EpochMillis(i64),

    /// An already-constructed UTC timestamp
    Timestamp(DateTime<Utc>),
}

impl DateInput {
    /// Resolve this input to an instant
    ///
    /// Text goes through parse_instant; the other two shapes are exact and
    /// cannot fail.
    pub fn to_instant(&self) -> Result<Instant, InvalidDateError> {
        match self {
            DateInput::Text(text) => parse_instant(text),
            DateInput::EpochMillis(millis) => Ok(Instant::from_millis(*millis)),
            DateInput::Timestamp(dt) => Ok(Instant::from_millis(dt.timestamp_millis())),
        }
    }
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        DateInput::Text(value.to_string())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        DateInput::Text(value)
    }
}

impl From<i64> for DateInput {
    fn from(value: i64) -> Self {
        DateInput::EpochMillis(value)
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(value: DateTime<Utc>) -> Self {
        DateInput::Timestamp(value)
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(value: NaiveDateTime) -> Self {
        DateInput::Timestamp(value.and_utc())
    }
}

impl From<NaiveDate> for DateInput {
    fn from(value: NaiveDate) -> Self {
        DateInput::Timestamp(value.and_time(NaiveTime::MIN).and_utc())
    }
}

// ============================================================================
// TEXT PARSING
// ============================================================================

/// Parse a date or date-time string into an instant
///
/// Formats are tried in order, first match wins:
/// 1. RFC 3339 with explicit offset ("2024-01-01T09:30:00Z")
/// 2. ISO date-time without offset, 'T' or space separated, optional
///    fractional seconds ("2024-01-01 09:30:00")
/// 3. ISO date ("2024-01-01")
/// 4. MM/DD/YYYY ("01/15/2024")
///
/// Strings without an offset are read as UTC, so the result never depends on
/// the timezone of the machine running the computation. Date-only strings
/// resolve to midnight UTC.
pub fn parse_instant(text: &str) -> Result<Instant, InvalidDateError> {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return Err(InvalidDateError::unparseable(text));
    }

    // Try RFC 3339 (carries its own offset)
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(Instant::from_millis(dt.with_timezone(&Utc).timestamp_millis()));
    }

    // Try ISO date-time without offset, T-separated
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(Instant::from_millis(naive.and_utc().timestamp_millis()));
    }

    // Try ISO date-time without offset, space-separated
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f") {
        return Ok(Instant::from_millis(naive.and_utc().timestamp_millis()));
    }

    // Try ISO date (midnight UTC)
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(Instant::from_millis(midnight_utc(date)));
    }

    // Try MM/DD/YYYY (midnight UTC)
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%m/%d/%Y") {
        return Ok(Instant::from_millis(midnight_utc(date)));
    }

    Err(InvalidDateError::unparseable(text))
}

fn midnight_utc(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}

// ============================================================================
// TESTS
// ============================================================================
