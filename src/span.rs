// 📏 Day Span - Count the days between two points in time
// Absolute difference in epoch milliseconds, rounded to whole days

use crate::instant::{DateInput, Instant, InvalidDateError};
use serde::{Deserialize, Serialize};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Milliseconds in one day (24h * 60m * 60s * 1000ms)
pub const MILLIS_PER_DAY: i64 = 86_400_000;

// ============================================================================
// DAY SPAN REPORT
// ============================================================================

/// DaySpan - the full result of a day-count computation
///
/// Carries the resolved endpoints and the raw millisecond gap alongside the
/// rounded day count, so callers can see what the inputs resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySpan {
    /// First endpoint, resolved
    pub begin: Instant,

    /// Second endpoint, resolved
    pub end: Instant,

    /// Absolute gap between the endpoints in milliseconds
    pub gap_millis: u64,

    /// The gap rounded to whole days (never negative)
    pub days: i64,
}

impl DaySpan {
    /// Human-readable one-line summary
    pub fn summary(&self) -> String {
        format!(
            "{} ↔ {}: {} day{} ({}ms apart)",
            render_instant(self.begin),
            render_instant(self.end),
            self.days,
            if self.days == 1 { "" } else { "s" },
            self.gap_millis
        )
    }
}

fn render_instant(instant: Instant) -> String {
    match instant.to_datetime() {
        Some(dt) => dt.to_rfc3339(),
        None => format!("{}ms", instant.millis()),
    }
}

// ============================================================================
// DAY COUNTING
// ============================================================================

/// Count the days between two date-like inputs
///
/// Both endpoints are resolved to epoch-millisecond instants, then the
/// absolute gap is rounded to whole days (half a day rounds up). The result
/// is symmetric in its arguments and never negative.
///
/// # Examples
///
/// ```
/// use day_span::days_between;
///
/// assert_eq!(days_between("2024-01-01", "2024-01-10").unwrap(), 9);
/// assert_eq!(days_between(0, 86_400_000).unwrap(), 1);
/// ```
pub fn days_between<A, B>(begin: A, end: B) -> Result<i64, InvalidDateError>
where
    A: Into<DateInput>,
    B: Into<DateInput>,
{
    let begin = begin.into().to_instant()?;
    let end = end.into().to_instant()?;
    Ok(days_between_instants(begin, end))
}

/// Count the days between two already-resolved instants
///
/// Pure arithmetic, cannot fail. The gap is widened before rounding so the
/// extremes of the epoch-millisecond range cannot overflow.
pub fn days_between_instants(begin: Instant, end: Instant) -> i64 {
    let gap = (begin.millis() as i128 - end.millis() as i128).unsigned_abs();
    round_to_days(gap)
}

/// Count the days between two inputs and keep the resolved endpoints
///
/// Same arithmetic as days_between, returned as a full report.
pub fn span_between<A, B>(begin: A, end: B) -> Result<DaySpan, InvalidDateError>
where
    A: Into<DateInput>,
    B: Into<DateInput>,
{
    let begin = begin.into().to_instant()?;
    let end = end.into().to_instant()?;
    let gap = (begin.millis() as i128 - end.millis() as i128).unsigned_abs();
    Ok(DaySpan {
        begin,
        end,
        gap_millis: gap as u64,
        days: round_to_days(gap),
    })
}

/// Round a non-negative millisecond gap to whole days, half rounds up
fn round_to_days(gap: u128) -> i64 {
    ((gap + (MILLIS_PER_DAY as u128) / 2) / MILLIS_PER_DAY as u128) as i64
}

// ============================================================================
// TESTS
// ============================================================================
