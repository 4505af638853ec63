// 📅 Date Range - Enumerate the calendar days a span touches
// Inclusive walk from the begin date to the end date, UTC calendar

use crate::instant::{DateInput, Instant, InvalidDateError};
use chrono::NaiveDate;

// ============================================================================
// RANGE ENUMERATION
// ============================================================================

/// List every UTC calendar date from begin to end, inclusive
///
/// Both endpoints are resolved to instants and truncated to their UTC
/// calendar date; time of day does not affect the result. The walk runs
/// forward only, so a begin date after the end date yields an empty list.
///
/// # Examples
///
/// ```
/// use day_span::dates_between;
///
/// let dates = dates_between("2024-01-01", "2024-01-03").unwrap();
/// assert_eq!(dates.len(), 3);
/// assert_eq!(dates[0].to_string(), "2024-01-01");
/// assert_eq!(dates[2].to_string(), "2024-01-03");
/// ```
pub fn dates_between<A, B>(begin: A, end: B) -> Result<Vec<NaiveDate>, InvalidDateError>
where
    A: Into<DateInput>,
    B: Into<DateInput>,
{
    let start = calendar_date(begin.into().to_instant()?)?;
    let finish = calendar_date(end.into().to_instant()?)?;

    let mut dates = Vec::new();
    let mut current = start;
    while current <= finish {
        dates.push(current);
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    Ok(dates)
}

/// UTC calendar date an instant falls on
///
/// Fails only when the instant cannot be expressed as a calendar date,
/// which raw epoch-millisecond inputs can trigger.
pub fn calendar_date(instant: Instant) -> Result<NaiveDate, InvalidDateError> {
    match instant.to_datetime() {
        Some(dt) => Ok(dt.date_naive()),
        None => Err(InvalidDateError::out_of_range(instant.millis())),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::days_between;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_three_day_range() {
        let dates = dates_between("2024-01-01", "2024-01-03").unwrap();
        assert_eq!(
            dates,
            vec![ymd(2024, 1, 1), ymd(2024, 1, 2), ymd(2024, 1, 3)]
        );
    }

    #[test]
    fn test_single_day_range() {
        let dates = dates_between("2024-01-01", "2024-01-01").unwrap();
        assert_eq!(dates, vec![ymd(2024, 1, 1)]);
    }

    #[test]
    fn test_reversed_range_is_empty() {
        let dates = dates_between("2024-01-03", "2024-01-01").unwrap();
        assert!(dates.is_empty());
    }

    #[test]
    fn test_range_crosses_month_boundary() {
        let dates = dates_between("2024-01-31", "2024-02-02").unwrap();
        assert_eq!(
            dates,
            vec![ymd(2024, 1, 31), ymd(2024, 2, 1), ymd(2024, 2, 2)]
        );
    }

    #[test]
    fn test_range_includes_leap_day() {
        // 2024 has a Feb 29, so three dates cover Feb 28 through Mar 1
        let dates = dates_between("2024-02-28", "2024-03-01").unwrap();
        assert_eq!(
            dates,
            vec![ymd(2024, 2, 28), ymd(2024, 2, 29), ymd(2024, 3, 1)]
        );

        // 2023 does not, so the same endpoints are only two dates
        let non_leap = dates_between("2023-02-28", "2023-03-01").unwrap();
        assert_eq!(non_leap, vec![ymd(2023, 2, 28), ymd(2023, 3, 1)]);
    }

    #[test]
    fn test_time_of_day_is_ignored() {
        let dates = dates_between("2024-01-01T23:59:59", "2024-01-02T00:00:01").unwrap();
        assert_eq!(dates, vec![ymd(2024, 1, 1), ymd(2024, 1, 2)]);
    }

    #[test]
    fn test_epoch_millis_range() {
        // Epoch midnight through two days later
        let dates = dates_between(0, 2 * 86_400_000).unwrap();
        assert_eq!(
            dates,
            vec![ymd(1970, 1, 1), ymd(1970, 1, 2), ymd(1970, 1, 3)]
        );
    }

    #[test]
    fn test_range_length_matches_day_count() {
        // For midnight endpoints the list is one longer than the day count
        let days = days_between("2024-01-01", "2024-01-10").unwrap();
        let dates = dates_between("2024-01-01", "2024-01-10").unwrap();
        assert_eq!(dates.len() as i64, days + 1);
    }

    #[test]
    fn test_invalid_text_is_rejected() {
        assert!(dates_between("not-a-date", "2024-01-01").is_err());
        assert!(dates_between("2024-01-01", "not-a-date").is_err());
    }

    #[test]
    fn test_out_of_range_millis_is_rejected() {
        let err = dates_between(0, i64::MAX).unwrap_err();
        assert!(err.reason.contains("range"));
    }

    #[test]
    fn test_calendar_date_of_instant() {
        let date = calendar_date(Instant::from_millis(0)).unwrap();
        assert_eq!(date, ymd(1970, 1, 1));

        // A second before midnight still lands on the earlier date
        let date = calendar_date(Instant::from_millis(86_400_000 - 1_000)).unwrap();
        assert_eq!(date, ymd(1970, 1, 1));
    }
}
