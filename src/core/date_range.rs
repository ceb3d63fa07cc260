use std::fmt::{Display, Formatter};

use chrono::{Days, NaiveDate};

/// Reason why a requested date range cannot be queried.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum DateRangeError {
    #[error("Invalid date format. Please use YYYY-MM-DD")]
    InvalidFormat,

    #[error("Invalid date values")]
    InvalidDate,

    #[error("Start date must be less than or equal to end date")]
    StartAfterEnd,

    #[error("Date range cannot exceed {} days", DateRange::MAX_DAYS)]
    TooLong,
}

/// Validated inclusive date range for the hourly energy queries.
///
/// The only way to get one is through the validating constructors,
/// so an invalid range never reaches the remote service.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Maximum number of days in a range, both ends included.
    pub const MAX_DAYS: i64 = 30;

    pub fn try_new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError::StartAfterEnd);
        }
        let range = Self { start, end };
        if range.n_days() > Self::MAX_DAYS {
            return Err(DateRangeError::TooLong);
        }
        Ok(range)
    }

    /// Parse and validate `YYYY-MM-DD` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self, DateRangeError> {
        if !is_iso_date(start) || !is_iso_date(end) {
            return Err(DateRangeError::InvalidFormat);
        }
        let parse = |date| {
            NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| DateRangeError::InvalidDate)
        };
        Self::try_new(parse(start)?, parse(end)?)
    }

    /// The last `n_days` days, including `today`.
    pub fn last_days(today: NaiveDate, n_days: u64) -> Result<Self, DateRangeError> {
        let start = today
            .checked_sub_days(Days::new(n_days.saturating_sub(1)))
            .ok_or(DateRangeError::InvalidDate)?;
        Self::try_new(start, today)
    }

    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of calendar days covered, both ends included.
    pub fn n_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl Display for DateRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}…{}", self.start, self.end)
    }
}

/// Check the `YYYY-MM-DD` shape without interpreting the numbers.
fn is_iso_date(date: &str) -> bool {
    date.len() == 10
        && date.bytes().enumerate().all(|(index, byte)| match index {
            4 | 7 => byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ok() {
        let range = DateRange::parse("2024-01-01", "2024-01-30").unwrap();
        assert_eq!(range.start(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(range.n_days(), 30);
    }

    #[test]
    fn test_single_day_ok() {
        assert_eq!(DateRange::parse("2024-01-01", "2024-01-01").unwrap().n_days(), 1);
    }

    #[test]
    fn test_start_after_end() {
        assert_eq!(
            DateRange::parse("2024-02-01", "2024-01-01"),
            Err(DateRangeError::StartAfterEnd)
        );
    }

    #[test]
    fn test_too_long() {
        assert_eq!(DateRange::parse("2024-01-01", "2024-01-31"), Err(DateRangeError::TooLong));
        assert_eq!(DateRange::parse("2024-01-01", "2024-02-01"), Err(DateRangeError::TooLong));
    }

    #[test]
    fn test_invalid_format() {
        for (start, end) in [
            ("2024-1-01", "2024-01-02"),
            ("2024-01-01", "01/02/2024"),
            ("2024-01-01T00", "2024-01-02"),
            ("", "2024-01-02"),
        ] {
            assert_eq!(DateRange::parse(start, end), Err(DateRangeError::InvalidFormat));
        }
    }

    #[test]
    fn test_invalid_date() {
        assert_eq!(DateRange::parse("2024-02-30", "2024-03-01"), Err(DateRangeError::InvalidDate));
    }

    #[test]
    fn test_last_days() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        let range = DateRange::last_days(today, 7).unwrap();
        assert_eq!(range.start(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(range.end(), today);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(DateRangeError::TooLong.to_string(), "Date range cannot exceed 30 days");
        assert_eq!(
            DateRangeError::StartAfterEnd.to_string(),
            "Start date must be less than or equal to end date"
        );
    }
}
