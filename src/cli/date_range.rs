use chrono::{Local, NaiveDate};
use clap::Parser;

use crate::{
    core::date_range::{DateRange, DateRangeError},
    prelude::*,
};

#[derive(Parser)]
pub struct DateRangeArgs {
    /// First date to include, `YYYY-MM-DD`.
    #[clap(long = "start-date", env = "START_DATE")]
    start: Option<String>,

    /// Last date to include, `YYYY-MM-DD`. Defaults to today.
    #[clap(long = "end-date", env = "END_DATE")]
    end: Option<String>,
}

impl DateRangeArgs {
    /// Default number of days when the start date is omitted.
    const DEFAULT_N_DAYS: u64 = 7;

    pub fn validate(&self) -> Result<DateRange, DateRangeError> {
        let range = self.validate_on(Local::now().date_naive())?;
        debug!(%range, n_days = range.n_days(), "validated");
        Ok(range)
    }

    fn validate_on(&self, today: NaiveDate) -> Result<DateRange, DateRangeError> {
        match (&self.start, &self.end) {
            (Some(start), Some(end)) => DateRange::parse(start, end),
            (Some(start), None) => DateRange::parse(start, &today.to_string()),
            (None, Some(end)) => {
                DateRange::last_days(DateRange::parse(end, end)?.end(), Self::DEFAULT_N_DAYS)
            }
            (None, None) => DateRange::last_days(today, Self::DEFAULT_N_DAYS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(start: Option<&str>, end: Option<&str>) -> DateRangeArgs {
        DateRangeArgs { start: start.map(str::to_owned), end: end.map(str::to_owned) }
    }

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, month, day).unwrap()
    }

    #[test]
    fn test_defaults_to_last_week() -> Result {
        let range = args(None, None).validate_on(date(1, 10))?;
        assert_eq!(range.start(), date(1, 4));
        assert_eq!(range.end(), date(1, 10));
        assert_eq!(range.n_days(), 7);
        Ok(())
    }

    #[test]
    fn test_end_only() -> Result {
        let range = args(None, Some("2024-02-02")).validate_on(date(6, 1))?;
        assert_eq!(range.start(), date(1, 27));
        Ok(())
    }

    #[test]
    fn test_start_only() -> Result {
        let range = args(Some("2024-01-05"), None).validate_on(date(1, 10))?;
        assert_eq!(range.start(), date(1, 5));
        assert_eq!(range.end(), date(1, 10));
        Ok(())
    }

    #[test]
    fn test_invalid() {
        assert_eq!(
            args(Some("2024-1-1"), Some("2024-01-02")).validate_on(date(1, 10)),
            Err(DateRangeError::InvalidFormat),
        );
        assert_eq!(
            args(Some("2024-01-01"), Some("2024-02-01")).validate_on(date(1, 10)),
            Err(DateRangeError::TooLong),
        );
    }
}
