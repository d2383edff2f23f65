//! Calendar helpers for monthly bucketing.
//!
//! Trade records carry plain `chrono::NaiveDate` values. This module adds the
//! two calendar operations the rest of the workspace needs: resolving the last
//! calendar day of a month and parsing ISO 8601 dates with a typed error.
//!
//! # Examples
//!
//! ```
//! use trade_core::types::time::{month_end, parse_iso_date};
//!
//! let end = month_end(2024, 2).unwrap();
//! assert_eq!(end, parse_iso_date("2024-02-29").unwrap());
//! ```

use chrono::{Datelike, NaiveDate};

use super::error::DateError;

/// Returns the last calendar day of the given month.
///
/// Leap years are handled by stepping back one day from the first of the
/// following month.
///
/// # Arguments
/// * `year` - Calendar year
/// * `month` - Month (1-12)
///
/// # Returns
/// `Err(DateError::InvalidDate)` if `month` is outside 1-12 or the year is
/// outside chrono's supported range.
///
/// # Examples
///
/// ```
/// use trade_core::types::time::month_end;
/// use chrono::Datelike;
///
/// assert_eq!(month_end(2023, 1).unwrap().day(), 31);
/// assert_eq!(month_end(2023, 2).unwrap().day(), 28);
/// assert_eq!(month_end(2023, 12).unwrap().day(), 31);
/// assert!(month_end(2023, 13).is_err());
/// ```
pub fn month_end(year: i32, month: u32) -> Result<NaiveDate, DateError> {
    let invalid = DateError::InvalidDate {
        year,
        month,
        day: 1,
    };
    if !(1..=12).contains(&month) {
        return Err(invalid);
    }

    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .ok_or(invalid)
}

/// Returns the month-end date of the month containing `date`.
pub fn period_end(date: NaiveDate) -> Result<NaiveDate, DateError> {
    month_end(date.year(), date.month())
}

/// Parses a date from ISO 8601 format string (YYYY-MM-DD).
///
/// Surrounding whitespace is ignored.
///
/// # Examples
///
/// ```
/// use trade_core::types::time::parse_iso_date;
///
/// assert!(parse_iso_date("2020-01-01").is_ok());
/// assert!(parse_iso_date("01/01/2020").is_err());
/// ```
pub fn parse_iso_date(s: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| DateError::ParseError(format!("{}: {}", s, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_end_leap_year() {
        assert_eq!(
            month_end(2020, 2).unwrap(),
            NaiveDate::from_ymd_opt(2020, 2, 29).unwrap()
        );
        assert_eq!(
            month_end(2100, 2).unwrap(),
            NaiveDate::from_ymd_opt(2100, 2, 28).unwrap()
        );
    }

    #[test]
    fn test_month_end_december_rolls_year() {
        assert_eq!(
            month_end(2023, 12).unwrap(),
            NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()
        );
    }

    #[test]
    fn test_month_end_rejects_month_zero() {
        assert!(matches!(
            month_end(2023, 0),
            Err(DateError::InvalidDate { month: 0, .. })
        ));
    }

    #[test]
    fn test_period_end_matches_month_end() {
        for month in 1..=12 {
            let mid = NaiveDate::from_ymd_opt(2022, month, 15).unwrap();
            assert_eq!(period_end(mid).unwrap(), month_end(2022, month).unwrap());
        }
    }

    #[test]
    fn test_parse_iso_date_trims() {
        let date = parse_iso_date(" 2023-02-01 ").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 2, 1).unwrap());
    }

    #[test]
    fn test_parse_iso_date_error_mentions_input() {
        let err = parse_iso_date("2023-13-01").unwrap_err();
        assert!(err.to_string().contains("2023-13-01"));
    }
}
