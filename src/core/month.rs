//! Calendar month type used as the time axis for monthly aggregation.

use crate::error::{ForecastError, Result};
use chrono::{Datelike, NaiveDate};
use std::fmt;

/// A calendar month, identified by year and month number.
///
/// Months order chronologically and support the small amount of arithmetic
/// the monthly series needs: stepping forward, and measuring the distance
/// between two months.
///
/// # Example
/// ```
/// use retail_forecast::core::Month;
/// use chrono::NaiveDate;
///
/// let month = Month::from_date(NaiveDate::from_ymd_opt(2017, 12, 30).unwrap());
/// assert_eq!(month.to_string(), "2017-12");
/// assert_eq!(month.next().to_string(), "2018-01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// Create a month from a year and a month number (1-12).
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(ForecastError::InvalidParameter(format!(
                "month must be between 1 and 12, got {month}"
            )));
        }
        Ok(Self { year, month })
    }

    /// The month a calendar date falls in.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month number (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The immediately following month.
    pub fn next(self) -> Self {
        self.plus_months(1)
    }

    /// The month `count` months after this one (negative counts step back).
    pub fn plus_months(self, count: i64) -> Self {
        let linear = i64::from(self.year) * 12 + i64::from(self.month) - 1 + count;
        Self {
            year: linear.div_euclid(12) as i32,
            month: (linear.rem_euclid(12) + 1) as u32,
        }
    }

    /// Number of months from `earlier` to `self` (negative if `self` is earlier).
    pub fn months_since(self, earlier: Month) -> i64 {
        (i64::from(self.year) - i64::from(earlier.year)) * 12 + i64::from(self.month)
            - i64::from(earlier.month)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_validates_range() {
        assert!(Month::new(2020, 1).is_ok());
        assert!(Month::new(2020, 12).is_ok());
        assert!(matches!(
            Month::new(2020, 0),
            Err(ForecastError::InvalidParameter(_))
        ));
        assert!(matches!(
            Month::new(2020, 13),
            Err(ForecastError::InvalidParameter(_))
        ));
    }

    #[test]
    fn month_from_date_drops_the_day() {
        let first = Month::from_date(NaiveDate::from_ymd_opt(2016, 11, 1).unwrap());
        let last = Month::from_date(NaiveDate::from_ymd_opt(2016, 11, 30).unwrap());
        assert_eq!(first, last);
        assert_eq!(first.year(), 2016);
        assert_eq!(first.month(), 11);
    }

    #[test]
    fn month_next_rolls_over_december() {
        let december = Month::new(2019, 12).unwrap();
        let january = december.next();
        assert_eq!(january, Month::new(2020, 1).unwrap());
    }

    #[test]
    fn month_plus_months_crosses_years_both_ways() {
        let start = Month::new(2020, 3).unwrap();
        assert_eq!(start.plus_months(0), start);
        assert_eq!(start.plus_months(10), Month::new(2021, 1).unwrap());
        assert_eq!(start.plus_months(24), Month::new(2022, 3).unwrap());
        assert_eq!(start.plus_months(-3), Month::new(2019, 12).unwrap());
        assert_eq!(start.plus_months(-15), Month::new(2018, 12).unwrap());
    }

    #[test]
    fn month_distance_is_signed() {
        let earlier = Month::new(2016, 11).unwrap();
        let later = Month::new(2017, 2).unwrap();
        assert_eq!(later.months_since(earlier), 3);
        assert_eq!(earlier.months_since(later), -3);
        assert_eq!(earlier.months_since(earlier), 0);
    }

    #[test]
    fn month_orders_chronologically() {
        let a = Month::new(2019, 12).unwrap();
        let b = Month::new(2020, 1).unwrap();
        let c = Month::new(2020, 2).unwrap();
        assert!(a < b);
        assert!(b < c);

        let mut months = vec![c, a, b];
        months.sort();
        assert_eq!(months, vec![a, b, c]);
    }

    #[test]
    fn month_displays_as_year_dash_month() {
        assert_eq!(Month::new(2017, 3).unwrap().to_string(), "2017-03");
        assert_eq!(Month::new(2017, 11).unwrap().to_string(), "2017-11");
    }
}
