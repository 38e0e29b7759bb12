//! Contiguous monthly sales aggregates.

use crate::core::Month;
use crate::error::{ForecastError, Result};
use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Per-month sales totals covering every calendar month between the first
/// and last observed order date.
///
/// The series stores its first month plus a dense vector of totals, so it is
/// contiguous and chronologically ordered by construction; months with no
/// observations hold an exact zero. Totals are exact decimal sums, which
/// makes bucket totals independent of the order the rows arrive in.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySeries {
    first: Month,
    totals: Vec<Decimal>,
}

impl MonthlySeries {
    /// Aggregate dated amounts into a contiguous monthly series.
    ///
    /// Returns [`ForecastError::EmptyData`] when `observations` is empty.
    ///
    /// # Example
    /// ```
    /// use retail_forecast::core::MonthlySeries;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let observations = vec![
    ///     (NaiveDate::from_ymd_opt(2020, 1, 5).unwrap(), Decimal::new(1000, 2)),
    ///     (NaiveDate::from_ymd_opt(2020, 3, 9).unwrap(), Decimal::new(2500, 2)),
    /// ];
    /// let series = MonthlySeries::from_observations(&observations).unwrap();
    ///
    /// // February had no orders but is present, as zero.
    /// assert_eq!(series.len(), 3);
    /// assert_eq!(series.totals()[1], Decimal::ZERO);
    /// ```
    pub fn from_observations(observations: &[(NaiveDate, Decimal)]) -> Result<Self> {
        let (first_date, _) = observations.first().ok_or(ForecastError::EmptyData)?;
        let mut first = Month::from_date(*first_date);
        let mut last = first;
        for (date, _) in observations {
            let month = Month::from_date(*date);
            first = first.min(month);
            last = last.max(month);
        }

        let span = last.months_since(first) as usize + 1;
        let mut totals = vec![Decimal::ZERO; span];
        for (date, amount) in observations {
            let offset = Month::from_date(*date).months_since(first) as usize;
            totals[offset] += *amount;
        }

        Ok(Self { first, totals })
    }

    /// Number of months covered, including zero-filled ones.
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// Whether the series covers no months (never true for a constructed series).
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// First covered month.
    pub fn first_month(&self) -> Month {
        self.first
    }

    /// Last covered month.
    pub fn last_month(&self) -> Month {
        self.first.plus_months(self.totals.len() as i64 - 1)
    }

    /// The covered months, in chronological order.
    pub fn months(&self) -> impl Iterator<Item = Month> {
        let first = self.first;
        (0..self.totals.len() as i64).map(move |offset| first.plus_months(offset))
    }

    /// Exact per-month totals, aligned with [`MonthlySeries::months`].
    pub fn totals(&self) -> &[Decimal] {
        &self.totals
    }

    /// The total for one month, if it lies inside the covered range.
    pub fn total_for(&self, month: Month) -> Option<Decimal> {
        let offset = month.months_since(self.first);
        if offset < 0 {
            return None;
        }
        self.totals.get(offset as usize).copied()
    }

    /// (month, total) pairs in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (Month, Decimal)> + '_ {
        self.months().zip(self.totals.iter().copied())
    }

    /// Float view of the totals for model fitting.
    pub fn values(&self) -> Vec<f64> {
        self.totals
            .iter()
            .map(|total| total.to_f64().unwrap_or(f64::NAN))
            .collect()
    }

    /// The `horizon` months immediately following the last covered month.
    pub fn future_months(&self, horizon: usize) -> Vec<Month> {
        let last = self.last_month();
        (1..=horizon as i64).map(|step| last.plus_months(step)).collect()
    }
}
