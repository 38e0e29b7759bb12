//! Per-product seasonal forecast sweep.
//!
//! Partitions a transaction table by product, builds each product's
//! contiguous monthly sales series, and fits a seasonal smoothing model
//! to every series with enough history. Products that cannot be modeled
//! are left out of the result rather than reported as errors.

use crate::core::{ForecastTable, MonthlySeries, ProductForecast, Transaction};
use crate::error::ForecastError;
use crate::models::HoltWinters;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tracing::debug;

/// Configuration for the forecast sweep.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Minimum number of months a product's series must span to be modeled.
    pub min_months: usize,
    /// Number of months to forecast past the last observed month.
    pub horizon: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            min_months: 12,
            horizon: 6,
        }
    }
}

/// Outcome of attempting a forecast for a single product series.
#[derive(Debug, Clone, PartialEq)]
pub enum SweepOutcome {
    /// The model fitted and produced a forecast.
    Forecast(ProductForecast),
    /// The series spans fewer months than the configured minimum.
    InsufficientHistory {
        /// Number of months the series actually covers.
        observed: usize,
    },
    /// The model declined the series or failed numerically.
    FitFailed(ForecastError),
}

/// Group transactions into a zero-filled monthly sales series per product.
///
/// Each product's series runs contiguously from its first observed month
/// to its last; months without orders appear as zero. Monthly totals are
/// exact decimal sums, so the result does not depend on row order.
///
/// # Example
/// ```
/// use retail_forecast::sweep::monthly_sales_by_product;
/// use retail_forecast::core::Transaction;
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
///
/// let transactions = vec![
///     Transaction::new("Stapler", NaiveDate::from_ymd_opt(2020, 1, 5).unwrap(), dec!(19.99)),
///     Transaction::new("Stapler", NaiveDate::from_ymd_opt(2020, 3, 9).unwrap(), dec!(39.98)),
/// ];
///
/// let by_product = monthly_sales_by_product(&transactions);
/// let series = &by_product["Stapler"];
/// assert_eq!(series.len(), 3); // January through March, February zero-filled
/// ```
pub fn monthly_sales_by_product(transactions: &[Transaction]) -> BTreeMap<String, MonthlySeries> {
    let mut by_product: BTreeMap<String, Vec<(NaiveDate, Decimal)>> = BTreeMap::new();
    for transaction in transactions {
        by_product
            .entry(transaction.product().to_string())
            .or_default()
            .push((transaction.order_date(), transaction.sales()));
    }

    by_product
        .into_iter()
        .filter_map(|(product, observations)| {
            MonthlySeries::from_observations(&observations)
                .ok()
                .map(|series| (product, series))
        })
        .collect()
}

/// Attempt a seasonal forecast for one product's monthly series.
///
/// Series covering fewer than `config.min_months` months are not modeled.
/// Otherwise an additive Holt-Winters model with a twelve-month cycle is
/// fitted, with smoothing parameters chosen by in-sample squared error,
/// and the forecast covers the `config.horizon` months immediately after
/// the last observed month.
pub fn try_forecast(series: &MonthlySeries, config: &SweepConfig) -> SweepOutcome {
    if series.len() < config.min_months {
        return SweepOutcome::InsufficientHistory {
            observed: series.len(),
        };
    }

    let mut model = HoltWinters::default();
    if let Err(err) = model.fit(series) {
        return SweepOutcome::FitFailed(err);
    }

    match model.predict(config.horizon) {
        Ok(values) => {
            let months = series.future_months(config.horizon);
            SweepOutcome::Forecast(ProductForecast::new(months, values))
        }
        Err(err) => SweepOutcome::FitFailed(err),
    }
}

/// Run the forecast sweep over every product in the transaction table.
///
/// Products whose series are too short, or whose model fails to fit, are
/// absent from the result. The table iterates in product-name order.
///
/// # Example
/// ```
/// use retail_forecast::sweep::{forecast_all_products, SweepConfig};
/// use retail_forecast::core::Transaction;
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
///
/// // Two years of steady orders for one product.
/// let transactions: Vec<Transaction> = (0..24)
///     .map(|i| {
///         let date = NaiveDate::from_ymd_opt(2020 + i / 12, (i % 12) as u32 + 1, 10).unwrap();
///         Transaction::new("Desk Lamp", date, dec!(120.00))
///     })
///     .collect();
///
/// let table = forecast_all_products(&transactions, &SweepConfig::default());
/// assert_eq!(table["Desk Lamp"].horizon(), 6);
/// ```
pub fn forecast_all_products(transactions: &[Transaction], config: &SweepConfig) -> ForecastTable {
    let mut table = ForecastTable::new();

    for (product, series) in monthly_sales_by_product(transactions) {
        match try_forecast(&series, config) {
            SweepOutcome::Forecast(forecast) => {
                table.insert(product, forecast);
            }
            SweepOutcome::InsufficientHistory { observed } => {
                debug!(product = %product, observed, "skipping product: history below minimum");
            }
            SweepOutcome::FitFailed(err) => {
                debug!(product = %product, error = %err, "skipping product: fit failed");
            }
        }
    }

    table
}
