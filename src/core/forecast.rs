//! Forecast result structures produced by the sweep.

use crate::core::Month;
use std::collections::BTreeMap;

/// Forecast table handed to the presentation layer: one entry per product
/// whose fit succeeded, in deterministic (sorted) product order.
pub type ForecastTable = BTreeMap<String, ProductForecast>;

/// Predicted monthly sales for one product.
///
/// Holds exactly the sweep's horizon of future months, strictly increasing
/// and immediately following the product's last observed month.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductForecast {
    months: Vec<Month>,
    values: Vec<f64>,
}

impl ProductForecast {
    pub(crate) fn new(months: Vec<Month>, values: Vec<f64>) -> Self {
        debug_assert_eq!(months.len(), values.len());
        Self { months, values }
    }

    /// Number of forecasted months.
    pub fn horizon(&self) -> usize {
        self.values.len()
    }

    /// Whether the forecast holds no months.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Forecasted months in chronological order.
    pub fn months(&self) -> &[Month] {
        &self.months
    }

    /// Predicted sales, aligned with [`ProductForecast::months`].
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The predicted value for one month, if it is part of the forecast.
    pub fn value_for(&self, month: Month) -> Option<f64> {
        self.months
            .iter()
            .position(|&m| m == month)
            .map(|idx| self.values[idx])
    }

    /// (month, predicted sales) pairs in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (Month, f64)> + '_ {
        self.months.iter().copied().zip(self.values.iter().copied())
    }
}
