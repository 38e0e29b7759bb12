//! # retail-forecast
//!
//! Per-product seasonal sales forecasting for retail order data.
//!
//! Aggregates dated transactions into contiguous zero-filled monthly
//! series, fits an additive Holt-Winters model to every product with
//! enough history, and collects the per-product forecasts into a
//! deterministic table. Ships the aggregate views that usually sit next
//! to the forecast: category rollups, month-over-month profit, seasonal
//! top sellers, and distinct product counts.

pub mod analytics;
pub mod core;
pub mod dataset;
pub mod error;
pub mod models;
pub mod sweep;
pub mod utils;

pub use error::{ForecastError, Result};

pub mod prelude {
    pub use crate::core::{ForecastTable, Month, MonthlySeries, ProductForecast, Transaction};
    pub use crate::error::{ForecastError, Result};
    pub use crate::models::HoltWinters;
    pub use crate::sweep::{
        forecast_all_products, monthly_sales_by_product, try_forecast, SweepConfig, SweepOutcome,
    };
}
