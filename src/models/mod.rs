//! Forecasting models.

mod holt_winters;

pub use holt_winters::HoltWinters;
