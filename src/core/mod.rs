//! Core data structures for the retail sales domain.

mod forecast;
mod month;
mod monthly_series;
mod transaction;

pub use forecast::{ForecastTable, ProductForecast};
pub use month::Month;
pub use monthly_series::MonthlySeries;
pub use transaction::Transaction;
