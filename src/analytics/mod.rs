//! Aggregate views over the transaction table.
//!
//! Pure, deterministic rollups that sit alongside the forecast sweep:
//! category totals, month-over-month profit, seasonal top sellers, and
//! distinct product counts.

mod category;
mod products;
mod profit;
mod season;

pub use category::{category_summary, CategorySummary};
pub use products::{unique_product_counts, ProductCounts};
pub use profit::month_over_month_profit;
pub use season::{top_products_by_season, Season, SeasonalTopProduct};
