//! Per-category sales and profit rollup.

use crate::core::Transaction;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Sales and profit totals for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    /// Exact sum of sales across the category's transactions.
    pub sales: Decimal,
    /// Exact sum of profit across the category's transactions.
    pub profit: Decimal,
    /// Profit as a fraction of sales; absent when sales total zero.
    pub profit_ratio: Option<Decimal>,
}

/// Summarize sales, profit, and profit ratio per category.
///
/// Totals are exact decimal sums. The ratio is `None` for categories whose
/// sales sum to zero, where no meaningful ratio exists.
///
/// # Example
/// ```
/// use retail_forecast::analytics::category_summary;
/// use retail_forecast::core::Transaction;
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
///
/// let day = NaiveDate::from_ymd_opt(2020, 6, 1).unwrap();
/// let transactions = vec![
///     Transaction::new("Chair", day, dec!(100.00))
///         .with_category("Furniture", "Chairs")
///         .with_profit(dec!(25.00)),
/// ];
///
/// let summary = category_summary(&transactions);
/// assert_eq!(summary["Furniture"].profit_ratio, Some(dec!(0.25)));
/// ```
pub fn category_summary(transactions: &[Transaction]) -> BTreeMap<String, CategorySummary> {
    let mut totals: BTreeMap<String, (Decimal, Decimal)> = BTreeMap::new();
    for transaction in transactions {
        let entry = totals
            .entry(transaction.category().to_string())
            .or_insert((Decimal::ZERO, Decimal::ZERO));
        entry.0 += transaction.sales();
        entry.1 += transaction.profit();
    }

    totals
        .into_iter()
        .map(|(category, (sales, profit))| {
            // checked_div is None exactly when sales is zero.
            let profit_ratio = profit.checked_div(sales);
            (
                category,
                CategorySummary {
                    sales,
                    profit,
                    profit_ratio,
                },
            )
        })
        .collect()
}
