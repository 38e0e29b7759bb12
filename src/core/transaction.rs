//! Immutable retail order transaction records.

use crate::core::Month;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// A single order line from a retail sales dataset.
///
/// The forecast sweep only consumes the product, order date, and sales
/// amount; category, sub-category, and profit feed the aggregate analytics.
/// Sales and profit may be negative (returns are kept, not filtered).
///
/// # Example
/// ```
/// use retail_forecast::core::Transaction;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let tx = Transaction::new(
///     "Stapler",
///     NaiveDate::from_ymd_opt(2017, 3, 14).unwrap(),
///     Decimal::new(2199, 2), // 21.99
/// )
/// .with_category("Office Supplies", "Fasteners")
/// .with_profit(Decimal::new(450, 2));
///
/// assert_eq!(tx.product(), "Stapler");
/// assert_eq!(tx.order_month().to_string(), "2017-03");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    product: String,
    order_date: NaiveDate,
    sales: Decimal,
    category: String,
    sub_category: String,
    profit: Decimal,
}

impl Transaction {
    /// Create a transaction from the fields the forecast sweep requires.
    pub fn new(product: impl Into<String>, order_date: NaiveDate, sales: Decimal) -> Self {
        Self {
            product: product.into(),
            order_date,
            sales,
            category: String::new(),
            sub_category: String::new(),
            profit: Decimal::ZERO,
        }
    }

    /// Attach category and sub-category labels.
    pub fn with_category(
        mut self,
        category: impl Into<String>,
        sub_category: impl Into<String>,
    ) -> Self {
        self.category = category.into();
        self.sub_category = sub_category.into();
        self
    }

    /// Attach the profit amount.
    pub fn with_profit(mut self, profit: Decimal) -> Self {
        self.profit = profit;
        self
    }

    /// Product identity.
    pub fn product(&self) -> &str {
        &self.product
    }

    /// Calendar date the order was placed.
    pub fn order_date(&self) -> NaiveDate {
        self.order_date
    }

    /// The calendar month the order falls in.
    pub fn order_month(&self) -> Month {
        Month::from_date(self.order_date)
    }

    /// Sales amount.
    pub fn sales(&self) -> Decimal {
        self.sales
    }

    /// Category label (empty if the dataset carried none).
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Sub-category label (empty if the dataset carried none).
    pub fn sub_category(&self) -> &str {
        &self.sub_category
    }

    /// Profit amount (zero if the dataset carried none).
    pub fn profit(&self) -> Decimal {
        self.profit
    }
}
