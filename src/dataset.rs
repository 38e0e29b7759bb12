//! CSV ingestion for retail order exports.
//!
//! Parses superstore-style order tables into [`Transaction`]s. Expected
//! columns:
//!   Order Date, Product Name, Category, Sub-Category, Sales, Profit
//!
//! `Category`, `Sub-Category`, and `Profit` may be absent. The loader is
//! strict about the rest: a missing required column or a malformed row
//! aborts the whole load with the offending line number, there is no
//! per-row recovery.

use crate::core::Transaction;
use crate::error::{ForecastError, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Date shapes superstore exports use.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Columns a usable export must carry.
const REQUIRED_COLUMNS: [&str; 3] = ["Order Date", "Product Name", "Sales"];

/// One row of an order export.
#[derive(Debug, Clone, Deserialize)]
struct OrderRecord {
    #[serde(rename = "Order Date", deserialize_with = "deserialize_date")]
    order_date: NaiveDate,
    #[serde(rename = "Product Name")]
    product_name: String,
    #[serde(rename = "Category", default)]
    category: String,
    #[serde(rename = "Sub-Category", default)]
    sub_category: String,
    #[serde(rename = "Sales", deserialize_with = "deserialize_decimal")]
    sales: Decimal,
    #[serde(
        rename = "Profit",
        deserialize_with = "deserialize_optional_decimal",
        default
    )]
    profit: Option<Decimal>,
}

impl OrderRecord {
    fn into_transaction(self) -> Transaction {
        let mut transaction = Transaction::new(self.product_name, self.order_date, self.sales)
            .with_category(self.category, self.sub_category);
        if let Some(profit) = self.profit {
            transaction = transaction.with_profit(profit);
        }
        transaction
    }
}

fn deserialize_date<'de, D>(deserializer: D) -> std::result::Result<NaiveDate, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(&raw, format) {
            return Ok(date);
        }
    }
    Err(serde::de::Error::custom(format!(
        "unparseable order date `{raw}`"
    )))
}

fn deserialize_decimal<'de, D>(deserializer: D) -> std::result::Result<Decimal, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Decimal::from_str(&raw)
        .map_err(|_| serde::de::Error::custom(format!("invalid decimal `{raw}`")))
}

fn deserialize_optional_decimal<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if raw.is_empty() {
        return Ok(None);
    }
    Decimal::from_str(&raw)
        .map(Some)
        .map_err(|_| serde::de::Error::custom(format!("invalid decimal `{raw}`")))
}

/// Load transactions from CSV data.
///
/// Amounts are parsed as exact decimals, never through floating point, so
/// later monthly aggregation stays sum-exact.
///
/// # Example
/// ```
/// use retail_forecast::dataset::load_transactions;
///
/// let csv_data = "\
/// Order Date,Product Name,Sales
/// 2020-01-15,Stapler,19.99
/// 01/20/2020,Stapler,12.50
/// ";
///
/// let transactions = load_transactions(csv_data.as_bytes()).unwrap();
/// assert_eq!(transactions.len(), 2);
/// ```
pub fn load_transactions<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| ForecastError::Dataset {
            line: 1,
            message: e.to_string(),
        })?
        .clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(ForecastError::MissingColumn(column.to_string()));
        }
    }

    let mut transactions = Vec::new();
    for (index, row) in csv_reader.deserialize::<OrderRecord>().enumerate() {
        // Line 1 is the header row.
        let record = row.map_err(|e| ForecastError::Dataset {
            line: index + 2,
            message: e.to_string(),
        })?;
        transactions.push(record.into_transaction());
    }

    debug!(rows = transactions.len(), "loaded transaction table");
    Ok(transactions)
}

/// Load transactions from a CSV file on disk.
pub fn load_transactions_path(path: impl AsRef<Path>) -> Result<Vec<Transaction>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .map_err(|e| ForecastError::Io(format!("{}: {}", path.display(), e)))?;
    load_transactions(file)
}
