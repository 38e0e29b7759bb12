//! Month-over-month profit totals.

use crate::core::{Month, Transaction};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Sum profit for each observed order month.
///
/// Only months that contain at least one order appear in the result; this
/// is a grouping of the order table, not a resampled series. Keys iterate
/// chronologically.
pub fn month_over_month_profit(transactions: &[Transaction]) -> BTreeMap<Month, Decimal> {
    let mut totals = BTreeMap::new();
    for transaction in transactions {
        *totals
            .entry(transaction.order_month())
            .or_insert(Decimal::ZERO) += transaction.profit();
    }
    totals
}
