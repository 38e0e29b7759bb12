//! Distinct product counts.

use crate::core::Transaction;
use std::collections::{BTreeMap, BTreeSet};

/// Distinct product counts overall and per grouping.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductCounts {
    /// Number of distinct product names in the table.
    pub total: usize,
    /// Distinct product names per category.
    pub by_category: BTreeMap<String, usize>,
    /// Distinct product names per sub-category.
    pub by_sub_category: BTreeMap<String, usize>,
}

/// Count distinct products overall, per category, and per sub-category.
///
/// A product sold under several categories counts once in the total and
/// once in each grouping it appears in.
pub fn unique_product_counts(transactions: &[Transaction]) -> ProductCounts {
    let mut all: BTreeSet<&str> = BTreeSet::new();
    let mut by_category: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    let mut by_sub_category: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();

    for transaction in transactions {
        all.insert(transaction.product());
        by_category
            .entry(transaction.category())
            .or_default()
            .insert(transaction.product());
        by_sub_category
            .entry(transaction.sub_category())
            .or_default()
            .insert(transaction.product());
    }

    ProductCounts {
        total: all.len(),
        by_category: by_category
            .into_iter()
            .map(|(category, products)| (category.to_string(), products.len()))
            .collect(),
        by_sub_category: by_sub_category
            .into_iter()
            .map(|(sub_category, products)| (sub_category.to_string(), products.len()))
            .collect(),
    }
}
