//! Best-selling product per season.

use crate::core::Transaction;
use chrono::Datelike;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::fmt;

/// Season buckets for order dates.
///
/// December belongs to winter together with the January and February that
/// follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Season {
    /// December through February.
    Winter,
    /// March through May.
    Spring,
    /// June through August.
    Summer,
    /// September through November.
    Autumn,
}

impl Season {
    /// The season a calendar month number (1-12) falls in.
    pub fn from_month(month: u32) -> Self {
        match month {
            12 | 1 | 2 => Season::Winter,
            3 | 4 | 5 => Season::Spring,
            6 | 7 | 8 => Season::Summer,
            _ => Season::Autumn,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
        };
        f.write_str(name)
    }
}

/// The top product within one season.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonalTopProduct {
    /// Product name.
    pub product: String,
    /// The product's summed sales within the season.
    pub sales: Decimal,
}

/// Find each season's best-selling product by total sales.
///
/// Sales are summed per product within each season across all years.
/// Ties resolve to the lexicographically smallest product name. Seasons
/// with no orders are absent.
pub fn top_products_by_season(
    transactions: &[Transaction],
) -> BTreeMap<Season, SeasonalTopProduct> {
    let mut totals: BTreeMap<Season, BTreeMap<String, Decimal>> = BTreeMap::new();
    for transaction in transactions {
        let season = Season::from_month(transaction.order_date().month());
        *totals
            .entry(season)
            .or_default()
            .entry(transaction.product().to_string())
            .or_insert(Decimal::ZERO) += transaction.sales();
    }

    totals
        .into_iter()
        .filter_map(|(season, products)| {
            // Ascending name order; replace only on strictly greater sales,
            // so ties keep the smaller name.
            let mut best: Option<(String, Decimal)> = None;
            for (product, sales) in products {
                let replace = match &best {
                    Some((_, best_sales)) => sales > *best_sales,
                    None => true,
                };
                if replace {
                    best = Some((product, sales));
                }
            }
            best.map(|(product, sales)| (season, SeasonalTopProduct { product, sales }))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn order(product: &str, year: i32, month: u32, sales: Decimal) -> Transaction {
        let date = NaiveDate::from_ymd_opt(year, month, 10).unwrap();
        Transaction::new(product, date, sales)
    }

    #[test]
    fn months_map_to_their_seasons() {
        assert_eq!(Season::from_month(12), Season::Winter);
        assert_eq!(Season::from_month(1), Season::Winter);
        assert_eq!(Season::from_month(2), Season::Winter);
        assert_eq!(Season::from_month(3), Season::Spring);
        assert_eq!(Season::from_month(5), Season::Spring);
        assert_eq!(Season::from_month(6), Season::Summer);
        assert_eq!(Season::from_month(8), Season::Summer);
        assert_eq!(Season::from_month(9), Season::Autumn);
        assert_eq!(Season::from_month(11), Season::Autumn);
    }

    #[test]
    fn season_displays_its_name() {
        assert_eq!(Season::Winter.to_string(), "Winter");
        assert_eq!(Season::Autumn.to_string(), "Autumn");
    }

    #[test]
    fn picks_the_product_with_the_largest_seasonal_sum() {
        // Heater wins winter on the sum even though the single largest
        // order belongs to Blanket.
        let transactions = vec![
            order("Heater", 2020, 12, dec!(300)),
            order("Heater", 2021, 1, dec!(300)),
            order("Blanket", 2021, 2, dec!(500)),
            order("Fan", 2021, 7, dec!(250)),
        ];

        let top = top_products_by_season(&transactions);
        assert_eq!(top[&Season::Winter].product, "Heater");
        assert_eq!(top[&Season::Winter].sales, dec!(600));
        assert_eq!(top[&Season::Summer].product, "Fan");
        assert!(!top.contains_key(&Season::Spring));
        assert!(!top.contains_key(&Season::Autumn));
    }

    #[test]
    fn december_counts_toward_winter() {
        let transactions = vec![order("Sled", 2020, 12, dec!(100))];

        let top = top_products_by_season(&transactions);
        assert_eq!(top.len(), 1);
        assert!(top.contains_key(&Season::Winter));
    }

    #[test]
    fn ties_resolve_to_the_smaller_name() {
        let transactions = vec![
            order("Zebra Print", 2020, 4, dec!(100)),
            order("Aardvark Plush", 2020, 5, dec!(100)),
        ];

        let top = top_products_by_season(&transactions);
        assert_eq!(top[&Season::Spring].product, "Aardvark Plush");
    }

    #[test]
    fn empty_input_gives_empty_map() {
        assert!(top_products_by_season(&[]).is_empty());
    }
}
