//! Benchmarks for the per-product forecast sweep.

use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use retail_forecast::core::Transaction;
use retail_forecast::sweep::{forecast_all_products, monthly_sales_by_product, SweepConfig};
use rust_decimal::Decimal;
use std::hint::black_box;

/// One order per month per product, with a deterministic level and
/// seasonal swing that differ across products.
fn synthetic_transactions(products: usize, months: usize) -> Vec<Transaction> {
    let mut transactions = Vec::with_capacity(products * months);
    for p in 0..products {
        let name = format!("product-{p:04}");
        for m in 0..months {
            let year = 2018 + (m / 12) as i32;
            let month = (m % 12) as u32 + 1;
            let date = NaiveDate::from_ymd_opt(year, month, 14).unwrap();
            let amount = 100 + (p % 7) as i64 * 10 + ((m % 12) as i64 - 6) * 3;
            transactions.push(Transaction::new(name.as_str(), date, Decimal::from(amount)));
        }
    }
    transactions
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("forecast_sweep");

    for products in [10, 50, 200].iter() {
        let transactions = synthetic_transactions(*products, 36);

        group.bench_with_input(
            BenchmarkId::new("forecast_all_products", products),
            products,
            |b, _| {
                b.iter(|| forecast_all_products(black_box(&transactions), &SweepConfig::default()))
            },
        );
    }

    group.finish();
}

fn bench_grouping(c: &mut Criterion) {
    let mut group = c.benchmark_group("monthly_grouping");

    for products in [50, 200, 1000].iter() {
        let transactions = synthetic_transactions(*products, 36);

        group.bench_with_input(
            BenchmarkId::new("monthly_sales_by_product", products),
            products,
            |b, _| b.iter(|| monthly_sales_by_product(black_box(&transactions))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_sweep, bench_grouping);
criterion_main!(benches);
