//! Benchmarks for amortization and rate-of-return solves.
//!
//! Run with: cargo bench -p finrate-analytics

use std::hint::black_box;

use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};
use finrate_analytics::prelude::*;
use finrate_core::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn apr(value: Decimal, periods: u32) -> Rate {
    Rate::new(value, RateKind::Apr)
        .unwrap()
        .with_duration(periods)
}

fn bench_amortization(c: &mut Criterion) {
    let mut group = c.benchmark_group("amortization");

    let fixed = [apr(dec!(0.0375), years(30))];
    group.bench_function("fixed_360", |b| {
        b.iter(|| Amortization::new(black_box(dec!(200000)), black_box(&fixed)).unwrap());
    });

    let adjustable: Vec<Rate> = (0..10)
        .map(|step| apr(dec!(0.0375) + Decimal::new(step, 2), years(3)))
        .collect();
    group.bench_function("adjustable_360", |b| {
        b.iter(|| Amortization::new(black_box(dec!(200000)), black_box(&adjustable)).unwrap());
    });

    group.bench_function("extra_payment_360", |b| {
        b.iter(|| {
            Amortization::with_adjustment(black_box(dec!(200000)), &fixed, |p| {
                p.amount() - dec!(100)
            })
            .unwrap()
        });
    });

    group.finish();
}

fn bench_returns(c: &mut Criterion) {
    let mut group = c.benchmark_group("returns");

    let flows = [dec!(-4000), dec!(1200), dec!(1410), dec!(1875), dec!(1050)];
    group.bench_function("irr", |b| {
        b.iter(|| irr(black_box(&flows), Some(dec!(0.1))).unwrap());
    });

    let date = |y| NaiveDate::from_ymd_opt(y, 1, 1).unwrap();
    let dated = [
        Transaction::dated(dec!(-1000), date(1985)),
        Transaction::dated(dec!(600), date(1990)),
        Transaction::dated(dec!(600), date(1995)),
    ];
    group.bench_function("xirr", |b| {
        b.iter(|| xirr(black_box(&dated), None).unwrap());
    });

    group.bench_function("effective_interest_rate", |b| {
        b.iter(|| {
            effective_interest_rate(
                360,
                black_box(dec!(-1433.39)),
                dec!(200000),
                Decimal::ZERO,
                PaymentDue::End,
                None,
            )
            .unwrap()
        });
    });

    group.finish();
}

criterion_group!(benches, bench_amortization, bench_returns);
criterion_main!(benches);
