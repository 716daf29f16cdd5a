//! Benchmarks for the holiday driver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use hc_holidays::{holidays_for_year, holidays_for_years};

fn bench_single_year(c: &mut Criterion) {
    c.bench_function("holidays_for_year 2024", |b| {
        b.iter(|| holidays_for_year(black_box(2024)).unwrap())
    });
}

fn bench_century(c: &mut Criterion) {
    let years: Vec<u16> = (2000..2100).collect();
    c.bench_function("holidays_for_years 2000-2099", |b| {
        b.iter(|| holidays_for_years(black_box(&years)).unwrap())
    });
}

criterion_group!(benches, bench_single_year, bench_century);
criterion_main!(benches);
