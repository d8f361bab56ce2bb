// ============================================================================
// Rounding Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Scale Rounding - The three policies of set_scale in isolation
// 2. Scaled Division - Divide-then-round as used by consuming code
// 3. Wage Tax - The full sample calculation end to end
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scaled_decimal::prelude::*;

// ============================================================================
// Scale Rounding Benchmarks
// ============================================================================

fn benchmark_set_scale(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_scale");

    let values: Vec<ScaledValue> = (0..1000)
        .map(|i| ScaledValue::from_float((i as f64 - 500.0) * 3.14159))
        .collect();

    for (name, mode) in [
        ("toward_zero", RoundingMode::TowardZero),
        ("away_from_zero", RoundingMode::AwayFromZero),
        ("nearest", RoundingMode::Nearest),
    ] {
        group.bench_with_input(BenchmarkId::new(name, values.len()), &values, |b, values| {
            b.iter(|| {
                for v in values {
                    black_box(v.set_scale(2, mode));
                }
            });
        });
    }

    group.finish();
}

// ============================================================================
// Scaled Division Benchmarks
// ============================================================================

fn benchmark_div_scaled(c: &mut Criterion) {
    let mut group = c.benchmark_group("div_scaled");

    let numerator = ScaledValue::from_integer(10);
    let denominator = ScaledValue::from_integer(3);

    group.bench_function("unrounded", |b| {
        b.iter(|| black_box(black_box(numerator) / black_box(denominator)));
    });

    group.bench_function("nearest_2", |b| {
        b.iter(|| {
            black_box(black_box(numerator).div_scaled(
                black_box(denominator),
                2,
                RoundingMode::Nearest,
            ))
        });
    });

    group.finish();
}

// ============================================================================
// Wage Tax Benchmarks
// End-to-end sample calculation
// ============================================================================

fn benchmark_wage_tax(c: &mut Criterion) {
    let mut group = c.benchmark_group("wage_tax");

    let calculator = WageTaxCalculator::default();

    for wage_cents in [1_000_000i64, 5_000_000, 30_000_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(wage_cents),
            &wage_cents,
            |b, &wage_cents| {
                let input = TaxInput {
                    wage: ScaledValue::from_integer(wage_cents),
                    period: PaymentPeriod::Year,
                    tax_class: TaxClass::I,
                };
                b.iter(|| black_box(calculator.calculate(black_box(&input))));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_set_scale,
    benchmark_div_scaled,
    benchmark_wage_tax
);
criterion_main!(benches);
