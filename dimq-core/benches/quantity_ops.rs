use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use dimq_core::prefix::{CENTI, KILO, MILLI};
use dimq_core::units::{Meters, SquareMeters};
use dimq_core::{DynQuantity, Ratio};
use std::hint::black_box;

fn bench_same_ratio(c: &mut Criterion) {
    let mut group = c.benchmark_group("same_ratio");

    let a = Meters::<i64>::new(3);
    let b = Meters::<i64>::new(4);
    group.bench_function("mul_i64", |bench| {
        bench.iter(|| black_box(black_box(a).try_mul(black_box(b))));
    });
    group.bench_function("add_i64", |bench| {
        bench.iter(|| black_box(black_box(a).try_add(black_box(b))));
    });

    let x = Meters::new(3.0);
    let y = Meters::new(4.0);
    group.bench_function("mul_f64", |bench| {
        bench.iter(|| black_box(black_box(x).try_mul(black_box(y))));
    });

    group.finish();
}

fn bench_mixed_ratios(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_ratios");

    let cases = [
        ("milli_kilo", MILLI, KILO),
        ("centi_thirty", CENTI, Ratio::integer(30)),
        ("coprime", Ratio::new_const(3, 7), Ratio::new_const(5, 11)),
    ];
    for (name, ra, rb) in cases {
        let a = Meters::<i64>::with_ratio(2, ra).unwrap();
        let b = Meters::<i64>::with_ratio(5, rb).unwrap();
        group.bench_with_input(BenchmarkId::new("mul", name), &(a, b), |bench, (a, b)| {
            bench.iter(|| black_box(a.try_mul(*b)));
        });
        group.bench_with_input(BenchmarkId::new("eq", name), &(a, b), |bench, (a, b)| {
            bench.iter(|| black_box(a.try_eq(b)));
        });
    }

    let area = SquareMeters::<i64>::with_ratio(1000, KILO).unwrap();
    let side = Meters::<i64>::with_ratio(2, MILLI).unwrap();
    group.bench_function("div_lowers_exponent", |bench| {
        bench.iter(|| black_box(black_box(area).try_div(black_box(side))));
    });

    group.finish();
}

fn bench_dynamic(c: &mut Criterion) {
    let mut group = c.benchmark_group("dynamic");

    let a = DynQuantity::new('L', 1, 2_i64, MILLI).unwrap();
    let b = DynQuantity::new('L', 1, 5_i64, KILO).unwrap();
    group.bench_function("mul", |bench| {
        bench.iter(|| black_box(black_box(a).try_mul(black_box(b))));
    });

    let items: Vec<_> = (0..100)
        .map(|i| DynQuantity::new('L', 1, i as i64, MILLI).unwrap())
        .collect();
    group.bench_function("sum_100", |bench| {
        bench.iter(|| {
            items
                .iter()
                .try_fold(DynQuantity::new('L', 1, 0_i64, MILLI).unwrap(), |acc, q| {
                    acc.try_add(*q)
                })
        });
    });

    group.finish();
}

criterion_group!(benches, bench_same_ratio, bench_mixed_ratios, bench_dynamic);
criterion_main!(benches);
