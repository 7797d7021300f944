use criterion::{black_box, criterion_group, criterion_main, Criterion};

use contest_math::integer_math::combinatorics::{ncr_direct, FactorialTable};
use contest_math::integer_math::factorization::FactorTable;
use contest_math::integer_math::modular::Modular;
use contest_math::integer_math::prime_sieve::PrimeSieve;

const TABLE_BOUND: u64 = 1_000_000;

fn bench_table_builds(c: &mut Criterion) {
    c.bench_function("sieve_build_1e6", |b| {
        b.iter(|| black_box(PrimeSieve::new(black_box(TABLE_BOUND))))
    });

    c.bench_function("factor_table_build_1e6", |b| {
        b.iter(|| black_box(FactorTable::new(black_box(TABLE_BOUND))))
    });

    c.bench_function("factorial_table_build_1e6", |b| {
        b.iter(|| {
            black_box(FactorialTable::build(
                black_box(TABLE_BOUND as usize),
                Modular::with_default(),
            ))
        })
    });
}

fn bench_queries(c: &mut Criterion) {
    let fact = FactorialTable::build(TABLE_BOUND as usize, Modular::with_default());
    let factors = FactorTable::new(TABLE_BOUND);
    let modular = Modular::with_default();

    c.bench_function("ncr_precomputed", |b| {
        b.iter(|| fact.ncr(black_box(999_983), black_box(4_242)).expect("in range"))
    });

    c.bench_function("ncr_direct_r_1000", |b| {
        b.iter(|| ncr_direct(&modular, black_box(999_983), black_box(1_000)).expect("valid"))
    });

    c.bench_function("factorize_720720", |b| {
        b.iter(|| factors.factorize(black_box(720_720)).expect("in range"))
    });

    c.bench_function("divisors_720720", |b| {
        b.iter(|| factors.divisors(black_box(720_720)).expect("in range"))
    });
}

criterion_group!(benches, bench_table_builds, bench_queries);
criterion_main!(benches);
