//! Criterion benchmarks for the basket Monte Carlo engine.
//!
//! Benchmarks cover:
//! - Batch normal generation (foundation for the simulation)
//! - Basket pricing with varying path counts
//! - Sensitivities via bump-and-revalue

use basket_pricer::mc::{BasketParams, BasketPayoff, BasketPricer, MonteCarloConfig};
use basket_pricer::rng::SimRng;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_rng_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("rng_generation");

    for n_samples in [1_000, 10_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("normal_batch", n_samples),
            &n_samples,
            |b, &n| {
                let mut rng = SimRng::from_seed(42);
                let mut buffer = vec![0.0; n];
                b.iter(|| {
                    rng.fill_normal(&mut buffer);
                    black_box(buffer.iter().sum::<f64>())
                });
            },
        );
    }

    group.finish();
}

fn bench_basket_pricing(c: &mut Criterion) {
    let mut group = c.benchmark_group("basket_pricing");
    group.sample_size(50);

    let params = BasketParams::default();
    let payoff = BasketPayoff::call(100.0);
    let n_steps = 50;

    for n_paths in [1_000, 10_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("basket_call", n_paths),
            &n_paths,
            |b, &n| {
                let config = MonteCarloConfig::builder()
                    .n_paths(n)
                    .n_steps(n_steps)
                    .seed(42)
                    .build()
                    .unwrap();
                let mut pricer = BasketPricer::new(config).unwrap();
                b.iter(|| pricer.price(black_box(params), black_box(payoff)).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_sensitivities(c: &mut Criterion) {
    let mut group = c.benchmark_group("sensitivities");
    group.sample_size(20);

    let params = BasketParams::default();
    let payoff = BasketPayoff::call(100.0);

    let config = MonteCarloConfig::builder()
        .n_paths(10_000)
        .n_steps(50)
        .seed(42)
        .build()
        .unwrap();
    let mut pricer = BasketPricer::new(config).unwrap();

    group.bench_function("bump_and_revalue", |b| {
        b.iter(|| {
            pricer
                .sensitivities(black_box(params), black_box(payoff))
                .unwrap()
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_rng_generation,
    bench_basket_pricing,
    bench_sensitivities
);
criterion_main!(benches);
