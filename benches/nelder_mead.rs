use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ndarray::prelude::*;
use optikit::prelude::*;

fn sphere(x: &Array1<f64>) -> f64 {
    x.iter().map(|&xi| xi * xi).sum()
}

fn rosenbrock(x: &Array1<f64>) -> f64 {
    (0..x.len() - 1)
        .map(|i| (1.0 - x[i]).powi(2) + 100.0 * (x[i + 1] - x[i].powi(2)).powi(2))
        .sum()
}

fn bench_sphere(c: &mut Criterion) {
    let mut group = c.benchmark_group("nelder_mead_sphere");
    for dims in [2_usize, 5, 10] {
        group.bench_with_input(BenchmarkId::from_parameter(dims), &dims, |b, &dims| {
            b.iter(|| {
                let mut optimizer = NelderMead::new(MultiDimFn::new(sphere));
                let result = optimizer.minimize(black_box(Array1::ones(dims))).unwrap();
                black_box(result.fmin)
            });
        });
    }
    group.finish();
}

fn bench_rosenbrock(c: &mut Criterion) {
    let mut group = c.benchmark_group("nelder_mead_rosenbrock");
    for dims in [2_usize, 4] {
        let mut options = NelderMeadOptions::default();
        options.set_max_iterations(5000);
        group.bench_with_input(BenchmarkId::from_parameter(dims), &dims, |b, &dims| {
            b.iter(|| {
                let mut optimizer = NelderMead::new(MultiDimFn::new(rosenbrock));
                let x0 = Array1::from_elem(dims, -1.2);
                let result = optimizer.minimize_opt(black_box(x0), &options).unwrap();
                black_box(result.fmin)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sphere, bench_rosenbrock);
criterion_main!(benches);
