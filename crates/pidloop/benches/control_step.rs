//! pidloop benchmarks
//!
//! - Single update step with every limit engaged
//! - Sustained closed loop against a first-order plant

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pidloop::{Controller, Limits};
use std::time::Duration;

fn bench_single_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");
    group.measurement_time(Duration::from_secs(5));

    group.bench_function("unbounded", |b| {
        let mut pid = Controller::new(1.2, 0.4, 0.05, 0.001);
        b.iter(|| black_box(pid.call(black_box(0.25))));
    });

    group.bench_function("all_limits", |b| {
        let mut pid = Controller::new(1.2, 0.4, 0.05, 0.001)
            .with_output_limits(Limits::symmetric(1.0))
            .with_windup_limits(Limits::symmetric(0.5))
            .with_max_diff(0.01);
        b.iter(|| black_box(pid.call(black_box(0.25))));
    });

    group.finish();
}

fn bench_closed_loop(c: &mut Criterion) {
    let mut group = c.benchmark_group("closed_loop");

    for steps in [1_000u64, 10_000, 100_000].iter() {
        group.throughput(Throughput::Elements(*steps));
        group.bench_with_input(BenchmarkId::new("steps", steps), steps, |b, &steps| {
            b.iter(|| {
                let dt = 0.001;
                let mut y = 0.0f64;
                let mut pid = Controller::new(2.0, 4.0, 0.0, dt)
                    .with_output_limits(Limits::symmetric(5.0))
                    .with_windup_limits(Limits::symmetric(2.0));
                for _ in 0..steps {
                    let u = pid.call(1.0 - y);
                    y += (u - y) * dt / 0.5;
                }
                black_box(y)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_step, bench_closed_loop);
criterion_main!(benches);
