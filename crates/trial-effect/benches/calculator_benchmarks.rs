use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trial_core::{GroupStatistics, TrialComparison};
use trial_effect::{two_tailed_p_value, EffectSizeCalculator};

fn bench_compute(c: &mut Criterion) {
    let calculator = EffectSizeCalculator::new();
    let basic = TrialComparison::new(
        GroupStatistics::new(20, 11.0, 18.28),
        GroupStatistics::new(10, 1.9, 16.22),
    );
    let extended = TrialComparison::new(
        GroupStatistics::new(20, 11.0, 18.28).with_baseline(150.0),
        GroupStatistics::new(10, 1.9, 16.22).with_baseline(152.0),
    )
    .with_project_day(180);

    let mut group = c.benchmark_group("compute");
    group.bench_function("basic", |b| b.iter(|| calculator.compute(black_box(&basic))));
    group.bench_function("extended", |b| {
        b.iter(|| calculator.compute(black_box(&extended)))
    });
    group.finish();
}

fn bench_p_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("two_tailed_p_value");
    for df in [2.0, 28.0, 500.0, 5000.0] {
        group.bench_with_input(BenchmarkId::from_parameter(df), &df, |b, &df| {
            b.iter(|| two_tailed_p_value(black_box(1.7), df))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compute, bench_p_value);
criterion_main!(benches);
