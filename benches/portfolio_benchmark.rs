use criterion::{black_box, criterion_group, criterion_main, Criterion};
use recovery_engine::analytics::portfolio::PortfolioSummary;
use recovery_engine::analytics::trend::monthly_recovery;
use recovery_engine::core::enforcement::Enforcement;
use recovery_engine::simulation::sample::{generate_random_portfolio, PortfolioConfig};

fn bench_summary_100_assignments(c: &mut Criterion) {
    let config = PortfolioConfig {
        assignment_count: 100,
        ..Default::default()
    };
    let assignments = generate_random_portfolio(&config);

    c.bench_function("summary_100_assignments", |b| {
        b.iter(|| PortfolioSummary::from_assignments(black_box(&assignments)))
    });
}

fn bench_summary_10000_assignments(c: &mut Criterion) {
    let config = PortfolioConfig {
        assignment_count: 10_000,
        ..Default::default()
    };
    let assignments = generate_random_portfolio(&config);

    c.bench_function("summary_10000_assignments", |b| {
        b.iter(|| PortfolioSummary::from_assignments(black_box(&assignments)))
    });
}

fn bench_trend_10000_assignments(c: &mut Criterion) {
    let config = PortfolioConfig {
        assignment_count: 10_000,
        ..Default::default()
    };
    let assignments = generate_random_portfolio(&config);
    let enforcements: Vec<Enforcement> = assignments
        .iter()
        .flat_map(|a| a.enforcements().iter().cloned())
        .collect();

    c.bench_function("trend_10000_assignments", |b| {
        b.iter(|| monthly_recovery(black_box(&enforcements), config.as_of, 6))
    });
}

criterion_group!(
    benches,
    bench_summary_100_assignments,
    bench_summary_10000_assignments,
    bench_trend_10000_assignments
);
criterion_main!(benches);
