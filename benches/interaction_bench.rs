use creative_board::api::{BoardEngine, BoardEngineConfig, ChartKind, build_matrix_geometry};
use creative_board::core::{PlotCalibration, RawRecord, Viewport, aggregate, project_matrix};
use creative_board::interaction::MatrixHitTester;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn synthetic_records(count: usize, creatives: usize) -> Vec<RawRecord> {
    (0..count)
        .map(|i| {
            let cost = 50.0 + (i % 97) as f64;
            let revenue = 40.0 + (i % 131) as f64 * 1.5;
            RawRecord {
                date: format!("2026-08-{:02}", i % 28 + 1),
                creative_name: format!("creative-{}", i % creatives),
                cv: (i % 11) as f64,
                cost,
                revenue,
                profit: revenue - cost,
                roas: revenue / cost * 100.0,
                ..RawRecord::default()
            }
        })
        .collect()
}

fn bench_aggregate_10k(c: &mut Criterion) {
    let records = synthetic_records(10_000, 200);

    c.bench_function("aggregate_10k_records", |b| {
        b.iter(|| {
            let _ = aggregate(black_box(&records));
        })
    });
}

fn bench_matrix_hit_500_bubbles(c: &mut Criterion) {
    let records = synthetic_records(5_000, 500);
    let bubbles = project_matrix(&aggregate(&records));
    let calibration = PlotCalibration::new(60.0, 40.0, 1_200.0, 800.0);

    let mut tester = MatrixHitTester::default();
    tester.publish(build_matrix_geometry(&bubbles, calibration, 450.0, 4.0, 8.0));

    c.bench_function("matrix_hit_500_bubbles", |b| {
        b.iter(|| {
            let _ = tester.hit(black_box(640.0), black_box(430.0));
        })
    });
}

fn bench_engine_pointer_sweep(c: &mut Criterion) {
    let config = BoardEngineConfig::new(
        Viewport::new(1600, 900),
        PlotCalibration::new(60.0, 40.0, 1_200.0, 800.0),
    )
    .with_chart_kind(ChartKind::Stacked)
    .with_pointer_throttle_ms(0.0);
    let mut engine = BoardEngine::new(config).expect("engine init");
    engine.set_records(synthetic_records(10_000, 40));

    c.bench_function("engine_pointer_sweep", |b| {
        let mut t = 0.0;
        b.iter(|| {
            t += 1.0;
            let x = 60.0 + (t as u64 % 1_200) as f64;
            let _ = engine.pointer_move(black_box(x), black_box(420.0), t);
        })
    });
}

criterion_group!(
    benches,
    bench_aggregate_10k,
    bench_matrix_hit_500_bubbles,
    bench_engine_pointer_sweep
);
criterion_main!(benches);
