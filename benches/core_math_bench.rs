use chart_grammar::api::{ChannelValues, GeometryChannels, ScaleOverrides, infer_scales};
use chart_grammar::coordinate::{PolarOptions, TransformOptions, build_coordinate_system};
use chart_grammar::core::{CanvasRect, Point, Value};
use chart_grammar::scale::{BandScale, LinearScale, numeric};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_linear_scale_round_trip(c: &mut Criterion) {
    let scale = LinearScale::new((0.0, 10_000.0), (0.0, 1.0));

    c.bench_function("linear_scale_round_trip", |b| {
        b.iter(|| {
            let t = scale.map_f64(black_box(4_321.123)).expect("numeric range");
            let _ = scale.invert(t).expect("invertible");
        })
    });
}

fn bench_polar_coordinate_10k(c: &mut Criterion) {
    let system = build_coordinate_system(
        CanvasRect::new(0.0, 0.0, 1920.0, 1080.0),
        &[
            TransformOptions::Transpose,
            TransformOptions::Polar(PolarOptions::default()),
        ],
    );
    let points: Vec<Point> = (0..10_000)
        .map(|i| {
            let t = f64::from(i) / 10_000.0;
            Point::new(t, 1.0 - t)
        })
        .collect();

    c.bench_function("polar_coordinate_10k", |b| {
        b.iter(|| {
            let _ = system.apply_all(black_box(&points));
        })
    });
}

fn bench_band_lookup_1k(c: &mut Criterion) {
    let domain: Vec<Value> = (0..1_000).map(|i| Value::from(format!("k{i}"))).collect();
    let scale = BandScale::new(domain.clone(), (0.0, 1.0), 0.1, 0.1);

    c.bench_function("band_lookup_1k", |b| {
        b.iter(|| {
            for value in &domain {
                let _ = scale.map(black_box(value));
            }
        })
    });
}

fn bench_ticks_and_nice(c: &mut Criterion) {
    c.bench_function("ticks_and_nice", |b| {
        b.iter(|| {
            let (d0, d1) = numeric::nice(black_box(0.37), black_box(9_871.2), 10);
            let _ = numeric::ticks(d0, d1, 10);
        })
    });
}

fn bench_infer_scales_10k(c: &mut Criterion) {
    let channels: GeometryChannels = [
        (
            "x".to_owned(),
            ChannelValues::new((0..10_000).map(|i| Value::from(f64::from(i))).collect()),
        ),
        (
            "y".to_owned(),
            ChannelValues::new(
                (0..10_000)
                    .map(|i| Value::from((f64::from(i) * 0.01).sin()))
                    .collect(),
            ),
        ),
        (
            "fill".to_owned(),
            ChannelValues::new((0..10_000).map(|i| Value::from(format!("g{}", i % 7))).collect()),
        ),
    ]
    .into_iter()
    .collect();
    let overrides = ScaleOverrides::new();

    c.bench_function("infer_scales_10k", |b| {
        b.iter(|| {
            let _ = infer_scales([black_box(&channels)], &overrides);
        })
    });
}

criterion_group!(
    benches,
    bench_linear_scale_round_trip,
    bench_polar_coordinate_10k,
    bench_band_lookup_1k,
    bench_ticks_and_nice,
    bench_infer_scales_10k
);
criterion_main!(benches);
