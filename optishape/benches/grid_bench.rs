use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use optishape::engine::NestingEngine;
use optishape::entities::{Part, PartKind, Sheet};
use optishape::geometry::primitives::Point;
use optishape::util::{CollisionMode, NestConfig};

criterion_main!(benches);
criterion_group!(benches, grid_scan_bench);

const STEP_SIZES: [f64; 3] = [10.0, 5.0, 2.5];

fn grid_scan_bench(c: &mut Criterion) {
    let sheet = Sheet::new(200.0, 150.0).unwrap();
    let parts = create_parts();

    let mut group = c.benchmark_group("grid_scan");
    for mode in [CollisionMode::Exact, CollisionMode::Bbox] {
        for step in STEP_SIZES {
            let config = NestConfig {
                step_size: step,
                collision_mode: mode,
                ..NestConfig::default()
            };
            let engine = NestingEngine::new(sheet, config).unwrap();
            group.bench_with_input(
                BenchmarkId::new(format!("{mode:?}"), step),
                &parts,
                |b, parts| b.iter(|| black_box(engine.nest(parts).unwrap())),
            );
        }
    }
    group.finish();
}

/// A mix of regular and irregular parts, enough of them to fill a large share of the sheet.
fn create_parts() -> Vec<Part> {
    let l_shape = vec![
        Point(0.0, 0.0),
        Point(30.0, 0.0),
        Point(30.0, 10.0),
        Point(10.0, 10.0),
        Point(10.0, 25.0),
        Point(0.0, 25.0),
    ];
    (0..30)
        .map(|i| {
            let kind = match i % 5 {
                0 => PartKind::Rectangle { width: 25.0, height: 15.0 },
                1 => PartKind::Circle { radius: 9.0 },
                2 => PartKind::Triangle { base: 30.0, height: 20.0 },
                3 => PartKind::Parallelogram { base: 20.0, height: 12.0, skew: 20.0 },
                _ => PartKind::Polygon { vertices: l_shape.clone() },
            };
            Part::new(i, kind)
        })
        .collect()
}
