//! Criterion benchmarks for `shortest_perimeter`.
//! Clouds: square (variable), disk (average), ring (worst case, every point on the hull).
//! Sizes: n in {100, 1_000, 10_000}.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p perimeter

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use perimeter::hull::rand::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
use perimeter::hull::shortest_perimeter;

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_perimeter");
    let shapes = [
        ("square", CloudShape::Square),
        ("disk", CloudShape::Disk),
        ("ring", CloudShape::Ring),
    ];
    for (name, shape) in shapes {
        for &n in &[100usize, 1_000, 10_000] {
            let cfg = CloudCfg {
                shape,
                count: n,
                lo: -10_000.0,
                hi: 10_000.0,
            };
            group.bench_with_input(BenchmarkId::new(name, n), &cfg, |b, &cfg| {
                let mut tok = ReplayToken { seed: 43, index: 0 };
                b.iter_batched(
                    || {
                        tok = tok.next();
                        draw_cloud(cfg, tok).unwrap()
                    },
                    |pts| {
                        let _hull = shortest_perimeter(&pts).unwrap();
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
