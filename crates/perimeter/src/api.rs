//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is a convenience surface for the CLI,
//!   benches and experiments. Breaking changes are allowed and expected.

// Hull construction
pub use crate::hull::{
    shortest_perimeter, shortest_perimeter_with_cfg, shortest_perimeter_with_stats, HullCfg,
    Perimeter, Point, RefineStats,
};
// Building blocks
pub use crate::hull::partition::{farthest, partition, Partition};
pub use crate::hull::predicates::{classify, cross, outside_side, supporting_line, Side};
pub use crate::hull::seed::{extremes, Extremes};
// Point clouds
pub use crate::hull::rand::{
    draw_cloud, CloudCfg, CloudShape, GeneratorError, ReplayToken as CloudReplay,
};

use nalgebra::Vector2;

/// Points from `[x, y]` pairs.
pub fn points_from_pairs(pairs: &[[f64; 2]]) -> Vec<Point> {
    pairs.iter().map(|p| Vector2::new(p[0], p[1])).collect()
}

/// `[x, y]` pairs from points.
pub fn pairs_from_points(points: &[Point]) -> Vec<[f64; 2]> {
    points.iter().map(|p| [p.x, p.y]).collect()
}
