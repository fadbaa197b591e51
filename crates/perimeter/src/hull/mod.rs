//! Incremental quickhull in 2D ("shortest perimeter").
//!
//! Purpose
//! - Compute the convex hull of a finite point set as a closed, clockwise
//!   `Perimeter` whose vertices are input points.
//! - Avoid a global sort: seed with the x-extremes, then refine edges by
//!   inserting farthest outside points, pruning candidates per edge scope.
//!
//! Pipeline
//! - `seed::extremes` → `Perimeter::seed` (`[left, right, left]`)
//!   → `refine::refine` (uses `partition::{partition, farthest}`).
//!
//! Conventions
//! - Exact comparisons; points exactly on an edge's line are dropped, so
//!   collinear input yields a segment hull walked both ways.
//! - Input is borrowed; every call owns its own perimeter and scope stack.

pub mod partition;
mod perimeter;
pub mod predicates;
pub mod rand;
pub mod refine;
pub mod seed;
mod types;

pub use perimeter::Perimeter;
pub use refine::RefineStats;
pub use types::{Edge, HullCfg, Line, Point};

use tracing::debug;

use crate::error::HullError;

/// Convex hull of `points` with default configuration.
///
/// ```
/// use nalgebra::vector;
/// use perimeter::hull::shortest_perimeter;
///
/// let pts = vec![
///     vector![0.0, 0.0],
///     vector![4.0, 0.0],
///     vector![4.0, 4.0],
///     vector![0.0, 4.0],
///     vector![2.0, 2.0],
/// ];
/// let hull = shortest_perimeter(&pts).unwrap();
/// assert_eq!(hull.vertex_count(), 4);
/// assert_eq!(hull.points().first(), hull.points().last());
/// ```
pub fn shortest_perimeter(points: &[Point]) -> Result<Perimeter, HullError> {
    shortest_perimeter_with_cfg(points, HullCfg::default())
}

/// Convex hull of `points` under `cfg`.
pub fn shortest_perimeter_with_cfg(
    points: &[Point],
    cfg: HullCfg,
) -> Result<Perimeter, HullError> {
    shortest_perimeter_with_stats(points, cfg).map(|(perim, _)| perim)
}

/// Like [`shortest_perimeter_with_cfg`], also returning refinement counters.
pub fn shortest_perimeter_with_stats(
    points: &[Point],
    cfg: HullCfg,
) -> Result<(Perimeter, RefineStats), HullError> {
    if let Some(index) = points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(HullError::NonFiniteInput { index });
    }
    debug!(n = points.len(), "hull start");
    let ex = seed::extremes(points)?;
    let mut perim = Perimeter::seed(ex.left, ex.right);
    let stats = refine::refine(&mut perim, 0, points, cfg)?;
    debug!(
        n = points.len(),
        vertices = perim.vertex_count(),
        insertions = stats.insertions,
        edges_checked = stats.edges_checked,
        "hull done"
    );
    Ok((perim, stats))
}
