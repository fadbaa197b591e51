//! Closed clockwise polygon produced by the refiner.
//!
//! Invariants:
//! - At least three stored points, first == last.
//! - Vertices are only ever inserted, never removed or reordered.
//! - Traversal is clockwise (non-positive signed area).

use super::predicates::cross;
use super::types::{Edge, Point};

#[derive(Clone, Debug, PartialEq)]
pub struct Perimeter {
    pts: Vec<Point>,
}

impl Perimeter {
    /// Degenerate back-and-forth segment `[left, right, left]`.
    pub(crate) fn seed(left: Point, right: Point) -> Self {
        Self {
            pts: vec![left, right, left],
        }
    }

    /// Insert `p` right after position `pos`, splitting edge `pos`.
    #[inline]
    pub(crate) fn insert_after(&mut self, pos: usize, p: Point) {
        self.pts.insert(pos + 1, p);
    }

    /// Edge starting at position `pos`.
    #[inline]
    pub(crate) fn edge(&self, pos: usize) -> Edge {
        Edge::new(self.pts[pos], self.pts[pos + 1])
    }

    /// Number of edges (stored points minus one).
    #[inline]
    pub(crate) fn edge_count(&self) -> usize {
        self.pts.len() - 1
    }

    /// Closed sequence, first point repeated at the end.
    pub fn points(&self) -> &[Point] {
        &self.pts
    }

    /// Distinct hull vertices in clockwise order (closing duplicate dropped).
    pub fn vertices(&self) -> &[Point] {
        &self.pts[..self.pts.len() - 1]
    }

    pub fn vertex_count(&self) -> usize {
        self.pts.len() - 1
    }

    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.pts.windows(2).map(|w| Edge::new(w[0], w[1]))
    }

    /// Hull with fewer than three vertices: a segment walked both ways.
    pub fn is_degenerate(&self) -> bool {
        self.vertex_count() < 3
    }

    /// Total boundary length.
    pub fn length(&self) -> f64 {
        self.edges().map(|e| e.length()).sum()
    }

    /// Shoelace area; negative for clockwise order, zero for a segment.
    pub fn signed_area(&self) -> f64 {
        0.5 * self
            .pts
            .windows(2)
            .map(|w| w[0].x * w[1].y - w[1].x * w[0].y)
            .sum::<f64>()
    }

    /// Inside-or-on test with distance slack `eps`.
    ///
    /// Valid for the convex clockwise polygons the refiner produces. For a
    /// degenerate hull the point must lie on the segment (within `eps`).
    pub fn contains_eps(&self, p: Point, eps: f64) -> bool {
        if self.is_degenerate() {
            let (a, b) = (self.pts[0], self.pts[1]);
            let ab = b - a;
            let len2 = ab.norm_squared();
            let t = ((p - a).dot(&ab) / len2).clamp(0.0, 1.0);
            return (a + ab * t - p).norm() <= eps;
        }
        self.edges().all(|e| {
            let len = e.length();
            len == 0.0 || cross(e.p1, e.p2, p) / len <= eps
        })
    }

    pub fn into_points(self) -> Vec<Point> {
        self.pts
    }
}
