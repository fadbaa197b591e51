//! Basic 2D types used by the hull core.
//!
//! - `Point`: plain `nalgebra` column vector, compared by exact coordinates.
//! - `Edge`: directed segment of the perimeter under construction.
//! - `Line`: supporting line of an edge, either sloped or vertical.
//! - `HullCfg`: knobs for the refiner (work bound).

use nalgebra::Vector2;

/// A point in the plane.
pub type Point = Vector2<f64>;

/// Directed edge `p1 → p2` of a clockwise perimeter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub p1: Point,
    pub p2: Point,
}

impl Edge {
    #[inline]
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// True when `p` coincides with one of the endpoints.
    #[inline]
    pub fn is_endpoint(&self, p: &Point) -> bool {
        *p == self.p1 || *p == self.p2
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.p1.x == self.p2.x
    }

    /// Euclidean length of the segment.
    #[inline]
    pub fn length(&self) -> f64 {
        (self.p2 - self.p1).norm()
    }
}

/// Supporting line of an edge.
///
/// `Sloped` is `y = slope·x + intercept`; a zero slope is the horizontal
/// regime. `Vertical` is `x = x`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Line {
    Sloped { slope: f64, intercept: f64 },
    Vertical { x: f64 },
}

impl Line {
    #[inline]
    pub fn is_horizontal(&self) -> bool {
        matches!(*self, Line::Sloped { slope, .. } if slope == 0.0)
    }
}

/// Hull refinement configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct HullCfg {
    /// Upper bound on vertex insertions. `None` means "number of input points",
    /// which a well-behaved run never reaches.
    pub max_insertions: Option<usize>,
}

impl HullCfg {
    #[inline]
    pub(crate) fn insertion_limit(&self, n_points: usize) -> usize {
        self.max_insertions.unwrap_or(n_points)
    }
}
