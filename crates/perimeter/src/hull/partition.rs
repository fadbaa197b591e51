//! Candidate partitioning and farthest-point selection for one edge.
//!
//! `partition` keeps only the points that violate the edge's half-plane; the
//! rest are discarded for the edge's scope. `farthest` then picks the next
//! hull vertex among them.
//!
//! Distances are compared, never reported, so the slanted regime skips the
//! square root.

use super::predicates::{classify, outside_side, supporting_line};
use super::types::{Edge, Line, Point};

/// Result of partitioning a point set against one edge.
#[derive(Clone, Debug)]
pub struct Partition {
    /// Points strictly on the outside of the edge.
    pub outside: Vec<Point>,
    /// Supporting line, reused by the selector.
    pub line: Line,
}

impl Partition {
    #[inline]
    pub fn is_confirmed(&self) -> bool {
        self.outside.is_empty()
    }
}

/// Split `points` against `edge`, returning the outside subset.
///
/// Points equal to either endpoint and points exactly on the line are
/// dropped. The input is not modified.
pub fn partition(edge: &Edge, points: &[Point]) -> Partition {
    debug_assert!(edge.p1 != edge.p2, "edge endpoints must differ");
    let line = supporting_line(edge);
    let want = outside_side(edge);
    let outside = points
        .iter()
        .filter(|p| !edge.is_endpoint(p))
        .filter(|p| classify(&line, p) == want)
        .copied()
        .collect();
    Partition { outside, line }
}

/// Point of `outside` farthest from `line`; first one wins on ties.
///
/// Returns `None` only for an empty set.
pub fn farthest(outside: &[Point], line: &Line) -> Option<Point> {
    let (first, rest) = outside.split_first()?;
    let mut best = *first;
    let mut best_key = distance_key(line, first);
    for p in rest {
        let key = distance_key(line, p);
        if key > best_key {
            best_key = key;
            best = *p;
        }
    }
    Some(best)
}

/// Monotone proxy for the distance between `p` and `line`.
fn distance_key(line: &Line, p: &Point) -> f64 {
    match *line {
        Line::Vertical { x } => (p.x - x).abs(),
        // Horizontal: the intercept is the line's y.
        Line::Sloped { intercept, .. } if line.is_horizontal() => (p.y - intercept).abs(),
        Line::Sloped { slope, intercept } => {
            // Perpendicular through p: y = −x/slope + b.
            let inv = slope.recip();
            let b = p.y + inv * p.x;
            let foot_x = (b - intercept) / (slope + inv);
            let foot_y = slope * foot_x + intercept;
            let dx = foot_x - p.x;
            let dy = foot_y - p.y;
            dx * dx + dy * dy
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn left_to_right_keeps_points_above() {
        let e = Edge::new(vector![0.0, 0.0], vector![4.0, 0.0]);
        let pts = vec![
            vector![0.0, 0.0],
            vector![4.0, 0.0],
            vector![1.0, 2.0],
            vector![2.0, -1.0],
            vector![3.0, 0.0],
        ];
        let part = partition(&e, &pts);
        assert_eq!(part.outside, vec![vector![1.0, 2.0]]);
        assert!(part.line.is_horizontal());
    }

    #[test]
    fn right_to_left_keeps_points_below() {
        let e = Edge::new(vector![4.0, 0.0], vector![0.0, 0.0]);
        let pts = vec![vector![1.0, 2.0], vector![2.0, -1.0]];
        let part = partition(&e, &pts);
        assert_eq!(part.outside, vec![vector![2.0, -1.0]]);
    }

    #[test]
    fn vertical_edges_use_left_and_right() {
        let up = Edge::new(vector![0.0, 0.0], vector![0.0, 3.0]);
        let down = Edge::new(vector![0.0, 3.0], vector![0.0, 0.0]);
        let pts = vec![vector![-1.0, 1.0], vector![1.0, 1.0], vector![0.0, 5.0]];
        assert_eq!(partition(&up, &pts).outside, vec![vector![-1.0, 1.0]]);
        assert_eq!(partition(&down, &pts).outside, vec![vector![1.0, 1.0]]);
        assert_eq!(partition(&up, &pts).line, Line::Vertical { x: 0.0 });
    }

    #[test]
    fn endpoints_never_reenter() {
        let e = Edge::new(vector![0.0, 0.0], vector![2.0, 2.0]);
        let pts = vec![vector![0.0, 0.0], vector![2.0, 2.0], vector![2.0, 2.0]];
        assert!(partition(&e, &pts).is_confirmed());
    }

    #[test]
    fn farthest_on_slanted_line() {
        let line = Line::Sloped {
            slope: 1.0,
            intercept: 0.0,
        };
        // Distances to y = x: (0,1) → 1/√2, (0,3) → 3/√2, (1,3) → 2/√2.
        let pts = vec![vector![0.0, 1.0], vector![0.0, 3.0], vector![1.0, 3.0]];
        assert_eq!(farthest(&pts, &line), Some(vector![0.0, 3.0]));
    }

    #[test]
    fn slanted_key_matches_squared_distance() {
        let line = Line::Sloped {
            slope: -2.0,
            intercept: 1.0,
        };
        let p: Point = vector![3.0, 4.0];
        let expected = (p.y - (-2.0 * p.x + 1.0)).powi(2) / (1.0 + 4.0);
        assert!((distance_key(&line, &p) - expected).abs() < 1e-12);
    }

    #[test]
    fn farthest_horizontal_and_vertical() {
        let horiz = Line::Sloped {
            slope: 0.0,
            intercept: 1.0,
        };
        let pts = vec![vector![9.0, 2.0], vector![0.0, 5.0]];
        assert_eq!(farthest(&pts, &horiz), Some(vector![0.0, 5.0]));

        let vert = Line::Vertical { x: 1.0 };
        let pts = vec![vector![4.0, 0.0], vector![-7.0, 0.0]];
        assert_eq!(farthest(&pts, &vert), Some(vector![-7.0, 0.0]));
    }

    #[test]
    fn farthest_ties_keep_first() {
        let horiz = Line::Sloped {
            slope: 0.0,
            intercept: 0.0,
        };
        let pts = vec![vector![4.0, 4.0], vector![0.0, 4.0]];
        assert_eq!(farthest(&pts, &horiz), Some(vector![4.0, 4.0]));
    }

    #[test]
    fn farthest_of_nothing_is_none() {
        assert_eq!(farthest(&[], &Line::Vertical { x: 0.0 }), None);
    }
}
