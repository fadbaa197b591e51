//! Line construction and point-side classification for directed edges.
//!
//! The clockwise traversal fixes which side of an edge counts as outside:
//! left-to-right edges run along the top of the hull, so their outside is
//! above; right-to-left edges run along the bottom, so their outside is below.
//! Vertical edges use left/right with the same convention on y.

use super::types::{Edge, Line, Point};

/// Position of a point relative to a `Line`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Above,
    Below,
    Left,
    Right,
    On,
}

/// Supporting line through `edge.p1` and `edge.p2`.
///
/// The vertical regime is picked by comparing x-coordinates before any
/// division happens.
#[inline]
pub fn supporting_line(edge: &Edge) -> Line {
    if edge.is_vertical() {
        return Line::Vertical { x: edge.p1.x };
    }
    let slope = (edge.p2.y - edge.p1.y) / (edge.p2.x - edge.p1.x);
    let intercept = edge.p1.y - edge.p1.x * slope;
    Line::Sloped { slope, intercept }
}

/// Classify `p` against `line`. Exactly-on-line points are `On`.
#[inline]
pub fn classify(line: &Line, p: &Point) -> Side {
    match *line {
        Line::Sloped { slope, intercept } => {
            let y_line = slope * p.x + intercept;
            if p.y > y_line {
                Side::Above
            } else if p.y < y_line {
                Side::Below
            } else {
                Side::On
            }
        }
        Line::Vertical { x } => {
            if p.x < x {
                Side::Left
            } else if p.x > x {
                Side::Right
            } else {
                Side::On
            }
        }
    }
}

/// The side of `edge` that violates the clockwise hull.
#[inline]
pub fn outside_side(edge: &Edge) -> Side {
    if edge.is_vertical() {
        if edge.p1.y < edge.p2.y {
            Side::Left
        } else {
            Side::Right
        }
    } else if edge.p1.x < edge.p2.x {
        Side::Above
    } else {
        Side::Below
    }
}

/// z-component of `(b − a) × (c − a)`. Negative for a clockwise turn.
#[inline]
pub fn cross(a: Point, b: Point, c: Point) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn sloped_line_through_endpoints() {
        let e = Edge::new(vector![0.0, 1.0], vector![2.0, 5.0]);
        match supporting_line(&e) {
            Line::Sloped { slope, intercept } => {
                assert_eq!(slope, 2.0);
                assert_eq!(intercept, 1.0);
            }
            other => panic!("expected sloped, got {other:?}"),
        }
    }

    #[test]
    fn vertical_line_detected_structurally() {
        let e = Edge::new(vector![3.0, -1.0], vector![3.0, 4.0]);
        assert_eq!(supporting_line(&e), Line::Vertical { x: 3.0 });
        assert_eq!(classify(&Line::Vertical { x: 3.0 }, &vector![1.0, 0.0]), Side::Left);
        assert_eq!(classify(&Line::Vertical { x: 3.0 }, &vector![5.0, 0.0]), Side::Right);
        assert_eq!(classify(&Line::Vertical { x: 3.0 }, &vector![3.0, 9.0]), Side::On);
    }

    #[test]
    fn classify_sloped() {
        let line = Line::Sloped {
            slope: 1.0,
            intercept: 0.0,
        };
        assert_eq!(classify(&line, &vector![0.0, 1.0]), Side::Above);
        assert_eq!(classify(&line, &vector![1.0, 0.0]), Side::Below);
        assert_eq!(classify(&line, &vector![2.0, 2.0]), Side::On);
    }

    #[test]
    fn outside_follows_clockwise_convention() {
        let l = vector![0.0, 0.0];
        let r = vector![4.0, 0.0];
        assert_eq!(outside_side(&Edge::new(l, r)), Side::Above);
        assert_eq!(outside_side(&Edge::new(r, l)), Side::Below);
        let lo = vector![0.0, 0.0];
        let hi = vector![0.0, 4.0];
        assert_eq!(outside_side(&Edge::new(lo, hi)), Side::Left);
        assert_eq!(outside_side(&Edge::new(hi, lo)), Side::Right);
    }

    #[test]
    fn cross_sign_is_orientation() {
        let a = vector![0.0, 0.0];
        let b = vector![1.0, 0.0];
        assert!(cross(a, b, vector![0.0, 1.0]) > 0.0);
        assert!(cross(a, b, vector![0.0, -1.0]) < 0.0);
        assert_eq!(cross(a, b, vector![5.0, 0.0]), 0.0);
    }
}
