//! Extreme-point seeding.

use super::types::Point;
use crate::error::HullError;

/// The two seed vertices of the initial degenerate perimeter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extremes {
    pub left: Point,
    pub right: Point,
}

/// Minimum-x and maximum-x points, first occurrence winning on ties.
///
/// When every point shares one x coordinate the extremes are taken along y
/// instead (lowest as `left`, highest as `right`), so a vertical point set
/// still seeds a proper segment.
pub fn extremes(points: &[Point]) -> Result<Extremes, HullError> {
    let (first, rest) = points.split_first().ok_or(HullError::EmptyInput)?;
    let mut left = *first;
    let mut right = *first;
    for p in rest {
        if p.x < left.x {
            left = *p;
        } else if p.x > right.x {
            right = *p;
        }
    }
    if left.x != right.x {
        return Ok(Extremes { left, right });
    }
    let (mut low, mut high) = (*first, *first);
    for p in rest {
        if p.y < low.y {
            low = *p;
        } else if p.y > high.y {
            high = *p;
        }
    }
    if low == high {
        return Err(HullError::DegenerateInput { distinct: 1 });
    }
    Ok(Extremes {
        left: low,
        right: high,
    })
}
