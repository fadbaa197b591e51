//! Edge-refinement loop with a scoped candidate stack.
//!
//! The perimeter is walked edge by edge. An edge with no outside points is
//! confirmed (`Step::Advance`); otherwise the farthest outside point is
//! inserted after it (`Step::Subdivide`) and the same position is revisited.
//!
//! Each subdivision pushes its outside set on the `CandidateScope` with a
//! lifetime of two edges, so the children of an edge only rescan the points
//! that were outside their parent. The bottom entry borrows the full input and
//! never expires.

use std::borrow::Cow;

use tracing::trace;

use super::partition::{farthest, partition};
use super::perimeter::Perimeter;
use super::types::{Edge, HullCfg, Point};
use crate::error::HullError;

/// Remaining uses of a scope entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifetime {
    Finite(u32),
    Unbounded,
}

#[derive(Debug)]
struct ScopeEntry<'a> {
    points: Cow<'a, [Point]>,
    lifetime: Lifetime,
}

/// Stack of candidate subsets, innermost on top.
///
/// Invariant: never empty; the bottom entry is `Unbounded`.
#[derive(Debug)]
pub struct CandidateScope<'a> {
    stack: Vec<ScopeEntry<'a>>,
}

impl<'a> CandidateScope<'a> {
    pub fn new(all: &'a [Point]) -> Self {
        Self {
            stack: vec![ScopeEntry {
                points: Cow::Borrowed(all),
                lifetime: Lifetime::Unbounded,
            }],
        }
    }

    /// Consume one use of the top entry, dropping it once exhausted.
    pub fn tick(&mut self) {
        let Some(top) = self.stack.last_mut() else {
            return;
        };
        if let Lifetime::Finite(n) = &mut top.lifetime {
            *n = n.saturating_sub(1);
            if *n == 0 {
                self.stack.pop();
            }
        }
    }

    /// Candidates for the current edge.
    pub fn top(&self) -> &[Point] {
        self.stack.last().map(|e| e.points.as_ref()).unwrap_or(&[])
    }

    /// Scope the outside set of a subdivided edge to its two children.
    pub fn push(&mut self, outside: Vec<Point>) {
        self.stack.push(ScopeEntry {
            points: Cow::Owned(outside),
            lifetime: Lifetime::Finite(2),
        });
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn top_lifetime(&self) -> Option<Lifetime> {
        self.stack.last().map(|e| e.lifetime)
    }
}

/// Outcome for one edge.
#[derive(Debug)]
enum Step {
    Advance,
    Subdivide { apex: Point, outside: Vec<Point> },
}

fn step(edge: &Edge, candidates: &[Point]) -> Step {
    let part = partition(edge, candidates);
    match farthest(&part.outside, &part.line) {
        None => Step::Advance,
        Some(apex) => Step::Subdivide {
            apex,
            outside: part.outside,
        },
    }
}

/// Counters collected while refining.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RefineStats {
    pub edges_checked: usize,
    pub insertions: usize,
    pub max_scope_depth: usize,
}

/// Grow `perimeter` from position `pos` until every edge is confirmed.
///
/// `points` becomes the bottom scope entry. Fails only if the insertion
/// bound from `cfg` is hit.
pub fn refine(
    perimeter: &mut Perimeter,
    mut pos: usize,
    points: &[Point],
    cfg: HullCfg,
) -> Result<RefineStats, HullError> {
    let limit = cfg.insertion_limit(points.len());
    let mut scope = CandidateScope::new(points);
    let mut stats = RefineStats {
        max_scope_depth: scope.depth(),
        ..RefineStats::default()
    };

    while pos < perimeter.edge_count() {
        scope.tick();
        let edge = perimeter.edge(pos);
        stats.edges_checked += 1;
        match step(&edge, scope.top()) {
            Step::Advance => pos += 1,
            Step::Subdivide { apex, outside } => {
                if stats.insertions >= limit {
                    return Err(HullError::InsertionLimit { limit });
                }
                trace!(
                    pos,
                    outside = outside.len(),
                    x = apex.x,
                    y = apex.y,
                    "subdivide"
                );
                scope.push(outside);
                stats.max_scope_depth = stats.max_scope_depth.max(scope.depth());
                perimeter.insert_after(pos, apex);
                stats.insertions += 1;
            }
        }
    }
    Ok(stats)
}
