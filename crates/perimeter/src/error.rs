//! Error types for hull construction.

use thiserror::Error;

/// Errors reported by [`crate::hull::shortest_perimeter`] and friends.
///
/// Geometric special cases (vertical edges, horizontal edges, collinear
/// points) are not errors; they are handled inline by the partitioner and
/// selector. Only caller-side precondition violations and the work bound
/// surface here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HullError {
    /// No points were supplied.
    #[error("empty input: need at least two distinct points")]
    EmptyInput,

    /// All supplied points coincide.
    #[error("degenerate input: {distinct} distinct point(s), need at least two")]
    DegenerateInput {
        /// Number of distinct points found.
        distinct: usize,
    },

    /// A coordinate is NaN or infinite.
    #[error("non-finite coordinate at input index {index}")]
    NonFiniteInput {
        /// Position of the offending point in the input slice.
        index: usize,
    },

    /// The refiner inserted more vertices than the configured bound allows.
    #[error("hull refinement exceeded {limit} vertex insertions")]
    InsertionLimit {
        /// The bound that was hit.
        limit: usize,
    },
}
