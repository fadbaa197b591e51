//! Convex hulls of planar point sets via incremental quickhull.
//!
//! The core lives in [`hull`]: seed with the x-extremes, then refine a closed
//! clockwise perimeter edge by edge until no input point lies outside.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.
//! - Breaking changes are fine when they improve clarity; keep `api` and
//!   `prelude` in sync.

pub mod api;
pub mod error;
pub mod hull;

pub use error::HullError;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::HullError;
    pub use crate::hull::rand::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
    pub use crate::hull::{
        shortest_perimeter, shortest_perimeter_with_cfg, Edge, HullCfg, Perimeter, Point,
    };
}
