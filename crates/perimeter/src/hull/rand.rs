//! Random point clouds for hull experiments (replay tokens).
//!
//! Purpose
//! - Produce input point sets for tests, benches and the CLI. The hull core
//!   never depends on this module.
//!
//! Shapes
//! - `Square`: integer-valued coordinates uniform in `[lo, hi)²`.
//! - `Disk`: like `Square`, restricted to the disk of radius `hi` around the
//!   origin (average case).
//! - `Ring`: points exactly on the circle of radius `hi`; every point is a
//!   hull vertex (worst case).
//!
//! Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use super::types::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

/// Error type for cloud generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    #[error("invalid generator params: {reason}")]
    InvalidParams { reason: String },
}

impl GeneratorError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloudShape {
    Square,
    Disk,
    Ring,
}

/// Cloud configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub shape: CloudShape,
    /// Number of points to draw.
    pub count: usize,
    /// Grid bounds `[lo, hi)`; `hi` doubles as the disk/ring radius.
    pub lo: f64,
    pub hi: f64,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            shape: CloudShape::Disk,
            count: 20,
            lo: -20.0,
            hi: 20.0,
        }
    }
}

impl CloudCfg {
    fn validate(&self) -> Result<(), GeneratorError> {
        if self.count == 0 {
            return Err(GeneratorError::invalid("count must be > 0"));
        }
        if !(self.lo.is_finite() && self.hi.is_finite()) {
            return Err(GeneratorError::invalid("grid bounds must be finite"));
        }
        if self.lo >= self.hi {
            return Err(GeneratorError::invalid("lo < hi required"));
        }
        match self.shape {
            CloudShape::Square if self.lo.ceil() >= self.hi => {
                Err(GeneratorError::invalid("no integer coordinate in [lo, hi)"))
            }
            CloudShape::Square => Ok(()),
            CloudShape::Ring if self.hi <= 0.0 => {
                Err(GeneratorError::invalid("ring radius (hi) must be > 0"))
            }
            CloudShape::Ring => Ok(()),
            // Rejection sampling needs at least one integer grid point inside the disk.
            CloudShape::Disk if self.hi <= 0.0 || self.lo.ceil() > 0.0 => Err(
                GeneratorError::invalid("disk needs hi > 0 and the origin inside [lo, hi)"),
            ),
            CloudShape::Disk => Ok(()),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }

    /// Token for the next draw in the same stream.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
}

/// Draw `cfg.count` points of the configured shape.
pub fn draw_cloud(cfg: CloudCfg, tok: ReplayToken) -> Result<Vec<Point>, GeneratorError> {
    cfg.validate()?;
    let mut rng = tok.to_std_rng();
    let pts = match cfg.shape {
        CloudShape::Square => (0..cfg.count)
            .map(|_| grid_point(&mut rng, cfg.lo, cfg.hi))
            .collect(),
        CloudShape::Disk => {
            let r2 = cfg.hi * cfg.hi;
            let mut out = Vec::with_capacity(cfg.count);
            while out.len() < cfg.count {
                let p = grid_point(&mut rng, cfg.lo, cfg.hi);
                if p.norm_squared() <= r2 {
                    out.push(p);
                }
            }
            out
        }
        CloudShape::Ring => {
            let r = cfg.hi;
            (0..cfg.count)
                .map(|_| {
                    let x = (rng.gen::<f64>() - 0.5) * 2.0 * r;
                    let y = (r * r - x * x).max(0.0).sqrt();
                    let y = if rng.gen::<bool>() { y } else { -y };
                    Point::new(x, y)
                })
                .collect()
        }
    };
    Ok(pts)
}

/// Integer-valued point in `[lo, hi)²`.
fn grid_point<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> Point {
    let lo = lo.ceil() as i64;
    let hi = (hi.ceil() as i64).max(lo + 1);
    Point::new(rng.gen_range(lo..hi) as f64, rng.gen_range(lo..hi) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let cfg = CloudCfg {
            shape: CloudShape::Square,
            count: 50,
            lo: -10.0,
            hi: 10.0,
        };
        let tok = ReplayToken { seed: 42, index: 7 };
        let a = draw_cloud(cfg, tok).unwrap();
        let b = draw_cloud(cfg, tok).unwrap();
        assert_eq!(a, b);
        let c = draw_cloud(cfg, tok.next()).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn square_points_are_integer_grid() {
        let cfg = CloudCfg {
            shape: CloudShape::Square,
            count: 200,
            lo: -3.0,
            hi: 3.0,
        };
        let pts = draw_cloud(cfg, ReplayToken { seed: 1, index: 0 }).unwrap();
        assert_eq!(pts.len(), 200);
        for p in pts {
            assert_eq!(p.x.fract(), 0.0);
            assert!(p.x >= -3.0 && p.x < 3.0 && p.y >= -3.0 && p.y < 3.0);
        }
    }

    #[test]
    fn disk_fills_exact_count_inside_radius() {
        let cfg = CloudCfg {
            shape: CloudShape::Disk,
            count: 300,
            lo: -20.0,
            hi: 20.0,
        };
        let pts = draw_cloud(cfg, ReplayToken { seed: 3, index: 1 }).unwrap();
        assert_eq!(pts.len(), 300);
        assert!(pts.iter().all(|p| p.norm() <= 20.0));
    }

    #[test]
    fn ring_points_lie_on_circle() {
        let cfg = CloudCfg {
            shape: CloudShape::Ring,
            count: 100,
            lo: -5.0,
            hi: 5.0,
        };
        let pts = draw_cloud(cfg, ReplayToken { seed: 9, index: 2 }).unwrap();
        assert!(pts.iter().all(|p| (p.norm() - 5.0).abs() < 1e-9));
    }

    #[test]
    fn invalid_params_rejected() {
        let tok = ReplayToken { seed: 0, index: 0 };
        let zero = CloudCfg {
            count: 0,
            ..CloudCfg::default()
        };
        assert!(draw_cloud(zero, tok).is_err());
        let flipped = CloudCfg {
            lo: 5.0,
            hi: -5.0,
            ..CloudCfg::default()
        };
        assert!(draw_cloud(flipped, tok).is_err());
        let off_origin = CloudCfg {
            shape: CloudShape::Disk,
            lo: 10.0,
            hi: 20.0,
            count: 5,
        };
        assert!(draw_cloud(off_origin, tok).is_err());
    }
}
