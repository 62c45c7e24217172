//! Random planar point sets (uniform clouds + replay tokens).
//!
//! Purpose
//! - Provide small, deterministic samplers used by tests, benches, and the
//!   scaling runs. The hull engine makes no assumption about the distribution.
//!
//! Model
//! - `uniform_grid_points`: integer coordinates uniform in `[lo, hi]`
//!   (the classic driver setup is `[0, 1000]`, many interior points).
//! - `uniform_box_points`: float coordinates uniform in `[lo, hi)`.
//! - `circle_points`: points on a circle, so every point is a hull vertex.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Point2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// Token for the next draw in the same stream.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
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
}

/// `count` integer points with both coordinates uniform in `[lo, hi]`.
///
/// Returns `None` if `lo > hi`.
pub fn uniform_grid_points(count: usize, lo: i32, hi: i32, tok: ReplayToken) -> Option<Vec<Point2<i32>>> {
    if lo > hi {
        return None;
    }
    let mut rng = tok.to_std_rng();
    Some(
        (0..count)
            .map(|_| Point2::new(rng.gen_range(lo..=hi), rng.gen_range(lo..=hi)))
            .collect(),
    )
}

/// `count` float points with both coordinates uniform in `[lo, hi)`.
///
/// Returns `None` unless `lo < hi` and both bounds are finite.
pub fn uniform_box_points(count: usize, lo: f64, hi: f64, tok: ReplayToken) -> Option<Vec<Point2<f64>>> {
    if !(lo.is_finite() && hi.is_finite()) || lo >= hi {
        return None;
    }
    let mut rng = tok.to_std_rng();
    Some(
        (0..count)
            .map(|_| Point2::new(rng.gen_range(lo..hi), rng.gen_range(lo..hi)))
            .collect(),
    )
}

/// `count` points at uniformly random angles on the circle of `radius` around the origin.
///
/// Returns `None` unless `radius` is finite and `> 0`.
pub fn circle_points(count: usize, radius: f64, tok: ReplayToken) -> Option<Vec<Point2<f64>>> {
    if !radius.is_finite() || radius <= 0.0 {
        return None;
    }
    let mut rng = tok.to_std_rng();
    Some(
        (0..count)
            .map(|_| {
                let th = rng.gen::<f64>() * std::f64::consts::TAU;
                Point2::new(th.cos() * radius, th.sin() * radius)
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let tok = ReplayToken { seed: 42, index: 7 };
        let p1 = uniform_grid_points(200, 0, 1000, tok).expect("points");
        let p2 = uniform_grid_points(200, 0, 1000, tok).expect("points");
        assert_eq!(p1, p2);
        let p3 = uniform_grid_points(200, 0, 1000, tok.next()).expect("points");
        assert_ne!(p1, p3);
    }

    #[test]
    fn grid_points_respect_bounds() {
        let pts = uniform_grid_points(500, -5, 5, ReplayToken::new(1, 0)).unwrap();
        assert_eq!(pts.len(), 500);
        assert!(pts.iter().all(|p| (-5..=5).contains(&p.x) && (-5..=5).contains(&p.y)));
        // Degenerate single-value range is allowed.
        let flat = uniform_grid_points(3, 4, 4, ReplayToken::new(1, 1)).unwrap();
        assert!(flat.iter().all(|p| p.x == 4 && p.y == 4));
        assert!(uniform_grid_points(3, 5, 4, ReplayToken::new(1, 2)).is_none());
    }

    #[test]
    fn box_points_respect_bounds() {
        let pts = uniform_box_points(300, -1.0, 2.0, ReplayToken::new(9, 3)).unwrap();
        assert!(pts.iter().all(|p| p.x >= -1.0 && p.x < 2.0 && p.y >= -1.0 && p.y < 2.0));
        assert!(uniform_box_points(3, 1.0, 1.0, ReplayToken::new(9, 4)).is_none());
        assert!(uniform_box_points(3, f64::NAN, 1.0, ReplayToken::new(9, 5)).is_none());
    }

    #[test]
    fn circle_points_lie_on_circle() {
        let r = 2.5;
        let pts = circle_points(128, r, ReplayToken::new(3, 0)).unwrap();
        assert_eq!(pts.len(), 128);
        for p in &pts {
            let norm = (p.x * p.x + p.y * p.y).sqrt();
            assert!((norm - r).abs() < 1e-12);
        }
        assert!(circle_points(4, 0.0, ReplayToken::new(3, 1)).is_none());
    }
}
