//! Synthetic point clouds for the `generate` and `scale` subcommands.

use anyhow::{anyhow, Result};
use clap::ValueEnum;
use hull2d::geom2::rand::{circle_points, uniform_box_points, uniform_grid_points, ReplayToken};
use hull2d::{HullEngine, HullError, Point2};
use std::path::Path;

use crate::io;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Dist {
    /// Integer lattice points in `[lo, hi]^2`
    Grid,
    /// Uniform floats in `[lo, hi)^2`
    Box,
    /// Uniform angles on a circle of `radius`; every point is a hull vertex
    Circle,
}

impl Dist {
    pub fn as_str(self) -> &'static str {
        match self {
            Dist::Grid => "grid",
            Dist::Box => "box",
            Dist::Circle => "circle",
        }
    }
}

pub enum Cloud {
    Grid(Vec<Point2<i32>>),
    Float(Vec<Point2<f64>>),
}

impl Cloud {
    pub fn len(&self) -> usize {
        match self {
            Cloud::Grid(pts) => pts.len(),
            Cloud::Float(pts) => pts.len(),
        }
    }

    pub fn hull_len(&self, engine: &HullEngine) -> Result<usize, HullError> {
        match self {
            Cloud::Grid(pts) => engine.compute_hull(pts).map(|h| h.len()),
            Cloud::Float(pts) => engine.compute_hull(pts).map(|h| h.len()),
        }
    }

    pub fn write_csv(&self, path: &Path) -> Result<()> {
        match self {
            Cloud::Grid(pts) => io::write_points_i32(path, pts),
            Cloud::Float(pts) => io::write_points_f64(path, pts),
        }
    }
}

/// Distribution plus its bounds, checked once up front.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub dist: Dist,
    pub lo: f64,
    pub hi: f64,
    pub radius: f64,
}

impl CloudCfg {
    fn grid_bounds(&self) -> Result<(i32, i32)> {
        let as_i32 = |v: f64| {
            if v.fract() == 0.0 && v >= i32::MIN as f64 && v <= i32::MAX as f64 {
                Some(v as i32)
            } else {
                None
            }
        };
        match (as_i32(self.lo), as_i32(self.hi)) {
            (Some(lo), Some(hi)) => Ok((lo, hi)),
            _ => Err(anyhow!(
                "grid bounds must be integers in i32 range (got lo={}, hi={})",
                self.lo,
                self.hi
            )),
        }
    }

    /// Reject bounds the samplers would refuse.
    pub fn validate(&self) -> Result<()> {
        let tok = ReplayToken::new(0, 0);
        let ok = match self.dist {
            Dist::Grid => {
                let (lo, hi) = self.grid_bounds()?;
                uniform_grid_points(0, lo, hi, tok).is_some()
            }
            Dist::Box => uniform_box_points(0, self.lo, self.hi, tok).is_some(),
            Dist::Circle => circle_points(0, self.radius, tok).is_some(),
        };
        if ok {
            Ok(())
        } else {
            Err(anyhow!("invalid bounds for {} distribution: {:?}", self.dist.as_str(), self))
        }
    }

    pub fn draw(&self, count: usize, tok: ReplayToken) -> Result<Cloud> {
        let cloud = match self.dist {
            Dist::Grid => {
                let (lo, hi) = self.grid_bounds()?;
                uniform_grid_points(count, lo, hi, tok).map(Cloud::Grid)
            }
            Dist::Box => uniform_box_points(count, self.lo, self.hi, tok).map(Cloud::Float),
            Dist::Circle => circle_points(count, self.radius, tok).map(Cloud::Float),
        };
        cloud.ok_or_else(|| anyhow!("invalid bounds for {} distribution: {:?}", self.dist.as_str(), self))
    }
}
