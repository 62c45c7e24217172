//! CSV point tables via Polars and small filesystem helpers.
//!
//! Point tables carry two columns `x` and `y`; any extra columns are ignored.

use anyhow::{anyhow, Context, Result};
use hull2d::Point2;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

fn read_xy(path: &Path) -> Result<DataFrame> {
    let lf = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?;
    lf.select([col("x"), col("y")])
        .collect()
        .with_context(|| format!("reading columns x,y from {}", path.display()))
}

fn zip_points<T: hull2d::Coord>(
    xs: impl Iterator<Item = Option<T>>,
    ys: impl Iterator<Item = Option<T>>,
    path: &Path,
) -> Result<Vec<Point2<T>>> {
    xs.zip(ys)
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Point2::new(x, y)),
            _ => Err(anyhow!("{}: row {row} has a missing coordinate", path.display())),
        })
        .collect()
}

/// Read `x,y` as floats. Integer columns are widened.
pub fn read_points_f64(path: &Path) -> Result<Vec<Point2<f64>>> {
    let df = read_xy(path)?;
    let xs = df.column("x")?.cast(&DataType::Float64)?;
    let ys = df.column("y")?.cast(&DataType::Float64)?;
    zip_points(xs.f64()?.into_iter(), ys.f64()?.into_iter(), path)
}

/// Read `x,y` as 64-bit integers. Float columns are rejected rather than truncated.
pub fn read_points_i64(path: &Path) -> Result<Vec<Point2<i64>>> {
    let df = read_xy(path)?;
    for name in ["x", "y"] {
        let dtype = df.column(name)?.dtype().clone();
        if !dtype.is_integer() {
            return Err(anyhow!(
                "{}: column {name} has type {dtype}, expected integers",
                path.display()
            ));
        }
    }
    let xs = df.column("x")?.cast(&DataType::Int64)?;
    let ys = df.column("y")?.cast(&DataType::Int64)?;
    zip_points(xs.i64()?.into_iter(), ys.i64()?.into_iter(), path)
}

pub fn write_points_i32(path: &Path, points: &[Point2<i32>]) -> Result<()> {
    let xs: Vec<i32> = points.iter().map(|p| p.x).collect();
    let ys: Vec<i32> = points.iter().map(|p| p.y).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    write_csv(path, &mut df)
}

pub fn write_points_f64(path: &Path, points: &[Point2<f64>]) -> Result<()> {
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    write_csv(path, &mut df)
}

pub fn write_csv(path: &Path, df: &mut DataFrame) -> Result<()> {
    ensure_parent(path)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
