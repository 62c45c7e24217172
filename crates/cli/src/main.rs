use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use hull2d::geom2::rand::ReplayToken;
use hull2d::hull::signed_area;
use hull2d::scaling::{log_spaced_sizes, loglog_fit, measure_scaling, nlogn_reference};
use hull2d::{Coord, HullEngine, Point2, Strategy, Winding};
use polars::prelude::*;
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod cloud;
mod io;
mod provenance;

use cloud::{CloudCfg, Dist};
use provenance::{write_sidecar, Run};

#[derive(Parser)]
#[command(name = "hull2d")]
#[command(about = "Planar convex hulls: CSV in, JSON out, plus synthetic clouds and scaling runs")]
struct Cmd {
    /// Optional run tag; propagated to provenance and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the hull of an `x,y` CSV and write it as JSON
    Hull {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Read integer coordinates (exact predicates) instead of floats
        #[arg(long)]
        int: bool,
        #[arg(long, value_enum, default_value_t = Order::Discovery)]
        order: Order,
        #[arg(long, value_enum, default_value_t = StrategyArg::Stack)]
        strategy: StrategyArg,
    },
    /// Write a synthetic point cloud as `x,y` CSV
    Generate {
        #[arg(long)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, value_enum, default_value_t = Dist::Grid)]
        dist: Dist,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        lo: f64,
        #[arg(long, default_value_t = 1000.0, allow_hyphen_values = true)]
        hi: f64,
        #[arg(long, default_value_t = 1.0)]
        radius: f64,
    },
    /// Time the engine over log-spaced sizes and write a timing table
    Scale {
        #[arg(long, default_value_t = 1.0)]
        min_pow: f64,
        #[arg(long, default_value_t = 6.0)]
        max_pow: f64,
        #[arg(long, default_value_t = 10)]
        steps: usize,
        #[arg(long, default_value_t = 3)]
        repeats: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Sample index the n log n reference curve is pinned to
        #[arg(long, default_value_t = 5)]
        anchor: usize,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, value_enum, default_value_t = Dist::Grid)]
        dist: Dist,
        #[arg(long, value_enum, default_value_t = StrategyArg::Stack)]
        strategy: StrategyArg,
    },
    /// Print a small provenance JSON block
    Report,
}

/// Vertex order in the hull JSON.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Order {
    /// As discovered: `A, right of A→B, B, right of B→A`
    Discovery,
    Cw,
    Ccw,
}

impl Order {
    fn as_str(self) -> &'static str {
        match self {
            Order::Discovery => "discovery",
            Order::Cw => "cw",
            Order::Ccw => "ccw",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    Stack,
    Recursive,
}

impl From<StrategyArg> for Strategy {
    fn from(s: StrategyArg) -> Self {
        match s {
            StrategyArg::Stack => Strategy::ExplicitStack,
            StrategyArg::Recursive => Strategy::Recursive,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull {
            input,
            out,
            int,
            order,
            strategy,
        } => hull(&input, &out, int, order, strategy, cmd.tag),
        Action::Generate {
            count,
            seed,
            out,
            dist,
            lo,
            hi,
            radius,
        } => generate(count, seed, &out, CloudCfg { dist, lo, hi, radius }, cmd.tag),
        Action::Scale {
            min_pow,
            max_pow,
            steps,
            repeats,
            seed,
            anchor,
            out,
            dist,
            strategy,
        } => scale(
            ScaleArgs {
                min_pow,
                max_pow,
                steps,
                repeats,
                seed,
                anchor,
                strategy,
                draw: CloudCfg {
                    dist,
                    lo: 0.0,
                    hi: 1000.0,
                    radius: 1.0,
                },
            },
            &out,
            cmd.tag,
        ),
        Action::Report => report(cmd.tag),
    }
}

/// Body of the `hull` JSON artifact.
#[derive(Serialize)]
struct HullReport<T> {
    input_len: usize,
    hull_len: usize,
    order: &'static str,
    area: f64,
    vertices: Vec<[T; 2]>,
}

fn hull_report<T: Coord + Serialize>(engine: &HullEngine, points: &[Point2<T>], order: Order) -> Result<HullReport<T>> {
    let hull = engine.compute_hull(points)?;
    let vertices = match order {
        Order::Discovery => hull.vertices.clone(),
        Order::Cw => hull.ordered(Winding::Clockwise),
        Order::Ccw => hull.ordered(Winding::CounterClockwise),
    };
    let area = signed_area(&hull.ordered(Winding::CounterClockwise));
    tracing::info!(input_len = points.len(), hull_len = hull.len(), area, "hull_done");
    Ok(HullReport {
        input_len: points.len(),
        hull_len: hull.len(),
        order: order.as_str(),
        area,
        vertices: vertices.iter().map(|p| [p.x, p.y]).collect(),
    })
}

fn write_json<S: Serialize>(out: &Path, doc: &S) -> Result<()> {
    io::ensure_parent(out)?;
    std::fs::write(out, serde_json::to_vec_pretty(doc)?).with_context(|| format!("writing {}", out.display()))
}

fn hull(input: &Path, out: &Path, int: bool, order: Order, strategy: StrategyArg, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), int, ?order, ?strategy, tag = ?tag, "hull");
    let engine = HullEngine::with_strategy(strategy.into());
    let context = || format!("computing hull of {}", input.display());
    let (input_len, hull_len) = if int {
        let report = hull_report(&engine, &io::read_points_i64(input)?, order).with_context(context)?;
        write_json(out, &report)?;
        (report.input_len, report.hull_len)
    } else {
        let report = hull_report(&engine, &io::read_points_f64(input)?, order).with_context(context)?;
        write_json(out, &report)?;
        (report.input_len, report.hull_len)
    };
    let run = Run::Hull {
        input: input.to_string_lossy().into_owned(),
        int,
        order: order.as_str(),
        strategy: format!("{:?}", Strategy::from(strategy)),
        input_len,
        hull_len,
    };
    write_sidecar(out, &run, tag.as_deref())?;
    Ok(())
}

fn generate(count: usize, seed: u64, out: &Path, draw: CloudCfg, tag: Option<String>) -> Result<()> {
    tracing::info!(count, seed, out = %out.display(), dist = draw.dist.as_str(), tag = ?tag, "generate");
    draw.validate()?;
    let cloud = draw.draw(count, ReplayToken::new(seed, 0))?;
    cloud.write_csv(out)?;
    tracing::info!(points = cloud.len(), out = %out.display(), "generate_done");
    let run = Run::Generate {
        dist: draw.dist.as_str(),
        count,
        seed,
        lo: draw.lo,
        hi: draw.hi,
        radius: draw.radius,
    };
    write_sidecar(out, &run, tag.as_deref())?;
    Ok(())
}

struct ScaleArgs {
    min_pow: f64,
    max_pow: f64,
    steps: usize,
    repeats: usize,
    seed: u64,
    anchor: usize,
    strategy: StrategyArg,
    draw: CloudCfg,
}

fn scale(args: ScaleArgs, out: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(
        min_pow = args.min_pow,
        max_pow = args.max_pow,
        steps = args.steps,
        repeats = args.repeats,
        dist = args.draw.dist.as_str(),
        strategy = ?args.strategy,
        tag = ?tag,
        "scale"
    );
    args.draw.validate()?;
    let sizes = log_spaced_sizes(args.min_pow, args.max_pow, args.steps);
    // All inputs are drawn before the first timed run.
    let clouds = sizes
        .iter()
        .enumerate()
        .map(|(i, &n)| args.draw.draw(n, ReplayToken::new(args.seed, i as u64)))
        .collect::<Result<Vec<_>>>()?;
    let engine = HullEngine::with_strategy(args.strategy.into());
    let mut next = clouds.into_iter();
    let samples = measure_scaling(
        &sizes,
        args.repeats,
        |_| next.next(),
        |cloud| cloud.as_ref().map(|c| c.hull_len(&engine)),
    );

    let fit = loglog_fit(&samples);
    match &fit {
        Some(fit) => tracing::info!(slope = fit.slope, r_squared = fit.r_squared, "loglog_fit"),
        None => tracing::warn!("too few usable samples for a log-log fit"),
    }
    let reference = nlogn_reference(&samples, args.anchor);
    if reference.is_none() {
        tracing::warn!(anchor = args.anchor, samples = samples.len(), "no n log n reference at anchor");
    }

    let ns: Vec<u64> = samples.iter().map(|s| s.n as u64).collect();
    let seconds: Vec<f64> = samples.iter().map(|s| s.seconds).collect();
    let nlogn: Vec<Option<f64>> = match reference {
        Some(r) => r.into_iter().map(Some).collect(),
        None => vec![None; samples.len()],
    };
    let fitted: Vec<Option<f64>> = samples.iter().map(|s| fit.map(|f| f.predict(s.n))).collect();
    let mut df = df!(
        "n" => ns,
        "seconds" => seconds,
        "nlogn_reference" => nlogn,
        "fitted" => fitted
    )?;
    io::write_csv(out, &mut df)?;

    let run = Run::Scale {
        dist: args.draw.dist.as_str(),
        strategy: format!("{:?}", Strategy::from(args.strategy)),
        min_pow: args.min_pow,
        max_pow: args.max_pow,
        steps: args.steps,
        seed: args.seed,
        repeats: args.repeats,
        anchor: args.anchor,
        sizes,
        fit: fit.map(Into::into),
    };
    write_sidecar(out, &run, tag.as_deref())?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = json!({
        "code_rev": provenance::code_rev(),
        "hull2d_version": hull2d::VERSION,
        "tag": tag,
        "default_strategy": format!("{:?}", Strategy::default()),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
