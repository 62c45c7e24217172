//! Quick scaling sanity check on uniform integer clouds.
//!
//! Usage:
//!   cargo run --release -p hull2d --example scaling_run
//!   cargo run --release -p hull2d --example scaling_run -- recursive
//!
//! Prints hull sizes and timings for ten log-spaced sizes in [10, 10^6] and
//! the fitted log-log slope (expect a value a little above 1).

use std::collections::BTreeMap;

use hull2d::geom2::rand::{uniform_grid_points, ReplayToken};
use hull2d::scaling::{log_spaced_sizes, loglog_fit, measure_scaling};
use hull2d::{HullEngine, Point2, Strategy};

fn main() {
    let strategy = match std::env::args().nth(1).as_deref() {
        Some("recursive") => Strategy::Recursive,
        Some("stack") | None => Strategy::ExplicitStack,
        Some(other) => {
            eprintln!("usage: scaling_run [stack|recursive] (got {other})");
            return;
        }
    };
    let engine = HullEngine::with_strategy(strategy);
    let sizes = log_spaced_sizes(1.0, 6.0, 10);
    let mut hull_sizes = BTreeMap::new();
    let samples = measure_scaling(
        &sizes,
        3,
        |n| uniform_grid_points(n, 0, 1000, ReplayToken::new(2025, n as u64)).unwrap_or_default(),
        |pts: &Vec<Point2<i32>>| {
            let h = engine.compute_hull(pts).map(|h| h.len()).unwrap_or(0);
            hull_sizes.insert(pts.len(), h);
            h
        },
    );
    for s in &samples {
        let h = hull_sizes.get(&s.n).copied().unwrap_or(0);
        println!("n={:>8}  hull={:>4}  t={:.6}s", s.n, h, s.seconds);
    }
    match loglog_fit(&samples) {
        Some(fit) => println!("slope={:.3} r2={:.3}", fit.slope, fit.r_squared),
        None => println!("not enough samples for a fit"),
    }
}
