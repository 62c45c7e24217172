//! Wall-clock scaling runs and log-log regression.
//!
//! Purpose
//! - Treat the hull computation as a black box `input -> output`, time it over
//!   log-spaced input sizes, and fit `ln t = slope · ln n + intercept`.
//! - An O(N log N) algorithm shows a fitted slope slightly above 1; the
//!   `n ln n` reference curve is normalized to one measured sample so both can
//!   be plotted on the same axes.
//!
//! Timings are noisy; nothing here is asserted in tests beyond shape and
//! arithmetic. Criterion benches (`benches/hull_bench.rs`) are the precise tool.

use std::hint::black_box;
use std::time::{Duration, Instant};

/// Run `f` once and return its result with the elapsed wall-clock time.
pub fn time_call<R>(f: impl FnOnce() -> R) -> (R, Duration) {
    let start = Instant::now();
    let out = f();
    (out, start.elapsed())
}

/// `count` sizes `⌊10^p⌋` with `p` evenly spaced in `[lo_pow, hi_pow]`.
///
/// Sizes are at least 1, ascending, and deduplicated (small powers can collide).
pub fn log_spaced_sizes(lo_pow: f64, hi_pow: f64, count: usize) -> Vec<usize> {
    let span = hi_pow - lo_pow;
    let last = count.saturating_sub(1).max(1) as f64;
    let mut sizes: Vec<usize> = (0..count)
        .map(|i| {
            let p = lo_pow + span * i as f64 / last;
            // Nudge so exact powers of ten never floor to 10^k - 1.
            (10f64.powf(p) + 1e-9).floor().max(1.0) as usize
        })
        .collect();
    sizes.sort_unstable();
    sizes.dedup();
    sizes
}

/// Best-of-`repeats` time for one input size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScalingSample {
    pub n: usize,
    pub seconds: f64,
}

/// Time `run` on `generate(n)` for each size; keeps the fastest of `repeats` runs.
///
/// Input generation is excluded from the measurement. `repeats` is clamped to at least 1.
pub fn measure_scaling<P, R>(
    sizes: &[usize],
    repeats: usize,
    mut generate: impl FnMut(usize) -> P,
    mut run: impl FnMut(&P) -> R,
) -> Vec<ScalingSample> {
    let repeats = repeats.max(1);
    let mut samples = Vec::with_capacity(sizes.len());
    for &n in sizes {
        let input = generate(n);
        let best = (0..repeats)
            .map(|_| time_call(|| black_box(run(black_box(&input)))).1)
            .min()
            .unwrap_or_default();
        let seconds = best.as_secs_f64();
        tracing::debug!(n, seconds, "scaling_sample");
        samples.push(ScalingSample { n, seconds });
    }
    samples
}

/// Least-squares line through `(ln n, ln seconds)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogLogFit {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination of the fit, in `[0, 1]`.
    pub r_squared: f64,
}

impl LogLogFit {
    /// Fitted time for size `n`, back in seconds.
    pub fn predict(&self, n: usize) -> f64 {
        (self.intercept + self.slope * (n as f64).ln()).exp()
    }
}

/// Fit a line in log-log space.
///
/// Samples with `n == 0` or non-positive/non-finite times are ignored. Returns
/// `None` with fewer than two usable samples or when all sizes are equal.
pub fn loglog_fit(samples: &[ScalingSample]) -> Option<LogLogFit> {
    let pts: Vec<(f64, f64)> = samples
        .iter()
        .filter(|s| s.n > 0 && s.seconds.is_finite() && s.seconds > 0.0)
        .map(|s| ((s.n as f64).ln(), s.seconds.ln()))
        .collect();
    if pts.len() < 2 {
        return None;
    }
    let k = pts.len() as f64;
    let mx = pts.iter().map(|p| p.0).sum::<f64>() / k;
    let my = pts.iter().map(|p| p.1).sum::<f64>() / k;
    let (mut sxx, mut sxy, mut syy) = (0.0, 0.0, 0.0);
    for (x, y) in &pts {
        sxx += (x - mx) * (x - mx);
        sxy += (x - mx) * (y - my);
        syy += (y - my) * (y - my);
    }
    if sxx <= 0.0 {
        return None;
    }
    let slope = sxy / sxx;
    let r_squared = if syy > 0.0 {
        (sxy * sxy) / (sxx * syy)
    } else {
        1.0
    };
    Some(LogLogFit {
        slope,
        intercept: my - slope * mx,
        r_squared,
    })
}

/// `n ln n` per sample, scaled so that it equals the measured time at `anchor`.
///
/// Returns `None` if `anchor` is out of range or its `n ln n` is zero (`n <= 1`).
pub fn nlogn_reference(samples: &[ScalingSample], anchor: usize) -> Option<Vec<f64>> {
    let nlogn = |n: usize| {
        let n = n as f64;
        if n > 0.0 {
            n * n.ln()
        } else {
            0.0
        }
    };
    let base = samples.get(anchor)?;
    let theory = nlogn(base.n);
    if theory <= 0.0 {
        return None;
    }
    let factor = base.seconds / theory;
    Some(samples.iter().map(|s| nlogn(s.n) * factor).collect())
}
