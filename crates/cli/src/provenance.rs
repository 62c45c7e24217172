//! Provenance sidecars: `<stem>.provenance.json` next to every artifact.
//!
//! The sidecar records which command produced the artifact and with what
//! outcome (hull size, sample sizes, fitted slope), so a CSV or JSON file can
//! be traced back to a rerunnable invocation.

use anyhow::{Context, Result};
use serde::Serialize;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Log-log fit as stored in a `scale` sidecar.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FitRecord {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
}

impl From<hull2d::scaling::LogLogFit> for FitRecord {
    fn from(f: hull2d::scaling::LogLogFit) -> Self {
        Self {
            slope: f.slope,
            intercept: f.intercept,
            r_squared: f.r_squared,
        }
    }
}

/// One CLI invocation and what it produced.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum Run {
    Hull {
        input: String,
        int: bool,
        order: &'static str,
        strategy: String,
        input_len: usize,
        hull_len: usize,
    },
    Generate {
        dist: &'static str,
        count: usize,
        seed: u64,
        lo: f64,
        hi: f64,
        radius: f64,
    },
    Scale {
        dist: &'static str,
        strategy: String,
        min_pow: f64,
        max_pow: f64,
        steps: usize,
        seed: u64,
        repeats: usize,
        anchor: usize,
        sizes: Vec<usize>,
        fit: Option<FitRecord>,
    },
}

#[derive(Serialize)]
struct Sidecar<'a> {
    artifact: String,
    code_rev: String,
    hull2d_version: &'static str,
    written_by: String,
    tag: Option<&'a str>,
    run: &'a Run,
}

/// Sidecar path for `artifact`: same directory, extension replaced.
pub fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "artifact".to_string());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// Write the sidecar for `artifact`; the caller's source location is recorded.
#[track_caller]
pub fn write_sidecar(artifact: &Path, run: &Run, tag: Option<&str>) -> Result<PathBuf> {
    let caller = Location::caller();
    let doc = Sidecar {
        artifact: artifact.to_string_lossy().into_owned(),
        code_rev: code_rev(),
        hull2d_version: hull2d::VERSION,
        written_by: format!("{}:{}", caller.file(), caller.line()),
        tag,
        run,
    };
    let path = sidecar_path(artifact);
    crate::io::ensure_parent(&path)?;
    std::fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), "provenance_written");
    Ok(path)
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`, else `"unknown"`.
pub fn code_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
