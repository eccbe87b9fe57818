//! JSON output format with schema versioning.
//!
//! This module provides a machine-readable rendition of a benchmark sweep, as
//! an alternative to the tab-separated text report.
//!
//! # Example Output
//!
//! ```json
//! {
//!   "schema_version": 1,
//!   "tool": "reducebench",
//!   "tool_version": "0.1.0",
//!   "config": { "sizes": [10000], "threads": [8], "seed": null },
//!   "measurements": [
//!     { "size": 10000, "threads": null, "mode": "Linear",
//!       "elapsed_secs": 0.000012, "count": 2011, "max": 1000 }
//!   ],
//!   "mismatches": 0
//! }
//! ```

use crate::config::Config;
use crate::driver::{BenchmarkSummary, Measurement};
use crate::strategy::Strategy;
use serde::Serialize;

/// Current schema version for the JSON output format.
///
/// Increment this when making breaking changes to the output structure.
pub const SCHEMA_VERSION: u32 = 1;

/// Complete sweep output in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput<'a> {
    /// Schema version for format compatibility checking.
    pub schema_version: u32,
    /// Name of the tool.
    pub tool: &'static str,
    /// Version of the tool.
    pub tool_version: &'static str,
    /// The matrix that was swept.
    pub config: &'a Config,
    /// One entry per timed run, in the order they were taken.
    pub measurements: Vec<MeasurementEntry>,
    /// Parallel runs that disagreed with the linear baseline.
    pub mismatches: usize,
}

/// A single timed run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeasurementEntry {
    /// Dataset length.
    pub size: usize,
    /// Worker count; null for the linear strategy.
    pub threads: Option<usize>,
    /// Strategy label (`Linear`, `Mutex` or `CAS`).
    pub mode: Strategy,
    /// Wall-clock time in seconds.
    pub elapsed_secs: f64,
    /// Number of multiples of 5.
    pub count: usize,
    /// Largest multiple of 5; null when there is none.
    pub max: Option<i32>,
}

impl From<&Measurement> for MeasurementEntry {
    fn from(m: &Measurement) -> Self {
        Self {
            size: m.size,
            threads: m.threads,
            mode: m.strategy,
            elapsed_secs: m.elapsed.as_secs_f64(),
            count: m.aggregate.count,
            max: m.aggregate.max,
        }
    }
}

/// Builds the JSON document for a finished sweep.
#[must_use]
pub fn generate_output<'a>(config: &'a Config, summary: &BenchmarkSummary) -> JsonOutput<'a> {
    JsonOutput {
        schema_version: SCHEMA_VERSION,
        tool: "reducebench",
        tool_version: env!("CARGO_PKG_VERSION"),
        config,
        measurements: summary.measurements.iter().map(Into::into).collect(),
        mismatches: summary.mismatches,
    }
}

/// Serializes a finished sweep to a JSON string.
///
/// # Errors
///
/// Returns an error if JSON serialization fails (should not happen in practice).
pub fn to_json_string(
    config: &Config,
    summary: &BenchmarkSummary,
    pretty: bool,
) -> Result<String, serde_json::Error> {
    let output = generate_output(config, summary);
    if pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    }
}
