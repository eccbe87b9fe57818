//! Command-line front end for the reducebench harness.
//!
//! Sweeps input sizes and thread counts, timing the linear, mutex and
//! compare-and-swap reducers, and prints one row per run.
//!
//! # Usage
//!
//! ```bash
//! reducebench
//! reducebench --sizes 10000,1000000 --threads 1,2,4,8 --seed 42
//! reducebench --format json > results.json
//! ```

// CLI tools need to print to stdout/stderr
#![allow(clippy::print_stdout, clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use reducebench::report::TextReport;
use reducebench::{driver, json_output, Config};
use std::io::{self, Write};

/// Benchmark lock-based and lock-free parallel reductions.
#[derive(Parser, Debug)]
#[command(name = "reducebench", version, about)]
struct Args {
    /// Dataset sizes to sweep (comma separated).
    #[arg(long, value_delimiter = ',')]
    sizes: Option<Vec<usize>>,

    /// Thread counts for the parallel reducers (comma separated).
    #[arg(long, value_delimiter = ',')]
    threads: Option<Vec<usize>>,

    /// Seed for dataset generation; the clock is used when absent.
    #[arg(long, env = "REDUCEBENCH_SEED")]
    seed: Option<u64>,

    /// Output format.
    #[arg(long, short, value_enum, default_value_t = Format::Text)]
    format: Format,
}

/// Report formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Tab-separated rows, printed as each run finishes.
    Text,
    /// A single JSON document printed after the sweep.
    Json,
}

impl Args {
    /// Layers the command line over the built-in matrix.
    fn into_config(self) -> Config {
        let defaults = Config::default();
        Config {
            sizes: self.sizes.unwrap_or(defaults.sizes),
            threads: self.threads.unwrap_or(defaults.threads),
            seed: self.seed.or(defaults.seed),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let format = args.format;
    let config = args.into_config();
    config.validate().context("invalid benchmark configuration")?;

    let stdout = io::stdout();
    match format {
        Format::Text => run_text(&config, stdout.lock()),
        Format::Json => run_json(&config, stdout.lock()),
    }
}

/// Runs the sweep, streaming rows as they are measured.
fn run_text<W: Write>(config: &Config, out: W) -> Result<()> {
    let mut report = TextReport::new(out).context("failed to write report header")?;
    let mut write_err = None;

    let summary = driver::run(config, |m| {
        if write_err.is_none() {
            write_err = report.row(m).err();
        }
    })?;

    if let Some(e) = write_err {
        return Err(e).context("failed to write report row");
    }
    report.finish().context("failed to write report")?;

    if summary.mismatches > 0 {
        eprintln!(
            "[reducebench] {} parallel run(s) disagreed with the linear baseline",
            summary.mismatches
        );
    }
    Ok(())
}

/// Runs the sweep and prints one JSON document.
fn run_json<W: Write>(config: &Config, mut out: W) -> Result<()> {
    let summary = driver::run(config, |_| {})?;
    let json = json_output::to_json_string(config, &summary, true)
        .context("failed to serialize results")?;
    writeln!(out, "{json}").context("failed to write results")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_gives_default_matrix() {
        let args = Args::try_parse_from(["reducebench"]).unwrap();
        assert_eq!(args.format, Format::Text);
        let config = args.into_config();
        assert_eq!(config.sizes, Config::default().sizes);
        assert_eq!(config.threads, Config::default().threads);
    }

    #[test]
    fn comma_separated_lists() {
        let args = Args::try_parse_from([
            "reducebench",
            "--sizes",
            "10,20",
            "--threads",
            "1,2,4",
            "--seed",
            "9",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(args.format, Format::Json);
        let config = args.into_config();
        assert_eq!(config.sizes, vec![10, 20]);
        assert_eq!(config.threads, vec![1, 2, 4]);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn text_run_writes_every_row() {
        let config = Config {
            sizes: vec![6, 100],
            threads: vec![1, 3],
            seed: Some(1),
        };
        let mut out = Vec::new();
        run_text(&config, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let rows = text
            .lines()
            .filter(|l| l.starts_with("6\t") || l.starts_with("100\t"))
            .count();
        assert_eq!(rows, 2 * 5);
    }

    #[test]
    fn text_run_layout_with_repeated_size() {
        let config = Config {
            sizes: vec![6, 6],
            threads: vec![1, 3],
            seed: Some(1),
        };
        let mut out = Vec::new();
        run_text(&config, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        // Mask the timing and result columns; only the layout is checked.
        let shape: Vec<String> = text
            .lines()
            .map(|line| {
                let mut fields: Vec<&str> = line.split('\t').collect();
                if fields.len() == 7 && fields[0] == "6" {
                    fields[4] = "T";
                    fields[5] = "C";
                    fields[6] = "M";
                }
                fields.join("\t")
            })
            .collect();

        let block = [
            "6\t\t-\tLinear\tT\tC\tM",
            "6\t\t1\tMutex\tT\tC\tM",
            "6\t\t3\tMutex\tT\tC\tM",
            "6\t\t1\tCAS\tT\tC\tM",
            "6\t\t3\tCAS\tT\tC\tM",
        ];
        let mut expected = vec!["", "Test Results:", reducebench::report::HEADER];
        expected.extend(block);
        expected.push("");
        expected.extend(block);
        expected.push("");
        assert_eq!(shape, expected);
    }

    #[test]
    fn json_run_is_valid_json() {
        let config = Config {
            sizes: vec![50],
            threads: vec![2],
            seed: Some(1),
        };
        let mut out = Vec::new();
        run_json(&config, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["measurements"].as_array().map(Vec::len), Some(3));
    }
}
