//! Tab-separated text report.
//!
//! The layout is one header followed by one line per measurement, with a blank
//! line closing each dataset's block:
//!
//! ```text
//!
//! Test Results:
//! Matrix Size	Threads	Mode	Time (seconds)	Count	Max Value
//! 10000		-	Linear	0.000012	2011	1000
//! 10000		8	Mutex	0.000210	2011	1000
//! ```

use crate::driver::Measurement;
use crate::strategy::Strategy;
use std::io::{self, Write};

/// Column names, tab separated.
pub const HEADER: &str = "Matrix Size\tThreads\tMode\tTime (seconds)\tCount\tMax Value";

/// Placeholder for fields that do not apply to a row.
pub const PLACEHOLDER: &str = "-";

/// Formats one measurement as a report line, without the trailing newline.
#[must_use]
pub fn format_row(m: &Measurement) -> String {
    let threads = m
        .threads
        .map_or_else(|| PLACEHOLDER.to_string(), |t| t.to_string());
    let max = m
        .aggregate
        .max
        .map_or_else(|| PLACEHOLDER.to_string(), |v| v.to_string());
    format!(
        "{}\t\t{}\t{}\t{:.6}\t{}\t{}",
        m.size,
        threads,
        m.strategy,
        m.elapsed.as_secs_f64(),
        m.aggregate.count,
        max
    )
}

/// Streams the text report to a writer as measurements arrive.
///
/// Every dataset opens with its linear baseline, so a [`Strategy::Linear`] row
/// starts a new block even when two datasets share a size.
pub struct TextReport<W: Write> {
    out: W,
    current_size: Option<usize>,
}

impl<W: Write> TextReport<W> {
    /// Creates a report and writes its header.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn new(mut out: W) -> io::Result<Self> {
        writeln!(out, "\nTest Results:")?;
        writeln!(out, "{HEADER}")?;
        Ok(Self {
            out,
            current_size: None,
        })
    }

    /// Writes one measurement, closing the previous block if this row opens a
    /// new dataset.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn row(&mut self, m: &Measurement) -> io::Result<()> {
        let new_dataset = m.strategy == Strategy::Linear;
        if self
            .current_size
            .is_some_and(|size| new_dataset || size != m.size)
        {
            writeln!(self.out)?;
        }
        self.current_size = Some(m.size);
        writeln!(self.out, "{}", format_row(m))?;
        self.out.flush()
    }

    /// Closes the last block and returns the writer.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        if self.current_size.is_some() {
            writeln!(self.out)?;
        }
        self.out.flush()?;
        Ok(self.out)
    }
}
