//! Input file handling.
//!
//! The whole file is read once up front and split into lines. Lines that
//! are blank after trimming are dropped.

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::calculation::{calculate_batch, calculate_total_pay};
use crate::config::PayrollConfig;
use crate::error::{PayrollError, PayrollResult};
use crate::models::PayRecord;

/// Reads the non-blank lines of a schedule file, in file order.
pub fn read_pay_lines<P: AsRef<Path>>(path: P) -> PayrollResult<Vec<String>> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| PayrollError::InputFileError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    Ok(content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect())
}

/// Reads a schedule file and calculates a record for every line.
///
/// Fails on the first unreadable file or malformed line.
pub fn process_file<P: AsRef<Path>>(
    path: P,
    config: &PayrollConfig,
) -> PayrollResult<Vec<PayRecord>> {
    let lines = read_pay_lines(path)?;
    calculate_batch(lines.iter().map(String::as_str), config)
}

/// Reads a schedule file and writes one report line per record to `out`.
///
/// Lines are written as they are calculated, so every line before a
/// malformed one has already been written when its error is returned.
/// Returns the number of report lines written.
pub fn write_report<P, W>(path: P, config: &PayrollConfig, out: &mut W) -> PayrollResult<usize>
where
    P: AsRef<Path>,
    W: Write,
{
    let path = path.as_ref();
    let lines = read_pay_lines(path)?;
    info!(input = %path.display(), lines = lines.len(), "Read schedule file");

    let output_error = |e: std::io::Error| PayrollError::OutputError {
        message: e.to_string(),
    };

    for line in &lines {
        let record = calculate_total_pay(line, config)?;
        writeln!(out, "{}", record).map_err(output_error)?;
    }
    out.flush().map_err(output_error)?;

    Ok(lines.len())
}
