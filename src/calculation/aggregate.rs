//! Per-line aggregation.
//!
//! Runs the line parser, interval decoder and rate calculator over every
//! token of a line and sums the results. The first error aborts the line.

use tracing::debug;

use crate::config::PayrollConfig;
use crate::error::PayrollResult;
use crate::models::{PayLine, PayRecord, decode_interval};

use super::interval_pay::{IntervalPayResult, calculate_interval_pay};

/// The total for one line together with the per-interval breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinePayResult {
    /// The employee name and total.
    pub record: PayRecord,
    /// One entry per interval, in input order.
    pub intervals: Vec<IntervalPayResult>,
}

/// Prices every interval of a raw line.
///
/// # Errors
///
/// Returns the first [`PayrollError`](crate::error::PayrollError) met while
/// parsing the line or decoding a token. No partial total is produced.
pub fn calculate_line(raw: &str, config: &PayrollConfig) -> PayrollResult<LinePayResult> {
    let line = PayLine::parse(raw)?;

    let mut intervals = Vec::with_capacity(line.tokens.len());
    let mut total: u64 = 0;

    for token in &line.tokens {
        let interval = decode_interval(token)?;
        let result = calculate_interval_pay(&interval, config);
        debug!(
            employee = %line.employee,
            token = %token,
            day_class = %result.day_class,
            band = %result.band,
            hours = result.hours,
            rate = result.rate,
            amount = result.amount,
            "Priced interval"
        );
        total += result.amount;
        intervals.push(result);
    }

    debug!(employee = %line.employee, total, "Calculated line total");

    Ok(LinePayResult {
        record: PayRecord::new(line.employee, total),
        intervals,
    })
}

/// Calculates the total pay for a raw line.
///
/// # Example
///
/// ```
/// use pay_calculator::calculation::calculate_total_pay;
/// use pay_calculator::config::PayrollConfig;
///
/// let record =
///     calculate_total_pay("TEST=MO10:00-12:00,SU20:00-21:00", &PayrollConfig::default()).unwrap();
/// assert_eq!(record.total, 55);
/// assert_eq!(record.to_string(), "The amount to pay TEST is: 55 USD");
/// ```
pub fn calculate_total_pay(raw: &str, config: &PayrollConfig) -> PayrollResult<PayRecord> {
    calculate_line(raw, config).map(|result| result.record)
}

/// Calculates totals for a batch of lines in order.
///
/// Lines that are blank after trimming are skipped. The first failing line
/// aborts the whole batch.
pub fn calculate_batch<'a, I>(lines: I, config: &PayrollConfig) -> PayrollResult<Vec<PayRecord>>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| calculate_total_pay(line, config))
        .collect()
}
