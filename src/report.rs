//! Output formatting.

/// Formats the report line for an employee's total pay.
///
/// # Example
///
/// ```
/// use pay_calculator::report::format_payment;
///
/// assert_eq!(format_payment("TEST", 55), "The amount to pay TEST is: 55 USD");
/// ```
pub fn format_payment(employee: &str, total: u64) -> String {
    format!("The amount to pay {} is: {} USD", employee, total)
}
