use super::write_numeric_result;
use crate::arithmetic::{divide_by_zero_with, DivisionPolicy};
use crate::core::Number;
use anyhow::Result;
use std::io::Write;

/// Divide a number by zero under the given policy and print the quotient
///
/// Rejected or undefined divisions are returned as errors; nothing is written.
pub fn execute_divide(
    out: &mut dyn Write,
    number: Number,
    policy: DivisionPolicy,
    json: bool,
) -> Result<()> {
    let quotient = divide_by_zero_with(number, policy)?;
    write_numeric_result(out, "divide", quotient, Some(policy), json)
}
