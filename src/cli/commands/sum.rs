use super::write_numeric_result;
use crate::arithmetic::sum;
use crate::core::Number;
use anyhow::Result;
use std::io::Write;

/// Add two numbers and print the result
pub fn execute_sum(out: &mut dyn Write, a: Number, b: Number, json: bool) -> Result<()> {
    write_numeric_result(out, "sum", sum(a, b), None, json)
}
