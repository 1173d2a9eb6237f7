pub mod divide;
pub mod echo;
pub mod print_thing;
pub mod sum;

pub use divide::*;
pub use echo::*;
pub use print_thing::*;
pub use sum::*;

use crate::arithmetic::DivisionPolicy;
use crate::core::Number;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

/// `--json` 指定時の出力形式
#[derive(Debug, Serialize)]
struct NumericReport {
    operation: &'static str,
    result: Number,
    #[serde(skip_serializing_if = "Option::is_none")]
    policy: Option<DivisionPolicy>,
}

/// 数値結果をテキストまたはJSONで書き込む
fn write_numeric_result(
    out: &mut dyn Write,
    operation: &'static str,
    result: Number,
    policy: Option<DivisionPolicy>,
    json: bool,
) -> Result<()> {
    let written = if json {
        let report = NumericReport {
            operation,
            result,
            policy,
        };
        let line = serde_json::to_string(&report).context("Failed to serialize result")?;
        writeln!(out, "{line}")
    } else {
        writeln!(out, "{result}")
    };
    written.with_context(|| format!("Failed to write {operation} result"))
}
