pub mod arithmetic;
pub mod cli;
pub mod core;
pub mod logging;
pub mod printing;

// 公開API - よく使うシンボルをクレートルートから参照できるようにする
pub use arithmetic::{divide_by_zero, divide_by_zero_with, sum, DivisionPolicy};
pub use crate::core::{ArithmeticError, ArithmeticResult, Number, Printable};
pub use printing::{print_all, print_identity_to, print_text, write_text, ThingPrinter};
