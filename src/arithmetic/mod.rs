// 算術演算 - 加算とゼロ除算

pub mod policy;

pub use policy::DivisionPolicy;

use crate::core::{ArithmeticError, ArithmeticResult, Number, NUMBER_CANNOT_BE_15};

/// 2つの数値の和を返す
///
/// どちらかが浮動小数点数なら結果も浮動小数点数になる。
pub fn sum(a: impl Into<Number>, b: impl Into<Number>) -> Number {
    let (a, b) = (a.into(), b.into());
    let result = a + b;
    tracing::debug!(%a, %b, %result, "sum");
    result
}

/// 既定のポリシーで数値をゼロで割る
pub fn divide_by_zero(number: impl Into<Number>) -> ArithmeticResult<Number> {
    divide_by_zero_with(number, DivisionPolicy::default())
}

/// 指定したポリシーで数値をゼロで割る
///
/// 15 はどのポリシーでも `InvalidArgument` になり、除算は行われない。
pub fn divide_by_zero_with(
    number: impl Into<Number>,
    policy: DivisionPolicy,
) -> ArithmeticResult<Number> {
    let number = number.into();
    if number == Number::Int(15) {
        tracing::debug!(%number, "rejected dividend");
        return Err(ArithmeticError::invalid_argument(NUMBER_CANNOT_BE_15));
    }

    tracing::debug!(%number, %policy, "dividing by zero");
    match policy {
        DivisionPolicy::Strict => Err(ArithmeticError::division_by_zero(number)),
        DivisionPolicy::Ieee754 => Ok(Number::Float(number.as_f64() / 0.0)),
    }
}
