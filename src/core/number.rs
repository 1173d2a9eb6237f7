// 整数と浮動小数点数をまとめて扱う数値型

use super::error::ArithmeticError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::Add;
use std::str::FromStr;

/// 整数または浮動小数点数
///
/// 比較は値で行うため、`Number::Int(15) == Number::Float(15.0)` が成り立つ。
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// f64 に昇格した値を取得
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Int(value) => value as f64,
            Self::Float(value) => value,
        }
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }
}

/// 整数と浮動小数点数を丸めずに比較する
fn int_eq_float(int: i64, float: f64) -> bool {
    // 2^63 は i64 に収まらない（i64::MAX as f64 は 2^63 に丸められる）
    const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

    if !float.is_finite() || float.fract() != 0.0 {
        return false;
    }
    if float < i64::MIN as f64 || float >= I64_UPPER {
        return false;
    }
    float as i64 == int
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Int(i), Self::Float(f)) | (Self::Float(f), Self::Int(i)) => int_eq_float(i, f),
        }
    }
}

/// 数値の昇格規則に従った加算
///
/// 整数同士は整数のまま加算し、i64 の範囲を超えた場合は浮動小数点数に昇格する。
impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => match a.checked_add(b) {
                Some(sum) => Self::Int(sum),
                None => Self::Float(a as f64 + b as f64),
            },
            (a, b) => Self::Float(a.as_f64() + b.as_f64()),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            // Debug表記は整数値でも "15.0" のように小数部を残す
            Self::Float(value) => write!(f, "{value:?}"),
        }
    }
}

impl FromStr for Number {
    type Err = ArithmeticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<i64>() {
            return Ok(Self::Int(value));
        }
        trimmed
            .parse::<f64>()
            .map(Self::Float)
            .map_err(|e| ArithmeticError::parse(s, e.to_string()))
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Self::Int(value) => serializer.serialize_i64(value),
            Self::Float(value) if value.is_finite() => serializer.serialize_f64(value),
            // JSONには inf / NaN が無いので文字列で表す
            Self::Float(_) => serializer.serialize_str(&self.to_string()),
        }
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Self::Float(value.into())
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_across_subtypes() {
        assert_eq!(Number::Int(15), Number::Float(15.0));
        assert_eq!(Number::Float(-3.0), Number::Int(-3));
        assert_ne!(Number::Int(15), Number::Float(15.5));
        assert_ne!(Number::Float(f64::NAN), Number::Float(f64::NAN));
    }

    #[test]
    fn test_equality_is_exact_beyond_f64_precision() {
        let two_pow_53 = 9_007_199_254_740_992_i64;

        assert_ne!(Number::Int(two_pow_53 + 1), Number::Float(two_pow_53 as f64));
        assert_ne!(Number::Float(two_pow_53 as f64), Number::Int(two_pow_53 + 1));
        assert_eq!(Number::Int(two_pow_53), Number::Float(two_pow_53 as f64));
        assert_eq!(Number::Float(two_pow_53 as f64), Number::Int(two_pow_53));
    }

    #[test]
    fn test_equality_at_i64_bounds() {
        // i64::MAX as f64 は 2^63 になり、どの i64 とも等しくない
        assert_ne!(Number::Int(i64::MAX), Number::Float(i64::MAX as f64));
        assert_ne!(Number::Float(9_223_372_036_854_775_808.0), Number::Int(i64::MAX));
        assert_eq!(Number::Int(i64::MIN), Number::Float(i64::MIN as f64));
        assert_ne!(Number::Int(0), Number::Float(f64::NAN));
        assert_ne!(Number::Int(i64::MAX), Number::Float(f64::INFINITY));
        assert_ne!(Number::Int(1), Number::Float(1.5));
    }

    #[test]
    fn test_add_promotion() {
        let int_sum = Number::Int(2) + Number::Int(3);
        assert!(int_sum.is_int());
        assert_eq!(int_sum, Number::Int(5));

        let mixed_sum = Number::Int(2) + Number::Float(0.5);
        assert!(mixed_sum.is_float());
        assert_eq!(mixed_sum, Number::Float(2.5));

        let float_sum = Number::Float(1.5) + Number::Float(1.5);
        assert!(float_sum.is_float());
        assert_eq!(float_sum, Number::Int(3));
    }

    #[test]
    fn test_add_overflow_promotes_to_float() {
        let sum = Number::Int(i64::MAX) + Number::Int(1);

        assert!(sum.is_float());
        assert_eq!(sum.as_f64(), i64::MAX as f64 + 1.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Number::Int(42).to_string(), "42");
        assert_eq!(Number::Int(-7).to_string(), "-7");
        assert_eq!(Number::Float(15.0).to_string(), "15.0");
        assert_eq!(Number::Float(-3.5).to_string(), "-3.5");
        assert_eq!(Number::Float(f64::INFINITY).to_string(), "inf");
        assert_eq!(Number::Float(f64::NEG_INFINITY).to_string(), "-inf");
        assert_eq!(Number::Float(f64::NAN).to_string(), "NaN");
        // 指数表記は Rust の形式（"1e+16" ではなく "1e16"）
        assert_eq!(Number::Float(1e16).to_string(), "1e16");
    }

    #[test]
    fn test_parse() {
        assert!(matches!("15".parse::<Number>(), Ok(Number::Int(15))));
        assert!(matches!(" -4 ".parse::<Number>(), Ok(Number::Int(-4))));
        assert!(matches!("15.0".parse::<Number>(), Ok(Number::Float(v)) if v == 15.0));
        assert!(matches!("1e3".parse::<Number>(), Ok(Number::Float(v)) if v == 1000.0));
        assert!(matches!("inf".parse::<Number>(), Ok(Number::Float(v)) if v.is_infinite()));

        let error = "abc".parse::<Number>().unwrap_err();
        assert!(matches!(error, ArithmeticError::Parse { ref input, .. } if input == "abc"));
    }

    #[test]
    fn test_parse_out_of_range_integer_becomes_float() {
        let number: Number = "99999999999999999999".parse().unwrap();
        assert!(number.is_float());
    }

    #[test]
    fn test_serialize() {
        assert_eq!(serde_json::to_string(&Number::Int(3)).unwrap(), "3");
        assert_eq!(serde_json::to_string(&Number::Float(2.5)).unwrap(), "2.5");
        assert_eq!(
            serde_json::to_string(&Number::Float(f64::INFINITY)).unwrap(),
            "\"inf\""
        );
        assert_eq!(
            serde_json::to_string(&Number::Float(f64::NAN)).unwrap(),
            "\"NaN\""
        );
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Number::from(15_i32), Number::Int(15));
        assert_eq!(Number::from(15_u32), Number::Int(15));
        assert_eq!(Number::from(2.5_f32), Number::Float(2.5));
        assert!(Number::from(1.0_f64).is_float());
    }
}
