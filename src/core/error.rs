// 算術演算のカスタムエラー型定義

use super::number::Number;
use thiserror::Error;

/// 15を拒否する際のメッセージ
pub const NUMBER_CANNOT_BE_15: &str = "Number cannot be 15";

/// 算術演算固有のエラー型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArithmeticError {
    /// 引数そのものが受け付けられない（計算は行われない）
    #[error("{message}")]
    InvalidArgument { message: String },

    #[error("ゼロ除算エラー: {dividend} / 0")]
    DivisionByZero { dividend: Number },

    #[error("数値の解析エラー: '{input}' - {reason}")]
    Parse { input: String, reason: String },
}

impl ArithmeticError {
    /// 不正な引数エラーの作成
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// ゼロ除算エラーの作成
    pub fn division_by_zero(dividend: impl Into<Number>) -> Self {
        Self::DivisionByZero {
            dividend: dividend.into(),
        }
    }

    /// 解析エラーの作成
    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::DivisionByZero { .. })
    }
}

/// 算術演算の結果型
pub type ArithmeticResult<T> = std::result::Result<T, ArithmeticError>;
