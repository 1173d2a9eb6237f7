// ゼロ除算の扱いを決めるポリシー

use clap::ValueEnum;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// 15以外の数値をゼロで割ったときの振る舞い
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DivisionPolicy {
    /// 整数・浮動小数点数を問わず DivisionByZero エラーを返す
    #[default]
    Strict,
    /// f64 に昇格して IEEE-754 の結果（±inf / NaN）を返す
    #[value(alias = "ieee")]
    Ieee754,
}

impl DivisionPolicy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Ieee754 => "ieee754",
        }
    }
}

impl fmt::Display for DivisionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DivisionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // CLI と同じ名前・別名を受け付ける
        <Self as ValueEnum>::from_str(s.trim(), true)
    }
}
