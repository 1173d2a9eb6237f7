// コアレイヤー - 基盤となるトレイト、数値型、エラー定義
// 他のレイヤーから参照される基本的な抽象化を提供

pub mod error;
pub mod number;
pub mod traits;

// 公開API
pub use error::{ArithmeticError, ArithmeticResult, NUMBER_CANNOT_BE_15};
pub use number::Number;
pub use traits::Printable;
