// 出力可能なオブジェクトの抽象化

use mockall::automock;
use std::io::{self, Write};

/// 自身の識別文字列を出力できることを表すトレイト
#[automock]
pub trait Printable: Send + Sync {
    /// 出力する固定の識別文字列
    fn identity(&self) -> &'static str;

    /// 識別文字列を改行付きで任意の出力先に書き込む
    fn write_identity(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.identity())
    }

    /// 識別文字列を標準出力に書き込む
    ///
    /// 標準出力への書き込み失敗は警告ログに残すだけで、呼び出し元には返さない。
    fn print_identity(&self) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        if let Err(e) = self.write_identity(&mut handle) {
            tracing::warn!(error = %e, "failed to write identity to stdout");
        }
    }
}

// Printable for Box<dyn Printable>
impl Printable for Box<dyn Printable> {
    fn identity(&self) -> &'static str {
        self.as_ref().identity()
    }

    fn write_identity(&self, out: &mut dyn Write) -> io::Result<()> {
        self.as_ref().write_identity(out)
    }

    fn print_identity(&self) {
        self.as_ref().print_identity()
    }
}
