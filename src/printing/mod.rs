// 出力系の実装 - ThingPrinter とテキスト出力ヘルパー

use crate::core::Printable;
use std::fmt::Display;
use std::io::{self, Write};

/// "The Thing" を出力する Printable 実装
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThingPrinter;

impl ThingPrinter {
    pub const IDENTITY: &'static str = "The Thing";

    pub fn new() -> Self {
        Self
    }
}

impl Printable for ThingPrinter {
    fn identity(&self) -> &'static str {
        Self::IDENTITY
    }
}

/// テキストを改行付きで標準出力に書き込む
pub fn print_text(text: impl Display) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = write_text(&mut handle, text) {
        tracing::warn!(error = %e, "failed to write text to stdout");
    }
}

/// テキストを改行付きで任意の出力先に書き込む
pub fn write_text(out: &mut dyn Write, text: impl Display) -> io::Result<()> {
    writeln!(out, "{text}")
}

/// 静的ディスパッチで1件の識別文字列を書き込む
pub fn print_identity_to<P: Printable + ?Sized>(printable: &P, out: &mut dyn Write) -> io::Result<()> {
    printable.write_identity(out)
}

/// 動的ディスパッチで順番に識別文字列を書き込む
pub fn print_all(items: &[&dyn Printable], out: &mut dyn Write) -> io::Result<()> {
    tracing::debug!(count = items.len(), "printing identities");
    for item in items {
        item.write_identity(out)?;
    }
    Ok(())
}
