//! 照合ログの出力先
//!
//! 照合処理はグローバルなロガーを持たず、`AuditSink` を引数で受け取る。
//! ログファイルとコンソールは同じ内容を受け取り、コンソールだけは
//! 開始時に表のヘッダーを出す。

use crate::error::Result;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

pub const START_MESSAGE: &str = "Starting file matching process...";

pub trait AuditSink {
    /// 処理開始を記録
    fn start(&mut self) -> Result<()>;

    /// 1件のメッセージを記録
    fn line(&mut self, message: &str) -> Result<()>;
}

/// 表の1行を整形（番号・名前・候補・ステータス・スコア）
pub fn format_row(no: &str, name: &str, matched: &str, status: &str, score: &str) -> String {
    format!("{:<5} {:<30} {:<30} {:<10} {:<6}", no, name, matched, status, score)
}

pub fn table_header() -> String {
    format!(
        "{}\n{}",
        format_row("No.", "File Name", "Matched File", "Status", "Score"),
        "-".repeat(80)
    )
}

/// 追記モードのログファイル
pub struct LogFileSink {
    file: File,
}

impl LogFileSink {
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file })
    }
}

impl AuditSink for LogFileSink {
    fn start(&mut self) -> Result<()> {
        self.line(START_MESSAGE)
    }

    fn line(&mut self, message: &str) -> Result<()> {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S,%3f");
        writeln!(self.file, "{} - INFO - {}", timestamp, message)?;
        self.file.flush()?;
        Ok(())
    }
}

/// コンソール（テストではバッファ）への出力
pub struct ConsoleSink<W: Write> {
    out: W,
}

impl ConsoleSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> AuditSink for ConsoleSink<W> {
    fn start(&mut self) -> Result<()> {
        writeln!(self.out, "{}", START_MESSAGE)?;
        writeln!(self.out, "{}", table_header())?;
        Ok(())
    }

    fn line(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{}", message)?;
        Ok(())
    }
}

/// 複数の出力先へ同じ内容を送る
#[derive(Default)]
pub struct MultiSink {
    sinks: Vec<Box<dyn AuditSink>>,
}

impl MultiSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, sink: impl AuditSink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }
}

impl AuditSink for MultiSink {
    fn start(&mut self) -> Result<()> {
        for sink in &mut self.sinks {
            sink.start()?;
        }
        Ok(())
    }

    fn line(&mut self, message: &str) -> Result<()> {
        for sink in &mut self.sinks {
            sink.line(message)?;
        }
        Ok(())
    }
}
