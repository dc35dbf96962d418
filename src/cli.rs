use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "file-match")]
#[command(about = "名前リストとフォルダ内ファイルのあいまい照合ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 名前リストとファイルを照合し、一致したファイルをコピー
    Run {
        /// 名前リストのExcelファイル（「Name」列）
        #[arg(required = true)]
        spreadsheet: PathBuf,

        /// 照合対象のフォルダ（サブフォルダも含む）
        #[arg(required = true)]
        source: PathBuf,

        /// コピー先フォルダ
        #[arg(required = true)]
        destination: PathBuf,

        /// 一致とみなすスコアの閾値（0-100、このスコアを超えたら一致）
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=100))]
        threshold: Option<u8>,

        /// ログファイル（デフォルト: 設定ファイルの値）
        #[arg(short, long)]
        log_file: Option<PathBuf>,

        /// 照合結果をJSONで保存
        #[arg(short, long)]
        report: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// 閾値を設定
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        set_threshold: Option<u8>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
