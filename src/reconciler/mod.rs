//! 照合処理
//!
//! ## 処理フロー
//! 1. 名前リストを読み込み（列が無ければ何も出力せずにエラー）
//! 2. 開始を記録し、候補ファイルを一度だけ収集
//! 3. 名前ごとに最高スコアの候補を探し、閾値を超えたらコピー
//! 4. 最終スコアと総合結果を出力

mod report;

pub use report::ReconciliationReport;

use crate::audit::{format_row, AuditSink};
use crate::error::{FileMatchError, Result};
use crate::matcher::{self, MatchResult, TargetName};
use crate::scanner::{self, CandidateFile};
use crate::sheet;
use std::fs::File;
use std::path::{Path, PathBuf};

/// 1回分の照合ジョブ
#[derive(Debug, Clone)]
pub struct MatchJob {
    /// 名前リスト（Excel）
    pub spreadsheet: PathBuf,
    /// 候補ファイルのフォルダ
    pub source_dir: PathBuf,
    /// コピー先フォルダ
    pub destination: PathBuf,
    pub threshold: u8,
}

/// 名前リストの読み込みからレポート出力までを実行
pub fn run(job: &MatchJob, sink: &mut dyn AuditSink) -> Result<ReconciliationReport> {
    let targets = sheet::read_target_names(&job.spreadsheet)?;
    check_destination(&job.destination)?;

    sink.start()?;
    let candidates = scanner::scan_folder(&job.source_dir)?;

    reconcile(&targets, &candidates, &job.destination, job.threshold, sink)
}

/// 名前ごとに照合し、一致したファイルをコピー先へ複製する
///
/// コピーに失敗した時点で中断し、総合結果は出力しない。
pub fn reconcile(
    targets: &[TargetName],
    candidates: &[CandidateFile],
    destination: &Path,
    threshold: u8,
    sink: &mut dyn AuditSink,
) -> Result<ReconciliationReport> {
    let mut report = ReconciliationReport::default();

    for target in targets {
        let best = matcher::best_match(
            &target.name,
            candidates.iter().map(|c| c.match_key.as_str()),
        )?;
        let accepted = matcher::is_accepted(best.score, threshold);

        let mut result = MatchResult {
            target: target.clone(),
            matched_key: best.key.to_string(),
            score: best.score,
            accepted,
            copied_to: None,
        };

        sink.line(&format_row(
            &format!("{}.", target.position),
            &target.name,
            &result.matched_key,
            &result.status().to_string(),
            &result.score.to_string(),
        ))?;

        if accepted {
            // 同点は先勝ちなので、同じキーを持つファイルのうち収集順で最初のもの
            let file = &candidates[best.index];
            result.copied_to = Some(copy_into(&file.path, destination)?);
        }

        report.push(result);
    }

    sink.line(&report.score_message())?;
    sink.line(&report.result_message())?;

    Ok(report)
}

fn check_destination(destination: &Path) -> Result<()> {
    if !destination.exists() {
        return Err(FileMatchError::FolderNotFound(destination.display().to_string()));
    }
    if !destination.is_dir() {
        return Err(FileMatchError::Filesystem(format!(
            "フォルダではありません: {}",
            destination.display()
        )));
    }
    Ok(())
}

/// ファイル名を保ったままコピーし、ディスクへ書き出す（既存ファイルは上書き）
fn copy_into(source: &Path, destination: &Path) -> Result<PathBuf> {
    let copy_error = |to: &Path, e: std::io::Error| FileMatchError::CopyFailure {
        from: source.display().to_string(),
        to: to.display().to_string(),
        source: e,
    };

    let file_name = source.file_name().ok_or_else(|| {
        copy_error(
            destination,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "ファイル名がありません"),
        )
    })?;
    let target = destination.join(file_name);

    std::fs::copy(source, &target).map_err(|e| copy_error(&target, e))?;
    File::open(&target)
        .and_then(|f| f.sync_all())
        .map_err(|e| copy_error(&target, e))?;

    Ok(target)
}
