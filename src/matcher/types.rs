use serde::Serialize;
use std::path::PathBuf;

/// 名前リストの1行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetName {
    /// 1始まりの行番号（リスト内の順序）
    pub position: usize,
    pub name: String,
}

impl TargetName {
    pub fn new(position: usize, name: impl Into<String>) -> Self {
        Self {
            position,
            name: name.into(),
        }
    }
}

/// 最高スコアの候補
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestMatch<'a> {
    /// 候補リスト内の位置
    pub index: usize,
    pub key: &'a str,
    pub score: u8,
}

/// 照合ステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MatchStatus {
    Passed,
    Failed,
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchStatus::Passed => write!(f, "PASSED"),
            MatchStatus::Failed => write!(f, "FAILED"),
        }
    }
}

/// 照合結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub target: TargetName,
    /// 不一致でも最高スコアの候補を残す
    pub matched_key: String,
    pub score: u8,
    pub accepted: bool,
    /// コピー先のパス（一致した場合のみ）
    pub copied_to: Option<PathBuf>,
}

impl MatchResult {
    pub fn status(&self) -> MatchStatus {
        if self.accepted {
            MatchStatus::Passed
        } else {
            MatchStatus::Failed
        }
    }
}
