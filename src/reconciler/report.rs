use crate::matcher::{MatchResult, MatchStatus};
use serde::Serialize;

/// 照合結果の集計
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReconciliationReport {
    pub results: Vec<MatchResult>,
    pub matched_count: usize,
    /// 不一致だった名前（不一致になった順）
    pub unmatched: Vec<String>,
}

impl ReconciliationReport {
    pub fn push(&mut self, result: MatchResult) {
        if result.accepted {
            self.matched_count += 1;
        } else {
            self.unmatched.push(result.target.name.clone());
        }
        self.results.push(result);
    }

    pub fn total_count(&self) -> usize {
        self.results.len()
    }

    /// 全件一致した場合のみ PASSED
    pub fn overall(&self) -> MatchStatus {
        if self.matched_count == self.total_count() {
            MatchStatus::Passed
        } else {
            MatchStatus::Failed
        }
    }

    pub fn score_message(&self) -> String {
        format!("\nFinal Score: {}/{}", self.matched_count, self.total_count())
    }

    /// 総合結果（不一致があれば番号を振り直した一覧を付ける）
    pub fn result_message(&self) -> String {
        let mut message = format!("Overall Result: {}", self.overall());
        if self.overall() == MatchStatus::Failed {
            let list: Vec<String> = self
                .unmatched
                .iter()
                .enumerate()
                .map(|(i, name)| format!("    {}. {}", i + 1, name))
                .collect();
            message.push_str("\nUnmatched Files:\n");
            message.push_str(&list.join("\n"));
        }
        message
    }
}
