pub mod fuzzy;
mod types;

pub use fuzzy::score;
pub use types::{BestMatch, MatchResult, MatchStatus, TargetName};

use crate::error::{FileMatchError, Result};

/// 全候補を評価し、最高スコアの候補を返す
///
/// 同点の場合は候補リストで先に出てきたものを採用する。
pub fn best_match<'a, I>(target: &str, candidates: I) -> Result<BestMatch<'a>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<BestMatch<'a>> = None;

    for (index, key) in candidates.into_iter().enumerate() {
        let score = fuzzy::score(target, key);
        let current_best = best.map(|b| b.score);
        if current_best.map_or(true, |s| score > s) {
            best = Some(BestMatch { index, key, score });
        }
    }

    best.ok_or(FileMatchError::NoCandidates)
}

/// スコアが閾値を超えた場合のみ一致（閾値と同じスコアは不一致）
pub fn is_accepted(score: u8, threshold: u8) -> bool {
    score > threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_match_picks_highest() {
        let candidates = ["Gamma Notes", "Alpha_Report_Final", "Delta"];
        let best = best_match("Alpha Report", candidates).unwrap();
        assert_eq!(best.key, "Alpha_Report_Final");
        assert_eq!(best.index, 1);
        assert_eq!(best.score, 90);
    }

    #[test]
    fn test_best_match_returns_member() {
        let candidates = ["one", "two", "three"];
        for target in ["on", "tree", "zzz", ""] {
            let best = best_match(target, candidates).unwrap();
            assert!(candidates.contains(&best.key));
            assert_eq!(candidates[best.index], best.key);
            assert!(best.score <= 100);
        }
    }

    #[test]
    fn test_best_match_tie_keeps_first() {
        let candidates = ["Report", "report", "REPORT"];
        let best = best_match("report", candidates).unwrap();
        assert_eq!(best.index, 0);
        assert_eq!(best.score, 100);
    }

    #[test]
    fn test_best_match_no_candidates() {
        let candidates: Vec<&str> = Vec::new();
        let result = best_match("Alpha", candidates);
        assert!(matches!(result, Err(FileMatchError::NoCandidates)));
    }

    #[test]
    fn test_is_accepted_boundary() {
        assert!(!is_accepted(75, 75));
        assert!(is_accepted(76, 75));
        assert!(!is_accepted(0, 0));
        assert!(is_accepted(100, 99));
        assert!(!is_accepted(100, 100));
    }

    #[test]
    fn test_status_display() {
        assert_eq!(MatchStatus::Passed.to_string(), "PASSED");
        assert_eq!(MatchStatus::Failed.to_string(), "FAILED");
    }
}
