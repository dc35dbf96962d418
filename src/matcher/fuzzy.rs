//! 文字列の類似度スコア (0-100)
//!
//! 大文字小文字・記号の違いを無視し、単語の並び替えや部分一致にも
//! 高いスコアを返す。
//!
//! - `ratio`: 最長共通部分列ベースの類似度
//! - `partial_ratio`: 短い方を長い方の同じ長さの部分と比較した最高値
//! - `token_sort_ratio` / `token_set_ratio`: 単語単位で並べ替え・集合化して比較
//! - `score`: 上記を長さの比で重み付けした総合スコア

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;

const UNBASE_SCALE: f64 = 0.95;

/// 総合スコアを計算
pub fn score(a: &str, b: &str) -> u8 {
    let a = normalize(a);
    let b = normalize(b);
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let base = ratio(&a, &b) as f64;

    let len_a = a.chars().count();
    let len_b = b.chars().count();
    let len_ratio = len_a.max(len_b) as f64 / len_a.min(len_b) as f64;

    let best = if len_ratio < 1.5 {
        let sort = token_sort_ratio(&a, &b) as f64 * UNBASE_SCALE;
        let set = token_set_ratio(&a, &b, false) as f64 * UNBASE_SCALE;
        base.max(sort).max(set)
    } else {
        let partial_scale = if len_ratio > 8.0 { 0.6 } else { 0.9 };
        let partial = partial_ratio(&a, &b) as f64 * partial_scale;
        let sort = partial_token_sort_ratio(&a, &b) as f64 * UNBASE_SCALE * partial_scale;
        let set = token_set_ratio(&a, &b, true) as f64 * UNBASE_SCALE * partial_scale;
        base.max(partial).max(sort).max(set)
    };

    best.round_ties_even().min(100.0) as u8
}

/// 小文字化し、英数字以外の連続を1つの空白に置き換える
pub fn normalize(s: &str) -> String {
    lazy_static! {
        static ref NON_WORD: Regex = Regex::new(r"[^\p{L}\p{N}]+").unwrap();
    }
    NON_WORD.replace_all(s, " ").trim().to_lowercase()
}

pub fn ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    ratio_chars(&a, &b).round_ties_even() as u8
}

pub fn partial_ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    if shorter.is_empty() {
        return 0;
    }

    let mut best = 0.0_f64;
    for window in longer.windows(shorter.len()) {
        best = best.max(ratio_chars(&shorter, window));
        if best >= 100.0 {
            break;
        }
    }
    best.round_ties_even() as u8
}

pub fn token_sort_ratio(a: &str, b: &str) -> u8 {
    ratio(&sorted_tokens(a), &sorted_tokens(b))
}

fn partial_token_sort_ratio(a: &str, b: &str) -> u8 {
    partial_ratio(&sorted_tokens(a), &sorted_tokens(b))
}

/// 共通の単語と差分の単語に分けて比較
pub fn token_set_ratio(a: &str, b: &str, partial: bool) -> u8 {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();

    let intersection = join(tokens_a.intersection(&tokens_b));
    let only_a = join(tokens_a.difference(&tokens_b));
    let only_b = join(tokens_b.difference(&tokens_a));

    let combined_a = format!("{} {}", intersection, only_a).trim().to_string();
    let combined_b = format!("{} {}", intersection, only_b).trim().to_string();

    let compare = |x: &str, y: &str| {
        if partial {
            partial_ratio(x, y)
        } else {
            ratio(x, y)
        }
    };

    compare(&intersection, &combined_a)
        .max(compare(&intersection, &combined_b))
        .max(compare(&combined_a, &combined_b))
}

fn sorted_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn join<'a, 'b: 'a>(tokens: impl Iterator<Item = &'a &'b str>) -> String {
    tokens.copied().collect::<Vec<_>>().join(" ")
}

fn ratio_chars(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    200.0 * lcs_len(a, b) as f64 / total as f64
}

/// 最長共通部分列の長さ
fn lcs_len(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut cur = vec![0usize; b.len() + 1];

    for ca in a {
        for (j, cb) in b.iter().enumerate() {
            cur[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                cur[j].max(prev[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    prev[b.len()]
}
