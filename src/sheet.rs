//! 名前リスト（Excel）の読み込み
//!
//! 先頭シートの1行目をヘッダーとして扱い、`Name` 列の値を上から順に読む。

use crate::error::{FileMatchError, Result};
use crate::matcher::TargetName;
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// 名前列のヘッダー
pub const NAME_COLUMN: &str = "Name";

pub fn read_target_names(path: &Path) -> Result<Vec<TargetName>> {
    if !path.exists() {
        return Err(FileMatchError::FileNotFound(path.display().to_string()));
    }

    let mut workbook = open_workbook_auto(path)
        .map_err(|e| FileMatchError::Spreadsheet(format!("{}: {}", path.display(), e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| FileMatchError::Spreadsheet(format!("シートがありません: {}", path.display())))?
        .map_err(|e| FileMatchError::Spreadsheet(format!("{}: {}", path.display(), e)))?;

    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| FileMatchError::Schema(format!("ヘッダー行がありません: {}", path.display())))?;

    let column = header
        .iter()
        .position(|cell| matches!(cell, Data::String(s) if s == NAME_COLUMN))
        .ok_or_else(|| {
            FileMatchError::Schema(format!("「{}」列がありません: {}", NAME_COLUMN, path.display()))
        })?;

    let names = rows
        .filter_map(|row| row.get(column).map(cell_text))
        .filter(|name| !name.is_empty())
        .enumerate()
        .map(|(i, name)| TargetName::new(i + 1, name))
        .collect();

    Ok(names)
}

/// セルの値を文字列に変換（空セルは空文字）
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        other => other.to_string().trim().to_string(),
    }
}
