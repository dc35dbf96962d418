//! 統合テスト用のヘルパー

use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};

/// ヘッダー行と名前列を持つExcelを作成
pub fn write_name_list(dir: &Path, header: &str, names: &[&str]) -> PathBuf {
    let path = dir.join("FileList.xlsx");
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.write_string(0, 0, "No.").unwrap();
    worksheet.write_string(0, 1, header).unwrap();
    for (i, name) in names.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet.write_number(row, 0, (i + 1) as f64).unwrap();
        if !name.is_empty() {
            worksheet.write_string(row, 1, *name).unwrap();
        }
    }

    workbook.save(&path).expect("Excel作成失敗");
    path
}

/// 空でないダミーファイルを作成
pub fn touch(dir: &Path, relative: &str) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, relative).unwrap();
    path
}
