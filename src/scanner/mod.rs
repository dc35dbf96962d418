use crate::error::{FileMatchError, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 照合候補のファイル
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateFile {
    pub path: PathBuf,
    /// 拡張子を除いたファイル名（照合キー）
    pub match_key: String,
}

impl CandidateFile {
    pub fn new(path: PathBuf) -> Self {
        let match_key = match_key(&path);
        Self { path, match_key }
    }
}

/// 最後の拡張子だけを除いたファイル名を返す（`Report.v2.pdf` → `Report.v2`）
pub fn match_key(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// フォルダ以下のファイルを再帰的に収集
///
/// 各フォルダ内はファイル名順に走査するので、同じ照合キーのファイルが
/// 複数あっても常に同じファイルが先に来る。
pub fn scan_folder(folder: &Path) -> Result<Vec<CandidateFile>> {
    if !folder.exists() {
        return Err(FileMatchError::FolderNotFound(folder.display().to_string()));
    }

    // ルート自体が読めない場合のみエラー（配下の読めないエントリはスキップ）
    std::fs::read_dir(folder)
        .map_err(|e| FileMatchError::Filesystem(format!("{}: {}", folder.display(), e)))?;

    let files = WalkDir::new(folder)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        // シンボリックリンク先がファイルなら候補に含める
        .filter(|e| e.path().is_file())
        .map(|e| CandidateFile::new(e.into_path()))
        .collect();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_match_key_strips_last_extension() {
        assert_eq!(match_key(Path::new("a/Report.v2.pdf")), "Report.v2");
        assert_eq!(match_key(Path::new("Alpha_Report_Final.docx")), "Alpha_Report_Final");
        assert_eq!(match_key(Path::new("README")), "README");
        assert_eq!(match_key(Path::new(".bashrc")), ".bashrc");
    }

    #[test]
    fn test_scan_folder_not_found() {
        let result = scan_folder(Path::new("/nonexistent/folder"));
        assert!(matches!(result, Err(FileMatchError::FolderNotFound(_))));
    }

    #[test]
    fn test_scan_folder_not_a_directory() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, "x").unwrap();

        let result = scan_folder(&file);
        assert!(matches!(result, Err(FileMatchError::Filesystem(_))));
    }

    #[test]
    fn test_scan_folder_recursive_no_filter() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("sub/deeper")).unwrap();
        fs::write(dir.path().join("top.pdf"), "x").unwrap();
        fs::write(dir.path().join("sub/middle.txt"), "x").unwrap();
        fs::write(dir.path().join("sub/deeper/bottom"), "x").unwrap();

        let files = scan_folder(dir.path()).unwrap();
        let mut keys: Vec<&str> = files.iter().map(|f| f.match_key.as_str()).collect();
        keys.sort();
        assert_eq!(keys, vec!["bottom", "middle", "top"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_folder_follows_file_symlinks() {
        let dir = tempdir().unwrap();
        let real = dir.path().join("real");
        fs::create_dir_all(&real).unwrap();
        fs::create_dir_all(dir.path().join("files")).unwrap();
        fs::write(real.join("original.pdf"), "x").unwrap();
        std::os::unix::fs::symlink(real.join("original.pdf"), dir.path().join("files/Alpha Report.pdf"))
            .unwrap();

        let files = scan_folder(&dir.path().join("files")).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].match_key, "Alpha Report");
    }

    #[test]
    fn test_scan_folder_order_is_stable() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("b")).unwrap();
        fs::write(dir.path().join("c.txt"), "x").unwrap();
        fs::write(dir.path().join("a.txt"), "x").unwrap();
        fs::write(dir.path().join("b/a.pdf"), "x").unwrap();

        let first = scan_folder(dir.path()).unwrap();
        let second = scan_folder(dir.path()).unwrap();
        assert_eq!(first, second);

        let names: Vec<String> = first
            .iter()
            .map(|f| f.path.strip_prefix(dir.path()).unwrap().display().to_string())
            .collect();
        assert_eq!(names[0], "a.txt");
        assert!(names[1].ends_with("a.pdf"));
        assert_eq!(names[2], "c.txt");
    }
}
