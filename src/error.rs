use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileMatchError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("フォルダにアクセスできません: {0}")]
    Filesystem(String),

    #[error("Excel読み込みエラー: {0}")]
    Spreadsheet(String),

    #[error("名前リストの形式が不正: {0}")]
    Schema(String),

    #[error("照合対象のファイルがありません")]
    NoCandidates,

    #[error("コピーに失敗: {from} -> {to}: {source}")]
    CopyFailure {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FileMatchError>;
