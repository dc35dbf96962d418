use crate::error::{FileMatchError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_SCORE_THRESHOLD: u8 = 75;
pub const DEFAULT_LOG_FILE: &str = "file_matching.log";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// このスコアを超えたら一致とみなす (0-100)
    pub score_threshold: u8,
    /// 照合ログの出力先
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            score_threshold: DEFAULT_SCORE_THRESHOLD,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_json(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(content)?;
        validate_threshold(config.score_threshold)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| FileMatchError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("file-match").join("config.json"))
    }

    pub fn set_score_threshold(&mut self, threshold: u8) -> Result<()> {
        validate_threshold(threshold)?;
        self.score_threshold = threshold;
        self.save()
    }
}

/// 閾値が0-100の範囲か確認
pub fn validate_threshold(threshold: u8) -> Result<u8> {
    if threshold > 100 {
        return Err(FileMatchError::Config(format!(
            "閾値は0-100で指定してください: {}",
            threshold
        )));
    }
    Ok(threshold)
}
