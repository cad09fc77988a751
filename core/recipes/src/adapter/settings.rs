//! 検索設定の読み込み（adapter 層）
//!
//! `<config_dir>/config.json` を読み、環境変数 RECIPES_MEALDB_URL で base URL を上書きする。
//! ファイルが無ければ既定値。読めない・壊れている場合は警告ログを出して既定値で続行する。

use crate::domain::{ResponseOrdering, SearchSettings};
use crate::ports::outbound::SettingsLoader;
use common::error::Error;
use common::ports::outbound::{EnvResolver, FileSystem, Log, LogLevel, LogRecord};
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;

const MEALDB_URL_ENV: &str = "RECIPES_MEALDB_URL";

/// config.json のスキーマ（すべて任意）
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    mealdb_base_url: Option<String>,
    debounce_ms: Option<u64>,
    response_ordering: Option<ResponseOrdering>,
}

pub struct FileSettingsLoader {
    fs: Arc<dyn FileSystem>,
    env: Arc<dyn EnvResolver>,
    log: Arc<dyn Log>,
    path: PathBuf,
}

impl FileSettingsLoader {
    pub fn new(
        fs: Arc<dyn FileSystem>,
        env: Arc<dyn EnvResolver>,
        log: Arc<dyn Log>,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            fs,
            env,
            log,
            path: path.into(),
        }
    }

    fn read_file(&self) -> Result<SettingsFile, Error> {
        if !self.fs.exists(&self.path) {
            return Ok(SettingsFile::default());
        }
        let s = self.fs.read_to_string(&self.path)?;
        serde_json::from_str(&s).map_err(|e| {
            Error::json(format!("Invalid {}: {}", self.path.display(), e))
        })
    }
}

impl SettingsLoader for FileSettingsLoader {
    fn load(&self) -> SearchSettings {
        let file = self.read_file().unwrap_or_else(|e| {
            let _ = self.log.log(
                &LogRecord::new(LogLevel::Warn, format!("Failed to load config: {}", e))
                    .layer("adapter")
                    .kind("config"),
            );
            SettingsFile::default()
        });

        let defaults = SearchSettings::default();
        SearchSettings {
            base_url: self
                .env
                .var(MEALDB_URL_ENV)
                .or(file.mealdb_base_url)
                .unwrap_or(defaults.base_url),
            debounce_ms: file.debounce_ms.unwrap_or(defaults.debounce_ms),
            ordering: file.response_ordering.unwrap_or(defaults.ordering),
        }
    }
}
