//! 実行時ディレクトリ（XDG / RECIPES_HOME 解決結果）
//!
//! EnvResolver::resolve_dirs() で取得し、ストレージ・ログ・設定ファイルのパス計算に使う。

use std::path::PathBuf;

/// 解決済みの config / data / state ディレクトリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dirs {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
    pub state_dir: PathBuf,
}

impl Dirs {
    /// HOME 配下にまとめて置く構成（RECIPES_HOME 用）
    pub fn under_home(home: impl Into<PathBuf>) -> Self {
        let home = home.into();
        Self {
            config_dir: home.join("config"),
            data_dir: home.join("data"),
            state_dir: home.join("state"),
        }
    }

    /// 設定ファイル（config.json）のパス
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.json")
    }

    /// ログ格納ディレクトリ
    pub fn logs_dir(&self) -> PathBuf {
        self.state_dir.join("logs")
    }
}
