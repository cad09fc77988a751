//! 設定読み込み Outbound ポート

use crate::domain::SearchSettings;

/// config.json と環境変数から検索設定を解決する。
/// 設定が壊れていても既定値で続行するため Result を返さない。
pub trait SettingsLoader: Send + Sync {
    fn load(&self) -> SearchSettings;
}
