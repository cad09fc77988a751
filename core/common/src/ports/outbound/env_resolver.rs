//! 環境変数解決 Outbound ポート
//!
//! 実行時ディレクトリ（config / data / state）を環境変数から解決する。
//! usecase / wiring はこの trait 経由でのみ環境変数にアクセスする。

use crate::domain::{Dirs, HomeDir};
use crate::error::Error;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// 任意の環境変数を読む。未設定・空文字は None。
    fn var(&self, key: &str) -> Option<String>;

    /// ホームディレクトリ（RECIPES_HOME）が設定されていれば返す
    fn home_dir(&self) -> Option<HomeDir>;

    /// 実行時ディレクトリを解決する
    ///
    /// 優先順位:
    /// 1. RECIPES_HOME（設定されていれば config / data / state をその配下に置く）
    /// 2. XDG_*_HOME/recipes
    /// 3. $HOME/.config/recipes 等の XDG 既定値
    fn resolve_dirs(&self) -> Result<Dirs, Error>;
}
