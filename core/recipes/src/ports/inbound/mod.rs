//! Inbound ポート: ドライバ（CLI）がアプリを呼び出すインターフェース

use crate::cli::Config;
use common::error::Error;

/// recipes アプリケーションを実行する Inbound ポート
///
/// main はこの trait を実装した Runner の run を呼び出し、戻り値を終了コードにする。
pub trait RunRecipesApp {
    fn run(&self, config: Config) -> Result<i32, Error>;
}
