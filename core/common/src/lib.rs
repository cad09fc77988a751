//! recipes 共通ライブラリ
//!
//! エラー型・Outbound ポート（FS / 時刻 / 環境変数 / ログ）とその標準実装を提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（実行時ディレクトリ等）
pub mod domain;

/// Outbound ポート定義
pub mod ports;

/// ポートの標準実装
pub mod adapter;
