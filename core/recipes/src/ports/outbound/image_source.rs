//! 画像取り込み Outbound ポート（クライアント側での画像キャプチャ相当）

use common::error::Error;

pub trait ImageSource: Send + Sync {
    /// 指定された画像を保存用の文字列（data URI またはパス/URL そのまま）にする
    fn resolve(&self, reference: &str) -> Result<String, Error>;
}
