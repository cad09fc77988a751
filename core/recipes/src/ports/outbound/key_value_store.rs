//! キー・値ストレージ Outbound ポート
//!
//! ブラウザの localStorage 相当。値は文字列で丸ごと読み書きし、部分更新はしない。
//! 直列化形式を知っているのは usecase::recipe_store だけで、呼び出し側は触らない。

use common::error::Error;

pub trait KeyValueStore: Send + Sync {
    /// キーが無ければ Ok(None)
    fn get(&self, key: &str) -> Result<Option<String>, Error>;
    /// 値を丸ごと置き換える（最後に書いたものが勝つ）
    fn set(&self, key: &str, value: &str) -> Result<(), Error>;
}
