//! 検索状態の表示 Outbound ポート

use crate::domain::SearchSnapshot;

/// 状態が変わるたびに呼ばれる。表示の失敗は検索に影響させない。
pub trait SearchView {
    fn render(&self, snapshot: &SearchSnapshot);
}
