//! 外部レシピサービス検索 Outbound ポート
//!
//! 認証なし・読み取り専用。`Ok(None)` はサービスが `meals: null` を返したことを表す。

use crate::domain::MealSummary;
use common::error::Error;

pub trait MealSearch: Send + Sync {
    /// 料理名のキーワード検索（search.php?s=）
    fn search_by_name(&self, query: &str) -> Result<Option<Vec<MealSummary>>, Error>;
    /// カテゴリ絞り込み（filter.php?c=）
    fn filter_by_category(&self, category: &str) -> Result<Option<Vec<MealSummary>>, Error>;
}
