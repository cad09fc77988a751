//! 外部レシピサービス（TheMealDB）の検索結果
//!
//! 永続化しない。クエリが変わるたびに捨てられる。

use serde::{Deserialize, Serialize};

/// デザート一覧で使うカテゴリ名
pub const DESSERT_CATEGORY: &str = "Dessert";

/// 検索結果 1 件分の要約
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSummary {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
}

/// `search.php` / `filter.php` のレスポンス本体（`meals` は null になりうる）
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MealList {
    #[serde(default)]
    pub meals: Option<Vec<MealSummary>>,
}
