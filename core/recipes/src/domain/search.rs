//! デバウンス検索の状態と設定

use super::meal::MealSummary;
use serde::Deserialize;

/// 既定のデバウンス時間（ミリ秒）
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// 既定の TheMealDB ベース URL
pub const DEFAULT_MEALDB_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// 古いレスポンスの扱い
///
/// - `Arrival`: 届いた順にすべて反映する（後から届いた古い結果で新しい結果が上書きされうる）
/// - `Request`: 最後に発行したリクエストのレスポンスだけを反映する
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseOrdering {
    #[default]
    Arrival,
    Request,
}

/// 検索まわりの設定（config.json と環境変数から解決）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSettings {
    pub base_url: String,
    pub debounce_ms: u64,
    pub ordering: ResponseOrdering,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_MEALDB_BASE_URL.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            ordering: ResponseOrdering::default(),
        }
    }
}

/// 検索のフェーズ
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    /// 期限 `due_at_ms` まで入力が止まればリクエストを出す
    Debouncing { query: String, due_at_ms: u64 },
    Loading { query: String, seq: u64 },
}

/// 発行すべきリクエスト（seq は発行順の連番）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub seq: u64,
    pub query: String,
}

/// View に渡す表示用スナップショット
///
/// `results` が None なら「検索していない」、Some(空) なら「0 件（または失敗）」。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSnapshot {
    pub phase: SearchPhase,
    pub results: Option<Vec<MealSummary>>,
}
