//! TheMealDB（認証なしの公開レシピ API）プロバイダ
//!
//! base_url で任意のエンドポイントを指定可能。クエリは URL にそのまま埋め込む。
//! タイムアウトやリトライは設定せず、HTTP クライアントの既定値に任せる。

use crate::domain::{MealList, MealSummary};
use crate::ports::outbound::MealSearch;
use common::error::Error;

pub struct TheMealDbClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl TheMealDbClient {
    /// * `base_url` - 例: `https://www.themealdb.com/api/json/v1/1`（末尾の `/` は取り除く）
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }

    fn search_url(&self, query: &str) -> String {
        format!("{}/search.php?s={}", self.base_url, query)
    }

    fn filter_url(&self, category: &str) -> String {
        format!("{}/filter.php?c={}", self.base_url, category)
    }

    fn get_meals(&self, url: &str) -> Result<Option<Vec<MealSummary>>, Error> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| Error::http(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(Error::http(format!("TheMealDB error: HTTP {}", status)));
        }

        parse_meal_list(&body)
    }
}

/// レスポンス本文を解釈する（`meals: null` は Ok(None)）
pub(crate) fn parse_meal_list(body: &str) -> Result<Option<Vec<MealSummary>>, Error> {
    let list: MealList = serde_json::from_str(body)
        .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;
    Ok(list.meals)
}

impl MealSearch for TheMealDbClient {
    fn search_by_name(&self, query: &str) -> Result<Option<Vec<MealSummary>>, Error> {
        self.get_meals(&self.search_url(query))
    }

    fn filter_by_category(&self, category: &str) -> Result<Option<Vec<MealSummary>>, Error> {
        self.get_meals(&self.filter_url(category))
    }
}
