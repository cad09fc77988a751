//! 外部レシピサービスへの単発問い合わせ（キーワード検索・デザート一覧）
//!
//! 失敗は呼び出し側に返さず、開発者向けログに記録して「結果なし」に落とす。

use crate::domain::{MealSummary, DESSERT_CATEGORY};
use crate::ports::outbound::MealSearch;
use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};
use std::sync::Arc;

pub struct MealCatalog {
    searcher: Arc<dyn MealSearch>,
    log: Arc<dyn Log>,
}

impl MealCatalog {
    pub fn new(searcher: Arc<dyn MealSearch>, log: Arc<dyn Log>) -> Self {
        Self { searcher, log }
    }

    /// デバウンスなしの 1 回だけの検索。
    /// 空白だけのクエリは None（検索していない）で、通信しない。
    pub fn search_once(&self, query: &str) -> Option<Vec<MealSummary>> {
        if query.trim().is_empty() {
            return None;
        }
        let outcome = self.searcher.search_by_name(query);
        Some(meals_or_empty(outcome, self.log.as_ref(), query))
    }

    /// デザートカテゴリの一覧。失敗時と `meals: null` のときは None。
    pub fn desserts(&self) -> Option<Vec<MealSummary>> {
        match self.searcher.filter_by_category(DESSERT_CATEGORY) {
            Ok(meals) => meals,
            Err(e) => {
                log_failure(self.log.as_ref(), "dessert listing failed", DESSERT_CATEGORY, &e);
                None
            }
        }
    }
}

/// 検索結果を表示用リストにする。null は空、エラーはログに残して空。
pub(crate) fn meals_or_empty(
    outcome: Result<Option<Vec<MealSummary>>, Error>,
    log: &dyn Log,
    query: &str,
) -> Vec<MealSummary> {
    match outcome {
        Ok(meals) => meals.unwrap_or_default(),
        Err(e) => {
            log_failure(log, "meal search failed", query, &e);
            Vec::new()
        }
    }
}

fn log_failure(log: &dyn Log, message: &str, query: &str, error: &Error) {
    let _ = log.log(
        &LogRecord::new(LogLevel::Warn, message)
            .layer("usecase")
            .kind("search")
            .field("query", query)
            .field("error", error.to_string()),
    );
}
