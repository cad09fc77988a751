//! デバウンス付き検索の状態機械
//!
//! Idle → (入力) → Debouncing → (期限到来) → Loading → (応答) → Idle（結果あり / 空）。
//! Debouncing / Loading 中に入力が変わると Debouncing からやり直す。
//! 時刻は Clock から読むだけで、タイマーやスレッドは持たない（駆動は search_loop）。
//!
//! 発行済みリクエストは取り消さない。古い応答を反映するかは ResponseOrdering で決める。

use crate::domain::{
    MealSummary, ResponseOrdering, SearchPhase, SearchRequest, SearchSettings, SearchSnapshot,
};
use crate::usecase::meals::meals_or_empty;
use common::error::Error;
use common::ports::outbound::{Clock, Log, LogLevel, LogRecord};
use std::sync::Arc;
use std::time::Duration;

pub struct SearchSession {
    clock: Arc<dyn Clock>,
    log: Arc<dyn Log>,
    debounce_ms: u64,
    ordering: ResponseOrdering,
    phase: SearchPhase,
    /// None: 検索していない / Some(空): 0 件または失敗
    results: Option<Vec<MealSummary>>,
    last_seq: u64,
}

impl SearchSession {
    pub fn new(clock: Arc<dyn Clock>, log: Arc<dyn Log>, settings: &SearchSettings) -> Self {
        Self {
            clock,
            log,
            debounce_ms: settings.debounce_ms,
            ordering: settings.ordering,
            phase: SearchPhase::Idle,
            results: None,
            last_seq: 0,
        }
    }

    /// クエリが変わった。空白だけなら即座に「検索していない」に戻し、保留中のタイマーも捨てる。
    pub fn set_query(&mut self, query: &str) {
        if query.trim().is_empty() {
            self.phase = SearchPhase::Idle;
            self.results = None;
            return;
        }
        self.phase = SearchPhase::Debouncing {
            query: query.to_string(),
            due_at_ms: self.clock.now_ms().saturating_add(self.debounce_ms),
        };
    }

    /// デバウンス期限までの残り時間（Debouncing 以外は None）
    pub fn time_until_due(&self) -> Option<Duration> {
        match &self.phase {
            SearchPhase::Debouncing { due_at_ms, .. } => Some(Duration::from_millis(
                due_at_ms.saturating_sub(self.clock.now_ms()),
            )),
            _ => None,
        }
    }

    /// 期限が来ていればリクエストを発行して Loading に移る
    pub fn poll_due(&mut self) -> Option<SearchRequest> {
        let SearchPhase::Debouncing { query, due_at_ms } = &self.phase else {
            return None;
        };
        if self.clock.now_ms() < *due_at_ms {
            return None;
        }
        self.last_seq += 1;
        let request = SearchRequest {
            seq: self.last_seq,
            query: query.clone(),
        };
        self.phase = SearchPhase::Loading {
            query: request.query.clone(),
            seq: request.seq,
        };
        Some(request)
    }

    /// 応答を反映する。反映したら true。
    ///
    /// `Arrival` では常に反映する（新しい入力の後に届いた古い応答も結果を上書きする）。
    /// `Request` では、まだその応答を待っている場合だけ反映する。
    pub fn complete(
        &mut self,
        request: &SearchRequest,
        outcome: Result<Option<Vec<MealSummary>>, Error>,
    ) -> bool {
        let meals = meals_or_empty(outcome, self.log.as_ref(), &request.query);
        let awaited = matches!(
            &self.phase,
            SearchPhase::Loading { seq, .. } if *seq == request.seq
        );

        if self.ordering == ResponseOrdering::Request && !awaited {
            let _ = self.log.log(
                &LogRecord::new(LogLevel::Debug, "dropped stale search response")
                    .layer("usecase")
                    .kind("search")
                    .field("seq", request.seq)
                    .field("query", request.query.as_str()),
            );
            return false;
        }

        self.results = Some(meals);
        if awaited {
            self.phase = SearchPhase::Idle;
        }
        true
    }

    pub fn phase(&self) -> &SearchPhase {
        &self.phase
    }

    pub fn results(&self) -> Option<&[MealSummary]> {
        self.results.as_deref()
    }

    pub fn snapshot(&self) -> SearchSnapshot {
        SearchSnapshot {
            phase: self.phase.clone(),
            results: self.results.clone(),
        }
    }
}
