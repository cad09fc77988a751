//! 対話検索のイベントループ
//!
//! 1 スレッドでイベント（入力・応答）を受け、デバウンス期限を recv_timeout で待つ。
//! リクエストは使い捨てのスレッドで実行し、完了をイベントとしてループに戻す。
//! 入力が閉じた後も、保留中のデバウンスと実行中のリクエストが片付くまで回る。

use crate::domain::{MealSummary, SearchRequest, SearchSnapshot};
use crate::ports::outbound::{MealSearch, SearchView};
use crate::usecase::search_session::SearchSession;
use common::error::Error;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;

pub enum SearchEvent {
    Query(String),
    Completed {
        request: SearchRequest,
        outcome: Result<Option<Vec<MealSummary>>, Error>,
    },
    InputClosed,
}

pub struct SearchLoop {
    session: SearchSession,
    searcher: Arc<dyn MealSearch>,
}

impl SearchLoop {
    pub fn new(session: SearchSession, searcher: Arc<dyn MealSearch>) -> Self {
        Self { session, searcher }
    }

    /// ループを回し、終了時の状態を返す。
    /// `tx` はリクエスト完了の通知に使う（入力側と同じチャネル）。
    pub fn run(
        mut self,
        tx: Sender<SearchEvent>,
        rx: Receiver<SearchEvent>,
        view: &dyn SearchView,
    ) -> SearchSnapshot {
        let mut input_closed = false;
        let mut in_flight = 0usize;

        loop {
            if input_closed && in_flight == 0 && self.session.time_until_due().is_none() {
                break;
            }

            let event = match self.session.time_until_due() {
                Some(wait) => match rx.recv_timeout(wait) {
                    Ok(event) => Some(event),
                    Err(RecvTimeoutError::Timeout) => None,
                    Err(RecvTimeoutError::Disconnected) => break,
                },
                None => match rx.recv() {
                    Ok(event) => Some(event),
                    Err(_) => break,
                },
            };

            match event {
                Some(SearchEvent::Query(query)) => {
                    self.session.set_query(&query);
                    view.render(&self.session.snapshot());
                }
                Some(SearchEvent::Completed { request, outcome }) => {
                    in_flight = in_flight.saturating_sub(1);
                    if self.session.complete(&request, outcome) {
                        view.render(&self.session.snapshot());
                    }
                }
                Some(SearchEvent::InputClosed) => input_closed = true,
                None => {}
            }

            if let Some(request) = self.session.poll_due() {
                in_flight += 1;
                view.render(&self.session.snapshot());
                self.dispatch(request, tx.clone());
            }
        }

        self.session.snapshot()
    }

    fn dispatch(&self, request: SearchRequest, tx: Sender<SearchEvent>) {
        let searcher = Arc::clone(&self.searcher);
        std::thread::spawn(move || {
            let outcome = searcher.search_by_name(&request.query);
            let _ = tx.send(SearchEvent::Completed { request, outcome });
        });
    }
}
