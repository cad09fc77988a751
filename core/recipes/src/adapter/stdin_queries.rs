//! 標準入力の各行を検索クエリとしてイベントループへ流す
//!
//! 別スレッドで行を読み、`SearchEvent::Query` を送る。EOF で `SearchEvent::InputClosed`。

use crate::usecase::search_loop::SearchEvent;
use std::io::BufRead;
use std::sync::mpsc::Sender;

pub fn spawn_stdin_queries(tx: Sender<SearchEvent>) {
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(SearchEvent::Query(line)).is_err() {
                return;
            }
        }
        let _ = tx.send(SearchEvent::InputClosed);
    });
}
