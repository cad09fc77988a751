//! テスト用のモック・スタブ

use crate::domain::{MealSummary, SearchSnapshot};
use crate::ports::outbound::{MealSearch, SearchView};
use common::domain::{Dirs, HomeDir};
use common::error::Error;
use common::ports::outbound::{Clock, EnvResolver, Log, LogRecord};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::thread::JoinHandle;

pub fn meal(id: &str, name: &str) -> MealSummary {
    MealSummary {
        id: id.to_string(),
        name: name.to_string(),
        thumbnail: None,
    }
}

/// 手で進める時計
pub struct FixedClock(AtomicU64);

impl FixedClock {
    pub fn new(now_ms: u64) -> Self {
        Self(AtomicU64::new(now_ms))
    }

    pub fn advance(&self, ms: u64) {
        self.0.fetch_add(ms, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now_ms(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Default)]
pub struct RecordingLog {
    records: Mutex<Vec<LogRecord>>,
}

impl RecordingLog {
    pub fn messages(&self) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.message.clone())
            .collect()
    }
}

impl Log for RecordingLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

/// 環境変数をマップで与える EnvResolver。RECIPES_HOME が無ければ resolve_dirs はエラー。
#[derive(Default)]
pub struct FakeEnv {
    vars: HashMap<String, String>,
}

impl FakeEnv {
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.vars.insert(key.to_string(), value.into());
        self
    }
}

impl EnvResolver for FakeEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn home_dir(&self) -> Option<HomeDir> {
        self.var("RECIPES_HOME").map(PathBuf::from).map(HomeDir::new)
    }

    fn resolve_dirs(&self) -> Result<Dirs, Error> {
        self.home_dir()
            .map(|home| Dirs::under_home(home.to_path_buf()))
            .ok_or_else(|| Error::env("RECIPES_HOME is not set"))
    }
}

/// 決まった結果を返し、受けたクエリを記録する MealSearch
pub struct StubMealSearch {
    outcome: Result<Option<Vec<MealSummary>>, Error>,
    queries: Mutex<Vec<String>>,
    categories: Mutex<Vec<String>>,
}

impl StubMealSearch {
    pub fn with_results(meals: Vec<MealSummary>) -> Self {
        Self::with_outcome(Ok(Some(meals)))
    }

    pub fn with_outcome(outcome: Result<Option<Vec<MealSummary>>, Error>) -> Self {
        Self {
            outcome,
            queries: Mutex::new(Vec::new()),
            categories: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    pub fn categories(&self) -> Vec<String> {
        self.categories.lock().unwrap().clone()
    }
}

impl MealSearch for StubMealSearch {
    fn search_by_name(&self, query: &str) -> Result<Option<Vec<MealSummary>>, Error> {
        self.queries.lock().unwrap().push(query.to_string());
        self.outcome.clone()
    }

    fn filter_by_category(&self, category: &str) -> Result<Option<Vec<MealSummary>>, Error> {
        self.categories.lock().unwrap().push(category.to_string());
        self.outcome.clone()
    }
}

/// 描画されたスナップショットを順に記録する SearchView
#[derive(Default)]
pub struct RecordingView {
    snapshots: RefCell<Vec<SearchSnapshot>>,
}

impl RecordingView {
    pub fn snapshots(&self) -> Vec<SearchSnapshot> {
        self.snapshots.borrow().clone()
    }
}

impl SearchView for RecordingView {
    fn render(&self, snapshot: &SearchSnapshot) {
        self.snapshots.borrow_mut().push(snapshot.clone());
    }
}

/// 1 リクエストだけ応答するローカル HTTP サーバー。
/// ベース URL と、受けたリクエスト行を返す JoinHandle を返す。
pub fn serve_once(status: u16, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let body = body.to_string();
    let handle = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();
        loop {
            let mut header = String::new();
            let n = reader.read_line(&mut header).unwrap();
            if n == 0 || header == "\r\n" {
                break;
            }
        }
        let response = format!(
            "HTTP/1.1 {} Status\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        request_line.trim_end().to_string()
    });
    (base, handle)
}
