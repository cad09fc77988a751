//! 検索状態を端末に表示する SearchView 実装

use crate::cli::render::render_search_snapshot;
use crate::domain::SearchSnapshot;
use crate::ports::outbound::SearchView;

pub struct TerminalSearchView;

impl SearchView for TerminalSearchView {
    fn render(&self, snapshot: &SearchSnapshot) {
        print!("{}", render_search_snapshot(snapshot));
    }
}
