use crate::application::dto::{HistoryEntry, TableSnapshot};
use crate::ports::outbound::TableView;
use chrono::Utc;
use std::cell::RefCell;

#[derive(Default)]
struct ViewState {
    head: String,
    body: String,
    version: Option<String>,
    visible_rows: usize,
    total_packages: usize,
    history: Vec<HistoryEntry>,
}

/// DocumentView adapter holding the table contents in memory
///
/// Stands in for the page: markup is kept until the run ends and a formatter
/// wraps it into the output document. Location changes are recorded as a
/// history log instead of being written to an address bar.
#[derive(Default)]
pub struct DocumentView {
    state: RefCell<ViewState>,
}

impl DocumentView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every location change, oldest first
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.state.borrow().history.clone()
    }

    /// Current location: the last entry written, pushed or replaced
    pub fn location(&self) -> Option<String> {
        self.state
            .borrow()
            .history
            .last()
            .map(|entry| entry.url.clone())
    }
}

impl TableView for DocumentView {
    fn replace_head(&self, markup: &str) {
        self.state.borrow_mut().head = markup.to_string();
    }

    fn replace_body(&self, markup: &str, visible: usize, total: usize) {
        let mut state = self.state.borrow_mut();
        state.body = markup.to_string();
        state.visible_rows = visible;
        state.total_packages = total;
    }

    fn show_version(&self, version: &str) {
        self.state.borrow_mut().version = Some(version.to_string());
    }

    fn push_location(&self, entry: HistoryEntry) {
        self.state.borrow_mut().history.push(entry);
    }

    fn snapshot(&self) -> TableSnapshot {
        let state = self.state.borrow();
        TableSnapshot {
            head: state.head.clone(),
            body: state.body.clone(),
            version: state.version.clone(),
            location: state.history.last().map(|entry| entry.url.clone()),
            visible_rows: state.visible_rows,
            total_packages: state.total_packages,
            rendered_at: Utc::now(),
        }
    }
}
