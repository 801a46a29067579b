use pakket_status::prelude::*;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct ViewLog {
    heads: Vec<String>,
    bodies: Vec<String>,
    counts: Vec<(usize, usize)>,
    versions: Vec<String>,
    history: Vec<HistoryEntry>,
}

/// Mock TableView recording every call; clones share the log
#[derive(Default, Clone)]
pub struct MockTableView {
    log: Arc<Mutex<ViewLog>>,
}

#[allow(dead_code)]
impl MockTableView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn head_renders(&self) -> usize {
        self.log.lock().unwrap().heads.len()
    }

    pub fn body_renders(&self) -> usize {
        self.log.lock().unwrap().bodies.len()
    }

    pub fn last_head(&self) -> Option<String> {
        self.log.lock().unwrap().heads.last().cloned()
    }

    pub fn last_body(&self) -> Option<String> {
        self.log.lock().unwrap().bodies.last().cloned()
    }

    /// `(visible, total)` of the last body render
    pub fn last_counts(&self) -> Option<(usize, usize)> {
        self.log.lock().unwrap().counts.last().copied()
    }

    pub fn versions(&self) -> Vec<String> {
        self.log.lock().unwrap().versions.clone()
    }

    pub fn history(&self) -> Vec<HistoryEntry> {
        self.log.lock().unwrap().history.clone()
    }
}

impl TableView for MockTableView {
    fn replace_head(&self, markup: &str) {
        self.log.lock().unwrap().heads.push(markup.to_string());
    }

    fn replace_body(&self, markup: &str, visible: usize, total: usize) {
        let mut log = self.log.lock().unwrap();
        log.bodies.push(markup.to_string());
        log.counts.push((visible, total));
    }

    fn show_version(&self, version: &str) {
        self.log.lock().unwrap().versions.push(version.to_string());
    }

    fn push_location(&self, entry: HistoryEntry) {
        self.log.lock().unwrap().history.push(entry);
    }

    fn snapshot(&self) -> TableSnapshot {
        let log = self.log.lock().unwrap();
        let (visible_rows, total_packages) = log.counts.last().copied().unwrap_or_default();
        TableSnapshot {
            head: log.heads.last().cloned().unwrap_or_default(),
            body: log.bodies.last().cloned().unwrap_or_default(),
            version: log.versions.last().cloned(),
            location: log.history.last().map(|entry| entry.url.clone()),
            visible_rows,
            total_packages,
            ..Default::default()
        }
    }
}
