use chrono::{DateTime, Utc};

/// TableSnapshot - what the table container currently shows
///
/// Produced by the view when the run ends, consumed by a formatter to build
/// the final document.
#[derive(Debug, Clone)]
pub struct TableSnapshot {
    pub head: String,
    pub body: String,
    pub version: Option<String>,
    /// Last location written back to the address bar
    pub location: Option<String>,
    pub visible_rows: usize,
    pub total_packages: usize,
    pub rendered_at: DateTime<Utc>,
}

impl TableSnapshot {
    /// True until the first inventory (cached or fetched) has been rendered
    pub fn is_empty(&self) -> bool {
        self.head.is_empty() && self.body.is_empty()
    }
}

impl Default for TableSnapshot {
    fn default() -> Self {
        Self {
            head: String::new(),
            body: String::new(),
            version: None,
            location: None,
            visible_rows: 0,
            total_packages: 0,
            rendered_at: Utc::now(),
        }
    }
}
