use pakket_status::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock CacheStore backed by a shared map; clones observe the same entries
#[derive(Default, Clone)]
pub struct MockCacheStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
    writes: Arc<Mutex<usize>>,
    read_only: bool,
}

#[allow(dead_code)]
impl MockCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail, like a full or read-only disk
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Default::default()
        }
    }

    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap()
    }
}

impl CacheStore for MockCacheStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.read_only {
            anyhow::bail!("cache store is read-only");
        }
        *self.writes.lock().unwrap() += 1;
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
