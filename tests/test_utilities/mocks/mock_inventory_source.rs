use async_trait::async_trait;
use pakket_status::prelude::*;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Mock InventorySource serving canned responses
///
/// `None` responses fail like an unreachable server.
#[derive(Default, Clone)]
pub struct MockInventorySource {
    packages: Arc<Mutex<Option<Value>>>,
    info: Arc<Mutex<Option<Value>>>,
    calls: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl MockInventorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_packages(self, packages: Value) -> Self {
        *self.packages.lock().unwrap() = Some(packages);
        self
    }

    pub fn with_info(self, info: Value) -> Self {
        *self.info.lock().unwrap() = Some(info);
        self
    }

    /// Replaces the packages response served from now on
    pub fn set_packages(&self, packages: Option<Value>) {
        *self.packages.lock().unwrap() = packages;
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl InventorySource for MockInventorySource {
    async fn fetch_packages(&self) -> Result<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.packages
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| anyhow::anyhow!("connection refused"))
    }

    async fn fetch_info(&self) -> Result<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.info
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| anyhow::anyhow!("connection refused"))
    }
}
