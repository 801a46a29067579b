use crate::ports::outbound::CacheStore;
use crate::shared::Result;
use dashmap::DashMap;
use std::sync::Arc;

/// InMemoryCacheStore keeps cache entries for the lifetime of the process.
///
/// Backs `--no-cache` runs, which must not touch the disk. Clones share the
/// same entries.
#[derive(Clone, Default)]
pub struct InMemoryCacheStore {
    entries: Arc<DashMap<String, String>>,
}

impl InMemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CacheStore for InMemoryCacheStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key() {
        let store = InMemoryCacheStore::new();
        assert!(store.get("pakket-version").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_replaces_value() {
        let store = InMemoryCacheStore::new();
        store.set("pakket-version", "1").unwrap();
        store.set("pakket-version", "2").unwrap();

        assert_eq!(store.get("pakket-version").as_deref(), Some("2"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_clones_share_entries() {
        let store = InMemoryCacheStore::new();
        let shared = store.clone();
        store.set("k", "v").unwrap();

        assert_eq!(shared.get("k").as_deref(), Some("v"));
    }
}
