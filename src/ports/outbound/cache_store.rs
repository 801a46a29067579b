use crate::shared::Result;

/// CacheStore port for the best-effort local snapshot store
///
/// Values are opaque strings. A read problem is indistinguishable from a
/// missing entry: the dashboard then simply renders nothing until the
/// network answers.
pub trait CacheStore {
    /// Returns the stored value for `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be written
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
