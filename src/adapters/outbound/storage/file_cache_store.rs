use crate::ports::outbound::CacheStore;
use crate::shared::error::DashboardError;
use crate::shared::security::{read_regular_file, validate_not_symlink};
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// FileSystemCacheStore adapter persisting one file per cache key
///
/// The directory is created on the first write. Reads never fail: an entry
/// that is missing, unreadable or fails the security checks is simply absent.
pub struct FileSystemCacheStore {
    dir: PathBuf,
}

impl FileSystemCacheStore {
    /// Creates a store rooted at `dir`
    ///
    /// # Errors
    /// Returns an error if `dir` exists but is not a directory, or is a
    /// symbolic link
    pub fn new(dir: PathBuf) -> Result<Self> {
        if let Ok(metadata) = fs::symlink_metadata(&dir) {
            if metadata.is_symlink() {
                return Err(DashboardError::InvalidCacheDir {
                    path: dir,
                    reason: "Cache directory is a symbolic link".to_string(),
                }
                .into());
            }
            if !metadata.is_dir() {
                return Err(DashboardError::InvalidCacheDir {
                    path: dir,
                    reason: "Path exists but is not a directory".to_string(),
                }
                .into());
            }
        }
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(DashboardError::Validation {
                message: format!("Invalid cache key '{}'", key),
            }
            .into());
        }
        Ok(self.dir.join(key))
    }

    fn cache_error(&self, key: &str, details: impl ToString) -> anyhow::Error {
        DashboardError::CacheError {
            key: key.to_string(),
            dir: self.dir.clone(),
            details: details.to_string(),
        }
        .into()
    }
}

impl CacheStore for FileSystemCacheStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.entry_path(key).ok()?;
        if !path.exists() {
            return None;
        }
        read_regular_file(&path, "cache entry").ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.entry_path(key)?;

        fs::create_dir_all(&self.dir).map_err(|e| self.cache_error(key, e))?;
        if path.exists() {
            validate_not_symlink(&path, "write").map_err(|e| self.cache_error(key, e))?;
        }

        fs::write(&path, value).map_err(|e| self.cache_error(key, e))?;
        Ok(())
    }
}
