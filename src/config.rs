//! Configuration file support for pakket-status.
//!
//! Provides YAML-based configuration through `pakket-status.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::application::dto::OutputFormat;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "pakket-status.config.yml";

/// Upper bound for `debounce_ms`; anything longer makes search unusable
const MAX_DEBOUNCE_MS: u64 = 10_000;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub base_url: Option<String>,
    pub cache_dir: Option<PathBuf>,
    pub format: Option<String>,
    pub source_link_base: Option<String>,
    pub debounce_ms: Option<u64>,
    pub search: Option<String>,
    pub only_broken: Option<bool>,
    pub only_outdated: Option<bool>,
    pub only_noncpan: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref base_url) = config.base_url {
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            bail!(
                "Invalid config: base_url must start with http:// or https://, got '{}'.\n\n\
                 💡 Hint: Use the inventory server's address, e.g. \"http://localhost:8080\".",
                base_url
            );
        }
    }

    if let Some(ref format) = config.format {
        format
            .parse::<OutputFormat>()
            .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?;
    }

    if let Some(debounce_ms) = config.debounce_ms {
        if debounce_ms > MAX_DEBOUNCE_MS {
            bail!(
                "Invalid config: debounce_ms must be at most {} (got {}).\n\n\
                 💡 Hint: The default search delay is 200 ms.",
                MAX_DEBOUNCE_MS,
                debounce_ms
            );
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
