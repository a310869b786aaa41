//! Configuration management

use crate::error::{QuillError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default mock endpoint; GET returns generic posts, POST echoes the body.
pub const DEFAULT_SERVER_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// Remote posts taken per sync.
pub const DEFAULT_SYNC_LIMIT: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server_url: String,
    #[serde(default = "default_sync_limit")]
    pub sync_limit: usize,
}

fn default_sync_limit() -> usize {
    DEFAULT_SYNC_LIMIT
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_url: DEFAULT_SERVER_URL.to_string(),
            sync_limit: DEFAULT_SYNC_LIMIT,
        }
    }
}

impl Config {
    /// Create a config pointing at the given endpoint.
    pub fn new(server_url: &str) -> Self {
        Config {
            server_url: server_url.to_string(),
            ..Config::default()
        }
    }

    /// Load config from .quill/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".quill").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                QuillError::NotQuillCollection(path.to_path_buf())
            } else {
                QuillError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| QuillError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .quill/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let quill_dir = path.join(".quill");
        let config_path = quill_dir.join("config.toml");

        if !quill_dir.exists() {
            fs::create_dir(&quill_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| QuillError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}
