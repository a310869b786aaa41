//! Config management use case

use crate::error::{QuillError, Result};
use crate::infrastructure::{CollectionRepository, Config, FileSystemRepository};

/// Service for managing collection configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "server_url" => Ok(config.server_url.clone()),
            "sync_limit" => Ok(config.sync_limit.to_string()),
            _ => Err(QuillError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: server_url, sync_limit",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "server_url" => {
                if value.trim().is_empty() {
                    return Err(QuillError::Config(
                        "server_url must not be empty".to_string(),
                    ));
                }
                config.server_url = value.to_string();
            }
            "sync_limit" => {
                let limit: usize = value.parse().map_err(|_| {
                    QuillError::Config(format!("Invalid sync_limit: '{}'", value))
                })?;
                if limit == 0 {
                    return Err(QuillError::Config(
                        "Invalid sync_limit: must be at least 1".to_string(),
                    ));
                }
                config.sync_limit = limit;
            }
            _ => {
                return Err(QuillError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: server_url, sync_limit",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
