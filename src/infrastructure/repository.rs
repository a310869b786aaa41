//! File system repository for the quote store

use crate::domain::quote::default_quotes;
use crate::domain::Quote;
use crate::error::{QuillError, Result};
use crate::infrastructure::Config;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const QUOTES_FILE: &str = "quotes.json";
const STATE_FILE: &str = "state.toml";

/// Sticky UI-style state: the last category filter selected on `show`
/// and the time of the last sync attempt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct State {
    pub last_filter: Option<String>,
    pub last_synced: Option<DateTime<Utc>>,
}

/// Abstract repository for collection operations
pub trait CollectionRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .quill/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .quill/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .quill directory exists
    fn is_initialized(&self) -> bool;

    /// Create .quill directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of CollectionRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover collection root by walking up from current directory.
    /// First checks QUILL_ROOT environment variable, then falls back to discovery.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("QUILL_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_quill_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(QuillError::Config(format!(
                    "QUILL_ROOT is set to '{}' but no .quill directory found. \
                    Run 'quill init' in that directory or unset QUILL_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover collection root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_quill_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(QuillError::NotQuillCollection(start.to_path_buf()));
                }
            }
        }
    }

    fn has_quill_dir(path: &Path) -> bool {
        path.join(".quill").is_dir()
    }

    fn quotes_path(&self) -> PathBuf {
        self.root.join(".quill").join(QUOTES_FILE)
    }

    fn state_path(&self) -> PathBuf {
        self.root.join(".quill").join(STATE_FILE)
    }
}

impl CollectionRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_quill_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let quill_dir = self.root.join(".quill");

        if quill_dir.exists() {
            return Err(QuillError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&quill_dir)?;
        Ok(())
    }
}

// Store slot operations (not part of trait - filesystem-specific)
impl FileSystemRepository {
    /// Read the persisted quote sequence. A missing file yields the seed
    /// quotes; an unreadable or unparsable file yields an empty sequence
    /// with a warning on stderr. Callers never see a load failure.
    pub fn load_quotes(&self) -> Vec<Quote> {
        let path = self.quotes_path();

        if !path.exists() {
            return default_quotes();
        }

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Warning: cannot read {}: {}", path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(quotes) => quotes,
            Err(e) => {
                eprintln!(
                    "Warning: {} is not a valid quote store ({}); starting empty",
                    path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Persist the full quote sequence, pretty-printed, replacing the
    /// previous store atomically (temp file then rename).
    pub fn save_quotes(&self, quotes: &[Quote]) -> Result<()> {
        let path = self.quotes_path();

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = serde_json::to_string_pretty(quotes)?;
        Self::write_atomic(&path, &contents)
    }

    /// Replace a file via temp-file-then-rename so a crash mid-write
    /// never leaves a half-written slot behind.
    fn write_atomic(path: &Path, contents: &str) -> Result<()> {
        let file_name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("slot");
        let tmp_name = format!("{}.quill-tmp-{}", file_name, std::process::id());
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, contents)?;

        if path.exists() {
            // Windows rename does not overwrite.
            fs::remove_file(path)?;
        }

        fs::rename(&tmp_path, path)?;
        Ok(())
    }

    /// Read the state slot; missing file means default (no filter, never synced).
    pub fn load_state(&self) -> Result<State> {
        let path = self.state_path();

        if !path.exists() {
            return Ok(State::default());
        }

        let contents = fs::read_to_string(&path)?;
        toml::from_str(&contents)
            .map_err(|e| QuillError::Config(format!("Failed to parse state.toml: {}", e)))
    }

    /// Persist the state slot.
    pub fn save_state(&self, state: &State) -> Result<()> {
        let contents = toml::to_string_pretty(state)?;
        Self::write_atomic(&self.state_path(), &contents)
    }
}
