//! Initialize collection use case

use crate::domain::quote::default_quotes;
use crate::error::Result;
use crate::infrastructure::{CollectionRepository, Config, FileSystemRepository};
use std::fs;
use std::path::Path;

/// Initialize a new quote collection at the specified path.
pub fn init(path: &Path, server_url: &str) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());

    repo.initialize()?;
    repo.save_config(&Config::new(server_url))?;
    repo.save_quotes(&default_quotes())?;

    println!("Initialized quill collection at {}", path.display());
    println!("Server: {}", server_url);

    Ok(())
}
