//! Error types for quill

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the quill application
#[derive(Debug, Error)]
pub enum QuillError {
    #[error("Not a quill collection: {0}")]
    NotQuillCollection(PathBuf),

    #[error("The quote store is empty")]
    EmptyStore,

    #[error("No quotes in category: {0}")]
    CategoryNotFound(String),

    #[error("A quote with this text already exists: \"{0}\"")]
    DuplicateQuote(String),

    #[error("Invalid import file: {0}")]
    InvalidImport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Server error: {0}")]
    Http(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl QuillError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            QuillError::NotQuillCollection(_) => 2,
            QuillError::EmptyStore => 3,
            QuillError::CategoryNotFound(_) => 4,
            QuillError::DuplicateQuote(_) => 5,
            QuillError::InvalidImport(_) => 6,
            QuillError::Http(_) => 7,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            QuillError::NotQuillCollection(path) => {
                format!(
                    "Not a quill collection: {}\n\n\
                    Suggestions:\n\
                    • Run 'quill init' in this directory to create a new collection\n\
                    • Navigate to an existing quill collection\n\
                    • Set QUILL_ROOT environment variable to your collection path",
                    path.display()
                )
            }
            QuillError::EmptyStore => {
                "The quote store is empty\n\n\
                Suggestions:\n\
                • Add a quote: quill add \"Some words\" \"Some category\"\n\
                • Import quotes from a file: quill import quotes.json\n\
                • Pull quotes from the server: quill sync"
                    .to_string()
            }
            QuillError::CategoryNotFound(category) => {
                format!(
                    "No quotes in category: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'quill categories' to see available categories\n\
                    • Clear the saved filter: quill show --category all\n\
                    • Categories are matched exactly (case-sensitive)",
                    category
                )
            }
            QuillError::InvalidImport(msg) => {
                format!(
                    "Invalid import file: {}\n\n\
                    Expected a JSON array of objects, each with non-empty\n\
                    \"text\" and \"category\" fields:\n\
                    [{{\"text\": \"...\", \"category\": \"...\"}}]\n\n\
                    The existing store was left unchanged.",
                    msg
                )
            }
            QuillError::Http(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check your network connection\n\
                    • Check the configured endpoint: quill config server_url\n\
                    • The local store is unaffected by server failures",
                    msg
                )
            }
            QuillError::Config(msg) => {
                if msg.contains("sync_limit") {
                    format!(
                        "{}\n\n\
                        Expected a positive integer\n\
                        Example: quill config sync_limit 5",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using QuillError
pub type Result<T> = std::result::Result<T, QuillError>;
