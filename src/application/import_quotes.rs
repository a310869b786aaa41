//! Import quotes from a JSON file
//!
//! Import is all-or-nothing: the incoming file is fully validated before
//! the store is touched, so a rejected import leaves the existing
//! sequence exactly as it was.

use crate::domain::quote::dedup_by_text;
use crate::domain::Quote;
use crate::error::{QuillError, Result};
use crate::infrastructure::FileSystemRepository;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Raw record shape used for validation; extra fields are tolerated,
/// missing or empty required fields are not.
#[derive(Debug, Deserialize)]
struct RawQuote {
    text: Option<String>,
    category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: usize,
    pub duplicates: usize,
    pub total: usize,
}

/// Merge the quotes in `file` into the store: append, dedup first-wins,
/// save. Any format problem rejects the whole file.
pub fn import_quotes(repository: &FileSystemRepository, file: &Path) -> Result<ImportReport> {
    let contents = fs::read_to_string(file)
        .map_err(|e| QuillError::InvalidImport(format!("cannot read {}: {}", file.display(), e)))?;

    let incoming = parse_quotes(&contents)?;

    // A hand-edited store can violate the uniqueness invariant; repair
    // it here so the report arithmetic below stays consistent.
    let existing = dedup_by_text(repository.load_quotes());
    let before = existing.len();

    let mut combined = existing;
    combined.extend(incoming.iter().cloned());
    let merged = dedup_by_text(combined);

    let imported = merged.len() - before;
    let duplicates = incoming.len() - imported;

    repository.save_quotes(&merged)?;

    Ok(ImportReport {
        imported,
        duplicates,
        total: merged.len(),
    })
}

fn parse_quotes(contents: &str) -> Result<Vec<Quote>> {
    let raw: Vec<RawQuote> = serde_json::from_str(contents)
        .map_err(|e| QuillError::InvalidImport(format!("not a JSON array of quotes: {}", e)))?;

    raw.iter()
        .enumerate()
        .map(|(index, record)| {
            let text = record
                .text
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .ok_or_else(|| {
                    QuillError::InvalidImport(format!("record {} is missing 'text'", index + 1))
                })?;
            let category = record
                .category
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .ok_or_else(|| {
                    QuillError::InvalidImport(format!("record {} is missing 'category'", index + 1))
                })?;

            Ok(Quote {
                text: text.to_string(),
                category: category.to_string(),
            })
        })
        .collect()
}
