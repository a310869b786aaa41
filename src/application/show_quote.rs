//! Show a random quote use case
//!
//! The category filter is sticky: selecting one on `show` persists it to
//! the state slot, and later invocations without a filter reuse it.
//! Passing `all` clears the saved filter.

use crate::domain::Quote;
use crate::error::{QuillError, Result};
use crate::infrastructure::FileSystemRepository;
use std::time::{SystemTime, UNIX_EPOCH};

/// Sentinel that clears the saved category filter.
pub const ALL_CATEGORIES: &str = "all";

/// Service for displaying a random quote
pub struct ShowQuoteService {
    repository: FileSystemRepository,
}

impl ShowQuoteService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ShowQuoteService { repository }
    }

    /// Pick a random quote, honoring the requested or saved category
    /// filter. A requested filter is persisted before the pick.
    pub fn execute(&self, category: Option<&str>) -> Result<Quote> {
        let quotes = self.repository.load_quotes();
        if quotes.is_empty() {
            return Err(QuillError::EmptyStore);
        }

        let active = self.resolve_filter(category)?;

        let pool: Vec<&Quote> = match &active {
            Some(filter) => quotes
                .iter()
                .filter(|quote| quote.category == *filter)
                .collect(),
            None => quotes.iter().collect(),
        };

        if pool.is_empty() {
            // active is Some here: an unfiltered pool over a non-empty
            // store cannot be empty.
            return Err(QuillError::CategoryNotFound(active.unwrap_or_default()));
        }

        Ok(pool[random_index(pool.len())].clone())
    }

    fn resolve_filter(&self, category: Option<&str>) -> Result<Option<String>> {
        let mut state = self.repository.load_state()?;

        match category {
            Some(ALL_CATEGORIES) => {
                if state.last_filter.take().is_some() {
                    self.repository.save_state(&state)?;
                }
                Ok(None)
            }
            Some(filter) => {
                if state.last_filter.as_deref() != Some(filter) {
                    state.last_filter = Some(filter.to_string());
                    self.repository.save_state(&state)?;
                }
                Ok(Some(filter.to_string()))
            }
            None => Ok(state.last_filter),
        }
    }
}

/// Uniform-enough index without a randomness dependency: derived from the
/// sub-second clock reading.
fn random_index(len: usize) -> usize {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    nanos as usize % len
}
