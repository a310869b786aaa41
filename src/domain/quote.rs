//! The quote record and collection-level helpers

use crate::error::{QuillError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single quote. Uniqueness within a store is by exact `text` equality;
/// `category` is free-form and never deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub category: String,
}

impl Quote {
    /// Build a quote from user input, trimming whitespace.
    /// Rejects an empty text or category.
    pub fn new(text: &str, category: &str) -> Result<Self> {
        let text = text.trim();
        let category = category.trim();

        if text.is_empty() {
            return Err(QuillError::Config(
                "Quote text must not be empty".to_string(),
            ));
        }
        if category.is_empty() {
            return Err(QuillError::Config(
                "Quote category must not be empty".to_string(),
            ));
        }

        Ok(Quote {
            text: text.to_string(),
            category: category.to_string(),
        })
    }
}

/// The quotes a fresh store starts with.
pub fn default_quotes() -> Vec<Quote> {
    vec![
        Quote {
            text: "The only way to do great work is to love what you do.".to_string(),
            category: "Inspiration".to_string(),
        },
        Quote {
            text: "Strive not to be a success, but rather to be of value.".to_string(),
            category: "Wisdom".to_string(),
        },
    ]
}

/// Remove duplicate texts, keeping the first occurrence of each and
/// preserving the original order otherwise.
pub fn dedup_by_text(quotes: Vec<Quote>) -> Vec<Quote> {
    let mut seen = HashSet::new();
    quotes
        .into_iter()
        .filter(|quote| seen.insert(quote.text.clone()))
        .collect()
}

/// Unique categories present in the store, sorted. Matching is
/// case-sensitive.
pub fn categories(quotes: &[Quote]) -> Vec<String> {
    let mut out: Vec<String> = quotes
        .iter()
        .map(|quote| quote.category.clone())
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    out.sort();
    out
}
