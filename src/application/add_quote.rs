//! Add quote use case

use crate::domain::Quote;
use crate::error::{QuillError, Result};
use crate::infrastructure::{FileSystemRepository, RemoteQuoteSource};

/// Service for adding quotes to the local store
pub struct AddQuoteService {
    repository: FileSystemRepository,
}

impl AddQuoteService {
    pub fn new(repository: FileSystemRepository) -> Self {
        AddQuoteService { repository }
    }

    /// Validate and append a quote, rejecting duplicate text.
    pub fn execute(&self, text: &str, category: &str) -> Result<Quote> {
        let quote = Quote::new(text, category)?;

        let mut quotes = self.repository.load_quotes();
        if quotes.iter().any(|existing| existing.text == quote.text) {
            return Err(QuillError::DuplicateQuote(quote.text));
        }

        quotes.push(quote.clone());
        self.repository.save_quotes(&quotes)?;

        Ok(quote)
    }

    /// Submit an already-saved quote to the server. A failure here is a
    /// notice for the caller; the local save has already happened.
    pub fn push(&self, remote: &impl RemoteQuoteSource, quote: &Quote) -> Result<()> {
        remote.push_quote(quote)
    }
}
