//! List quotes and categories use case

use crate::domain::quote::categories;
use crate::domain::Quote;
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;

/// Service for listing the store contents
pub struct ListQuotesService {
    repository: FileSystemRepository,
}

impl ListQuotesService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ListQuotesService { repository }
    }

    /// All quotes in store order, optionally restricted to a category.
    /// Unlike `show`, this never touches the saved filter.
    pub fn list(&self, category: Option<&str>) -> Result<Vec<Quote>> {
        let quotes = self.repository.load_quotes();

        Ok(match category {
            Some(filter) => quotes
                .into_iter()
                .filter(|quote| quote.category == filter)
                .collect(),
            None => quotes,
        })
    }

    /// Unique categories present in the store, sorted.
    pub fn categories(&self) -> Result<Vec<String>> {
        Ok(categories(&self.repository.load_quotes()))
    }
}
