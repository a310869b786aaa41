//! Server sync use case
//!
//! One-shot, one-directional: fetch a batch from the server, merge it
//! with the server taking precedence, save when anything changed. A
//! fetch failure degrades to an empty batch so a flaky network never
//! fails the command.

use crate::domain::merge_server_wins;
use crate::error::Result;
use crate::infrastructure::{CollectionRepository, FileSystemRepository, RemoteQuoteSource};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct SyncReport {
    pub changed: bool,
    pub fetched: usize,
    pub total: usize,
    /// Set when the fetch failed and the sync degraded to a no-op merge.
    pub fetch_warning: Option<String>,
    pub synced_at: DateTime<Utc>,
}

/// Service for syncing the local store against the server
pub struct SyncService {
    repository: FileSystemRepository,
}

impl SyncService {
    pub fn new(repository: FileSystemRepository) -> Self {
        SyncService { repository }
    }

    pub fn execute(&self, remote: &impl RemoteQuoteSource) -> Result<SyncReport> {
        let config = self.repository.load_config()?;
        let local = self.repository.load_quotes();

        let (batch, fetch_warning) = match remote.fetch_quotes(config.sync_limit) {
            Ok(batch) => (batch, None),
            Err(e) => (Vec::new(), Some(e.to_string())),
        };

        let fetched = batch.len();
        let outcome = merge_server_wins(&local, &batch);

        if outcome.changed {
            self.repository.save_quotes(&outcome.merged)?;
        }

        let synced_at = Utc::now();
        let mut state = self.repository.load_state()?;
        state.last_synced = Some(synced_at);
        self.repository.save_state(&state)?;

        Ok(SyncReport {
            changed: outcome.changed,
            fetched,
            total: outcome.merged.len(),
            fetch_warning,
            synced_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Quote;
    use crate::error::QuillError;
    use crate::infrastructure::remote::SERVER_CATEGORY;
    use tempfile::TempDir;

    /// In-memory stand-in for the HTTP client.
    struct FakeRemote {
        batch: Vec<Quote>,
        fail: bool,
    }

    impl RemoteQuoteSource for FakeRemote {
        fn fetch_quotes(&self, limit: usize) -> crate::error::Result<Vec<Quote>> {
            if self.fail {
                return Err(QuillError::Http("GET failed: connection refused".to_string()));
            }
            Ok(self.batch.iter().take(limit).cloned().collect())
        }

        fn push_quote(&self, _quote: &Quote) -> crate::error::Result<()> {
            Ok(())
        }
    }

    fn quote(text: &str, category: &str) -> Quote {
        Quote {
            text: text.to_string(),
            category: category.to_string(),
        }
    }

    fn server_quote(text: &str) -> Quote {
        quote(text, SERVER_CATEGORY)
    }

    fn service_with(temp: &TempDir, quotes: &[Quote]) -> SyncService {
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&crate::infrastructure::Config::default())
            .unwrap();
        repo.save_quotes(quotes).unwrap();
        SyncService::new(repo)
    }

    #[test]
    fn sync_server_wins_on_text_collision() {
        let temp = TempDir::new().unwrap();
        let service = service_with(&temp, &[quote("A", "x"), quote("B", "y")]);
        let remote = FakeRemote {
            batch: vec![server_quote("B")],
            fail: false,
        };

        let report = service.execute(&remote).unwrap();

        assert!(report.changed);
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        assert_eq!(
            repo.load_quotes(),
            vec![quote("A", "x"), server_quote("B")]
        );
    }

    #[test]
    fn sync_twice_with_same_batch_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let service = service_with(&temp, &[quote("A", "x")]);
        let remote = FakeRemote {
            batch: vec![server_quote("B")],
            fail: false,
        };

        let first = service.execute(&remote).unwrap();
        assert!(first.changed);

        let second = service.execute(&remote).unwrap();
        assert!(!second.changed);

        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        assert_eq!(repo.load_quotes().len(), 2);
    }

    #[test]
    fn sync_respects_batch_limit() {
        let temp = TempDir::new().unwrap();
        let service = service_with(&temp, &[]);
        let batch: Vec<Quote> = (0..10).map(|i| server_quote(&format!("q{}", i))).collect();
        let remote = FakeRemote { batch, fail: false };

        let report = service.execute(&remote).unwrap();

        // Default sync_limit is 5.
        assert_eq!(report.fetched, 5);
        assert_eq!(report.total, 5);
    }

    #[test]
    fn sync_fetch_failure_degrades_to_no_op() {
        let temp = TempDir::new().unwrap();
        let local = vec![quote("A", "x")];
        let service = service_with(&temp, &local);
        let remote = FakeRemote {
            batch: vec![],
            fail: true,
        };

        let report = service.execute(&remote).unwrap();

        assert!(!report.changed);
        assert!(report.fetch_warning.is_some());
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        assert_eq!(repo.load_quotes(), local);
    }

    #[test]
    fn sync_stamps_last_synced_even_without_changes() {
        let temp = TempDir::new().unwrap();
        let service = service_with(&temp, &[quote("A", "x")]);
        let remote = FakeRemote {
            batch: vec![],
            fail: false,
        };

        let report = service.execute(&remote).unwrap();
        assert!(!report.changed);

        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        let state = repo.load_state().unwrap();
        assert_eq!(state.last_synced, Some(report.synced_at));
    }
}
