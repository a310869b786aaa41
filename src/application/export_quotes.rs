//! Export the store to a JSON file

use crate::error::Result;
use crate::infrastructure::FileSystemRepository;
use std::fs;
use std::path::Path;

/// Write the full quote sequence to `file`, pretty-printed. Returns the
/// number of quotes written. The artifact round-trips through `import`.
pub fn export_quotes(repository: &FileSystemRepository, file: &Path) -> Result<usize> {
    let quotes = repository.load_quotes();
    let contents = serde_json::to_string_pretty(&quotes)?;

    fs::write(file, contents)?;

    Ok(quotes.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::import_quotes::import_quotes;
    use crate::domain::Quote;
    use crate::infrastructure::CollectionRepository;
    use tempfile::TempDir;

    fn quote(text: &str, category: &str) -> Quote {
        Quote {
            text: text.to_string(),
            category: category.to_string(),
        }
    }

    fn repo_with(temp: &TempDir, quotes: &[Quote]) -> FileSystemRepository {
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_quotes(quotes).unwrap();
        repo
    }

    #[test]
    fn export_writes_pretty_json() {
        let temp = TempDir::new().unwrap();
        let repo = repo_with(&temp, &[quote("A", "x")]);
        let out = temp.path().join("out.json");

        let count = export_quotes(&repo, &out).unwrap();

        assert_eq!(count, 1);
        let raw = fs::read_to_string(&out).unwrap();
        assert!(raw.contains("\"text\": \"A\""));
        assert!(raw.contains('\n'));
    }

    #[test]
    fn export_import_round_trip() {
        let temp = TempDir::new().unwrap();
        let quotes = vec![quote("A", "x"), quote("B", "y")];
        let repo = repo_with(&temp, &quotes);
        let artifact = temp.path().join("export.json");

        export_quotes(&repo, &artifact).unwrap();

        // Re-import into a fresh empty store.
        let other_dir = TempDir::new().unwrap();
        let other = repo_with(&other_dir, &[]);
        let report = import_quotes(&other, &artifact).unwrap();

        assert_eq!(report.imported, 2);
        assert_eq!(other.load_quotes(), quotes);
    }

    #[test]
    fn reimport_into_same_store_changes_nothing() {
        let temp = TempDir::new().unwrap();
        let quotes = vec![quote("A", "x"), quote("B", "y")];
        let repo = repo_with(&temp, &quotes);
        let artifact = temp.path().join("export.json");

        export_quotes(&repo, &artifact).unwrap();
        let report = import_quotes(&repo, &artifact).unwrap();

        assert_eq!(report.imported, 0);
        assert_eq!(report.duplicates, 2);
        assert_eq!(repo.load_quotes(), quotes);
    }
}
