//! Server-wins merge of a local store with a remote batch

use crate::domain::Quote;
use std::collections::HashSet;

/// Result of merging a remote batch into the local sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    pub merged: Vec<Quote>,
    pub changed: bool,
}

/// Merge a remote batch into the local sequence with the server taking
/// precedence: any local quote whose text collides with a remote one is
/// dropped in favor of the remote version, and the remote batch is
/// appended after the surviving locals.
///
/// An empty remote batch leaves the local sequence untouched, so a failed
/// or empty fetch never counts as a change.
pub fn merge_server_wins(local: &[Quote], remote: &[Quote]) -> MergeOutcome {
    if remote.is_empty() {
        return MergeOutcome {
            merged: local.to_vec(),
            changed: false,
        };
    }

    let remote_texts: HashSet<&str> = remote.iter().map(|quote| quote.text.as_str()).collect();

    let mut merged: Vec<Quote> = local
        .iter()
        .filter(|quote| !remote_texts.contains(quote.text.as_str()))
        .cloned()
        .collect();
    merged.extend(remote.iter().cloned());

    let changed = merged != local;
    MergeOutcome { merged, changed }
}
