//! Domain layer - Quote records and the merge algorithm

pub mod merge;
pub mod quote;

pub use merge::{merge_server_wins, MergeOutcome};
pub use quote::Quote;
