//! Application layer - Use cases and orchestration

pub mod add_quote;
pub mod export_quotes;
pub mod import_quotes;
pub mod init;
pub mod list_quotes;
pub mod manage_config;
pub mod show_quote;
pub mod sync;

pub use add_quote::AddQuoteService;
pub use import_quotes::{import_quotes, ImportReport};
pub use list_quotes::ListQuotesService;
pub use show_quote::ShowQuoteService;
pub use sync::{SyncReport, SyncService};
