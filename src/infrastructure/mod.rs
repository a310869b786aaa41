//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod remote;
pub mod repository;

pub use config::Config;
pub use remote::{HttpRemoteClient, RemoteQuoteSource};
pub use repository::{CollectionRepository, FileSystemRepository, State};
