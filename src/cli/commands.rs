//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quill")]
#[command(about = "Local-first quote collection with server sync", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new quote collection
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Endpoint used by sync and push
        #[arg(long, default_value = crate::infrastructure::config::DEFAULT_SERVER_URL)]
        server_url: String,
    },

    /// Add a quote to the collection
    Add {
        /// The quote text
        text: String,

        /// The quote category
        category: String,

        /// Also submit the quote to the server
        #[arg(long)]
        push: bool,
    },

    /// Show a random quote (the default command)
    Show {
        /// Restrict to a category and remember it; 'all' clears the filter
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List all quotes in store order
    List {
        /// Restrict to a category (does not affect the saved filter)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List the categories present in the collection
    Categories,

    /// Merge quotes from a JSON file into the collection
    Import {
        /// File containing a JSON array of {"text", "category"} objects
        file: PathBuf,
    },

    /// Write the collection to a JSON file
    Export {
        /// Output file
        #[arg(default_value = "quotes.json")]
        file: PathBuf,
    },

    /// Pull a batch from the server and merge it, server-wins
    Sync,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
