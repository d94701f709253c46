//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use bookshelf_lib::ReadingStatus;

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(about = "Track the books you own and how far you've read them", long_about = None)]
pub(crate) struct Cli {
    /// Collection file to use (overrides BOOKSHELF_DATA_FILE and settings.toml)
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show the books in your collection
    List {
        /// Only show books whose title contains this text (case-insensitive)
        #[arg(short, long)]
        filter: Option<String>,

        /// Only show books with this reading status (e.g., unread, reading, finished)
        #[arg(short, long)]
        status: Option<ReadingStatus>,
    },

    /// Show one book by its catalog id
    Show {
        id: String,
    },

    /// Look a book up in the catalog and add it to your collection
    Add {
        /// Title to search for, or an ISBN with --isbn
        #[arg(value_parser = non_blank)]
        query: String,

        /// Treat the query as an ISBN (exact match)
        #[arg(long)]
        isbn: bool,

        /// Show the catalog match without saving it
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Save without asking for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Change the reading status of a book
    Status {
        id: String,

        /// New status (not-started, in-progress, finished, or a label like "In Progress")
        status: ReadingStatus,
    },

    /// Remove a book from your collection
    Delete {
        id: String,
    },

    /// Inspect or change bookshelf settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show effective settings and where each value comes from
    Show,

    /// Print the settings file path
    Path,

    /// Save the collection file location in settings.toml (omit PATH to clear it)
    SetDataFile {
        path: Option<PathBuf>,
    },
}

/// Reject arguments that are empty once trimmed.
fn non_blank(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("must not be blank".to_string())
    } else {
        Ok(s.to_string())
    }
}
