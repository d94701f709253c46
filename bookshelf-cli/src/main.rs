//! bookshelf CLI
//!
//! Search the catalog for books, keep them in a CSV collection, and track
//! reading progress.

mod cli_types;
mod commands;
mod error;
mod logging;
mod spinner;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

/// Emit an empty line through the logger so it also lands in --logfile.
pub(crate) fn log_blank() {
    log::info!("");
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!(
            "{} {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            e,
        );
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let data_file = cli.data_file;
    match cli.command {
        Commands::List { filter, status } => commands::list::run_list(data_file, filter, status),
        Commands::Show { id } => commands::list::run_show(data_file, &id),
        Commands::Add {
            query,
            isbn,
            dry_run,
            yes,
        } => commands::add::run_add(data_file, query, isbn, dry_run, yes, cli.quiet),
        Commands::Status { id, status } => commands::status::run_status(data_file, &id, status),
        Commands::Delete { id } => commands::delete::run_delete(data_file, &id),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(data_file),
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
            ConfigAction::SetDataFile { path } => {
                commands::config::run_config_set_data_file(path)
            }
        },
    }
}
