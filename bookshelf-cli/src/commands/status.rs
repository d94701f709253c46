use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use bookshelf_lib::{ReadingStatus, Settings};

use super::status_badge;
use crate::CliError;

/// Change the reading status of one book.
pub(crate) fn run_status(
    data_file: Option<PathBuf>,
    id: &str,
    status: ReadingStatus,
) -> Result<(), CliError> {
    let settings = Settings::load(data_file)?;
    if !settings.store().update_status(id, status)? {
        return Err(CliError::unknown_book(id));
    }
    log::info!(
        "{} {} {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        id.if_supports_color(Stdout, |t| t.cyan()),
        status_badge(status),
    );
    Ok(())
}
