use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use bookshelf_lib::Settings;

use crate::CliError;

/// Remove one book from the collection.
pub(crate) fn run_delete(data_file: Option<PathBuf>, id: &str) -> Result<(), CliError> {
    let settings = Settings::load(data_file)?;
    if !settings.store().delete(id)? {
        return Err(CliError::unknown_book(id));
    }
    log::info!(
        "{} Removed {} from your collection.",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        id.if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}
