use std::io::Write;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use bookshelf_lib::{
    AddOutcome, BookQuery, CatalogClient, LookupError, Settings, find_book, save_book,
};

use super::{book_lines, log_book};
use crate::CliError;

/// Look a book up in the catalog, preview it, and save it on confirmation.
pub(crate) fn run_add(
    data_file: Option<PathBuf>,
    query: String,
    isbn: bool,
    dry_run: bool,
    yes: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let settings = Settings::load(data_file)?;
    let client = CatalogClient::new(settings.catalog_config())?;
    let query = if isbn {
        BookQuery::Isbn(query)
    } else {
        BookQuery::Title(query)
    };

    let pb = crate::spinner::start(quiet, format!("Searching catalog for {}...", query));
    let result = find_book(&client, &query);
    pb.finish_and_clear();

    let book = match result {
        Ok(book) => book,
        Err(e) => return lookup_failure(&query, e),
    };

    let prompting = !dry_run && !yes;
    if preview_bypasses_logger(quiet, prompting) {
        for line in book_lines(&book) {
            println!("{}", line);
        }
        println!();
    } else {
        log_book(&book);
        crate::log_blank();
    }

    if dry_run {
        log::info!(
            "{}",
            "Dry run: not saved.".if_supports_color(Stdout, |t| t.dimmed()),
        );
        return Ok(());
    }

    if prompting && !confirm("Save to collection?")? {
        log::info!("Not saved.");
        return Ok(());
    }

    match save_book(&settings.store(), &book)? {
        AddOutcome::Added => {
            log::info!(
                "{} Saved '{}' to your collection.",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                book.title,
            );
        }
        AddOutcome::Duplicate => {
            log::warn!(
                "{} '{}' is already in your collection.",
                "\u{26a0}".if_supports_color(Stdout, |t| t.yellow()),
                book.title,
            );
        }
    }

    Ok(())
}

/// Turn a failed lookup into the command result. `NotFound` is not an error.
fn lookup_failure(query: &BookQuery, err: LookupError) -> Result<(), CliError> {
    match err {
        LookupError::NotFound => {
            log::info!("No book found for {}.", query);
            Ok(())
        }
        LookupError::EmptyQuery => Err(CliError::EmptyQuery),
        e => Err(e.into()),
    }
}

/// `--quiet` hides info-level output, but a confirmation prompt still needs
/// the book it is asking about.
fn preview_bypasses_logger(quiet: bool, prompting: bool) -> bool {
    quiet && prompting
}

/// Ask a yes/no question on stdin. Anything but y/yes (including EOF) is no.
fn confirm(prompt: &str) -> Result<bool, CliError> {
    print!("{} [y/N]: ", prompt);
    std::io::stdout().flush()?;
    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    let answer = input.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
