pub(crate) mod add;
pub(crate) mod config;
pub(crate) mod delete;
pub(crate) mod list;
pub(crate) mod status;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use bookshelf_lib::{BookRecord, ReadingStatus};

/// Status label colored by progress.
pub(crate) fn status_badge(status: ReadingStatus) -> String {
    let label = format!("[{}]", status);
    match status {
        ReadingStatus::NotStarted => label.if_supports_color(Stdout, |t| t.dimmed()).to_string(),
        ReadingStatus::InProgress => label.if_supports_color(Stdout, |t| t.yellow()).to_string(),
        ReadingStatus::Finished => label.if_supports_color(Stdout, |t| t.green()).to_string(),
    }
}

/// A book as a short block: title and status, then author, id and cover.
pub(crate) fn book_lines(book: &BookRecord) -> Vec<String> {
    vec![
        format!(
            "  {} {}",
            book.title.if_supports_color(Stdout, |t| t.bold()),
            status_badge(book.status),
        ),
        format!("    Author: {}", book.author),
        format!(
            "    ID:     {}",
            book.id.if_supports_color(Stdout, |t| t.cyan()),
        ),
        format!(
            "    Cover:  {}",
            book.cover_url.if_supports_color(Stdout, |t| t.dimmed()),
        ),
    ]
}

pub(crate) fn log_book(book: &BookRecord) {
    for line in book_lines(book) {
        log::info!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_block_names_every_field() {
        let book = BookRecord::new("abc1", "Dune", "Frank Herbert", "https://covers/dune.jpg")
            .with_status(ReadingStatus::InProgress);
        let text = book_lines(&book).join("\n");
        for field in ["Dune", "In Progress", "Frank Herbert", "abc1", "https://covers/dune.jpg"] {
            assert!(text.contains(field), "missing {field} in {text}");
        }
    }
}
