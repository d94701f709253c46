//! Spinner shown while waiting on the catalog.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Create a ticking spinner with `msg`. Hidden when `quiet` is true.
pub(crate) fn start(quiet: bool, msg: String) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("  {spinner:.cyan} {msg}") {
        pb.set_style(style.tick_chars("/-\\|"));
    }
    pb.set_message(msg);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
