use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use bookshelf_lib::{Setting, Settings, save_data_file, settings_path};

use crate::CliError;

/// Show the settings file location and every effective setting with its source.
pub(crate) fn run_config_show(data_file: Option<PathBuf>) -> Result<(), CliError> {
    let path = settings_path();
    let status = if path.exists() { "found" } else { "not found" };
    log::info!(
        "{}",
        "Settings".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  File: {} ({})", path.display(), status);
    crate::log_blank();

    let settings = Settings::load(data_file)?;
    log_setting("Data file", &settings.data_file, |p| p.display().to_string());
    log_setting("Endpoint", &settings.endpoint, |e| e.clone());
    log_setting("Timeout", &settings.timeout, |t| format!("{}s", t.as_secs()));
    log_setting("API key", &settings.api_key, |k| match k {
        Some(key) => mask_key(key),
        None => "(none)".to_string(),
    });

    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    println!("{}", settings_path().display());
}

/// Persist (or clear) the collection file location.
pub(crate) fn run_config_set_data_file(path: Option<PathBuf>) -> Result<(), CliError> {
    let written = save_data_file(path.as_deref())?;
    match path {
        Some(p) => log::info!(
            "{} Collection file set to {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            p.display(),
        ),
        None => log::info!(
            "{} Collection file reset to the default location",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        ),
    }
    log::info!("  Saved to {}", written.display());
    Ok(())
}

fn log_setting<T>(name: &str, setting: &Setting<T>, render: impl Fn(&T) -> String) {
    log::info!(
        "  {:<10} {} {}",
        format!("{}:", name),
        render(&setting.value),
        format!("({})", setting.source).if_supports_color(Stdout, |t| t.dimmed()),
    );
}

fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 4 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{}", tail)
}
