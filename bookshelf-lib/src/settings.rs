//! Application settings: where the collection lives and how to reach the
//! catalog.
//!
//! Values come from `~/.config/bookshelf/settings.toml`, environment
//! variables, and command-line overrides. Each resolved value remembers its
//! [`SettingSource`] so `bookshelf config show` can explain itself.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use bookshelf_catalog::{CatalogConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
use bookshelf_store::CollectionStore;

use crate::error::SettingsError;

pub const ENV_DATA_FILE: &str = "BOOKSHELF_DATA_FILE";
pub const ENV_CATALOG_ENDPOINT: &str = "BOOKSHELF_CATALOG_ENDPOINT";
pub const ENV_CATALOG_TIMEOUT: &str = "BOOKSHELF_CATALOG_TIMEOUT";
pub const ENV_API_KEY: &str = "BOOKSHELF_API_KEY";

/// Name of the collection file when nothing else is configured.
pub const DEFAULT_DATA_FILE_NAME: &str = "books_data.csv";

/// Canonical path to the settings file: `~/.config/bookshelf/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("bookshelf").join("settings.toml")
}

/// Default collection file: `<data dir>/bookshelf/books_data.csv`.
pub fn default_data_file() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data.join("bookshelf").join(DEFAULT_DATA_FILE_NAME)
}

/// On-disk shape of `settings.toml`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SettingsFile {
    #[serde(default)]
    pub library: LibrarySection,
    #[serde(default)]
    pub catalog: CatalogSection,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LibrarySection {
    pub data_file: Option<PathBuf>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CatalogSection {
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
    pub api_key: Option<String>,
}

/// Where a setting's value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingSource {
    CommandLine,
    EnvVar(&'static str),
    SettingsFile,
    Default,
}

impl std::fmt::Display for SettingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CommandLine => write!(f, "command line"),
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::SettingsFile => write!(f, "settings file"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// A resolved value together with its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting<T> {
    pub value: T,
    pub source: SettingSource,
}

impl<T> Setting<T> {
    fn new(value: T, source: SettingSource) -> Self {
        Self { value, source }
    }
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_file: Setting<PathBuf>,
    pub endpoint: Setting<String>,
    pub timeout: Setting<Duration>,
    pub api_key: Setting<Option<String>>,
}

impl Settings {
    /// Resolve settings from the process environment and the settings file.
    ///
    /// Priority per field: `data_file_override` (command line) > environment
    /// variable > `settings.toml` > built-in default.
    pub fn load(data_file_override: Option<PathBuf>) -> Result<Self, SettingsError> {
        let file = load_settings_file(&settings_path())?.unwrap_or_default();
        Self::resolve(data_file_override, |name| std::env::var(name).ok(), file)
    }

    /// Resolve from explicit inputs. `env` looks up an environment variable;
    /// blank values are treated as unset.
    pub fn resolve(
        data_file_override: Option<PathBuf>,
        env: impl Fn(&str) -> Option<String>,
        file: SettingsFile,
    ) -> Result<Self, SettingsError> {
        let env = |name: &str| env(name).filter(|v| !v.trim().is_empty());

        let data_file = if let Some(path) = data_file_override {
            Setting::new(path, SettingSource::CommandLine)
        } else if let Some(path) = env(ENV_DATA_FILE) {
            Setting::new(PathBuf::from(path), SettingSource::EnvVar(ENV_DATA_FILE))
        } else if let Some(path) = file.library.data_file {
            Setting::new(path, SettingSource::SettingsFile)
        } else {
            Setting::new(default_data_file(), SettingSource::Default)
        };

        let endpoint = if let Some(url) = env(ENV_CATALOG_ENDPOINT) {
            Setting::new(url, SettingSource::EnvVar(ENV_CATALOG_ENDPOINT))
        } else if let Some(url) = file.catalog.endpoint {
            Setting::new(url, SettingSource::SettingsFile)
        } else {
            Setting::new(DEFAULT_ENDPOINT.to_string(), SettingSource::Default)
        };

        let timeout = if let Some(raw) = env(ENV_CATALOG_TIMEOUT) {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                SettingsError::invalid(format!(
                    "{ENV_CATALOG_TIMEOUT} must be a whole number of seconds, got '{raw}'"
                ))
            })?;
            Setting::new(
                timeout_from_secs(secs)?,
                SettingSource::EnvVar(ENV_CATALOG_TIMEOUT),
            )
        } else if let Some(secs) = file.catalog.timeout_secs {
            Setting::new(timeout_from_secs(secs)?, SettingSource::SettingsFile)
        } else {
            Setting::new(DEFAULT_TIMEOUT, SettingSource::Default)
        };

        let api_key = if let Some(key) = env(ENV_API_KEY) {
            Setting::new(Some(key), SettingSource::EnvVar(ENV_API_KEY))
        } else if let Some(key) = file.catalog.api_key.filter(|k| !k.trim().is_empty()) {
            Setting::new(Some(key), SettingSource::SettingsFile)
        } else {
            Setting::new(None, SettingSource::Default)
        };

        Ok(Self {
            data_file,
            endpoint,
            timeout,
            api_key,
        })
    }

    pub fn catalog_config(&self) -> CatalogConfig {
        CatalogConfig {
            endpoint: self.endpoint.value.clone(),
            timeout: self.timeout.value,
            api_key: self.api_key.value.clone(),
        }
    }

    pub fn store(&self) -> CollectionStore {
        CollectionStore::new(&self.data_file.value)
    }
}

fn timeout_from_secs(secs: u64) -> Result<Duration, SettingsError> {
    if secs == 0 {
        return Err(SettingsError::invalid(
            "catalog timeout must be at least 1 second",
        ));
    }
    Ok(Duration::from_secs(secs))
}

/// Read and parse a settings file. A missing file is `Ok(None)`; a file that
/// exists but does not parse is an error.
pub fn load_settings_file(path: &Path) -> Result<Option<SettingsFile>, SettingsError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(SettingsError::io(path, e)),
    };
    toml::from_str(&contents)
        .map(Some)
        .map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// Save (or clear) `library.data_file` in the settings file.
pub fn save_data_file(data_file: Option<&Path>) -> Result<PathBuf, SettingsError> {
    let path = settings_path();
    save_data_file_at(&path, data_file)?;
    Ok(path)
}

/// Save (or clear) `library.data_file` in the settings file at `settings`.
///
/// Uses `toml::Value` for a surgical update so unrelated keys are preserved.
pub fn save_data_file_at(settings: &Path, data_file: Option<&Path>) -> Result<(), SettingsError> {
    let mut doc: toml::Value = match std::fs::read_to_string(settings) {
        Ok(contents) => contents.parse().map_err(|source| SettingsError::Parse {
            path: settings.to_path_buf(),
            source,
        })?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            toml::Value::Table(Default::default())
        }
        Err(e) => return Err(SettingsError::io(settings, e)),
    };

    // Ensure [library] table exists
    let table = doc
        .as_table_mut()
        .ok_or_else(|| SettingsError::invalid("settings.toml root is not a table"))?;
    let library = table
        .entry("library")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let lib_table = library
        .as_table_mut()
        .ok_or_else(|| SettingsError::invalid("[library] is not a table"))?;

    match data_file {
        Some(p) => {
            lib_table.insert(
                "data_file".to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            lib_table.remove("data_file");
        }
    }

    let serialized = toml::to_string_pretty(&doc)
        .map_err(|e| SettingsError::invalid(format!("failed to serialize settings: {e}")))?;
    write_atomically(settings, &serialized)
}

/// Write `contents` to a sibling `.tmp` file and rename it over `path`.
/// The temporary file is removed if either step fails.
fn write_atomically(path: &Path, contents: &str) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| SettingsError::io(parent, e))?;
    }
    let tmp = path.with_extension("toml.tmp");
    let result = std::fs::write(&tmp, contents)
        .map_err(|e| SettingsError::io(&tmp, e))
        .and_then(|()| std::fs::rename(&tmp, path).map_err(|e| SettingsError::io(path, e)));
    if result.is_err() {
        let _ = std::fs::remove_file(&tmp);
    }
    result
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
