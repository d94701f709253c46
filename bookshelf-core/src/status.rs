use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Reading progress the user assigns to a book in their collection.
///
/// Every record carries exactly one of these; new records start as
/// [`ReadingStatus::NotStarted`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReadingStatus {
    #[default]
    NotStarted,
    InProgress,
    Finished,
}

/// All statuses in display order.
const ALL_STATUSES: &[ReadingStatus] = &[
    ReadingStatus::NotStarted,
    ReadingStatus::InProgress,
    ReadingStatus::Finished,
];

impl ReadingStatus {
    /// All variants, in the order they are offered to the user.
    pub fn all() -> &'static [ReadingStatus] {
        ALL_STATUSES
    }

    /// Label used for display and in the `Status` column of the collection file.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Finished => "Finished",
        }
    }

    /// Alternative spellings accepted when parsing (lowercase).
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::NotStarted => &["not-started", "notstarted", "not_started", "unread", "todo"],
            Self::InProgress => &["in-progress", "inprogress", "in_progress", "reading"],
            Self::Finished => &["done", "read"],
        }
    }
}

impl std::fmt::Display for ReadingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string does not name a reading status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown reading status: '{0}' (expected one of: Not Started, In Progress, Finished)")]
pub struct StatusParseError(pub String);

impl std::str::FromStr for ReadingStatus {
    type Err = StatusParseError;

    /// Parse a status from its label or any alias (case-insensitive,
    /// surrounding whitespace ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        for &status in ALL_STATUSES {
            if status.label().to_lowercase() == lower {
                return Ok(status);
            }
            if status.aliases().contains(&lower.as_str()) {
                return Ok(status);
            }
        }
        Err(StatusParseError(s.to_string()))
    }
}

impl Serialize for ReadingStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ReadingStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "tests/status_tests.rs"]
mod tests;
