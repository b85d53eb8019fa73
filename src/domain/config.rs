use std::path::Path;

use serde::{Deserialize, Serialize};

/// Configuration for a quiz library.
///
/// This is stored as TOML in `<root>/.quiz/config.toml`. The file must name
/// its format version (`_version = "1"`); every other field is optional and
/// takes its default value when missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// The similarity score (0-100) a single word must *exceed* to count as a
    /// fuzzy match for a search term.
    similarity_threshold: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            similarity_threshold: default_similarity_threshold(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// The fuzzy-match similarity threshold.
    #[must_use]
    pub const fn similarity_threshold(&self) -> u8 {
        self.similarity_threshold
    }

    /// Sets the fuzzy-match similarity threshold.
    ///
    /// Values above 100 are clamped to 100, which disables fuzzy matching (only
    /// literal substrings will match).
    pub fn set_similarity_threshold(&mut self, threshold: u8) {
        self.similarity_threshold = threshold.min(100);
    }
}

const fn default_similarity_threshold() -> u8 {
    80
}

/// The serialized versions of the configuration.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_similarity_threshold")]
        similarity_threshold: u8,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                similarity_threshold,
            } => Self {
                similarity_threshold: similarity_threshold.min(100),
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            similarity_threshold: config.similarity_threshold,
        }
    }
}
