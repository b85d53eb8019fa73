//! Approximate text search over quiz files.
//!
//! A file matches a search term if either
//!
//! - the term is a literal substring of the file content, or
//! - some single whitespace-delimited word of the content is *similar* to the
//!   whole term, i.e. its [`ratio`] score exceeds the threshold.
//!
//! Matching is case-insensitive. Multi-word terms only match through the
//! substring rule unless one word of the file happens to resemble the whole
//! term.

use std::path::Path;

mod ratio;
pub use ratio::ratio;

use crate::domain::Config;

/// Matches search terms against file contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finder {
    threshold: u8,
}

impl Default for Finder {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Finder {
    /// Creates a finder with the given similarity threshold (0-100).
    ///
    /// A word must score strictly more than `threshold` to match.
    #[must_use]
    pub const fn new(threshold: u8) -> Self {
        Self { threshold }
    }

    /// Creates a finder using the threshold from the configuration.
    #[must_use]
    pub const fn from_config(config: &Config) -> Self {
        Self::new(config.similarity_threshold())
    }

    /// The similarity threshold.
    #[must_use]
    pub const fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Returns `true` if the file at `path` matches `term`.
    ///
    /// Bytes that are not valid UTF-8 are skipped. A file that cannot be read
    /// at all never matches; the failure is logged rather than returned, so
    /// that one bad file cannot abort a search over many.
    #[must_use]
    pub fn matches(&self, path: &Path, term: &str) -> bool {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::debug!("Skipping unreadable file {}: {e}", path.display());
                return false;
            }
        };

        let content: String = bytes.utf8_chunks().map(|chunk| chunk.valid()).collect();
        let found = self.matches_text(&content, term);

        tracing::trace!(
            "{} {} '{term}'",
            path.display(),
            if found { "matches" } else { "does not match" }
        );
        found
    }

    /// Returns `true` if `content` matches `term`.
    #[must_use]
    pub fn matches_text(&self, content: &str, term: &str) -> bool {
        let content = content.to_lowercase();
        let term = term.to_lowercase();

        if content.contains(&term) {
            return true;
        }

        content
            .split_whitespace()
            .any(|word| ratio(word, &term) > self.threshold)
    }
}
