//! A filesystem backed collection of quizzes
//!
//! The [`Library`] is a directory tree of quiz files. Any file with a `.json`
//! extension below the root is treated as a quiz. The `.quiz` directory in the
//! root holds library metadata and is never searched.

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use walkdir::WalkDir;

use crate::{domain::Config, finder::Finder, storage::json, Quiz};

/// The name of the directory holding library metadata.
pub const METADATA_DIR: &str = ".quiz";

/// A directory of quiz files.
#[derive(Debug, Clone)]
pub struct Library {
    /// The root of the directory quizzes are stored in.
    root: PathBuf,
    config: Config,
}

/// A quiz file found by a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The path of the quiz file.
    pub path: PathBuf,
    /// The quiz title.
    pub title: String,
    /// The number of questions in the quiz.
    pub questions: usize,
}

impl Library {
    /// Creates a library at the given root with the given configuration.
    #[must_use]
    pub const fn new(root: PathBuf, config: Config) -> Self {
        Self { root, config }
    }

    /// Opens the library at `root`, reading its configuration file if present.
    ///
    /// A missing or invalid configuration file is not an error; the default
    /// configuration is used instead.
    #[must_use]
    pub fn open(root: PathBuf) -> Self {
        let config = load_config(&root);
        Self::new(root, config)
    }

    /// The root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The library configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// The path of the library configuration file.
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        config_path(&self.root)
    }

    /// All quiz files below the root, in directory enumeration order.
    ///
    /// Entries are visited in file name order within each directory.
    /// Directory entries that cannot be read are skipped.
    #[must_use]
    pub fn quiz_paths(&self) -> Vec<PathBuf> {
        WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || entry.file_name() != METADATA_DIR)
            .filter_map(|entry| {
                entry
                    .map_err(|e| tracing::debug!("Skipping directory entry: {e}"))
                    .ok()
            })
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| entry.path().extension() == Some(OsStr::new("json")))
            .map(walkdir::DirEntry::into_path)
            .collect()
    }

    /// The quiz files whose content matches `term`.
    ///
    /// Files are scanned in parallel. The results keep the enumeration order
    /// of [`Library::quiz_paths`]; they are not ranked.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<PathBuf> {
        let finder = Finder::from_config(&self.config);
        let paths = self.quiz_paths();

        let found: Vec<PathBuf> = paths
            .par_iter()
            .filter(|path| finder.matches(path, term))
            .cloned()
            .collect();

        tracing::debug!(
            "{} of {} quiz files match '{term}'",
            found.len(),
            paths.len()
        );
        found
    }

    /// Loads the title of every quiz matching `term`.
    ///
    /// Files that match but cannot be loaded as quizzes are skipped with a
    /// warning.
    #[must_use]
    pub fn entries(&self, term: &str) -> Vec<Entry> {
        load_entries(self.search(term))
    }

    /// Loads the title of every quiz in the library.
    ///
    /// Files that cannot be loaded as quizzes are skipped with a warning.
    #[must_use]
    pub fn all_entries(&self) -> Vec<Entry> {
        load_entries(self.quiz_paths())
    }
}

fn load_entries(paths: Vec<PathBuf>) -> Vec<Entry> {
    paths
        .into_iter()
        .filter_map(|path| match json::load(&path) {
            Ok(quiz) => Some(Entry::new(path, &quiz)),
            Err(e) => {
                tracing::warn!("Skipping {}: {e}", path.display());
                None
            }
        })
        .collect()
}

impl Entry {
    fn new(path: PathBuf, quiz: &Quiz) -> Self {
        Self {
            path,
            title: quiz.title().to_string(),
            questions: quiz.len(),
        }
    }
}

fn config_path(root: &Path) -> PathBuf {
    root.join(METADATA_DIR).join("config.toml")
}

fn load_config(root: &Path) -> Config {
    let path = config_path(root);
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Config::default();
    }

    Config::load(&path).unwrap_or_else(|e| {
        tracing::warn!("Ignoring {}: {e}", path.display());
        Config::default()
    })
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::Question;

    fn quiz(title: &str, prompt: &str, correct: &str) -> Quiz {
        Quiz::new(
            title,
            vec![Question::new(prompt, correct, vec!["Nowhere".to_string()])],
        )
    }

    fn setup_library() -> (TempDir, Library) {
        let tmp = TempDir::new().expect("failed to create temp dir");
        let root = tmp.path();

        json::save(
            &root.join("europe/france.json"),
            &quiz("France", "Capital of France?", "Paris"),
        )
        .unwrap();
        json::save(
            &root.join("europe/italy.json"),
            &quiz("Italy", "Capital of Italy?", "Rome"),
        )
        .unwrap();
        json::save(
            &root.join("asia.json"),
            &quiz("Asia", "Capital city that hosted the 1964 Olympics?", "Tokyo"),
        )
        .unwrap();
        std::fs::write(root.join("notes.txt"), "Paris is not a quiz").unwrap();

        let library = Library::open(root.to_path_buf());
        (tmp, library)
    }

    fn names(paths: &[PathBuf], root: &Path) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().display().to_string())
            .collect()
    }

    #[test]
    fn quiz_paths_finds_json_files_recursively() {
        let (tmp, library) = setup_library();

        let paths = library.quiz_paths();

        assert_eq!(
            names(&paths, tmp.path()),
            ["asia.json", "europe/france.json", "europe/italy.json"]
        );
    }

    #[test]
    fn quiz_paths_skips_metadata_directory() {
        let (tmp, library) = setup_library();
        std::fs::create_dir_all(tmp.path().join(METADATA_DIR)).unwrap();
        std::fs::write(tmp.path().join(METADATA_DIR).join("cache.json"), "{}").unwrap();

        assert_eq!(library.quiz_paths().len(), 3);
    }

    #[test]
    fn search_keeps_enumeration_order() {
        let (tmp, library) = setup_library();

        let found = library.search("capital");

        assert_eq!(
            names(&found, tmp.path()),
            ["asia.json", "europe/france.json", "europe/italy.json"]
        );
    }

    #[test]
    fn search_matches_fuzzy_terms() {
        let (tmp, library) = setup_library();

        // "hosted" is a bare word in the asia prompt
        assert_eq!(names(&library.search("hostted"), tmp.path()), ["asia.json"]);
        assert!(library.search("Germany").is_empty());
    }

    #[test]
    fn bad_files_do_not_abort_search() {
        let (tmp, library) = setup_library();
        std::fs::write(tmp.path().join("broken.json"), b"\xff\xfe Rome {").unwrap();

        let found = library.search("rome");
        assert_eq!(
            names(&found, tmp.path()),
            ["broken.json", "europe/italy.json"]
        );

        // the broken file matches, but has no title to show
        let entries = library.entries("rome");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Italy");
        assert_eq!(entries[0].questions, 1);
    }

    #[test]
    fn all_entries_lists_every_quiz() {
        let (_tmp, library) = setup_library();

        let titles: Vec<_> = library
            .all_entries()
            .into_iter()
            .map(|entry| entry.title)
            .collect();

        assert_eq!(titles, ["Asia", "France", "Italy"]);
    }

    #[test]
    fn open_reads_config() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir_all(tmp.path().join(METADATA_DIR)).unwrap();
        std::fs::write(
            config_path(tmp.path()),
            "_version = \"1\"\nsimilarity_threshold = 95\n",
        )
        .unwrap();

        let library = Library::open(tmp.path().to_path_buf());

        assert_eq!(library.config().similarity_threshold(), 95);
    }

    #[test]
    fn open_without_config_uses_defaults() {
        let tmp = TempDir::new().unwrap();

        let library = Library::open(tmp.path().to_path_buf());

        assert_eq!(library.config(), &Config::default());
    }

    #[test]
    fn unparseable_config_falls_back_to_defaults() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir_all(tmp.path().join(METADATA_DIR)).unwrap();
        std::fs::write(config_path(tmp.path()), "").unwrap();

        let library = Library::open(tmp.path().to_path_buf());

        assert_eq!(library.config(), &Config::default());
    }

    #[test]
    fn missing_root_is_empty() {
        let tmp = TempDir::new().unwrap();
        let library = Library::open(tmp.path().join("nope"));

        assert!(library.quiz_paths().is_empty());
        assert!(library.search("anything").is_empty());
    }
}
