/// The library: a directory tree of quiz files.
pub mod library;
pub use library::{Entry, Library, METADATA_DIR};

/// JSON serialization for quizzes.
pub mod json;
pub use json::{load, save, LoadError, SaveError};
