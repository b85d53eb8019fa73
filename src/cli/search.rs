use std::path::PathBuf;

use clap::Parser;
use quizmaster::{Entry, Library};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser)]
pub struct Search {
    /// The text to look for
    term: String,
}

impl Search {
    #[instrument(level = "debug")]
    pub fn run(self, root: PathBuf) {
        let library = Library::open(root);
        let entries = library.entries(&self.term);

        if entries.is_empty() {
            println!("No quizzes found.");
            return;
        }

        println!("{}", "Search Results:".info());
        print_entries(&entries);
    }
}

#[derive(Debug, Parser)]
pub struct List {}

impl List {
    #[instrument(level = "debug")]
    pub fn run(self, root: PathBuf) {
        let library = Library::open(root);
        let entries = library.all_entries();

        if entries.is_empty() {
            println!("No quizzes in {}.", library.root().display());
            return;
        }

        print_entries(&entries);
    }
}

pub fn print_entries(entries: &[Entry]) {
    for (number, entry) in entries.iter().enumerate() {
        println!("{}", format_entry(number + 1, entry));
    }
}

fn format_entry(number: usize, entry: &Entry) -> String {
    let questions = if entry.questions == 1 {
        "1 question".to_string()
    } else {
        format!("{} questions", entry.questions)
    };
    format!(
        "{number}. {} {}",
        entry.title,
        format!("({questions}, {})", entry.path.display()).dim()
    )
}
