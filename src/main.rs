//! Command line tool for authoring, searching and playing quizzes.
//!
//! Quizzes are JSON files kept under a quizzes directory (`./quizzes` unless
//! `--root` says otherwise).

use clap::Parser;

mod cli;

fn main() -> anyhow::Result<()> {
    cli::Cli::parse().run()
}
