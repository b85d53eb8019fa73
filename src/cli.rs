use std::path::PathBuf;

mod edit;
mod init;
mod play;
mod search;
mod show;
mod terminal;

use clap::ArgAction;
use quizmaster::{storage, Quiz};

/// Parse a 1-based question number from the command line.
fn parse_question_number(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("question numbers start at 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("{e}")),
    }
}

/// Load a quiz file, attaching the path to any error.
fn load_quiz(path: &std::path::Path) -> anyhow::Result<Quiz> {
    storage::load(path).map_err(|e| anyhow::anyhow!("Failed to load quiz: {e}"))
}

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The path to the root of the quizzes directory
    #[arg(short, long, default_value = "quizzes", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        self.command.run(self.root)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false)
            .with_writer(std::io::stderr);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Initialize a new quizzes directory
    Init(init::Command),

    /// List every quiz in the quizzes directory
    List(search::List),

    /// Search for quizzes by content
    ///
    /// A quiz matches if the search term appears anywhere in its file, or if
    /// a single word of the file closely resembles the term.
    Search(search::Search),

    /// Show the questions in a quiz
    Show(show::Show),

    /// Play a quiz
    Play(play::Play),

    /// Create a new, empty quiz file
    New(edit::New),

    /// Append a question to a quiz
    Add(edit::Add),

    /// Change a question in a quiz
    Edit(edit::Edit),

    /// Delete a question from a quiz
    Remove(edit::Remove),

    /// Change the title of a quiz
    Title(edit::Title),
}

impl Command {
    fn run(self, root: PathBuf) -> anyhow::Result<()> {
        match self {
            Self::Init(command) => command.run(&root)?,
            Self::List(command) => command.run(root),
            Self::Search(command) => command.run(root),
            Self::Show(command) => command.run()?,
            Self::Play(command) => command.run(root)?,
            Self::New(command) => command.run()?,
            Self::Add(command) => command.run()?,
            Self::Edit(command) => command.run()?,
            Self::Remove(command) => command.run()?,
            Self::Title(command) => command.run()?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn question_numbers_are_one_based() {
        assert_eq!(parse_question_number("1"), Ok(1));
        assert!(parse_question_number("0").is_err());
        assert!(parse_question_number("first").is_err());
    }

    #[test]
    fn root_defaults_to_quizzes() {
        let cli = Cli::try_parse_from(["quiz", "list"]).unwrap();
        assert_eq!(cli.root, PathBuf::from("quizzes"));
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::try_parse_from(["quiz", "search", "paris", "-vv", "--root", "elsewhere"])
            .unwrap();
        assert_eq!(cli.root, PathBuf::from("elsewhere"));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn add_splits_wrong_answers_on_commas() {
        let cli = Cli::try_parse_from([
            "quiz",
            "add",
            "geo.json",
            "-q",
            "Capital of Italy?",
            "-c",
            "Rome",
            "-w",
            "Paris,Berlin",
        ])
        .unwrap();

        let Command::Add(add) = cli.command else {
            panic!("expected add command");
        };
        assert_eq!(add.question().wrong_answers(), ["Paris", "Berlin"]);
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
