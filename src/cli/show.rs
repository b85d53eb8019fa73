use std::path::PathBuf;

use clap::Parser;
use quizmaster::{storage, Quiz};
use tracing::instrument;

use super::{load_quiz, terminal::Colorize};

#[derive(Debug, Parser)]
#[command(about = "Display the questions and answers in a quiz")]
pub struct Show {
    /// The quiz file to display
    path: PathBuf,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "pretty")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

impl Show {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self) -> anyhow::Result<()> {
        let quiz = load_quiz(&self.path)?;

        match self.output {
            OutputFormat::Pretty => output_pretty(&quiz),
            OutputFormat::Json => output_json(&quiz)?,
        }

        Ok(())
    }
}

fn output_pretty(quiz: &Quiz) {
    println!("# {}", quiz.title());

    if quiz.is_empty() {
        println!("\n{}", "No questions yet".dim());
        return;
    }

    for (number, question) in quiz.questions().iter().enumerate() {
        println!();
        println!(
            "{}. {} {}",
            number + 1,
            question.prompt(),
            format!("({}s)", question.timeout()).dim()
        );
        println!("   {} {}", "✔".success(), question.correct_answer());
        for wrong in question.wrong_answers() {
            println!("   {} {wrong}", "✘".failure());
        }
    }
}

fn output_json(quiz: &Quiz) -> anyhow::Result<()> {
    println!("{}", storage::json::to_string_pretty(quiz)?);
    Ok(())
}
