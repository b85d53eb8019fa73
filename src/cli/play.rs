use std::{
    io::{BufRead, IsTerminal, Write},
    path::PathBuf,
};

use clap::Parser;
use dialoguer::{Input, Select};
use quizmaster::{Entry, Library, QuizSession, SessionError};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::instrument;

use super::{load_quiz, terminal::Colorize};

/// Play a quiz.
///
/// Answers are read with interactive prompts when stdin is a terminal, and
/// one per line otherwise, so a game can be scripted by piping its answers in.
#[derive(Debug, Parser)]
pub struct Play {
    /// The quiz file to play
    #[arg(required_unless_present = "search", conflicts_with = "search")]
    path: Option<PathBuf>,

    /// Choose the quiz from those matching this search term
    #[arg(short, long)]
    search: Option<String>,

    /// Seed for shuffling answers, to replay the same game
    #[arg(long)]
    seed: Option<u64>,
}

impl Play {
    #[instrument(level = "debug")]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let interactive = std::io::stdin().is_terminal();

        let path = match (self.path, self.search) {
            (Some(path), _) => path,
            (None, Some(term)) => match choose_quiz(root, &term, interactive)? {
                Some(path) => path,
                None => return Ok(()),
            },
            (None, None) => anyhow::bail!("Either a quiz file or --search is required"),
        };

        let quiz = load_quiz(&path)?;
        let ask = || ask_for_answer(interactive);
        let mut stdout = std::io::stdout().lock();

        match self.seed {
            Some(seed) => {
                let mut session = QuizSession::with_rng(&quiz, StdRng::seed_from_u64(seed));
                play(&mut session, ask, &mut stdout)
            }
            None => play(&mut QuizSession::new(&quiz), ask, &mut stdout),
        }
    }
}

/// Let the user pick one of the quizzes matching `term`.
///
/// Returns `None` if nothing matches.
fn choose_quiz(root: PathBuf, term: &str, interactive: bool) -> anyhow::Result<Option<PathBuf>> {
    let library = Library::open(root);
    let mut entries = library.entries(term);

    if entries.is_empty() {
        println!("No quizzes found.");
        return Ok(None);
    }

    println!("{}", "Search Results:".info());
    super::search::print_entries(&entries);

    let choice = if interactive {
        select_entry(&entries)?
    } else {
        read_choice(
            &mut std::io::stdin().lock(),
            entries.len(),
            &mut std::io::stdout(),
        )?
    };

    Ok(Some(entries.swap_remove(choice).path))
}

fn select_entry(entries: &[Entry]) -> anyhow::Result<usize> {
    let titles: Vec<&str> = entries.iter().map(|entry| entry.title.as_str()).collect();
    Ok(Select::new()
        .with_prompt("Choose a quiz")
        .items(&titles)
        .default(0)
        .interact()?)
}

fn ask_for_answer(interactive: bool) -> anyhow::Result<String> {
    if interactive {
        Ok(Input::<String>::new()
            .with_prompt("Select the correct answer")
            .interact_text()?)
    } else {
        read_line(&mut std::io::stdin().lock())
    }
}

/// Reads the next line of input, without its line ending.
///
/// Running out of input is an error, since the game cannot go on without it.
fn read_line(reader: &mut impl BufRead) -> anyhow::Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        anyhow::bail!("Input ended before the quiz was finished");
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Reads a 1-based quiz number from `reader`, asking again until one of the
/// `count` listed quizzes is chosen. Returns the 0-based index.
fn read_choice(
    reader: &mut impl BufRead,
    count: usize,
    out: &mut impl Write,
) -> anyhow::Result<usize> {
    loop {
        writeln!(out, "Choose a quiz (1-{count}):")?;
        match read_line(reader)?.trim().parse::<usize>() {
            Ok(number) if (1..=count).contains(&number) => return Ok(number - 1),
            _ => writeln!(out, "{}", "Please enter the number of a quiz.".warning())?,
        }
    }
}

/// Play `session` to completion.
///
/// `ask` is called for each attempt at answering; anything that is not the
/// number of a presented answer is rejected and the same question is asked
/// again.
fn play<R, A, W>(session: &mut QuizSession<'_, R>, mut ask: A, out: &mut W) -> anyhow::Result<()>
where
    R: Rng,
    A: FnMut() -> anyhow::Result<String>,
    W: Write,
{
    writeln!(out, "{}", session.quiz().title().info())?;

    while let Some(question) = session.current_question() {
        writeln!(out)?;
        writeln!(
            out,
            "Question {}/{}: {}",
            session.current_index() + 1,
            session.total(),
            question.prompt()
        )?;
        for (number, answer) in session.present_current()?.iter().enumerate() {
            writeln!(out, "{}. {answer}", number + 1)?;
        }

        loop {
            let Ok(selection) = ask()?.trim().parse::<usize>() else {
                writeln!(out, "{}", "Please enter the number of an answer.".warning())?;
                continue;
            };

            match session.submit_answer(selection) {
                Ok(outcome) if outcome.correct => {
                    writeln!(out, "{}", "Correct!".success())?;
                    break;
                }
                Ok(outcome) => {
                    writeln!(
                        out,
                        "{}",
                        format!("Wrong, the answer was {}.", outcome.correct_answer).failure()
                    )?;
                    break;
                }
                Err(e @ SessionError::InvalidSelection { .. }) => {
                    writeln!(out, "{}", format!("Invalid choice: {e}").warning())?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    let (score, total) = session.result();
    writeln!(out)?;
    writeln!(out, "Quiz completed! Your score: {score}/{total}")?;
    Ok(())
}
