//! CLI commands exposed by the tracker binary.

pub mod drill;
pub mod stats;
pub mod study;
pub mod words;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::progress::ProgressTracker;
pub use words::{load_word_list, CommandError};

#[derive(Debug, Parser)]
#[command(name = "vocab-tracker", about = "Track vocabulary learning progress", version)]
pub struct Cli {
    /// Directory holding the progress database (overrides VOCAB_DATA_DIR)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Record an answer for a word
    Attempt {
        /// JSON word list the word belongs to
        #[arg(long)]
        words: PathBuf,
        headword: String,
        /// The answer was wrong
        #[arg(long)]
        wrong: bool,
    },
    /// Show the attempt record of a word
    Stats { headword: String },
    /// List difficult words of a word list
    Difficult {
        #[arg(long)]
        words: PathBuf,
    },
    /// List learned words of a word list
    Learned {
        #[arg(long)]
        words: PathBuf,
    },
    /// Forget the attempt record of a word
    Reset { headword: String },
    /// Words learned today
    Today,
    /// Words learned over the last 7 days
    Weekly,
    /// Words learned over a trailing window of days
    Recent {
        #[arg(long, value_parser = clap::value_parser!(u16).range(1..=3660))]
        days: Option<u16>,
    },
    /// Total learned words, attempts and streak
    Total,
    /// Quiz a unit interactively
    Drill {
        #[arg(long)]
        words: PathBuf,
        #[arg(long)]
        unit: String,
        #[arg(long, default_value_t = 10)]
        count: usize,
    },
}

/// Run one command against the tracker, printing JSON to stdout.
pub fn execute(tracker: &mut ProgressTracker, command: Command) -> Result<(), CommandError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match command {
        Command::Attempt {
            words,
            headword,
            wrong,
        } => {
            let words = load_word_list(&words)?;
            print_json(&mut out, &study::submit_attempt(tracker, &words, &headword, !wrong)?)
        }
        Command::Stats { headword } => print_json(&mut out, &study::word_stats(tracker, &headword)),
        Command::Difficult { words } => {
            let words = load_word_list(&words)?;
            print_json(&mut out, &study::difficult_words(tracker, &words))
        }
        Command::Learned { words } => {
            let words = load_word_list(&words)?;
            print_json(&mut out, &study::learned_words(tracker, &words))
        }
        Command::Reset { headword } => {
            tracker.reset_word_stats(&headword);
            print_json(&mut out, &study::word_stats(tracker, &headword))
        }
        Command::Today => print_json(&mut out, &stats::today_stats(tracker)),
        Command::Weekly => print_json(&mut out, &stats::weekly_stats(tracker)),
        Command::Recent { days } => print_json(&mut out, &stats::recent_stats(tracker, days)),
        Command::Total => print_json(&mut out, &stats::summary(tracker)),
        Command::Drill { words, unit, count } => {
            let words = load_word_list(&words)?;
            let stdin = io::stdin();
            let summary = drill::run_drill(tracker, &words, &unit, count, stdin.lock(), &mut out)?;
            print_json(&mut out, &summary)
        }
    }
}

fn print_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<(), CommandError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
