//! Interactive translation drill over one unit.

use std::io::{BufRead, Write};

use progress_core::{UnitProgress, WordRef};
use serde::Serialize;

use super::words::CommandError;
use crate::progress::ProgressTracker;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrillSummary {
    pub unit: String,
    pub asked: usize,
    pub correct: usize,
    pub newly_learned: Vec<String>,
    pub progress: UnitProgress,
}

/// Ask up to `count` words of `unit`, reading one answer per line.
///
/// Stops early when `input` runs out.
pub fn run_drill<R: BufRead, W: Write>(
    tracker: &mut ProgressTracker,
    words: &[WordRef],
    unit: &str,
    count: usize,
    mut input: R,
    output: &mut W,
) -> Result<DrillSummary, CommandError> {
    tracker.initialize_unit(words, unit);

    let mut summary = DrillSummary {
        unit: unit.to_string(),
        asked: 0,
        correct: 0,
        newly_learned: Vec::new(),
        progress: UnitProgress::default(),
    };

    let mut line = String::new();
    for _ in 0..count {
        let word = tracker
            .get_next_word(words, unit)
            .ok_or_else(|| CommandError::EmptyUnit(unit.to_string()))?;

        write!(output, "{} = ", word.headword)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let is_correct = answers_match(&line, &word.translation);
        let outcome = tracker.record_attempt(word, is_correct);
        tracker.mark_word_as_seen(word);

        summary.asked += 1;
        if is_correct {
            summary.correct += 1;
            writeln!(output, "correct")?;
        } else {
            writeln!(output, "wrong, it is \"{}\"", word.translation)?;
        }
        if outcome.newly_learned {
            writeln!(output, "learned \"{}\"", word.headword)?;
            summary.newly_learned.push(word.headword.clone());
        }
    }

    summary.progress = tracker.get_progress(unit);
    Ok(summary)
}

fn answers_match(typed: &str, expected: &str) -> bool {
    typed.trim().to_lowercase() == expected.trim().to_lowercase()
}
