//! Word list loading shared by the commands.

use std::fs;
use std::path::Path;

use progress_core::WordRef;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid word list: {0}")]
    Json(#[from] serde_json::Error),

    #[error("word not in list: {0}")]
    UnknownWord(String),

    #[error("unit has no words: {0}")]
    EmptyUnit(String),
}

/// Read a JSON array of words.
pub fn load_word_list(path: &Path) -> Result<Vec<WordRef>, CommandError> {
    let content = fs::read_to_string(path)?;
    parse_word_list(&content)
}

pub fn parse_word_list(content: &str) -> Result<Vec<WordRef>, CommandError> {
    Ok(serde_json::from_str(content)?)
}

/// Find a word by headword.
pub fn find_word<'a>(words: &'a [WordRef], headword: &str) -> Result<&'a WordRef, CommandError> {
    words
        .iter()
        .find(|w| w.headword == headword)
        .ok_or_else(|| CommandError::UnknownWord(headword.to_string()))
}
