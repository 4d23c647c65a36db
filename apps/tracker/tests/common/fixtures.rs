//! Word list fixtures.

use vocab_tracker_lib::commands::words::parse_word_list;
use progress_core::WordRef;

pub const ANIMALS: &str = r#"[
    {"headword": "cat", "translation": "gato", "unit": "animals"},
    {"headword": "dog", "translation": "perro", "unit": "animals"},
    {"headword": "bird", "translation": "pájaro", "unit": "animals"}
]"#;

pub const MIXED: &str = r#"[
    {"headword": "red", "translation": "rojo", "unit": "colors", "section": "basics"},
    {"headword": "cat", "translation": "gato", "unit": "animals"},
    {"headword": "blue", "translation": "azul", "unit": "colors", "section": "basics"},
    {"headword": "dog", "translation": "perro", "unit": "animals"},
    {"headword": "green", "translation": "verde", "unit": "colors"}
]"#;

pub fn animals() -> Vec<WordRef> {
    parse_word_list(ANIMALS).expect("valid fixture")
}

pub fn mixed() -> Vec<WordRef> {
    parse_word_list(MIXED).expect("valid fixture")
}
