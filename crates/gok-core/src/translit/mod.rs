//! Turkish-to-Orkhon transliteration.
//!
//! Expands numerals, lowercases, splits the text into lines and words, and
//! renders every word through the ligature → syllable → rune pipeline. Line
//! breaks are preserved and a separator is written between words.

mod word;


use std::borrow::Cow;

use tracing::debug_span;

use crate::alphabet::WORD_SEPARATOR;
use crate::numeric::expand_numbers;
use crate::settings::Settings;
use crate::unicode::turkish_lowercase;

pub use word::{explain_word, transliterate_word, SyllableTrace, WordTrace};

/// Caller-supplied knobs; the pipeline itself keeps no state between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslitOptions {
    /// Written between consecutive words of a line.
    pub word_separator: String,
    /// Spell out digit runs before transliterating.
    pub expand_numbers: bool,
}

impl Default for TranslitOptions {
    fn default() -> Self {
        Self {
            word_separator: WORD_SEPARATOR.to_string(),
            expand_numbers: true,
        }
    }
}

impl From<&Settings> for TranslitOptions {
    fn from(s: &Settings) -> Self {
        Self {
            word_separator: s.output.word_separator.clone(),
            expand_numbers: s.numbers.expand,
        }
    }
}

/// Transliterate `text` with the default options.
pub fn transliterate(text: &str) -> String {
    transliterate_with(text, &TranslitOptions::default())
}

/// Transliterate `text`, one output line per input line.
///
/// Input that is empty or only whitespace yields an empty string.
pub fn transliterate_with(text: &str, options: &TranslitOptions) -> String {
    if text.trim().is_empty() {
        return String::new();
    }
    let _span = debug_span!("transliterate", line_count = text.lines().count()).entered();

    let expanded: Cow<'_, str> = if options.expand_numbers {
        Cow::Owned(expand_numbers(text))
    } else {
        Cow::Borrowed(text)
    };
    let lowered = turkish_lowercase(&expanded);

    let mut out = String::with_capacity(lowered.len() * 2);
    for (i, line) in lowered.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        transliterate_line(line, &options.word_separator, &mut out);
    }
    out
}

fn transliterate_line(line: &str, separator: &str, out: &mut String) {
    for (i, word) in line.split_whitespace().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(&transliterate_word(word));
    }
}
