use serde::Serialize;
use tracing::{debug, debug_span};

use crate::alphabet::{
    allomorph, apply_ligatures, frontness, harmony_class, is_punctuation, is_vowel,
    rune_for_letter,
};
use crate::syllable::{nucleus, syllabify};
use crate::unicode::turkish_lowercase;

/// Vowel state carried across the syllables of one word.
#[derive(Default)]
struct WordState {
    last_vowel: Option<char>,
}

/// Transliterate one lowercased word.
///
/// Ligatures are substituted first, the result is syllabified, and each
/// syllable is rendered with vowel elision and consonant harmony.
pub fn transliterate_word(word: &str) -> String {
    let _span = debug_span!("transliterate_word", word).entered();

    let ligated = apply_ligatures(word);
    let mut state = WordState::default();
    let mut out = String::with_capacity(ligated.len());
    for (index, syllable) in syllabify(&ligated).iter().enumerate() {
        render_syllable(syllable, index, &mut state, &mut out);
    }

    debug!(output = out.as_str());
    out
}

/// Render one syllable into `out`.
fn render_syllable(syllable: &str, index: usize, state: &mut WordState, out: &mut String) {
    let syllable_frontness = nucleus(syllable).and_then(frontness);

    for c in syllable.chars() {
        if is_punctuation(c) {
            continue;
        }

        if is_vowel(c) {
            // a/e is never written in the first syllable
            if index == 0 && matches!(c, 'a' | 'e') {
                continue;
            }
            if state
                .last_vowel
                .is_some_and(|last| harmony_class(last) == harmony_class(c))
            {
                continue;
            }
            state.last_vowel = Some(c);
            if let Some(r) = rune_for_letter(c) {
                out.push(r);
            }
            continue;
        }

        match rune_for_letter(c) {
            Some(base) => out.push(match syllable_frontness {
                Some(f) => allomorph(base, f),
                None => base,
            }),
            None if c.is_ascii_digit() => {}
            None => out.push(c),
        }
    }
}

/// Stage-by-stage record of how a word was transliterated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordTrace {
    pub input: String,
    /// Lowercased word after ligature substitution.
    pub ligated: String,
    pub syllables: Vec<SyllableTrace>,
    pub output: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyllableTrace {
    pub text: String,
    pub nucleus: Option<char>,
    pub output: String,
}

/// Transliterate `word` (any case) and record every intermediate stage.
///
/// `trace.output` always equals `transliterate_word` of the lowercased word.
pub fn explain_word(word: &str) -> WordTrace {
    let lowered = turkish_lowercase(word);
    let ligated = apply_ligatures(&lowered);
    let mut state = WordState::default();

    let syllables: Vec<SyllableTrace> = syllabify(&ligated)
        .into_iter()
        .enumerate()
        .map(|(index, text)| {
            let mut output = String::new();
            render_syllable(&text, index, &mut state, &mut output);
            SyllableTrace {
                nucleus: nucleus(&text),
                text,
                output,
            }
        })
        .collect();

    let output = syllables.iter().map(|s| s.output.as_str()).collect();
    WordTrace {
        input: word.to_string(),
        ligated,
        syllables,
        output,
    }
}
