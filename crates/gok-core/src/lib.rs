//! Turkish to Old Turkic (Orkhon) transliteration core.
//!
//! Everything here is a pure function over immutable tables; the only global
//! is the write-once [`settings`] singleton.

pub mod alphabet;
pub mod numeric;
pub mod settings;
pub mod syllable;
pub mod translit;
pub mod unicode;

pub use numeric::{expand_numbers, number_to_words};
pub use syllable::syllabify;
pub use translit::{
    explain_word, transliterate, transliterate_with, transliterate_word, TranslitOptions,
    WordTrace,
};
