//! Göktürk transliteration engine.
//!
//! Re-exports the core pipeline (`gok-core`) and the interactive editor
//! (`gok-session`) behind one crate, plus the [`api`] layer callers embed.

pub mod api;
mod trace_init;

pub use api::{GokEngine, GokError};
pub use trace_init::{init_tracing, TraceGuard, TRACE_FILE_NAME};

pub use gok_core::{
    alphabet, expand_numbers, explain_word, number_to_words, numeric, settings, syllabify,
    syllable, translit, transliterate, transliterate_with, transliterate_word, unicode,
    TranslitOptions, WordTrace,
};
pub use gok_session::{
    delete_backward, insert_at, EditBuffer, EditEvent, EditResponse, EditorSession,
};
