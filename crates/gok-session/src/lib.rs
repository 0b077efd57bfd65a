//! Interactive editing for the transliterator.
//!
//! `EditorSession` owns the Turkish input buffer and re-transliterates it on
//! every edit, returning responses the UI layer renders directly. The
//! surrogate-aware buffer operations are also exposed as free functions.

mod buffer;
mod event_handlers;
mod types;

#[cfg(test)]
mod tests;

use gok_core::{transliterate_with, TranslitOptions};

pub use buffer::{delete_backward, insert_at, EditBuffer};
pub use types::{EditEvent, EditResponse};

/// Input buffer plus the transliteration of its current contents.
pub struct EditorSession {
    input: EditBuffer,
    options: TranslitOptions,
    output: String,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    pub fn new() -> Self {
        Self::with_options(TranslitOptions::default())
    }

    pub fn with_options(options: TranslitOptions) -> Self {
        Self {
            input: EditBuffer::new(),
            options,
            output: String::new(),
        }
    }

    /// Session preloaded with `text`, cursor at the end.
    pub fn with_text(text: &str, options: TranslitOptions) -> Self {
        let mut s = Self::with_options(options);
        s.input = EditBuffer::from_text(text);
        s.refresh();
        s
    }

    pub fn input(&self) -> String {
        self.input.text()
    }

    pub fn buffer(&self) -> &EditBuffer {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn options(&self) -> &TranslitOptions {
        &self.options
    }

    /// Swap options and re-transliterate the current input.
    pub fn set_options(&mut self, options: TranslitOptions) {
        self.options = options;
        self.refresh();
    }

    fn refresh(&mut self) {
        self.output = transliterate_with(&self.input.text(), &self.options);
    }
}
