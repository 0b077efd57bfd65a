use std::path::Path;

use gok_core::settings::{parse_settings_toml, settings};
use gok_core::unicode::turkish_lowercase;
use gok_core::{TranslitOptions, WordTrace};
use gok_session::EditorSession;

use super::GokError;

/// Transliteration engine bound to one set of options.
///
/// `new()` reads the global settings; the other constructors take their
/// own configuration and leave the global untouched.
#[derive(Debug, Clone)]
pub struct GokEngine {
    options: TranslitOptions,
}

impl Default for GokEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GokEngine {
    pub fn new() -> Self {
        Self::with_options(TranslitOptions::from(settings()))
    }

    pub fn with_options(options: TranslitOptions) -> Self {
        Self { options }
    }

    pub fn from_settings_toml(toml: &str) -> Result<Self, GokError> {
        let s =
            parse_settings_toml(toml).map_err(|e| GokError::InvalidData { msg: e.to_string() })?;
        Ok(Self::with_options(TranslitOptions::from(&s)))
    }

    pub fn from_settings_file(path: &Path) -> Result<Self, GokError> {
        let content = std::fs::read_to_string(path).map_err(|e| GokError::Io {
            msg: format!("{}: {e}", path.display()),
        })?;
        Self::from_settings_toml(&content)
    }

    pub fn options(&self) -> &TranslitOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut TranslitOptions {
        &mut self.options
    }

    pub fn transliterate(&self, text: &str) -> String {
        gok_core::transliterate_with(text, &self.options)
    }

    /// Syllables of `word` after Turkish lowercasing.
    pub fn syllabify(&self, word: &str) -> Vec<String> {
        gok_core::syllabify(&turkish_lowercase(word))
    }

    pub fn expand_numbers(&self, text: &str) -> String {
        gok_core::expand_numbers(text)
    }

    pub fn explain(&self, word: &str) -> WordTrace {
        gok_core::explain_word(word)
    }

    /// Interactive session sharing this engine's options.
    pub fn create_session(&self) -> EditorSession {
        EditorSession::with_options(self.options.clone())
    }
}
