//! Entry points for callers embedding the engine (editors, the CLI).

mod engine;
mod types;

pub use engine::GokEngine;
pub use types::GokError;

use std::path::Path;

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

pub fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Install a settings file as the process-wide configuration.
///
/// Must run before anything reads the settings; a second call fails.
pub fn settings_load_config(path: &Path) -> Result<(), GokError> {
    let content = std::fs::read_to_string(path).map_err(|e| GokError::Io {
        msg: format!("{}: {e}", path.display()),
    })?;
    gok_core::settings::init_custom(content)
        .map_err(|e| GokError::InvalidData { msg: e.to_string() })?;
    Ok(())
}

pub fn settings_default_config() -> String {
    gok_core::settings::DEFAULT_SETTINGS_TOML.to_string()
}
