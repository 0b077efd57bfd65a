/// An edit applied to the Turkish input buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditEvent {
    /// Typed or pasted text; replaces the selection.
    Insert(String),
    Backspace,
    /// Insert a line break at the cursor.
    Enter,
    /// Empty the input (and therefore the output).
    Clear,
    /// Move the selection; `start == end` places the cursor.
    Select { start: usize, end: usize },
}

/// Result of one edit: the state the caller should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditResponse {
    /// Whether the input text changed.
    pub changed: bool,
    /// Transliteration of the whole input after the edit.
    pub output: String,
    /// Cursor in UTF-16 units.
    pub cursor: usize,
}
