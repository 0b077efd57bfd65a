//! Text buffer addressed in UTF-16 storage units.
//!
//! Runes live outside the BMP, so each one occupies a surrogate pair. Every
//! position handed to the buffer is clamped to its length and snapped to a
//! code-point boundary; delete-backward removes a whole pair at once.

use tracing::debug;

fn is_high_surrogate(u: u16) -> bool {
    (0xD800..=0xDBFF).contains(&u)
}

fn is_low_surrogate(u: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&u)
}

/// Editable text with a selection, both measured in UTF-16 units.
///
/// A collapsed selection (`start == end`) is the cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    units: Vec<u16>,
    sel_start: usize,
    sel_end: usize,
}

impl EditBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer holding `text` with the cursor at the end.
    pub fn from_text(text: &str) -> Self {
        Self::from_utf16(text.encode_utf16().collect())
    }

    /// Buffer over raw units, which may contain unpaired surrogates.
    pub fn from_utf16(units: Vec<u16>) -> Self {
        let end = units.len();
        Self {
            units,
            sel_start: end,
            sel_end: end,
        }
    }

    /// Contents as a string; unpaired surrogates become U+FFFD.
    pub fn text(&self) -> String {
        String::from_utf16_lossy(&self.units)
    }

    pub fn units(&self) -> &[u16] {
        &self.units
    }

    /// Length in UTF-16 units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.sel_start
    }

    pub fn selection(&self) -> (usize, usize) {
        (self.sel_start, self.sel_end)
    }

    pub fn has_selection(&self) -> bool {
        self.sel_start != self.sel_end
    }

    /// Set the selection. Bounds are ordered, clamped, and widened outward
    /// so neither lands inside a surrogate pair.
    pub fn select(&mut self, start: usize, end: usize) {
        let (start, end) = self.normalize(start, end);
        self.sel_start = start;
        self.sel_end = end;
    }

    pub fn clear(&mut self) {
        self.units.clear();
        self.sel_start = 0;
        self.sel_end = 0;
    }

    /// Splice `text` in at `cursor` and return the advanced cursor.
    ///
    /// The cursor moves by the inserted length in UTF-16 units and the
    /// selection collapses onto it.
    pub fn insert_at(&mut self, cursor: usize, text: &str) -> usize {
        let at = self.snap_back(cursor.min(self.units.len()));
        let inserted: Vec<u16> = text.encode_utf16().collect();
        let new_cursor = at + inserted.len();
        self.units.splice(at..at, inserted);
        self.collapse(new_cursor);
        new_cursor
    }

    /// Replace the current selection with `text` (plain insert when the
    /// selection is collapsed).
    pub fn replace_selection(&mut self, text: &str) -> usize {
        let (start, end) = self.selection();
        self.units.drain(start..end);
        self.insert_at(start, text)
    }

    /// Delete `start..end` when non-empty, otherwise the code point before
    /// `start`. Returns the new cursor.
    ///
    /// A preceding surrogate pair is removed as one unit of editing. An
    /// unpaired surrogate is removed alone. At position 0 with nothing
    /// selected this is a no-op.
    pub fn delete_backward(&mut self, start: usize, end: usize) -> usize {
        let (start, end) = self.normalize(start, end);

        if start != end {
            self.units.drain(start..end);
            self.collapse(start);
            return start;
        }
        if start == 0 {
            self.collapse(0);
            return 0;
        }

        let width = if start >= 2
            && is_high_surrogate(self.units[start - 2])
            && is_low_surrogate(self.units[start - 1])
        {
            2
        } else {
            if is_high_surrogate(self.units[start - 1]) || is_low_surrogate(self.units[start - 1])
            {
                debug!(at = start, "unpaired surrogate, removing one unit");
            }
            1
        };
        let new_cursor = start - width;
        self.units.drain(new_cursor..start);
        self.collapse(new_cursor);
        new_cursor
    }

    /// Delete the selection or the code point before the cursor.
    pub fn backspace(&mut self) -> usize {
        let (start, end) = self.selection();
        self.delete_backward(start, end)
    }

    fn collapse(&mut self, at: usize) {
        self.sel_start = at;
        self.sel_end = at;
    }

    fn normalize(&self, a: usize, b: usize) -> (usize, usize) {
        let len = self.units.len();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        (self.snap_back(lo.min(len)), self.snap_forward(hi.min(len)))
    }

    /// Move a position that splits a surrogate pair back to the pair's start.
    fn snap_back(&self, pos: usize) -> usize {
        if self.splits_pair(pos) {
            pos - 1
        } else {
            pos
        }
    }

    /// Move a position that splits a surrogate pair past the pair's end.
    fn snap_forward(&self, pos: usize) -> usize {
        if self.splits_pair(pos) {
            pos + 1
        } else {
            pos
        }
    }

    fn splits_pair(&self, pos: usize) -> bool {
        pos > 0
            && pos < self.units.len()
            && is_high_surrogate(self.units[pos - 1])
            && is_low_surrogate(self.units[pos])
    }
}

/// Insert `text` into `buffer` at `cursor` (UTF-16 units).
///
/// Returns the new buffer and the cursor advanced past the inserted text.
pub fn insert_at(buffer: &str, cursor: usize, text: &str) -> (String, usize) {
    let mut b = EditBuffer::from_text(buffer);
    let cursor = b.insert_at(cursor, text);
    (b.text(), cursor)
}

/// Delete the selection `start..end`, or the code point before `start` when
/// the selection is empty. Positions are UTF-16 units.
pub fn delete_backward(buffer: &str, start: usize, end: usize) -> (String, usize) {
    let mut b = EditBuffer::from_text(buffer);
    let cursor = b.delete_backward(start, end);
    (b.text(), cursor)
}
