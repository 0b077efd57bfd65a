mod buffer;

use super::{EditEvent, EditResponse, EditorSession};

/// Feed `text` one character at a time, as a keyboard would.
pub(super) fn type_string(session: &mut EditorSession, text: &str) -> Option<EditResponse> {
    let mut last = None;
    for c in text.chars() {
        let event = if c == '\n' {
            EditEvent::Enter
        } else {
            EditEvent::Insert(c.to_string())
        };
        last = Some(session.handle_event(event));
    }
    last
}
