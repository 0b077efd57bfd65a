use tracing::{debug, debug_span};

use super::types::{EditEvent, EditResponse};
use super::EditorSession;

impl EditorSession {
    /// Apply one edit and return what the caller should display.
    pub fn handle_event(&mut self, event: EditEvent) -> EditResponse {
        let _span = debug_span!("handle_event", ?event).entered();

        let before = self.input.units().to_vec();

        match event {
            EditEvent::Insert(text) => {
                self.input.replace_selection(&text);
            }
            EditEvent::Enter => {
                self.input.replace_selection("\n");
            }
            EditEvent::Backspace => {
                self.input.backspace();
            }
            EditEvent::Clear => self.input.clear(),
            EditEvent::Select { start, end } => self.input.select(start, end),
        }

        let changed = self.input.units() != before.as_slice();
        if changed {
            self.refresh();
        }
        debug!(changed, cursor = self.input.cursor());

        EditResponse {
            changed,
            output: self.output.clone(),
            cursor: self.input.cursor(),
        }
    }
}
