//! Input controller: the editable line, session history, and key handling.

use folio_types::input::{Key, KeyEvent};

// ---------------------------------------------------------------------------
// Editable line
// ---------------------------------------------------------------------------

/// Single-line text buffer with a caret (char index).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputLine {
    text: String,
    caret: usize,
}

impl InputLine {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Caret position in chars, `0..=char_count`.
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Replace the text and put the caret at the end.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.caret = self.text.chars().count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.caret = 0;
    }

    pub fn insert(&mut self, ch: char) {
        let at = self.byte_index(self.caret);
        self.text.insert(at, ch);
        self.caret += 1;
    }

    pub fn backspace(&mut self) {
        if self.caret == 0 {
            return;
        }
        self.caret -= 1;
        let at = self.byte_index(self.caret);
        self.text.remove(at);
    }

    pub fn delete(&mut self) {
        if self.caret < self.text.chars().count() {
            let at = self.byte_index(self.caret);
            self.text.remove(at);
        }
    }

    pub fn left(&mut self) {
        self.caret = self.caret.saturating_sub(1);
    }

    pub fn right(&mut self) {
        self.caret = (self.caret + 1).min(self.text.chars().count());
    }

    pub fn home(&mut self) {
        self.caret = 0;
    }

    pub fn end(&mut self) {
        self.caret = self.text.chars().count();
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map_or(self.text.len(), |(i, _)| i)
    }
}

// ---------------------------------------------------------------------------
// Session history
// ---------------------------------------------------------------------------

/// Submitted lines and the browsing cursor.
///
/// `index == entries.len()` means a fresh line is being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    entries: Vec<String>,
    index: usize,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries, oldest first.
    pub fn history(&self) -> &[String] {
        &self.entries
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Append an entry (duplicates kept) and stop browsing.
    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
        self.index = self.entries.len();
    }

    /// Step to an older entry. `None` at the oldest entry or with no history.
    pub fn older(&mut self) -> Option<&str> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        self.entries.get(self.index).map(String::as_str)
    }

    /// Step to a newer entry, or back to the fresh line (`None`).
    pub fn newer(&mut self) -> Option<&str> {
        if self.index + 1 < self.entries.len() {
            self.index += 1;
            self.entries.get(self.index).map(String::as_str)
        } else {
            self.index = self.entries.len();
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

/// What the terminal must do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerAction {
    /// Dispatch this (trimmed, possibly empty) line.
    Submit(String),
    /// Run autocomplete on the current text.
    Complete,
    /// Empty the output log without dispatching.
    ClearScreen,
}

/// Result of handling one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyResponse {
    /// The host must suppress its native handling of this key.
    pub prevent_default: bool,
    pub action: Option<ControllerAction>,
}

impl KeyResponse {
    fn suppressed(action: Option<ControllerAction>) -> Self {
        Self {
            prevent_default: true,
            action,
        }
    }

    fn passthrough() -> Self {
        Self {
            prevent_default: false,
            action: None,
        }
    }
}

/// Owns the input element's state and interprets key events.
#[derive(Debug, Clone, Default)]
pub struct InputController {
    line: InputLine,
    session: Session,
    focused: bool,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&self) -> &InputLine {
        &self.line
    }

    /// Mutable access for autocomplete rewrites.
    pub fn line_mut(&mut self) -> &mut InputLine {
        &mut self.line
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Interpret one key press.
    pub fn handle_key(&mut self, event: KeyEvent) -> KeyResponse {
        if event.is_clear_screen() {
            return KeyResponse::suppressed(Some(ControllerAction::ClearScreen));
        }
        match event.key {
            Key::Enter => {
                let line = self.line.text().trim().to_string();
                if !line.is_empty() {
                    self.session.push(line.clone());
                }
                self.line.clear();
                KeyResponse::suppressed(Some(ControllerAction::Submit(line)))
            },
            Key::ArrowUp => {
                if let Some(entry) = self.session.older() {
                    self.line.set(entry);
                }
                KeyResponse::suppressed(None)
            },
            Key::ArrowDown => {
                match self.session.newer() {
                    Some(entry) => self.line.set(entry),
                    None => self.line.clear(),
                }
                KeyResponse::suppressed(None)
            },
            Key::Tab => KeyResponse::suppressed(Some(ControllerAction::Complete)),
            // Native editing.
            Key::Char(ch) if !event.modifiers.ctrl && !event.modifiers.meta => {
                self.line.insert(ch);
                KeyResponse::passthrough()
            },
            Key::Backspace => {
                self.line.backspace();
                KeyResponse::passthrough()
            },
            Key::Delete => {
                self.line.delete();
                KeyResponse::passthrough()
            },
            Key::ArrowLeft => {
                self.line.left();
                KeyResponse::passthrough()
            },
            Key::ArrowRight => {
                self.line.right();
                KeyResponse::passthrough()
            },
            Key::Home => {
                self.line.home();
                KeyResponse::passthrough()
            },
            Key::End => {
                self.line.end();
                KeyResponse::passthrough()
            },
            Key::Char(_) | Key::Escape => KeyResponse::passthrough(),
        }
    }
}
