//! Modal dialogs: a yes/no question or a single-line text prompt, each with two buttons.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the dialog is asking about; decides the action taken on confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalKind {
    Delete { project_id: String },
    Rename { project_id: String },
    Duplicate { project_id: String },
    SetServer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Primary,
    Secondary,
}

impl Focus {
    fn toggle(self) -> Self {
        match self {
            Focus::Primary => Focus::Secondary,
            Focus::Secondary => Focus::Primary,
        }
    }
}

/// Result of a key press that closed the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Primary button; carries the text input's value for prompts.
    Confirmed(Option<String>),
    /// Secondary button or Esc.
    Dismissed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    /// Cursor position in chars.
    cursor: usize,
}

impl TextInput {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }

    fn delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            // Ctrl/Alt chords are shortcuts, not text
            KeyCode::Char(_)
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {}
            KeyCode::Char(c) => self.insert(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.value.chars().count()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.value.chars().count(),
            _ => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    pub kind: ModalKind,
    pub title: &'static str,
    pub message: String,
    pub input: Option<TextInput>,
    pub focus: Focus,
}

impl Modal {
    pub fn confirm_delete(project_id: &str, name: &str) -> Self {
        Self {
            kind: ModalKind::Delete {
                project_id: project_id.to_string(),
            },
            title: " Delete project ",
            message: format!(
                "Are you sure you want to delete the project ?\nName: {name}\nID: {project_id}"
            ),
            input: None,
            focus: Focus::Primary,
        }
    }

    pub fn rename(project_id: &str, name: &str) -> Self {
        Self {
            kind: ModalKind::Rename {
                project_id: project_id.to_string(),
            },
            title: " Rename project ",
            message: "Enter the new name of the project.".to_string(),
            input: Some(TextInput::new(name)),
            focus: Focus::Primary,
        }
    }

    pub fn duplicate(project_id: &str, name: &str) -> Self {
        Self {
            kind: ModalKind::Duplicate {
                project_id: project_id.to_string(),
            },
            title: " Duplicate project ",
            message: "Enter the name of the duplicated project".to_string(),
            input: Some(TextInput::new(name)),
            focus: Focus::Primary,
        }
    }

    pub fn set_server(current: &str) -> Self {
        Self {
            kind: ModalKind::SetServer,
            title: " Set Controller ",
            message: "Enter the address and port of the GNS3 server".to_string(),
            input: Some(TextInput::new(current)),
            focus: Focus::Primary,
        }
    }

    /// Labels of the (primary, secondary) buttons.
    pub fn buttons(&self) -> (&'static str, &'static str) {
        match self.kind {
            ModalKind::Delete { .. } => ("Yes", "No"),
            ModalKind::Rename { .. } | ModalKind::Duplicate { .. } => ("Apply", "Cancel"),
            ModalKind::SetServer => ("Set", "Clear"),
        }
    }

    fn activate(&self) -> Outcome {
        match self.focus {
            Focus::Primary => {
                Outcome::Confirmed(self.input.as_ref().map(|i| i.value().to_string()))
            }
            Focus::Secondary => Outcome::Dismissed,
        }
    }

    /// Feed a key to the dialog. `Some` means the dialog is closed.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Outcome> {
        match key.code {
            KeyCode::Esc => return Some(Outcome::Dismissed),
            KeyCode::Enter => return Some(self.activate()),
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                return None;
            }
            _ => {}
        }

        match &mut self.input {
            Some(input) => input.handle_key(key),
            None => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    return Some(Outcome::Confirmed(None));
                }
                KeyCode::Char('n') | KeyCode::Char('N') => return Some(Outcome::Dismissed),
                KeyCode::Left | KeyCode::Right => self.focus = self.focus.toggle(),
                _ => {}
            },
        }

        None
    }
}
