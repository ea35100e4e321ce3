use crossterm::event::{KeyCode, KeyEvent};

use crate::domain::FieldValue;

use super::helpers::handle_text_edit;
use super::{ComponentKind, FieldComponent};
use crate::form::field::convert::value_to_buffer;

/// Multi-line text; Enter inserts a line break instead of moving focus.
#[derive(Debug, Clone, Default)]
pub struct TextAreaComponent {
    buffer: String,
}

impl TextAreaComponent {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FieldComponent for TextAreaComponent {
    fn kind(&self) -> ComponentKind {
        ComponentKind::TextArea
    }

    fn display_value(&self) -> String {
        self.buffer.clone()
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Enter => {
                self.buffer.push('\n');
                true
            }
            _ => handle_text_edit(&mut self.buffer, key),
        }
    }

    fn seed_value(&mut self, value: &FieldValue) {
        self.buffer = value_to_buffer(value);
    }

    fn current_value(&self) -> FieldValue {
        if self.buffer.is_empty() {
            FieldValue::Null
        } else {
            FieldValue::Text(self.buffer.clone())
        }
    }

    fn clear(&mut self) {
        self.buffer.clear();
    }
}
