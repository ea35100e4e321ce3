use crate::domain::FieldValue;

use super::helpers::{handle_text_edit, mask};
use super::{ComponentKind, FieldComponent};
use crate::form::field::convert::value_to_buffer;

/// Single-line input backing text, email, tel and password fields.
#[derive(Debug, Clone)]
pub struct TextComponent {
    kind: ComponentKind,
    buffer: String,
}

impl TextComponent {
    pub fn new(kind: ComponentKind) -> Self {
        Self {
            kind,
            buffer: String::new(),
        }
    }
}

impl FieldComponent for TextComponent {
    fn kind(&self) -> ComponentKind {
        self.kind
    }

    fn display_value(&self) -> String {
        if self.kind.is_masked() {
            mask(&self.buffer)
        } else {
            self.buffer.clone()
        }
    }

    fn handle_key(&mut self, key: &crossterm::event::KeyEvent) -> bool {
        handle_text_edit(&mut self.buffer, key)
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
