use crossterm::event::{KeyCode, KeyEvent};

use crate::domain::FieldValue;

use super::helpers::handle_text_edit;
use super::{ComponentKind, FieldComponent};
use crate::form::field::convert::{
    accepts_number_char, adjust_numeric_value, number_value, value_to_buffer,
};

#[derive(Debug, Clone, Default)]
pub struct NumberComponent {
    buffer: String,
}

impl NumberComponent {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FieldComponent for NumberComponent {
    fn kind(&self) -> ComponentKind {
        ComponentKind::NumberInput
    }

    fn display_value(&self) -> String {
        self.buffer.clone()
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Left => adjust_numeric_value(&mut self.buffer, -1.0),
            KeyCode::Right => adjust_numeric_value(&mut self.buffer, 1.0),
            KeyCode::Char(ch) if !accepts_number_char(ch) => false,
            _ => handle_text_edit(&mut self.buffer, key),
        }
    }

    fn seed_value(&mut self, value: &FieldValue) {
        self.buffer = value_to_buffer(value);
    }

    fn current_value(&self) -> FieldValue {
        number_value(&self.buffer)
    }

    fn clear(&mut self) {
        self.buffer.clear();
    }
}
