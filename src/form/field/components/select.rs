use crossterm::event::{KeyCode, KeyEvent};

use crate::domain::{FieldValue, SelectOption};

use super::{ComponentKind, FieldComponent, SelectStateRef};

/// Option picker. Starts with nothing selected so a required select reports
/// an empty value until the user picks one.
#[derive(Debug, Clone)]
pub struct SelectComponent {
    options: Vec<SelectOption>,
    selected: Option<usize>,
}

impl SelectComponent {
    pub fn new(options: &[SelectOption]) -> Self {
        Self {
            options: options.to_vec(),
            selected: None,
        }
    }

    fn step(&mut self, forward: bool) -> bool {
        let len = self.options.len();
        if len == 0 {
            return false;
        }
        self.selected = Some(match (self.selected, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(idx), true) => (idx + 1) % len,
            (Some(0), false) => len - 1,
            (Some(idx), false) => idx - 1,
        });
        true
    }
}

impl FieldComponent for SelectComponent {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Select
    }

    fn display_value(&self) -> String {
        self.selected
            .and_then(|idx| self.options.get(idx))
            .map(|option| option.label.clone())
            .unwrap_or_default()
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Left => self.step(false),
            KeyCode::Right | KeyCode::Char(' ') => self.step(true),
            KeyCode::Backspace | KeyCode::Delete => self.selected.take().is_some(),
            _ => false,
        }
    }

    fn seed_value(&mut self, value: &FieldValue) {
        let wanted = value.as_text();
        self.selected = if wanted.is_empty() {
            None
        } else {
            self.options.iter().position(|option| option.value == wanted)
        };
    }

    fn current_value(&self) -> FieldValue {
        self.selected
            .and_then(|idx| self.options.get(idx))
            .map(|option| FieldValue::Text(option.value.clone()))
            .unwrap_or(FieldValue::Null)
    }

    fn clear(&mut self) {
        self.selected = None;
    }

    fn select_state(&self) -> Option<SelectStateRef<'_>> {
        Some(SelectStateRef {
            options: &self.options,
            selected: self.selected,
        })
    }
}
