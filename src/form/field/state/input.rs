use crossterm::event::KeyEvent;

use crate::domain::FieldValue;

use super::FieldState;

impl FieldState {
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if self.component.handle_key(key) {
            self.touched = true;
            true
        } else {
            false
        }
    }

    /// Programmatic edit; counts as user interaction.
    pub fn set_value(&mut self, value: &FieldValue) {
        self.component.seed_value(value);
        self.touched = true;
    }

    pub fn mark_touched(&mut self) {
        self.touched = true;
    }
}
