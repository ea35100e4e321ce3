use crate::domain::FieldValue;
use crate::form::field::components::SelectStateRef;
use crate::validation;

use super::FieldState;

impl FieldState {
    pub fn value(&self) -> FieldValue {
        self.component.current_value()
    }

    pub fn display_value(&self) -> String {
        self.component.display_value()
    }

    pub fn select_state(&self) -> Option<SelectStateRef<'_>> {
        self.component.select_state()
    }

    pub fn is_valid(&self) -> bool {
        validation::is_valid(Some(&self.config), &self.value(), self.touched)
    }

    /// Message to show under the control, respecting the touched state.
    pub fn error(&self) -> Option<String> {
        validation::field_error(Some(&self.config), &self.value(), self.touched)
    }

    pub fn reset(&mut self) {
        self.component.clear();
        self.touched = false;
    }
}
