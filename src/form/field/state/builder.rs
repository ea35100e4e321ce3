use std::sync::Arc;

use crate::domain::{FieldConfig, FieldValue};
use crate::form::field::components::build_component;

use super::FieldState;

impl FieldState {
    pub fn new(config: Arc<FieldConfig>) -> Self {
        let component = build_component(&config);
        Self {
            config,
            component,
            touched: false,
        }
    }

    pub fn with_value(config: Arc<FieldConfig>, value: &FieldValue) -> Self {
        let mut state = Self::new(config);
        state.component.seed_value(value);
        state
    }

    /// Binds the field to a new config. A different allocation replaces the
    /// slot with a fresh, empty and untouched state; rebinding to the same
    /// `Arc` is a no-op. Returns whether the slot was replaced.
    pub fn rebind(&mut self, config: Arc<FieldConfig>) -> bool {
        if Arc::ptr_eq(&self.config, &config) {
            return false;
        }
        *self = Self::new(config);
        true
    }
}
