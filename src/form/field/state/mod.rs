mod builder;
mod input;
mod value_ops;

use std::sync::Arc;

use crate::domain::FieldConfig;

use super::components::{ComponentKind, FieldComponent};

/// Live state of one field: the config it is bound to, the control that
/// edits it and whether the user has interacted with it yet.
#[derive(Debug, Clone)]
pub struct FieldState {
    pub config: Arc<FieldConfig>,
    pub(crate) component: Box<dyn FieldComponent>,
    pub touched: bool,
}

impl FieldState {
    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn label(&self) -> &str {
        &self.config.label
    }

    pub fn component_kind(&self) -> ComponentKind {
        self.component.kind()
    }
}
