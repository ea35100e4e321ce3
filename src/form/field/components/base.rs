use crossterm::event::KeyEvent;

use crate::domain::{DataType, FieldValue, SelectOption};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    TextInput,
    EmailInput,
    TelInput,
    PasswordInput,
    NumberInput,
    TextArea,
    Select,
}

impl ComponentKind {
    /// Every data type maps to exactly one control; unknown tags render as text.
    pub fn for_data_type(data_type: DataType) -> Self {
        match data_type {
            DataType::Text | DataType::Unknown => ComponentKind::TextInput,
            DataType::Email => ComponentKind::EmailInput,
            DataType::Tel => ComponentKind::TelInput,
            DataType::Password => ComponentKind::PasswordInput,
            DataType::Number => ComponentKind::NumberInput,
            DataType::Textarea => ComponentKind::TextArea,
            DataType::Select => ComponentKind::Select,
        }
    }

    pub fn is_masked(self) -> bool {
        matches!(self, ComponentKind::PasswordInput)
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, ComponentKind::TextArea)
    }
}

pub(crate) trait FieldComponent: FieldComponentClone + std::fmt::Debug + Send {
    fn kind(&self) -> ComponentKind;
    fn display_value(&self) -> String;
    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let _ = key;
        false
    }
    fn seed_value(&mut self, value: &FieldValue);
    fn current_value(&self) -> FieldValue;
    fn clear(&mut self);

    fn select_state(&self) -> Option<SelectStateRef<'_>> {
        None
    }
}

pub(crate) trait FieldComponentClone {
    fn clone_box(&self) -> Box<dyn FieldComponent>;
}

impl<T> FieldComponentClone for T
where
    T: 'static + FieldComponent + Clone,
{
    fn clone_box(&self) -> Box<dyn FieldComponent> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn FieldComponent> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

#[derive(Debug, Clone)]
pub struct SelectStateRef<'a> {
    pub options: &'a [SelectOption],
    pub selected: Option<usize>,
}
