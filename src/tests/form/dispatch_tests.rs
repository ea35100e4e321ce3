use std::sync::Arc;

use crate::{
    domain::{DataType, FieldConfig, FieldValue, SelectOption},
    form::field::{FieldState, components::ComponentKind},
};
use pretty_assertions::assert_eq;

#[test]
fn every_data_type_maps_to_one_control() {
    let table = [
        (DataType::Text, ComponentKind::TextInput),
        (DataType::Number, ComponentKind::NumberInput),
        (DataType::Email, ComponentKind::EmailInput),
        (DataType::Tel, ComponentKind::TelInput),
        (DataType::Password, ComponentKind::PasswordInput),
        (DataType::Textarea, ComponentKind::TextArea),
        (DataType::Select, ComponentKind::Select),
        (DataType::Unknown, ComponentKind::TextInput),
    ];
    for (data_type, expected) in table {
        assert_eq!(ComponentKind::for_data_type(data_type), expected, "{data_type}");
    }
}

#[test]
fn unrecognised_tag_renders_as_text() {
    assert_eq!(
        ComponentKind::for_data_type(DataType::from_tag("color")),
        ComponentKind::TextInput
    );
}

#[test]
fn field_state_builds_control_for_its_data_type() {
    let number = FieldState::new(Arc::new(FieldConfig::new("qty", "Quantity", DataType::Number)));
    assert_eq!(number.component_kind(), ComponentKind::NumberInput);

    let notes = FieldState::new(Arc::new(FieldConfig::new("notes", "Notes", DataType::Textarea)));
    assert_eq!(notes.component_kind(), ComponentKind::TextArea);

    let mode = FieldState::with_value(
        Arc::new(
            FieldConfig::new("mode", "Mode", DataType::Select).with_options(vec![
                SelectOption::new("air", "Air"),
                SelectOption::new("sea", "Sea"),
            ]),
        ),
        &FieldValue::text("sea"),
    );
    assert_eq!(mode.component_kind(), ComponentKind::Select);
    assert_eq!(mode.value(), FieldValue::text("sea"));

    let secret = FieldState::with_value(
        Arc::new(FieldConfig::new("pin", "PIN", DataType::Password)),
        &FieldValue::text("1234"),
    );
    assert_eq!(secret.component_kind(), ComponentKind::PasswordInput);
    assert_ne!(secret.display_value(), "1234");
}
