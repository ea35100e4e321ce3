use std::sync::Arc;

use crate::{
    domain::{
        DataType, EntityData, FieldConfig, FieldValue, Layout, PageConfig, SelectOption,
        Validation,
    },
    form::{
        FormCommand, FormState, SectionSpec, apply_command, field::components::ComponentKind,
        initial_value,
    },
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;

fn page() -> PageConfig {
    PageConfig {
        fields: vec![
            Arc::new(
                FieldConfig::new("email", "Email", DataType::Email)
                    .with_layout(Layout::in_section("leftSection", 1.0))
                    .with_validation(Validation::required()),
            ),
            Arc::new(
                FieldConfig::new("qty", "Quantity", DataType::Number)
                    .with_layout(Layout::in_section("leftSection", 2.0))
                    .with_placeholder("1"),
            ),
            Arc::new(
                FieldConfig::new("mode", "Mode", DataType::Select)
                    .with_layout(Layout::in_section("rightSection", 1.0))
                    .with_options(vec![
                        SelectOption::new("air", "Air"),
                        SelectOption::new("sea", "Sea"),
                    ]),
            ),
        ],
    }
}

fn entity() -> EntityData {
    let mut values = EntityData::new();
    values.insert("email".into(), FieldValue::text("a@example.com"));
    values.insert("qty".into(), FieldValue::Null);
    values.insert("mode".into(), FieldValue::text("sea"));
    values
}

#[test]
fn seeds_from_entity_then_placeholder() {
    let form = FormState::from_page(&page(), Some(&entity()), &SectionSpec::defaults());
    assert_eq!(form.value("email"), Some(FieldValue::text("a@example.com")));
    assert_eq!(form.value("qty"), Some(FieldValue::Number(1.0)));
    assert_eq!(form.value("mode"), Some(FieldValue::text("sea")));
    assert!(form.fields().all(|field| !field.touched));
}

#[test]
fn initial_value_falls_back_to_empty() {
    let config = FieldConfig::new("note", "Note", DataType::Text);
    assert_eq!(initial_value(&config, None), FieldValue::Null);
}

#[test]
fn typing_routes_to_focused_field() {
    let mut form = FormState::from_page(&page(), None, &SectionSpec::defaults());
    let edited = form.handle_key(&KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));
    assert_eq!(edited.as_deref(), Some("email"));
    apply_command(
        &mut form,
        FormCommand::FieldEdited {
            name: "email".to_string(),
        },
    );
    let field = form.field("email").expect("email field");
    assert!(field.touched);
    assert_eq!(
        field.error().as_deref(),
        Some("Please enter a valid email address")
    );
}

#[test]
fn untouched_required_field_reports_required_only() {
    let form = FormState::from_page(&page(), None, &SectionSpec::defaults());
    assert_eq!(
        form.errors(),
        vec![("email".to_string(), "Email is required".to_string())]
    );
    assert!(!form.is_valid());
    assert_eq!(form.error_count(), 1);
}

#[test]
fn entity_data_carries_id_and_every_field() {
    let form = FormState::from_page(&page(), Some(&entity()), &SectionSpec::defaults());
    let data = form.entity_data("42");
    let keys = data.keys().map(String::as_str).collect::<Vec<_>>();
    assert_eq!(keys, vec!["email", "qty", "mode", "id"]);
    assert_eq!(data["id"], FieldValue::text("42"));
}

#[test]
fn reset_clears_values_without_placeholders() {
    let mut form = FormState::from_page(&page(), Some(&entity()), &SectionSpec::defaults());
    assert!(form.set_value("mode", FieldValue::text("air")));
    form.reset();
    assert!(form.fields().all(|field| field.value().is_empty() && !field.touched));
}

#[test]
fn rebind_replaces_slot_and_skips_identical_configs() {
    let original = page();
    let mut form = FormState::from_page(&original, Some(&entity()), &SectionSpec::defaults());
    form.mark_all_touched();
    assert_eq!(form.rebind(&original), 0);
    assert!(form.field("email").is_some_and(|field| field.touched));

    let mut changed = original.clone();
    changed.fields[0] = Arc::new(
        FieldConfig::new("email", "Work email", DataType::Email)
            .with_layout(Layout::in_section("leftSection", 1.0)),
    );
    assert_eq!(form.rebind(&changed), 1);
    let email = form.field("email").expect("email field");
    assert_eq!(email.label(), "Work email");
    assert_eq!(email.value(), FieldValue::Null);
    assert!(!email.touched);
    assert_eq!(form.value("qty"), Some(FieldValue::Number(1.0)));
}

#[test]
fn rebind_to_another_data_type_drops_typed_text() {
    let mut form = FormState::from_page(&page(), None, &SectionSpec::defaults());
    assert!(form.set_value("email", "typed@x.com"));
    let mut changed = page();
    changed.fields[0] = Arc::new(
        FieldConfig::new("email", "Email", DataType::Number)
            .with_layout(Layout::in_section("leftSection", 1.0)),
    );
    assert_eq!(form.rebind(&changed), 1);
    let email = form.field("email").expect("email field");
    assert_eq!(email.component_kind(), ComponentKind::NumberInput);
    assert_eq!(email.value(), FieldValue::Null);
}

#[test]
fn set_value_on_unknown_field_is_rejected() {
    let mut form = FormState::from_page(&page(), None, &SectionSpec::defaults());
    assert!(!form.set_value("missing", "x"));
}
