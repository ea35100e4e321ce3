use std::sync::Arc;

use crate::{
    domain::{DataType, FieldConfig, Layout, PageConfig},
    form::{FormCommand, FormState, SectionSpec, apply_command},
};

fn field(name: &str, section: &str, order: f64) -> Arc<FieldConfig> {
    Arc::new(
        FieldConfig::new(name, name, DataType::Text).with_layout(Layout::in_section(section, order)),
    )
}

fn sample_form() -> FormState {
    let page = PageConfig {
        fields: vec![
            field("b", "leftSection", 2.0),
            field("a", "leftSection", 1.0),
            field("c", "rightSection", 1.0),
        ],
    };
    FormState::from_page(&page, None, &SectionSpec::defaults())
}

#[test]
fn focus_starts_on_first_ordered_field() {
    let form = sample_form();
    assert_eq!(form.focused_name(), Some("a"));
}

#[test]
fn next_field_crosses_into_next_section_and_wraps() {
    let mut form = sample_form();
    apply_command(&mut form, FormCommand::FocusNextField);
    assert_eq!(form.focused_name(), Some("b"));
    apply_command(&mut form, FormCommand::FocusNextField);
    assert_eq!(form.focused_name(), Some("c"));
    apply_command(&mut form, FormCommand::FocusNextField);
    assert_eq!(form.focused_name(), Some("a"));
}

#[test]
fn prev_field_lands_on_last_field_of_previous_section() {
    let mut form = sample_form();
    apply_command(&mut form, FormCommand::FocusNextSection(1));
    assert_eq!(form.focused_name(), Some("c"));
    apply_command(&mut form, FormCommand::FocusPrevField);
    assert_eq!(form.focused_name(), Some("b"));
}

#[test]
fn empty_sections_are_skipped() {
    let page = PageConfig {
        fields: vec![field("only", "rightSection", 1.0)],
    };
    let mut form = FormState::from_page(&page, None, &SectionSpec::defaults());
    assert_eq!(form.focused_name(), Some("only"));
    apply_command(&mut form, FormCommand::FocusNextSection(1));
    assert_eq!(form.focused_name(), Some("only"));
    apply_command(&mut form, FormCommand::FocusPrevField);
    assert_eq!(form.focused_name(), Some("only"));
}

#[test]
fn page_without_placed_fields_has_no_focus() {
    let page = PageConfig {
        fields: vec![field("floating", "sidebar", 1.0)],
    };
    let mut form = FormState::from_page(&page, None, &SectionSpec::defaults());
    assert_eq!(form.focused_name(), None);
    apply_command(&mut form, FormCommand::FocusNextField);
    assert_eq!(form.focused_name(), None);
    assert!(form.is_unplaced("floating"));
}
