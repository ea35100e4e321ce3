use crate::{
    domain::FieldValue,
    form::{
        ComponentKind,
        field::components::{FieldComponent, TextAreaComponent, TextComponent},
    },
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(component: &mut dyn FieldComponent, text: &str) {
    for ch in text.chars() {
        assert!(component.handle_key(&key(KeyCode::Char(ch))));
    }
}

#[test]
fn text_component_appends_and_pops() {
    let mut component = TextComponent::new(ComponentKind::TextInput);
    type_text(&mut component, "abc");
    assert!(component.handle_key(&key(KeyCode::Backspace)));
    assert_eq!(component.display_value(), "ab");
    assert_eq!(component.current_value(), FieldValue::text("ab"));
}

#[test]
fn empty_text_reads_as_null() {
    let mut component = TextComponent::new(ComponentKind::EmailInput);
    assert_eq!(component.current_value(), FieldValue::Null);
    type_text(&mut component, "x");
    component.clear();
    assert_eq!(component.current_value(), FieldValue::Null);
}

#[test]
fn password_display_is_masked() {
    let mut component = TextComponent::new(ComponentKind::PasswordInput);
    type_text(&mut component, "hunter2");
    assert_eq!(component.display_value(), "•••••••");
    assert_eq!(component.current_value(), FieldValue::text("hunter2"));
}

#[test]
fn control_chords_are_not_consumed() {
    let mut component = TextComponent::new(ComponentKind::TextInput);
    let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
    assert!(!component.handle_key(&ctrl_s));
    assert_eq!(component.display_value(), "");
}

#[test]
fn textarea_enter_inserts_newline() {
    let mut component = TextAreaComponent::new();
    type_text(&mut component, "one");
    assert!(component.handle_key(&key(KeyCode::Enter)));
    type_text(&mut component, "two");
    assert_eq!(component.current_value(), FieldValue::text("one\ntwo"));
}

#[test]
fn seeded_number_shows_in_text_control() {
    let mut component = TextComponent::new(ComponentKind::TelInput);
    component.seed_value(&FieldValue::Number(5551234567.0));
    assert_eq!(component.display_value(), "5551234567");
}
