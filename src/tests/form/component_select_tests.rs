use crate::{
    domain::{FieldValue, SelectOption},
    form::field::components::{FieldComponent, SelectComponent},
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("air", "Air freight"),
        SelectOption::new("sea", "Sea freight"),
    ]
}

#[test]
fn starts_unselected() {
    let component = SelectComponent::new(&options());
    assert_eq!(component.current_value(), FieldValue::Null);
    let state = component.select_state().expect("select state");
    assert_eq!(state.selected, None);
    assert_eq!(state.options.len(), 2);
}

#[test]
fn cycles_and_wraps() {
    let mut component = SelectComponent::new(&options());
    assert!(component.handle_key(&key(KeyCode::Right)));
    assert_eq!(component.current_value(), FieldValue::text("air"));
    assert_eq!(component.display_value(), "Air freight");
    assert!(component.handle_key(&key(KeyCode::Char(' '))));
    assert!(component.handle_key(&key(KeyCode::Right)));
    assert_eq!(component.current_value(), FieldValue::text("air"));
    assert!(component.handle_key(&key(KeyCode::Left)));
    assert_eq!(component.current_value(), FieldValue::text("sea"));
}

#[test]
fn backspace_clears_selection() {
    let mut component = SelectComponent::new(&options());
    component.seed_value(&FieldValue::text("sea"));
    assert!(component.handle_key(&key(KeyCode::Backspace)));
    assert_eq!(component.current_value(), FieldValue::Null);
    assert!(!component.handle_key(&key(KeyCode::Backspace)));
}

#[test]
fn unknown_seed_stays_unselected() {
    let mut component = SelectComponent::new(&options());
    component.seed_value(&FieldValue::text("rail"));
    assert_eq!(component.current_value(), FieldValue::Null);
}

#[test]
fn empty_options_ignore_keys() {
    let mut component = SelectComponent::new(&[]);
    assert!(!component.handle_key(&key(KeyCode::Right)));
}
