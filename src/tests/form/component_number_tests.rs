use crate::{
    domain::FieldValue,
    form::field::components::{FieldComponent, NumberComponent},
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn arrows_step_the_value() {
    let mut component = NumberComponent::new();
    assert!(component.handle_key(&key(KeyCode::Right)));
    assert_eq!(component.display_value(), "1");
    assert!(component.handle_key(&key(KeyCode::Left)));
    assert!(component.handle_key(&key(KeyCode::Left)));
    assert_eq!(component.current_value(), FieldValue::Number(-1.0));
}

#[test]
fn rejects_letters() {
    let mut component = NumberComponent::new();
    assert!(!component.handle_key(&key(KeyCode::Char('a'))));
    assert!(component.handle_key(&key(KeyCode::Char('4'))));
    assert!(component.handle_key(&key(KeyCode::Char('2'))));
    assert_eq!(component.current_value(), FieldValue::Number(42.0));
}

#[test]
fn zero_is_a_value() {
    let mut component = NumberComponent::new();
    component.seed_value(&FieldValue::Number(0.0));
    assert_eq!(component.display_value(), "0");
    assert!(!component.current_value().is_empty());
}
