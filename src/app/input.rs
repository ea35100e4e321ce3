use crossterm::event::{KeyEvent, KeyModifiers};

use crate::form::FormCommand;

use super::keymap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyAction {
    Submit,
    Quit,
    ResetStatus,
    ResetForm,
    ToggleGrid,
    Retry,
    FieldStep(i32),
    SectionStep(i32),
    PageStep(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AppCommand {
    Submit,
    Quit,
    ResetStatus,
    ResetForm,
    ToggleGrid,
    Retry,
    PageStep(i32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CommandDispatch {
    Form(FormCommand),
    App(AppCommand),
    Input(KeyEvent),
    None,
}

pub(crate) fn classify(key: &KeyEvent) -> CommandDispatch {
    match keymap::classify_key(key) {
        Some(KeyAction::Submit) => CommandDispatch::App(AppCommand::Submit),
        Some(KeyAction::Quit) => CommandDispatch::App(AppCommand::Quit),
        Some(KeyAction::ResetStatus) => CommandDispatch::App(AppCommand::ResetStatus),
        Some(KeyAction::ResetForm) => CommandDispatch::App(AppCommand::ResetForm),
        Some(KeyAction::ToggleGrid) => CommandDispatch::App(AppCommand::ToggleGrid),
        Some(KeyAction::Retry) => CommandDispatch::App(AppCommand::Retry),
        Some(KeyAction::PageStep(delta)) => CommandDispatch::App(AppCommand::PageStep(delta)),
        Some(KeyAction::FieldStep(delta)) if delta < 0 => {
            CommandDispatch::Form(FormCommand::FocusPrevField)
        }
        Some(KeyAction::FieldStep(_)) => CommandDispatch::Form(FormCommand::FocusNextField),
        Some(KeyAction::SectionStep(delta)) => {
            CommandDispatch::Form(FormCommand::FocusNextSection(delta))
        }
        None if key.modifiers.contains(KeyModifiers::CONTROL) => CommandDispatch::None,
        None => CommandDispatch::Input(*key),
    }
}
