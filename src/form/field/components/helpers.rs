use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub(crate) const MASK_CHAR: char = '•';

/// Shared single-line editing: printable characters append, Backspace pops and
/// Delete clears. Control chords are left to the keymap.
pub(crate) fn handle_text_edit(buffer: &mut String, key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(ch) => {
            if key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
            {
                return false;
            }
            buffer.push(ch);
            true
        }
        KeyCode::Backspace => buffer.pop().is_some(),
        KeyCode::Delete => {
            if buffer.is_empty() {
                return false;
            }
            buffer.clear();
            true
        }
        _ => false,
    }
}

pub(crate) fn mask(buffer: &str) -> String {
    std::iter::repeat_n(MASK_CHAR, buffer.chars().count()).collect()
}
