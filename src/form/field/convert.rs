use crate::domain::{FieldValue, format_number};

/// Buffer contents for a seeded value; `Null` clears the buffer.
pub(super) fn value_to_buffer(value: &FieldValue) -> String {
    value.as_text()
}

/// Reads a number buffer back into a value. Text that does not parse is kept
/// as text so the validators still see what the user typed.
pub(super) fn number_value(buffer: &str) -> FieldValue {
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return FieldValue::Null;
    }
    match trimmed.parse::<f64>() {
        Ok(num) if num.is_finite() => FieldValue::Number(num),
        _ => FieldValue::Text(buffer.to_string()),
    }
}

pub(super) fn accepts_number_char(ch: char) -> bool {
    ch.is_ascii_digit() || matches!(ch, '.' | '-' | '+' | 'e' | 'E')
}

pub(super) fn adjust_numeric_value(buffer: &mut String, delta: f64) -> bool {
    let trimmed = buffer.trim();
    let current = if trimmed.is_empty() {
        0.0
    } else {
        match trimmed.parse::<f64>() {
            Ok(num) => num,
            Err(_) => return false,
        }
    };
    *buffer = format_number(current + delta);
    true
}
