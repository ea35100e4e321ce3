use std::sync::LazyLock;

use regex::Regex;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

static TEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+]?[0-9\s\-()]+$").expect("tel regex"));

pub const MIN_TEL_DIGITS: usize = 10;

/// `local@domain.tld` shape; empty input is left to the required rule.
pub fn valid_email(value: &str) -> bool {
    value.is_empty() || EMAIL.is_match(value)
}

/// Digits, spaces, hyphens and parentheses with an optional leading `+`,
/// carrying at least ten digits once the punctuation is stripped.
pub fn valid_tel(value: &str) -> bool {
    if value.is_empty() {
        return true;
    }
    TEL.is_match(value) && value.chars().filter(char::is_ascii_digit).count() >= MIN_TEL_DIGITS
}
