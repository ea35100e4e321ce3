use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::Deserialize;
use std::sync::LazyLock;

use super::input::KeyAction;

macro_rules! keymap_source {
    () => {
        include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/keymap/default.keymap.json"
        ))
    };
}

/// Which screen a binding is advertised on. Bindings listing no context are
/// active everywhere but left out of the help line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum KeymapContext {
    Form,
    Grid,
}

impl KeymapContext {
    fn from_str(raw: &str) -> Option<Self> {
        match raw {
            "form" => Some(KeymapContext::Form),
            "grid" => Some(KeymapContext::Grid),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct RawEntry {
    id: String,
    description: String,
    contexts: Vec<String>,
    action: RawAction,
    combos: Vec<String>,
}

#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
enum RawAction {
    Submit,
    Quit,
    ResetStatus,
    ResetForm,
    ToggleGrid,
    Retry,
    FieldStep { delta: i32 },
    SectionStep { delta: i32 },
    PageStep { delta: i32 },
}

impl RawAction {
    fn into_action(self) -> KeyAction {
        match self {
            RawAction::Submit => KeyAction::Submit,
            RawAction::Quit => KeyAction::Quit,
            RawAction::ResetStatus => KeyAction::ResetStatus,
            RawAction::ResetForm => KeyAction::ResetForm,
            RawAction::ToggleGrid => KeyAction::ToggleGrid,
            RawAction::Retry => KeyAction::Retry,
            RawAction::FieldStep { delta } => KeyAction::FieldStep(delta),
            RawAction::SectionStep { delta } => KeyAction::SectionStep(delta),
            RawAction::PageStep { delta } => KeyAction::PageStep(delta),
        }
    }
}

struct KeyBinding {
    action: KeyAction,
    contexts: Vec<KeymapContext>,
    combos: Vec<KeyPattern>,
    snippet: String,
}

impl KeyBinding {
    fn from_raw(raw: RawEntry) -> Result<Self, String> {
        let contexts = raw
            .contexts
            .iter()
            .map(|ctx| {
                KeymapContext::from_str(ctx)
                    .ok_or_else(|| format!("{}: unknown context '{ctx}'", raw.id))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let combos = raw
            .combos
            .iter()
            .map(|combo| KeyPattern::parse(combo).map_err(|err| format!("{}: {err}", raw.id)))
            .collect::<Result<Vec<_>, _>>()?;
        if combos.is_empty() {
            return Err(format!("{}: no combos declared", raw.id));
        }
        let combos_display = combos
            .iter()
            .map(|pattern| pattern.display.as_str())
            .collect::<Vec<_>>()
            .join("/");
        Ok(Self {
            action: raw.action.into_action(),
            contexts,
            snippet: format!("{combos_display} {}", raw.description),
            combos,
        })
    }

    fn matches(&self, key: &KeyEvent) -> Option<KeyAction> {
        self.combos
            .iter()
            .any(|pattern| pattern.matches(key))
            .then_some(self.action)
    }
}

struct KeyPattern {
    code: KeyCode,
    required: KeyModifiers,
    allow_shift: bool,
    display: String,
}

impl KeyPattern {
    fn parse(spec: &str) -> Result<Self, String> {
        let display = spec.trim().to_string();
        let mut tokens = display
            .split('+')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .collect::<Vec<_>>();
        let Some(key_token) = tokens.pop() else {
            return Err("combo must contain a key".into());
        };
        let code = parse_code(key_token)?;
        let mut required = KeyModifiers::empty();
        for token in tokens {
            match token.to_lowercase().as_str() {
                "ctrl" | "control" => required |= KeyModifiers::CONTROL,
                "shift" => required |= KeyModifiers::SHIFT,
                "alt" => required |= KeyModifiers::ALT,
                other => return Err(format!("unsupported modifier '{other}'")),
            }
        }
        let allow_shift = matches!(code, KeyCode::Char(_) | KeyCode::BackTab)
            && !required.contains(KeyModifiers::SHIFT);
        Ok(Self {
            code,
            required,
            allow_shift,
            display,
        })
    }

    fn matches(&self, key: &KeyEvent) -> bool {
        let code_matches = match (self.code, key.code) {
            (KeyCode::Char(expected), KeyCode::Char(actual)) => {
                actual.to_ascii_lowercase() == expected
            }
            (expected, actual) => expected == actual,
        };
        if !code_matches || !key.modifiers.contains(self.required) {
            return false;
        }
        let mut extra = key.modifiers - self.required;
        if self.allow_shift {
            extra -= KeyModifiers::SHIFT;
        }
        extra.is_empty()
    }
}

fn parse_code(token: &str) -> Result<KeyCode, String> {
    let normalized = token.to_lowercase();
    let code = match normalized.as_str() {
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "enter" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        other => {
            if let Some(num) = other.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                KeyCode::F(num)
            } else {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => KeyCode::Char(ch),
                    _ => return Err(format!("unsupported key '{token}'")),
                }
            }
        }
    };
    Ok(code)
}

static KEYMAP: LazyLock<Vec<KeyBinding>> = LazyLock::new(|| {
    let raw_entries: Vec<RawEntry> =
        serde_json::from_str(keymap_source!()).expect("invalid keymap/default.keymap.json");
    raw_entries
        .into_iter()
        .map(KeyBinding::from_raw)
        .collect::<Result<Vec<_>, _>>()
        .unwrap_or_else(|err| panic!("invalid keymap/default.keymap.json: {err}"))
});

pub(crate) fn classify_key(key: &KeyEvent) -> Option<KeyAction> {
    KEYMAP.iter().find_map(|binding| binding.matches(key))
}

pub(crate) fn help_text(context: KeymapContext) -> String {
    KEYMAP
        .iter()
        .filter(|binding| binding.contexts.contains(&context))
        .map(|binding| binding.snippet.as_str())
        .collect::<Vec<_>>()
        .join(" • ")
}
