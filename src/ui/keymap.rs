use super::input::{InputEvent, KeyCode};

/// What a binding matches against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPattern {
    /// Plain character, no Ctrl/Alt
    Char(char),
    /// Named key, no Ctrl/Alt
    Key(KeyCode),
    Ctrl(char),
    Alt(char),
    CtrlKey(KeyCode),
    ShiftKey(KeyCode),
}

impl KeyPattern {
    pub fn matches(&self, event: &InputEvent) -> bool {
        let m = event.modifiers;
        match *self {
            KeyPattern::Char(c) => event.key == KeyCode::Char(c) && !m.ctrl && !m.alt,
            KeyPattern::Key(k) => event.key == k && !m.ctrl && !m.alt,
            KeyPattern::Ctrl(c) => m.ctrl && event.key == KeyCode::Char(c),
            KeyPattern::Alt(c) => m.alt && event.key == KeyCode::Char(c),
            KeyPattern::CtrlKey(k) => m.ctrl && event.key == k,
            KeyPattern::ShiftKey(k) => m.shift && event.key == k,
        }
    }

    /// Human-readable form, the inverse of the keybindings.toml notation
    pub fn display(&self) -> String {
        match *self {
            KeyPattern::Char(' ') => "Space".to_string(),
            KeyPattern::Char(c) => c.to_string(),
            KeyPattern::Key(k) => key_name(k),
            KeyPattern::Ctrl(c) => format!("Ctrl+{}", c),
            KeyPattern::Alt(c) => format!("Alt+{}", c),
            KeyPattern::CtrlKey(k) => format!("Ctrl+{}", key_name(k)),
            KeyPattern::ShiftKey(k) => format!("Shift+{}", key_name(k)),
        }
    }
}

fn key_name(key: KeyCode) -> String {
    match key {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::F(n) => format!("F{}", n),
        KeyCode::Escape => "Esc".to_string(),
        other => format!("{:?}", other),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyBinding {
    pub pattern: KeyPattern,
    pub action: &'static str,
    pub description: &'static str,
}

/// Ordered bindings; the first match wins
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Keymap {
    bindings: Vec<KeyBinding>,
}

impl Keymap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bindings(bindings: Vec<KeyBinding>) -> Self {
        Self { bindings }
    }

    #[allow(dead_code)]
    pub fn bind_key(mut self, key: KeyCode, action: &'static str, description: &'static str) -> Self {
        self.bindings.push(KeyBinding {
            pattern: KeyPattern::Key(key),
            action,
            description,
        });
        self
    }

    #[allow(dead_code)]
    pub fn bind_ctrl(mut self, c: char, action: &'static str, description: &'static str) -> Self {
        self.bindings.push(KeyBinding {
            pattern: KeyPattern::Ctrl(c),
            action,
            description,
        });
        self
    }

    pub fn lookup(&self, event: &InputEvent) -> Option<&'static str> {
        self.bindings
            .iter()
            .find(|b| b.pattern.matches(event))
            .map(|b| b.action)
    }

    pub fn bindings(&self) -> &[KeyBinding] {
        &self.bindings
    }
}
