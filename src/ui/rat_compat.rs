//! Glue between our input types and rat-widget's crossterm-based event handling.

use crossterm::event::{Event, KeyCode as CtKeyCode, KeyEvent, KeyModifiers};
use rat_event::Outcome;

use super::input::{InputEvent, KeyCode};

pub fn to_crossterm_key_event(event: &InputEvent) -> Event {
    let code = match event.key {
        KeyCode::Char(c) => CtKeyCode::Char(c),
        KeyCode::Up => CtKeyCode::Up,
        KeyCode::Down => CtKeyCode::Down,
        KeyCode::Left => CtKeyCode::Left,
        KeyCode::Right => CtKeyCode::Right,
        KeyCode::Enter => CtKeyCode::Enter,
        KeyCode::Escape => CtKeyCode::Esc,
        KeyCode::Backspace => CtKeyCode::Backspace,
        KeyCode::Tab => CtKeyCode::Tab,
        KeyCode::BackTab => CtKeyCode::BackTab,
        KeyCode::Home => CtKeyCode::Home,
        KeyCode::End => CtKeyCode::End,
        KeyCode::PageUp => CtKeyCode::PageUp,
        KeyCode::PageDown => CtKeyCode::PageDown,
        KeyCode::Insert => CtKeyCode::Insert,
        KeyCode::Delete => CtKeyCode::Delete,
        KeyCode::F(n) => CtKeyCode::F(n),
    };
    let mut modifiers = KeyModifiers::NONE;
    if event.modifiers.ctrl {
        modifiers |= KeyModifiers::CONTROL;
    }
    if event.modifiers.alt {
        modifiers |= KeyModifiers::ALT;
    }
    if event.modifiers.shift {
        modifiers |= KeyModifiers::SHIFT;
    }
    Event::Key(KeyEvent::new(code, modifiers))
}

pub fn outcome_consumed(outcome: Outcome) -> bool {
    !matches!(outcome, Outcome::Continue)
}
