use ratatui::style::Style as RStyle;

use super::style::{Color, Style};

/// Styles shared by the editor widgets
pub struct EditorTheme;

impl EditorTheme {
    pub fn text_input_style() -> RStyle {
        Style::new().fg(Color::WHITE).bg(Color::FIELD_BG).into()
    }

    pub fn text_input_focus_style() -> RStyle {
        Style::new().fg(Color::WHITE).bg(Color::SELECTION_BG).into()
    }

    pub fn text_input_select_style() -> RStyle {
        Style::new().fg(Color::BLACK).bg(Color::CYAN).into()
    }

    pub fn text_input_cursor_style() -> RStyle {
        Style::new().fg(Color::BLACK).bg(Color::WHITE).into()
    }

    pub fn placeholder_style() -> RStyle {
        Style::new().fg(Color::DARK_GRAY).bg(Color::FIELD_BG).into()
    }

    /// Button label, dimmed when disabled and highlighted when focused
    pub fn button_style(enabled: bool, focused: bool) -> RStyle {
        match (enabled, focused) {
            (true, true) => Style::new().fg(Color::BLACK).bg(Color::LIME).bold().into(),
            (true, false) => Style::new().fg(Color::LIME).into(),
            (false, true) => Style::new().fg(Color::DARK_GRAY).bg(Color::SELECTION_BG).into(),
            (false, false) => Style::new().fg(Color::DARK_GRAY).into(),
        }
    }
}
