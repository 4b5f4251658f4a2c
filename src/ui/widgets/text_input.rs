use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::StatefulWidget;

use rat_event::{HandleEvent, Regular};
use rat_widget::focus::HasFocus;
use rat_widget::text_input::{TextInput as RatTextInput, TextInputState};

use crate::ui::input::InputEvent;
use crate::ui::layout_helpers::text_width;
use crate::ui::rat_compat::{outcome_consumed, to_crossterm_key_event};
use crate::ui::style::{Color, Style};
use crate::ui::theme::EditorTheme;

/// A single-line text input widget backed by rat-widget.
///
/// Editing and cursor handling are delegated to `rat_widget::text_input`;
/// this wrapper adds an inline label and a placeholder shown while empty.
pub struct TextInput {
    /// Label shown before the input
    label: String,
    placeholder: String,
    state: TextInputState,
}

impl TextInput {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            placeholder: String::new(),
            state: TextInputState::new(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.state.set_value(value);
        self
    }

    pub fn value(&self) -> &str {
        self.state.text()
    }

    pub fn set_value(&mut self, value: &str) {
        self.state.set_value(value);
    }

    pub fn clear(&mut self) {
        self.state.set_value("");
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.state.focus.set(focused);
    }

    pub fn is_focused(&self) -> bool {
        self.state.is_focused()
    }

    /// Handle input, returns true if the event was consumed
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        if !self.state.is_focused() {
            return false;
        }
        let ct_event = to_crossterm_key_event(event);
        let outcome: rat_event::Outcome = self.state.handle(&ct_event, Regular).into();
        outcome_consumed(outcome)
    }

    /// Render label and input on one row starting at (x, y). Returns rows used.
    pub fn render_buf(&mut self, buf: &mut Buffer, x: u16, y: u16, width: u16) -> u16 {
        let label_style = ratatui::style::Style::from(Style::new().fg(Color::WHITE));
        for (j, ch) in self.label.chars().enumerate() {
            let cx = x + j as u16;
            if cx >= x + width {
                break;
            }
            if let Some(cell) = buf.cell_mut((cx, y)) {
                cell.set_char(ch).set_style(label_style);
            }
        }

        let label_offset = if self.label.is_empty() {
            0
        } else {
            text_width(&self.label) + 1
        };
        let input_x = x + label_offset;
        let input_width = width.saturating_sub(label_offset);

        if input_width == 0 {
            return 1;
        }

        let widget = RatTextInput::new()
            .style(EditorTheme::text_input_style())
            .focus_style(EditorTheme::text_input_focus_style())
            .select_style(EditorTheme::text_input_select_style())
            .cursor_style(EditorTheme::text_input_cursor_style());

        let area = Rect::new(input_x, y, input_width, 1);
        widget.render(area, buf, &mut self.state);

        if self.value().is_empty() && !self.is_focused() {
            let style = EditorTheme::placeholder_style();
            for (j, ch) in self.placeholder.chars().take(input_width as usize).enumerate() {
                if let Some(cell) = buf.cell_mut((input_x + j as u16, y)) {
                    cell.set_char(ch).set_style(style);
                }
            }
        }

        1
    }
}
