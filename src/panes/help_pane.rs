use std::any::Any;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::state::EditorState;
use crate::ui::layout_helpers::center_rect;
use crate::ui::{Action, Color, InputEvent, Keymap, NavAction, Pane, Style};

/// Modal list of the keybindings of the pane it was opened from
pub struct HelpPane {
    keymap: Keymap,
    title: String,
    /// (key, description) rows, global bindings last
    entries: Vec<(String, String)>,
    scroll: usize,
}

impl HelpPane {
    pub fn new(keymap: Keymap) -> Self {
        Self {
            keymap,
            title: String::new(),
            entries: Vec::new(),
            scroll: 0,
        }
    }

    pub fn set_context(&mut self, title: &str, pane_keymap: &Keymap, global_keymap: &Keymap) {
        self.title = title.to_string();
        self.entries = pane_keymap
            .bindings()
            .iter()
            .chain(global_keymap.bindings())
            .map(|b| (b.pattern.display(), b.description.to_string()))
            .collect();
        self.scroll = 0;
    }
}

impl Pane for HelpPane {
    fn id(&self) -> &'static str {
        "help"
    }

    fn handle_action(&mut self, action: &str, _event: &InputEvent, _state: &EditorState) -> Action {
        match action {
            "close" => Action::Nav(NavAction::PopPane),
            "down" => {
                if self.scroll + 1 < self.entries.len() {
                    self.scroll += 1;
                }
                Action::None
            }
            "up" => {
                self.scroll = self.scroll.saturating_sub(1);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_raw_input(&mut self, _event: &InputEvent, _state: &EditorState) -> Action {
        Action::None
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, _state: &EditorState) {
        let height = (self.entries.len() as u16 + 4).min(area.height);
        let rect = center_rect(area, 64, height);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Help: {} ", self.title))
            .border_style(ratatui::style::Style::from(Style::new().fg(Color::YELLOW)))
            .title_style(ratatui::style::Style::from(Style::new().fg(Color::YELLOW)));
        let inner = block.inner(rect);
        block.render(rect, buf);

        let key_style = ratatui::style::Style::from(Style::new().fg(Color::CYAN).bold());
        let desc_style = ratatui::style::Style::from(Style::new().fg(Color::WHITE));
        let lines: Vec<Line> = self
            .entries
            .iter()
            .skip(self.scroll)
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(format!("{:<12}", key), key_style),
                    Span::styled(desc.as_str(), desc_style),
                ])
            })
            .collect();

        let body = Rect::new(inner.x + 1, inner.y + 1, inner.width.saturating_sub(2), inner.height.saturating_sub(1));
        Paragraph::new(lines).render(body, buf);
    }

    fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
