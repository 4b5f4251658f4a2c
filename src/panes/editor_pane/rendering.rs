use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

use super::{EditorPane, Focus};
use crate::labels;
use crate::state::EditorState;
use crate::ui::layout_helpers::text_width;
use crate::ui::theme::EditorTheme;
use crate::ui::{Color, Style};

/// Rows taken by one value row (input line + spacer)
const ROW_HEIGHT: u16 = 2;

impl EditorPane {
    pub(super) fn render_impl(&mut self, area: Rect, buf: &mut Buffer, state: &EditorState) {
        let [form_area, output_area] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(area);

        self.render_form(form_area, buf, state);
        render_output(output_area, buf, state);
    }

    fn render_form(&mut self, area: Rect, buf: &mut Buffer, state: &EditorState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", labels::TITLE))
            .border_style(ratatui::style::Style::from(Style::new().fg(Color::CYAN)))
            .title_style(ratatui::style::Style::from(Style::new().fg(Color::CYAN).bold()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 4 || inner.height < 6 {
            return;
        }

        // Bottom block: add label, name input, add button, get-model button, footer
        let tail_height = 8;
        let rows_height = inner.height.saturating_sub(tail_height);
        let visible_rows = (rows_height / ROW_HEIGHT).max(1) as usize;
        self.scroll_to_focus(visible_rows);

        let x = inner.x + 1;
        let width = inner.width.saturating_sub(2);
        let delete_label = format!("[{}]", labels::DELETE_BUTTON);
        let delete_width = text_width(&delete_label);
        let input_width = width.saturating_sub(delete_width + 1);

        let mut y = inner.y + 1;
        let rows_bottom = inner.y + rows_height;
        for (i, row) in self.rows.iter_mut().enumerate().skip(self.scroll) {
            if y + 1 > rows_bottom {
                break;
            }
            row.input.render_buf(buf, x, y, input_width);
            let focused = self.focus == Focus::Value(i);
            put_str(buf, x + input_width + 1, y, delete_width, &delete_label, EditorTheme::button_style(true, focused));
            y += ROW_HEIGHT;
        }
        if self.rows.is_empty() {
            let hint = ratatui::style::Style::from(Style::new().fg(Color::DARK_GRAY));
            put_str(buf, x, y, width, "—", hint);
        }

        let mut y = inner.y + rows_height;
        let label_style = ratatui::style::Style::from(Style::new().fg(Color::WHITE).bold());
        put_str(buf, x, y, width, labels::ADD_NEW_LABEL, label_style);
        y += 1;
        self.new_name.render_buf(buf, x, y, width);
        y += 1;

        let can_add = self.add_form().can_add();
        let add_label = format!("[{}]", labels::ADD_BUTTON);
        put_str(
            buf,
            x,
            y,
            width,
            &add_label,
            EditorTheme::button_style(can_add, self.focus == Focus::NewName && can_add),
        );
        y += 2;

        let enabled = state.render_trigger().is_enabled();
        let model_label = format!("[{}]", labels::GET_MODEL_BUTTON);
        put_str(
            buf,
            x,
            y,
            width,
            &model_label,
            EditorTheme::button_style(enabled, self.focus == Focus::GetModel),
        );
        y += 2;

        let footer = match &self.status {
            Some(msg) => Line::from(Span::styled(
                msg.as_str(),
                ratatui::style::Style::from(Style::new().fg(Color::ERROR)),
            )),
            None => Line::from(Span::styled(
                "Ctrl+q: quit | F1: help | F5: model | Tab: next | Ctrl+d: delete",
                ratatui::style::Style::from(Style::new().fg(Color::DARK_GRAY)),
            )),
        };
        if y < inner.y + inner.height {
            Paragraph::new(footer).render(Rect::new(x, y, width, 1), buf);
        }
    }

    /// Keep the focused value row inside the visible window
    fn scroll_to_focus(&mut self, visible_rows: usize) {
        self.scroll = self.scroll.min(self.rows.len().saturating_sub(1));
        if let Focus::Value(i) = self.focus {
            if i < self.scroll {
                self.scroll = i;
            } else if i >= self.scroll + visible_rows {
                self.scroll = i + 1 - visible_rows;
            }
        }
    }
}

fn render_output(area: Rect, buf: &mut Buffer, state: &EditorState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", labels::OUTPUT_LABEL))
        .border_style(ratatui::style::Style::from(Style::new().fg(Color::DARK_GRAY)))
        .title_style(ratatui::style::Style::from(Style::new().fg(Color::WHITE).bold()));
    let inner = block.inner(area);
    block.render(area, buf);

    let style = if state.output == labels::FILL_ALL_PARAMS {
        Style::new().fg(Color::ERROR)
    } else {
        Style::new().fg(Color::WHITE)
    };
    Paragraph::new(state.output.as_str())
        .style(ratatui::style::Style::from(style))
        .wrap(Wrap { trim: false })
        .render(inner, buf);
}

/// Draw `text` at (x, y), clipped to `max_width` cells
fn put_str(buf: &mut Buffer, x: u16, y: u16, max_width: u16, text: &str, style: ratatui::style::Style) {
    for (j, ch) in text.chars().take(max_width as usize).enumerate() {
        if let Some(cell) = buf.cell_mut((x + j as u16, y)) {
            cell.set_char(ch).set_style(style);
        }
    }
}
