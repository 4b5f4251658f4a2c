mod input;
mod rendering;

use std::any::Any;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::labels;
use crate::state::{AddForm, EditorState, ParamId};
use crate::ui::widgets::TextInput;
use crate::ui::{Action, InputEvent, Keymap, Pane};

/// Which element has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Focus {
    /// Value input of the param at this row index
    Value(usize),
    NewName,
    GetModel,
}

/// One editable row per registered param
struct ValueRow {
    param_id: ParamId,
    input: TextInput,
}

/// The parameter form: value rows, the add sub-form, the get-model button
/// and the read-only output panel.
pub struct EditorPane {
    keymap: Keymap,
    rows: Vec<ValueRow>,
    new_name: TextInput,
    focus: Focus,
    /// First visible row when the form is taller than the screen
    scroll: usize,
    status: Option<String>,
}

impl EditorPane {
    pub fn new(keymap: Keymap, state: &EditorState) -> Self {
        let mut pane = Self {
            keymap,
            rows: Vec::new(),
            new_name: TextInput::new("").with_placeholder(labels::ADD_NEW_PLACEHOLDER),
            focus: Focus::NewName,
            scroll: 0,
            status: None,
        };
        pane.sync_rows(state);
        if !pane.rows.is_empty() {
            pane.set_focus(Focus::Value(0));
        }
        pane
    }

    /// Rebuild value rows after params were added or removed
    pub fn sync_rows(&mut self, state: &EditorState) {
        self.rows = state
            .params()
            .iter()
            .map(|param| ValueRow {
                param_id: param.id,
                input: TextInput::new(&format!("{}:", param.name)).with_value(state.value(param.id)),
            })
            .collect();

        let focus = match self.focus {
            Focus::Value(_) if self.rows.is_empty() => Focus::NewName,
            Focus::Value(i) => Focus::Value(i.min(self.rows.len() - 1)),
            other => other,
        };
        self.set_focus(focus);
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    pub(super) fn add_form(&self) -> AddForm {
        AddForm::from_input(self.new_name.value())
    }

    pub(super) fn focus(&self) -> Focus {
        self.focus
    }

    /// Focus order: value rows, new-name field, get-model button
    fn focus_order(&self) -> Vec<Focus> {
        (0..self.rows.len())
            .map(Focus::Value)
            .chain([Focus::NewName, Focus::GetModel])
            .collect()
    }

    fn move_focus(&mut self, delta: isize) {
        let order = self.focus_order();
        let pos = order.iter().position(|f| *f == self.focus).unwrap_or(0) as isize;
        let len = order.len() as isize;
        let next = (pos + delta).rem_euclid(len) as usize;
        self.set_focus(order[next]);
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        for (i, row) in self.rows.iter_mut().enumerate() {
            row.input.set_focused(focus == Focus::Value(i));
        }
        self.new_name.set_focused(focus == Focus::NewName);
    }
}

impl Pane for EditorPane {
    fn id(&self) -> &'static str {
        "editor"
    }

    fn handle_action(&mut self, action: &str, event: &InputEvent, state: &EditorState) -> Action {
        self.handle_action_impl(action, event, state)
    }

    fn handle_raw_input(&mut self, event: &InputEvent, state: &EditorState) -> Action {
        self.handle_raw_input_impl(event, state)
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, state: &EditorState) {
        self.render_impl(area, buf, state);
    }

    fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
