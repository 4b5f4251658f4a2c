use super::{EditorPane, Focus};
use crate::state::EditorState;
use crate::ui::{Action, InputEvent, ModelAction, ParamAction};

impl EditorPane {
    pub(super) fn handle_action_impl(&mut self, action: &str, _event: &InputEvent, state: &EditorState) -> Action {
        match action {
            "next" => {
                self.move_focus(1);
                Action::None
            }
            "prev" => {
                self.move_focus(-1);
                Action::None
            }
            "activate" => match self.focus {
                Focus::Value(_) => {
                    self.move_focus(1);
                    Action::None
                }
                Focus::NewName => self.submit_new_param(),
                Focus::GetModel => self.request_model(state),
            },
            "delete" => match self.focus {
                Focus::Value(i) => self
                    .rows
                    .get(i)
                    .map(|row| Action::Param(ParamAction::Delete(row.param_id)))
                    .unwrap_or(Action::None),
                _ => Action::None,
            },
            "get_model" => self.request_model(state),
            _ => Action::None,
        }
    }

    pub(super) fn handle_raw_input_impl(&mut self, event: &InputEvent, _state: &EditorState) -> Action {
        match self.focus {
            Focus::Value(i) => {
                let Some(row) = self.rows.get_mut(i) else {
                    return Action::None;
                };
                let before = row.input.value().to_string();
                if !row.input.handle_input(event) || row.input.value() == before {
                    return Action::None;
                }
                let param_id = row.param_id;
                let value = row.input.value().to_string();
                // rows sharing an id are backed by the same stored value
                for (j, other) in self.rows.iter_mut().enumerate() {
                    if j != i && other.param_id == param_id {
                        other.input.set_value(&value);
                    }
                }
                Action::Param(ParamAction::SetValue(param_id, value))
            }
            Focus::NewName => {
                self.new_name.handle_input(event);
                Action::None
            }
            Focus::GetModel => Action::None,
        }
    }

    /// "Добавить параметр": only when the name is not blank; resets the form
    fn submit_new_param(&mut self) -> Action {
        if !self.add_form().can_add() {
            return Action::None;
        }
        let name = self.new_name.value().to_string();
        self.new_name.clear();
        Action::Param(ParamAction::Add(name))
    }

    /// "Получить модель": gated on the cached trigger, re-validated by dispatch
    fn request_model(&mut self, state: &EditorState) -> Action {
        if state.render_trigger().is_enabled() {
            self.status = None;
            Action::Model(ModelAction::Render)
        } else {
            Action::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::SessionSeed;
    use crate::state::IdPolicy;
    use crate::ui::{KeyCode, Keymap, Pane};

    fn demo() -> (EditorPane, EditorState) {
        let state = SessionSeed::builtin().unwrap().into_state(IdPolicy::Monotonic);
        (EditorPane::new(Keymap::new(), &state), state)
    }

    fn ev() -> InputEvent {
        InputEvent::key(KeyCode::Enter)
    }

    #[test]
    fn focus_cycles_through_rows_and_buttons() {
        let (mut pane, state) = demo();
        assert_eq!(pane.focus(), Focus::Value(0));
        pane.handle_action("next", &ev(), &state);
        assert_eq!(pane.focus(), Focus::Value(1));
        pane.handle_action("next", &ev(), &state);
        assert_eq!(pane.focus(), Focus::NewName);
        pane.handle_action("next", &ev(), &state);
        assert_eq!(pane.focus(), Focus::GetModel);
        pane.handle_action("next", &ev(), &state);
        assert_eq!(pane.focus(), Focus::Value(0));
        pane.handle_action("prev", &ev(), &state);
        assert_eq!(pane.focus(), Focus::GetModel);
    }

    #[test]
    fn delete_targets_focused_row() {
        let (mut pane, state) = demo();
        pane.handle_action("next", &ev(), &state);
        assert_eq!(
            pane.handle_action("delete", &ev(), &state),
            Action::Param(ParamAction::Delete(2))
        );
    }

    #[test]
    fn delete_outside_rows_does_nothing() {
        let (mut pane, state) = demo();
        pane.handle_action("prev", &ev(), &state);
        assert_eq!(pane.handle_action("delete", &ev(), &state), Action::None);
    }

    #[test]
    fn add_disabled_while_name_blank() {
        let (mut pane, state) = demo();
        pane.handle_action("prev", &ev(), &state);
        pane.handle_action("prev", &ev(), &state);
        assert_eq!(pane.focus(), Focus::NewName);
        assert_eq!(pane.handle_action("activate", &ev(), &state), Action::None);

        pane.new_name.set_value("  ");
        assert_eq!(pane.handle_action("activate", &ev(), &state), Action::None);
    }

    #[test]
    fn add_submits_raw_name_and_resets_form() {
        let (mut pane, state) = demo();
        pane.handle_action("prev", &ev(), &state);
        pane.handle_action("prev", &ev(), &state);
        pane.new_name.set_value("Цвет");
        assert_eq!(
            pane.handle_action("activate", &ev(), &state),
            Action::Param(ParamAction::Add("Цвет".to_string()))
        );
        assert_eq!(pane.new_name.value(), "");
    }

    #[test]
    fn get_model_follows_trigger() {
        let (mut pane, mut state) = demo();
        assert_eq!(
            pane.handle_action("get_model", &ev(), &state),
            Action::Model(ModelAction::Render)
        );
        state.set_value(1, "");
        assert_eq!(pane.handle_action("get_model", &ev(), &state), Action::None);
    }

    #[test]
    fn typing_updates_every_row_with_the_same_id() {
        let mut state = SessionSeed::builtin().unwrap().into_state(IdPolicy::CountPlusOne);
        state.remove_param(1);
        let dup = state.add_param("Цвет");
        assert_eq!(dup.id, 2);

        let mut pane = EditorPane::new(Keymap::new(), &state);
        assert_eq!(pane.rows.len(), 2);
        assert_eq!(pane.focus(), Focus::Value(0));

        let action = pane.handle_raw_input(&InputEvent::key(KeyCode::Char('x')), &state);
        let typed = pane.rows[0].input.value().to_string();
        assert!(typed.contains('x'));
        assert_eq!(action, Action::Param(ParamAction::SetValue(2, typed.clone())));
        assert_eq!(pane.rows[1].input.value(), typed);
    }

    #[test]
    fn rows_follow_state_after_sync() {
        let (mut pane, mut state) = demo();
        pane.handle_action("next", &ev(), &state);
        state.remove_param(2);
        pane.sync_rows(&state);
        assert_eq!(pane.rows.len(), 1);
        assert_eq!(pane.focus(), Focus::Value(0));

        state.remove_param(1);
        pane.sync_rows(&state);
        assert_eq!(pane.focus(), Focus::NewName);
    }
}
