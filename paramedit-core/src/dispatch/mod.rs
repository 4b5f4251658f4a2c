mod model;
mod param;

use crate::action::{Action, DispatchResult, NavAction, NavIntent};
use crate::state::EditorState;

/// Dispatch an action. Returns a DispatchResult describing side effects for the UI layer.
pub fn dispatch_action(action: &Action, state: &mut EditorState) -> DispatchResult {
    match action {
        Action::Quit => DispatchResult::with_quit(),
        Action::Nav(NavAction::PushPane(id)) => DispatchResult::with_nav(NavIntent::Push(*id)),
        Action::Nav(NavAction::PopPane) => DispatchResult::with_nav(NavIntent::Pop),
        Action::Param(a) => param::dispatch_param(a, state),
        Action::Model(a) => model::dispatch_model(a, state),
        Action::None => DispatchResult::none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ModelAction, ParamAction};
    use crate::labels;
    use crate::seed::SessionSeed;
    use crate::state::IdPolicy;

    fn demo_state() -> EditorState {
        SessionSeed::builtin().unwrap().into_state(IdPolicy::Monotonic)
    }

    #[test]
    fn quit_and_nav_pass_through() {
        let mut state = demo_state();
        assert!(dispatch_action(&Action::Quit, &mut state).quit);
        assert_eq!(
            dispatch_action(&Action::Nav(NavAction::PushPane("help")), &mut state).nav,
            vec![NavIntent::Push("help")]
        );
        assert_eq!(dispatch_action(&Action::None, &mut state), DispatchResult::none());
    }

    #[test]
    fn add_marks_params_changed() {
        let mut state = demo_state();
        let r = dispatch_action(&Action::Param(ParamAction::Add("Цвет".into())), &mut state);
        assert!(r.params_changed);
        assert_eq!(state.params().len(), 3);
        assert_eq!(state.params()[2].id, 3);
    }

    #[test]
    fn blank_add_is_ignored() {
        let mut state = demo_state();
        let r = dispatch_action(&Action::Param(ParamAction::Add("   ".into())), &mut state);
        assert!(!r.params_changed);
        assert_eq!(state.params().len(), 2);
    }

    #[test]
    fn delete_unknown_changes_nothing() {
        let mut state = demo_state();
        let r = dispatch_action(&Action::Param(ParamAction::Delete(40)), &mut state);
        assert!(!r.params_changed);
        assert_eq!(state.params().len(), 2);
    }

    #[test]
    fn render_writes_output_or_message() {
        let mut state = demo_state();
        dispatch_action(&Action::Model(ModelAction::Render), &mut state);
        assert!(state.output.contains("\"value\": \"макси\""));

        dispatch_action(&Action::Param(ParamAction::SetValue(2, "".into())), &mut state);
        dispatch_action(&Action::Model(ModelAction::Render), &mut state);
        assert_eq!(state.output, labels::FILL_ALL_PARAMS);
    }

    #[test]
    fn set_value_does_not_render() {
        let mut state = demo_state();
        dispatch_action(&Action::Param(ParamAction::SetValue(1, "вечернее".into())), &mut state);
        assert!(state.output.is_empty());
    }
}
