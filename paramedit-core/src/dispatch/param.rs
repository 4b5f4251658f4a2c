use crate::action::{DispatchResult, ParamAction};
use crate::state::{AddForm, EditorState};

pub(super) fn dispatch_param(action: &ParamAction, state: &mut EditorState) -> DispatchResult {
    match action {
        ParamAction::Add(name) => {
            if !AddForm::from_input(name).can_add() {
                log::debug!("ignoring add with blank name");
                return DispatchResult::none();
            }
            let param = state.add_param(name);
            log::info!("added param {} ({})", param.id, param.name);
            DispatchResult {
                params_changed: true,
                ..DispatchResult::none()
            }
        }
        ParamAction::Delete(id) => {
            if state.remove_param(*id) {
                log::info!("removed param {}", id);
                DispatchResult {
                    params_changed: true,
                    ..DispatchResult::none()
                }
            } else {
                log::debug!("delete of unknown param {} ignored", id);
                DispatchResult::none()
            }
        }
        ParamAction::SetValue(id, value) => {
            if !state.set_value(*id, value) {
                log::debug!("edit of unknown param {} ignored", id);
            }
            DispatchResult::none()
        }
    }
}
