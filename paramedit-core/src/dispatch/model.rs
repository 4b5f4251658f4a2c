use crate::action::{DispatchResult, ModelAction};
use crate::error::RenderError;
use crate::state::EditorState;

pub(super) fn dispatch_model(action: &ModelAction, state: &mut EditorState) -> DispatchResult {
    match action {
        ModelAction::Render => match state.render() {
            Ok(text) => {
                log::info!("model rendered ({} values)", state.values().len());
                state.output = text;
                DispatchResult::none()
            }
            Err(RenderError::Validation) => {
                log::debug!("render blocked: blank values");
                state.output = RenderError::Validation.to_string();
                DispatchResult::none()
            }
            Err(e) => {
                log::error!("{}", e);
                state.output = e.to_string();
                DispatchResult::with_status(e.to_string())
            }
        },
    }
}
