use crate::state::ParamId;

/// Navigation actions (modal pane stack)
#[derive(Debug, Clone, PartialEq)]
pub enum NavAction {
    PushPane(&'static str),
    PopPane,
}

/// Param registry and value edits
#[derive(Debug, Clone, PartialEq)]
pub enum ParamAction {
    Add(String),
    Delete(ParamId),
    SetValue(ParamId, String),
}

/// Output panel actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelAction {
    Render,
}

/// User intentions produced by panes and applied by dispatch
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    None,
    Quit,
    Nav(NavAction),
    Param(ParamAction),
    Model(ModelAction),
}

/// Navigation requested by dispatch, processed by the pane manager
#[derive(Debug, Clone, PartialEq)]
pub enum NavIntent {
    Push(&'static str),
    Pop,
}

/// Result of dispatching an action: side effects for the UI layer to process
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DispatchResult {
    pub quit: bool,
    pub nav: Vec<NavIntent>,
    /// Short message for the status line
    pub status: Option<String>,
    /// Param list changed shape; panes must rebuild their rows
    pub params_changed: bool,
}

impl DispatchResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_quit() -> Self {
        Self {
            quit: true,
            ..Self::default()
        }
    }

    pub fn with_nav(intent: NavIntent) -> Self {
        Self {
            nav: vec![intent],
            ..Self::default()
        }
    }

    pub fn with_status(message: impl Into<String>) -> Self {
        Self {
            status: Some(message.into()),
            ..Self::default()
        }
    }
}
