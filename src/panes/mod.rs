mod editor_pane;
mod help_pane;

pub use editor_pane::EditorPane;
pub use help_pane::HelpPane;
