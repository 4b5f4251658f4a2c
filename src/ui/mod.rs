pub mod backend;
pub mod input;
pub mod keybindings;
pub mod keymap;
pub mod layout_helpers;
pub mod pane;
pub mod rat_compat;
pub mod style;
pub mod theme;
pub mod widgets;

pub use crate::action::{Action, DispatchResult, ModelAction, NavAction, NavIntent, ParamAction};
pub use backend::{AppEvent, RatatuiBackend};
pub use input::{InputEvent, KeyCode};
pub use keymap::Keymap;
pub use pane::{Pane, PaneManager};
pub use style::{Color, Style};
