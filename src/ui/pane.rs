use std::any::Any;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::action::NavIntent;
use crate::state::EditorState;

use super::{Action, InputEvent, Keymap};

/// A full-screen view with its own keymap
pub trait Pane {
    fn id(&self) -> &'static str;

    /// Called when the pane's keymap resolved the event to `action`
    fn handle_action(&mut self, action: &str, event: &InputEvent, state: &EditorState) -> Action;

    /// Called for events no keymap claimed (typing, cursor movement)
    fn handle_raw_input(&mut self, event: &InputEvent, state: &EditorState) -> Action;

    fn render(&mut self, area: Rect, buf: &mut Buffer, state: &EditorState);

    fn keymap(&self) -> &Keymap;

    /// Pane became active
    fn on_enter(&mut self, _state: &EditorState) {}

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Holds every pane plus a modal stack of active ones
pub struct PaneManager {
    panes: Vec<Box<dyn Pane>>,
    /// Indices into `panes`; the last one is active. Never empty.
    stack: Vec<usize>,
}

impl PaneManager {
    pub fn new(root: Box<dyn Pane>) -> Self {
        Self {
            panes: vec![root],
            stack: vec![0],
        }
    }

    pub fn add_pane(&mut self, pane: Box<dyn Pane>) {
        self.panes.push(pane);
    }

    fn active_index(&self) -> usize {
        self.stack.last().copied().unwrap_or(0)
    }

    pub fn active(&self) -> &dyn Pane {
        self.panes[self.active_index()].as_ref()
    }

    pub fn active_mut(&mut self) -> &mut dyn Pane {
        let idx = self.active_index();
        self.panes[idx].as_mut()
    }

    pub fn get_pane_mut<T: Pane + 'static>(&mut self, id: &str) -> Option<&mut T> {
        self.panes
            .iter_mut()
            .find(|p| p.id() == id)
            .and_then(|p| p.as_any_mut().downcast_mut::<T>())
    }

    /// Push a pane on top of the stack. Unknown ids are ignored.
    pub fn push_to(&mut self, id: &str, state: &EditorState) {
        if let Some(idx) = self.panes.iter().position(|p| p.id() == id) {
            if self.active_index() != idx {
                self.stack.push(idx);
                self.panes[idx].on_enter(state);
            }
        } else {
            log::warn!("no pane with id '{}'", id);
        }
    }

    /// Pop back to the previous pane; the root pane stays
    pub fn pop(&mut self, state: &EditorState) {
        if self.stack.len() > 1 {
            self.stack.pop();
            self.active_mut().on_enter(state);
        }
    }

    pub fn process_nav_intents(&mut self, intents: &[NavIntent], state: &EditorState) {
        for intent in intents {
            match intent {
                NavIntent::Push(id) => self.push_to(id, state),
                NavIntent::Pop => self.pop(state),
            }
        }
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer, state: &EditorState) {
        self.active_mut().render(area, buf, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::IdPolicy;

    struct Dummy {
        id: &'static str,
        entered: usize,
        keymap: Keymap,
    }

    impl Dummy {
        fn boxed(id: &'static str) -> Box<Self> {
            Box::new(Self {
                id,
                entered: 0,
                keymap: Keymap::new(),
            })
        }
    }

    impl Pane for Dummy {
        fn id(&self) -> &'static str {
            self.id
        }

        fn handle_action(&mut self, _action: &str, _event: &InputEvent, _state: &EditorState) -> Action {
            Action::None
        }

        fn handle_raw_input(&mut self, _event: &InputEvent, _state: &EditorState) -> Action {
            Action::None
        }

        fn render(&mut self, _area: Rect, _buf: &mut Buffer, _state: &EditorState) {}

        fn keymap(&self) -> &Keymap {
            &self.keymap
        }

        fn on_enter(&mut self, _state: &EditorState) {
            self.entered += 1;
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    #[test]
    fn push_and_pop_keep_root() {
        let state = EditorState::new(IdPolicy::Monotonic);
        let mut panes = PaneManager::new(Dummy::boxed("root"));
        panes.add_pane(Dummy::boxed("help"));

        panes.push_to("help", &state);
        assert_eq!(panes.active().id(), "help");
        panes.push_to("help", &state);
        assert_eq!(panes.get_pane_mut::<Dummy>("help").map(|d| d.entered), Some(1));

        panes.process_nav_intents(&[NavIntent::Pop, NavIntent::Pop], &state);
        assert_eq!(panes.active().id(), "root");
    }

    #[test]
    fn unknown_pane_is_ignored() {
        let state = EditorState::new(IdPolicy::Monotonic);
        let mut panes = PaneManager::new(Dummy::boxed("root"));
        panes.push_to("missing", &state);
        assert_eq!(panes.active().id(), "root");
    }
}
