// Re-export core crate modules so crate::state, crate::dispatch, etc. resolve throughout the binary
pub use paramedit_core::action;
pub use paramedit_core::config;
pub use paramedit_core::dispatch;
pub use paramedit_core::error;
pub use paramedit_core::labels;
pub use paramedit_core::seed;
pub use paramedit_core::state;

mod panes;
mod setup;
mod ui;

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use panes::{EditorPane, HelpPane};
use state::EditorState;
use ui::{
    keybindings, Action, AppEvent, DispatchResult, InputEvent, Keymap, NavAction, PaneManager, RatatuiBackend,
};

fn main() -> std::io::Result<()> {
    let state = match setup::startup(std::env::args_os().nth(1).map(PathBuf::from)) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("paramedit: {}", e);
            std::process::exit(1);
        }
    };

    let mut backend = RatatuiBackend::new()?;
    backend.start()?;

    let result = run(&mut backend, state);

    backend.stop()?;
    result
}

fn pane_keymap(keymaps: &mut HashMap<String, Keymap>, id: &str) -> Keymap {
    keymaps.remove(id).unwrap_or_else(Keymap::new)
}

fn run(backend: &mut RatatuiBackend, mut state: EditorState) -> std::io::Result<()> {
    let mut keymaps = keybindings::load_keybindings();
    let global_keymap = pane_keymap(&mut keymaps, "global");

    let mut panes = PaneManager::new(Box::new(EditorPane::new(pane_keymap(&mut keymaps, "editor"), &state)));
    panes.add_pane(Box::new(HelpPane::new(pane_keymap(&mut keymaps, "help"))));

    let mut needs_redraw = true;
    loop {
        if needs_redraw {
            backend.draw(|frame| {
                let area = frame.area();
                panes.render(area, frame.buffer_mut(), &state);
            })?;
            needs_redraw = false;
        }

        let Some(app_event) = backend.poll_event(Duration::from_millis(100))? else {
            continue;
        };
        needs_redraw = true;

        let event = match app_event {
            AppEvent::Resize => continue,
            AppEvent::Key(event) => event,
        };

        let action = global_keymap
            .lookup(&event)
            .and_then(|global| handle_global_action(global, &global_keymap, &mut panes))
            .unwrap_or_else(|| pane_action(&mut panes, &event, &state));

        let result = dispatch::dispatch_action(&action, &mut state);
        if result.quit {
            break;
        }
        apply_dispatch_result(result, &state, &mut panes);
    }

    Ok(())
}

/// Resolve the event against the active pane's keymap, falling back to raw input
fn pane_action(panes: &mut PaneManager, event: &InputEvent, state: &EditorState) -> Action {
    match panes.active().keymap().lookup(event) {
        Some(action) => panes.active_mut().handle_action(action, event, state),
        None => panes.active_mut().handle_raw_input(event, state),
    }
}

/// Map a global keymap action to an `Action`. `None` lets the active pane handle the key.
fn handle_global_action(action: &str, global_keymap: &Keymap, panes: &mut PaneManager) -> Option<Action> {
    match action {
        "quit" => Some(Action::Quit),
        "help" => {
            if panes.active().id() == "help" {
                return Some(Action::Nav(NavAction::PopPane));
            }
            let current_keymap = panes.active().keymap().clone();
            let title = match panes.active().id() {
                "editor" => labels::TITLE,
                other => other,
            };
            if let Some(help) = panes.get_pane_mut::<HelpPane>("help") {
                help.set_context(title, &current_keymap, global_keymap);
            }
            Some(Action::Nav(NavAction::PushPane("help")))
        }
        _ => None,
    }
}

/// Apply a DispatchResult to the UI layer: nav intents, row rebuilds, status line
fn apply_dispatch_result(result: DispatchResult, state: &EditorState, panes: &mut PaneManager) {
    panes.process_nav_intents(&result.nav, state);

    if result.params_changed || result.status.is_some() {
        if let Some(editor) = panes.get_pane_mut::<EditorPane>("editor") {
            if result.params_changed {
                editor.sync_rows(state);
            }
            if let Some(status) = result.status {
                editor.set_status(status);
            }
        }
    }
}
