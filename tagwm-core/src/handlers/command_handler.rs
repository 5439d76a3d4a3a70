mod scratchpad_handler;

use crate::command::Command;
use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::models::Manager;
use crate::state::State;
use crate::utils::child_process::{self, Children};

impl<C: Config, SERVER: DisplayServer> Manager<C, SERVER> {
    /// Processes a command and invokes the associated function.
    /// Returns true if changes need to be rendered.
    pub fn command_handler(&mut self, command: &Command) -> bool {
        tracing::debug!("Command: {command:?}");
        process_internal(self, command).unwrap_or(false)
    }
}

fn process_internal<C: Config, SERVER: DisplayServer>(
    manager: &mut Manager<C, SERVER>,
    command: &Command,
) -> Option<bool> {
    let state = &mut manager.state;
    match command {
        Command::View(mask) => state.view(*mask),
        Command::ToggleView(mask) => state.toggle_view(*mask),
        Command::Tag(mask) => state.tag(*mask),
        Command::ToggleTag(mask) => state.toggle_tag(*mask),
        Command::ViewToLeft => state.view_to_left(),
        Command::ViewToRight => state.view_to_right(),

        Command::FocusStack(direction) => state.focus_stack(*direction),
        Command::SwitchPrevClient(mode) => state.switch_prev_client(*mode),
        Command::Zoom => state.zoom(),
        Command::FocusMonitor(direction) => state.focus_monitor(*direction),
        Command::TagMonitor(direction) => state.tag_monitor(*direction),

        Command::IncMasterCount(delta) => state.inc_master_count(*delta),
        Command::SetMasterFactor(value) => state.set_master_factor(*value),
        Command::SetLayout(layout) => state.set_layout(*layout),
        Command::ToggleBar => state.toggle_bar(),

        Command::ToggleFloating => state.toggle_floating(),
        Command::ToggleFullscreen => state.toggle_fullscreen(),
        Command::HideWindow => state.hide_selected(),
        Command::ShowWindow => state.show_selected(),
        Command::ShowAll => state.show_all(),
        Command::ToggleWindow => toggle_selected(state)?,
        Command::KillClient => state.kill_client(),

        Command::IncGaps(target, delta) => state.inc_gaps(*target, *delta),
        Command::ToggleGaps => state.toggle_gaps(),
        Command::ToggleSmartGaps => state.toggle_smart_gaps(),
        Command::DefaultGaps => state.default_gaps(),

        Command::MoveWindow(direction) => state.move_window(*direction),
        Command::ResizeWindow(direction) => state.resize_window(*direction),
        Command::ToggleOverview => state.toggle_overview(),

        Command::ToggleScratchPad => return Some(manager.toggle_scratchpad()),
        Command::Spawn(argv) => return spawn(&mut manager.children, argv),
        Command::Quit => {
            restore_hidden(state);
            manager.quit();
        }
    }
    Some(true)
}

fn toggle_selected(state: &mut State) -> Option<()> {
    let selected = state.selected_client()?;
    state.toggle_window(selected);
    Some(())
}

fn spawn(children: &mut Children, argv: &[String]) -> Option<bool> {
    if let Err(err) = child_process::spawn(argv, children) {
        tracing::error!("Unable to spawn {argv:?}: {err}");
    }
    None
}

/// Map every hidden client again so nothing stays unmapped once we are gone.
fn restore_hidden(state: &mut State) {
    let hidden: Vec<_> = state
        .clients
        .iter()
        .filter(|(_, client)| client.iconic)
        .map(|(id, _)| id)
        .collect();
    for id in hidden {
        state.show_window(id, true);
    }
}
