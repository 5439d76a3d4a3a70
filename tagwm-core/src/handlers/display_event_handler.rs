use crate::config::Config;
use crate::display_event::{DisplayEvent, FullscreenAction};
use crate::display_servers::DisplayServer;
use crate::models::{Manager, WindowHandle};
use crate::State;

impl<C: Config, SERVER: DisplayServer> Manager<C, SERVER> {
    /// Process a collection of events, and apply them changes to a manager.
    /// Returns true if changes need to be rendered.
    pub fn display_event_handler(&mut self, event: DisplayEvent) -> bool {
        if self.state.mode.is_dragging() && !serviced_while_dragging(&event) {
            tracing::trace!("Deferred until the drag ends: {event:?}");
            self.deferred_events.push_back(event);
            return false;
        }
        let state = &mut self.state;
        match event {
            DisplayEvent::MonitorsChanged(screens) => state.update_monitors(&screens),
            DisplayEvent::WindowCreate(spec) => {
                if state.window_to_client(spec.handle).is_some() {
                    return false;
                }
                tracing::debug!("Managing {:?} ({})", spec.handle, spec.class);
                state.manage(&spec);
                true
            }
            DisplayEvent::WindowDestroy(handle) => unmanage(state, handle, true),
            DisplayEvent::WindowUnmap(handle) => unmanage(state, handle, false),
            DisplayEvent::ConfigureRequest(handle, request) => {
                state.configure_request(handle, request);
                false
            }
            DisplayEvent::PropertyChanged(handle, property) => {
                state.update_property(handle, property)
            }
            DisplayEvent::FullscreenRequest(handle, action) => {
                let Some(id) = state.window_to_client(handle) else {
                    return false;
                };
                let fullscreen = match action {
                    FullscreenAction::Add => true,
                    FullscreenAction::Remove => false,
                    FullscreenAction::Toggle => !state.clients[id].fullscreen,
                };
                state.set_fullscreen(id, fullscreen);
                true
            }
            DisplayEvent::ActivateRequest(handle) => {
                let Some(id) = state.window_to_client(handle) else {
                    return false;
                };
                state.activate(id);
                true
            }
            DisplayEvent::EnterNotify { window, x, y } => enter_notify(state, window, x, y),
            DisplayEvent::Motion { x, y } => {
                state.pointer = (x, y);
                state.focus_monitor_at(x, y)
            }
            DisplayEvent::ButtonPress { window, x, y } => button_press(state, window, x, y),
            DisplayEvent::DragStart {
                window,
                kind,
                x,
                y,
                time: _,
            } => state.start_drag(window, kind, x, y),
            DisplayEvent::DragMotion { x, y, time } => state.drag_motion(x, y, time),
            DisplayEvent::DragEnd { x, y } => {
                state.pointer = (x, y);
                let changed = state.end_drag();
                self.replay_deferred();
                changed
            }
            DisplayEvent::Expose => true,
            DisplayEvent::SendCommand(command) => self.command_handler(&command),
            // the event loop decides whether these end the session
            DisplayEvent::ProtocolError(_) => false,
        }
    }

    /// Queue the events held back during a drag ahead of anything buffered since.
    fn replay_deferred(&mut self) {
        if self.deferred_events.is_empty() {
            return;
        }
        let mut events = std::mem::take(&mut self.deferred_events);
        events.append(&mut self.event_buffer);
        self.event_buffer = events;
    }
}

/// While a drag is in progress only these keep being handled.
fn serviced_while_dragging(event: &DisplayEvent) -> bool {
    matches!(
        event,
        DisplayEvent::ConfigureRequest(..)
            | DisplayEvent::Expose
            | DisplayEvent::WindowCreate(_)
            | DisplayEvent::DragMotion { .. }
            | DisplayEvent::DragEnd { .. }
            | DisplayEvent::ProtocolError(_)
    )
}

fn unmanage(state: &mut State, handle: WindowHandle, destroyed: bool) -> bool {
    if state.window_to_client(handle).is_none() {
        return false;
    }
    tracing::debug!("Unmanaging {handle:?}");
    state.unmanage(handle, destroyed);
    true
}

/// Focus follows the pointer into windows and across monitors.
fn enter_notify(state: &mut State, window: Option<WindowHandle>, x: i32, y: i32) -> bool {
    state.pointer = (x, y);
    let client = window.and_then(|handle| state.window_to_client(handle));
    let monitor = client.map_or_else(
        || state.monitor_at(&crate::models::Xyhw::new(x, y, 1, 1)),
        |id| state.clients[id].monitor,
    );
    if monitor != state.selected_monitor {
        state.unfocus(state.selected_client(), true);
        state.selected_monitor = monitor;
    } else if client.is_none() || client == state.selected_client() {
        return false;
    }
    state.focus(client);
    true
}

/// A click focuses the monitor and the client under the pointer.
fn button_press(state: &mut State, window: Option<WindowHandle>, x: i32, y: i32) -> bool {
    state.pointer = (x, y);
    let mut changed = false;
    if window.is_none() {
        changed = state.focus_monitor_at(x, y);
    }
    if let Some(id) = window.and_then(|handle| state.window_to_client(handle)) {
        state.focus(Some(id));
        state.restack(state.selected_monitor);
        changed = true;
    }
    changed
}
