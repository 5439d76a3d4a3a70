use crate::errors::{Result, TagError};
use crate::{Config, DisplayEvent, DisplayServer, Manager};
use std::sync::atomic::Ordering;

impl<C: Config, SERVER: DisplayServer> Manager<C, SERVER> {
    /// Handle display events one at a time until a `Quit` command.
    ///
    /// # Errors
    ///
    /// Returns `TagError::Protocol` for a protocol error that does not come from a vanished
    /// window and `TagError::DisplayClosed` once the display server stops sending events.
    pub fn event_loop(&mut self) -> Result<()> {
        self.state.draw_bars();
        self.execute_actions();

        while !self.quit_requested {
            let event = match self.event_buffer.pop_front() {
                Some(event) => event,
                None => self
                    .display_server
                    .next_event()
                    .ok_or(TagError::DisplayClosed)?,
            };

            if let DisplayEvent::ProtocolError(error) = event {
                if !error.is_ignorable() {
                    tracing::error!("Fatal display server error: {error}");
                    return Err(TagError::Protocol(error));
                }
                tracing::debug!("Ignoring display server error: {error}");
                continue;
            }

            if self.display_event_handler(event) {
                self.state.draw_bars();
            }
            self.execute_actions();

            if !self.state.mode.is_dragging() {
                if let Some(status_file) = &mut self.status_file {
                    status_file.update(&self.state);
                }
            }

            if self.reap_requested.swap(false, Ordering::SeqCst) {
                self.children.remove_finished_children();
                tracing::debug!("Reaped children, {} still running", self.children.len());
            }
        }
        tracing::info!("Leaving the event loop");
        Ok(())
    }

    /// Preform any actions requested by the handlers.
    fn execute_actions(&mut self) {
        while let Some(act) = self.state.actions.pop_front() {
            if let Some(event) = self.display_server.execute_action(act) {
                self.event_buffer.push_back(event);
            }
        }
        self.display_server.flush();
    }
}

#[cfg(test)]
mod tests {
    use crate::config::TestConfig;
    use crate::display_event::DragKind;
    use crate::display_servers::MockDisplayServer;
    use crate::errors::{ProtocolError, Result, TagError};
    use crate::handlers::client_handler::tests::spec;
    use crate::models::{WindowHandle, Xyhw};
    use crate::{Command, DisplayAction, DisplayEvent, Manager};

    fn run(events: Vec<DisplayEvent>) -> (Manager<TestConfig, MockDisplayServer>, Result<()>) {
        let mut manager = Manager::new_test();
        manager.display_server.events = events.into();
        let result = manager.event_loop();
        (manager, result)
    }

    #[test]
    fn the_loop_runs_until_quit() {
        let (manager, result) = run(vec![
            DisplayEvent::WindowCreate(spec(1)),
            DisplayEvent::SendCommand(Command::Quit),
            DisplayEvent::WindowCreate(spec(2)),
        ]);
        assert!(result.is_ok());
        assert_eq!(manager.state.clients.len(), 1);
        assert!(manager.state.actions.is_empty());
        assert!(manager
            .display_server
            .executed
            .contains(&DisplayAction::Show(WindowHandle(1))));
        assert!(manager
            .display_server
            .executed
            .iter()
            .any(|act| matches!(act, DisplayAction::DrawBar(_))));
    }

    #[test]
    fn errors_from_vanished_windows_are_survived() {
        let (_, result) = run(vec![
            DisplayEvent::ProtocolError(ProtocolError {
                request_code: 42,
                error_code: 8,
            }),
            DisplayEvent::SendCommand(Command::Quit),
        ]);
        assert!(result.is_ok());
    }

    #[test]
    fn other_protocol_errors_end_the_loop() {
        let (_, result) = run(vec![DisplayEvent::ProtocolError(ProtocolError {
            request_code: 1,
            error_code: 11,
        })]);
        assert!(matches!(result, Err(TagError::Protocol(_))));
    }

    #[test]
    fn windows_destroyed_during_a_drag_are_unmanaged_after_it() {
        let mut dialog = spec(1);
        dialog.dialog = true;
        let (manager, result) = run(vec![
            DisplayEvent::WindowCreate(dialog),
            DisplayEvent::WindowCreate(spec(2)),
            DisplayEvent::DragStart {
                window: WindowHandle(1),
                kind: DragKind::Move,
                x: 150,
                y: 150,
                time: 0,
            },
            DisplayEvent::WindowDestroy(WindowHandle(2)),
            DisplayEvent::DragMotion {
                x: 200,
                y: 160,
                time: 100,
            },
            DisplayEvent::DragEnd { x: 200, y: 160 },
            DisplayEvent::SendCommand(Command::Quit),
        ]);
        assert!(result.is_ok());
        let state = &manager.state;
        assert!(state.window_to_client(WindowHandle(2)).is_none());
        let remaining = state.window_to_client(WindowHandle(1)).unwrap();
        let monitor = &state.monitors[0];
        assert_eq!(monitor.clients, vec![remaining]);
        assert_eq!(monitor.stack, vec![remaining]);
        assert_eq!(monitor.access, vec![remaining]);
        assert!(manager.deferred_events.is_empty());
    }

    #[test]
    fn a_closed_connection_ends_the_loop() {
        let (_, result) = run(vec![DisplayEvent::MonitorsChanged(vec![Xyhw::new(
            0, 0, 800, 600,
        )])]);
        assert!(matches!(result, Err(TagError::DisplayClosed)));
    }

    #[test]
    fn the_status_file_tracks_the_selection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("status.json");
        let config = TestConfig {
            status_file: Some(path.clone()),
            ..TestConfig::default()
        };
        let mut manager = Manager::new_test_with(config);
        manager.display_server.events = vec![
            DisplayEvent::WindowCreate(spec(7)),
            DisplayEvent::SendCommand(Command::Quit),
        ]
        .into();
        manager.event_loop().unwrap();
        let written = std::fs::read_to_string(path).unwrap();
        assert!(written.contains("\"selected_window\":7"));
    }
}
