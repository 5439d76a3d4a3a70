use crate::models::ClientId;
use crate::{DisplayAction, State};

impl State {
    /// Flip the selection between tiled and floating. Fixed size clients always float.
    pub fn toggle_floating(&mut self) {
        let Some(selected) = self.selected_client() else {
            return;
        };
        let client = &mut self.clients[selected];
        if client.fullscreen {
            return;
        }
        client.floating = !client.floating || client.fixed;
        if client.floating {
            let geometry = client.geometry;
            self.resize(selected, geometry, false);
        }
        self.arrange(Some(self.selected_monitor));
    }

    /// Cover the whole screen of the client's monitor, or go back to the geometry, border and
    /// floating state it had before.
    pub fn set_fullscreen(&mut self, id: ClientId, fullscreen: bool) {
        let Some(client) = self.clients.get_mut(id) else {
            return;
        };
        let handle = client.handle;
        if fullscreen && !client.fullscreen {
            client.fullscreen = true;
            client.old_floating = client.floating;
            client.old_border_width = client.border_width;
            client.border_width = 0;
            client.floating = true;
            let screen = self.monitors[client.monitor].screen;
            self.actions.push_back(DisplayAction::SetFullscreenHint {
                window: handle,
                fullscreen: true,
            });
            self.resize_client(id, screen);
            self.actions.push_back(DisplayAction::Raise(handle));
        } else if !fullscreen && client.fullscreen {
            client.fullscreen = false;
            client.floating = client.old_floating;
            client.border_width = client.old_border_width;
            let (geometry, monitor) = (client.old_geometry, client.monitor);
            self.actions.push_back(DisplayAction::SetFullscreenHint {
                window: handle,
                fullscreen: false,
            });
            self.resize_client(id, geometry);
            self.arrange(Some(monitor));
        }
    }

    pub fn toggle_fullscreen(&mut self) {
        if let Some(selected) = self.selected_client() {
            let fullscreen = self.clients[selected].fullscreen;
            self.set_fullscreen(selected, !fullscreen);
        }
    }

    /// Unmap a client and remember that it was hidden on purpose.
    pub fn hide_window(&mut self, id: ClientId) {
        let Some(client) = self.clients.get_mut(id) else {
            return;
        };
        if client.iconic {
            return;
        }
        client.iconic = true;
        client.hidden = true;
        self.actions.push_back(DisplayAction::Hide(client.handle));
    }

    /// Map a hidden client again. `clear` also forgets that it was hidden on purpose, otherwise
    /// it hides again once it loses focus.
    pub fn show_window(&mut self, id: ClientId, clear: bool) {
        let Some(client) = self.clients.get_mut(id) else {
            return;
        };
        if clear {
            client.hidden = false;
        }
        if !client.iconic {
            return;
        }
        client.iconic = false;
        let monitor = client.monitor;
        self.actions.push_back(DisplayAction::Show(client.handle));
        self.arrange(Some(monitor));
    }

    /// Hide the selection and focus whatever is left.
    pub fn hide_selected(&mut self) {
        if let Some(selected) = self.selected_client() {
            self.hide_window(selected);
        }
        self.focus(None);
        self.arrange(Some(self.selected_monitor));
    }

    pub fn show_selected(&mut self) {
        if let Some(selected) = self.selected_client() {
            self.show_window(selected, true);
        }
    }

    /// Show every hidden client on the shown tags.
    pub fn show_all(&mut self) {
        let index = self.selected_monitor;
        for id in self.visible_clients(index) {
            self.show_window(id, true);
        }
        if self.selected_client().is_none() {
            if let Some(&first) = self.visible_clients(index).first() {
                self.focus(Some(first));
            }
        }
        self.restack(index);
    }

    /// Hide a shown client or show a hidden one. Hiding the selection hands focus to another
    /// shown client; when there is none the client only gets marked and stays up until it
    /// loses focus.
    pub fn toggle_window(&mut self, id: ClientId) {
        let Some(client) = self.clients.get(id) else {
            return;
        };
        let (monitor, hidden) = (client.monitor, client.hidden);
        if self.selected_client() == Some(id) {
            if hidden {
                self.show_window(id, true);
            } else {
                let next = self.monitors[monitor].stack.iter().copied().find(|&other| {
                    other != id && self.is_visible(other) && !self.clients[other].iconic
                });
                match next {
                    Some(next) => {
                        self.hide_window(id);
                        self.focus(Some(next));
                    }
                    None => self.clients[id].hidden = true,
                }
            }
        } else if hidden {
            self.show_window(id, true);
            self.focus(Some(id));
        } else {
            self.hide_window(id);
        }
        self.arrange(Some(monitor));
    }

    pub fn kill_client(&mut self) {
        if let Some(selected) = self.selected_client() {
            let handle = self.clients[selected].handle;
            self.actions.push_back(DisplayAction::KillClient(handle));
        }
    }

    /// A client asked to be activated. It is marked urgent on the way unless it already has focus.
    pub fn activate(&mut self, id: ClientId) {
        if self.selected_client() != Some(id) {
            if let Some(client) = self.clients.get_mut(id) {
                client.urgent = true;
            }
        }
        self.switch_client(id);
    }
}
