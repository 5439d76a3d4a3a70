use crate::display_event::{ConfigureRequest, WindowProperty};
use crate::models::{Client, ClientId, Monitor, TagMask, WindowHandle, WindowSpec};
use crate::{DisplayAction, State};

impl State {
    /// Put a client at the head of its monitor's spatial order.
    pub fn attach(&mut self, id: ClientId) {
        if let Some(monitor) = self.client_monitor_mut(id) {
            monitor.clients.insert(0, id);
        }
    }

    /// Put a client at the end of its monitor's spatial order.
    pub fn attach_bottom(&mut self, id: ClientId) {
        if let Some(monitor) = self.client_monitor_mut(id) {
            monitor.clients.push(id);
        }
    }

    /// Overview and appending layouts keep new clients out of the master area.
    pub(crate) fn attach_by_mode(&mut self, id: ClientId) {
        let overview = self
            .monitors
            .get(self.selected_monitor)
            .map_or(false, |m| m.overview);
        let appends = self
            .clients
            .get(id)
            .and_then(|c| self.monitors.get(c.monitor))
            .map_or(false, |m| m.layout().appends());
        if overview || appends {
            self.attach_bottom(id);
        } else {
            self.attach(id);
        }
    }

    /// Remove a client from the spatial order and the access history.
    pub fn detach(&mut self, id: ClientId) {
        if let Some(monitor) = self.client_monitor_mut(id) {
            Monitor::unlink(&mut monitor.clients, id);
        }
        self.remove_access(id);
    }

    pub fn attach_stack(&mut self, id: ClientId) {
        if let Some(monitor) = self.client_monitor_mut(id) {
            monitor.stack.insert(0, id);
        }
    }

    /// Remove a client from the focus order. A selected client hands the selection to the most
    /// recently focused visible client.
    pub fn detach_stack(&mut self, id: ClientId) {
        let Some(index) = self.clients.get(id).map(|c| c.monitor) else {
            return;
        };
        let Some(monitor) = self.monitors.get_mut(index) else {
            return;
        };
        Monitor::unlink(&mut monitor.stack, id);
        if monitor.selected != Some(id) {
            return;
        }
        let next = self.monitors[index]
            .stack
            .iter()
            .copied()
            .find(|&other| self.is_visible(other));
        self.monitors[index].selected = next;
    }

    /// Move a client to the head of the selected monitor's access history.
    pub fn add_access(&mut self, id: ClientId) {
        self.remove_access(id);
        if let Some(monitor) = self.monitors.get_mut(self.selected_monitor) {
            monitor.access.insert(0, id);
        }
    }

    /// Forget a client in the access history of every monitor.
    pub fn remove_access(&mut self, id: ClientId) {
        for monitor in &mut self.monitors {
            Monitor::unlink(&mut monitor.access, id);
        }
    }

    /// Start managing a window.
    pub fn manage(&mut self, spec: &WindowSpec) {
        if self.monitors.is_empty() || self.window_to_client(spec.handle).is_some() {
            return;
        }
        let parent = spec
            .transient_for
            .and_then(|handle| self.window_to_client(handle))
            .and_then(|id| self.clients.get(id));

        let mut client = Client::new(spec, self.selected_monitor, self.border_width);
        if let Some(parent) = parent {
            let mask = self.tag_mask();
            client.monitor = parent.monitor;
            client.tags = parent.tags & mask;
            // a dialog of the scratchpad lands on the tags in view
            if client.tags.is_empty() {
                client.tags = self.monitors[parent.monitor].tagset() & mask;
            }
        } else {
            self.apply_rules(&mut client);
        }

        let area = self.monitors[client.monitor].window_area;
        if client.geometry.x + client.width() > area.right() {
            client.geometry.x = area.right() - client.width();
        }
        if client.geometry.y + client.height() > area.bottom() {
            client.geometry.y = area.bottom() - client.height();
        }
        client.geometry.x = client.geometry.x.max(area.x);
        client.geometry.y = client.geometry.y.max(area.y);

        if client.name == self.scratchpad.name {
            let scratch = self.scratch_tag();
            let monitor = &mut self.monitors[client.monitor];
            monitor.set_tagset(monitor.tagset() | scratch);
            client.tags = scratch;
            client.floating = true;
            let (x, y) = area.centered(client.width(), client.height());
            client.geometry.x = x;
            client.geometry.y = y;
        }

        if !client.floating {
            client.floating = spec.transient_for.is_some() || client.fixed || spec.dialog;
            client.old_floating = client.floating;
        }

        let (handle, monitor, floating) = (client.handle, client.monitor, client.floating);
        let parked = {
            let mut geometry = client.geometry;
            geometry.x += 2 * self.screen_size().0;
            geometry
        };
        let border_width = client.border_width;
        let id = self.clients.insert(client);
        tracing::debug!("Managing {handle:?} on monitor {monitor}");

        self.actions.push_back(DisplayAction::SetBorderWidth {
            window: handle,
            width: border_width,
        });
        if floating {
            self.actions.push_back(DisplayAction::Raise(handle));
        }
        self.attach_by_mode(id);
        self.attach_stack(id);
        self.actions.push_back(DisplayAction::MoveResize {
            window: handle,
            geometry: parked,
            border_width,
        });
        if spec.fullscreen {
            self.set_fullscreen(id, true);
        }
        if self.is_visible(id) {
            if monitor == self.selected_monitor {
                self.unfocus(self.selected_client(), false);
            }
            self.monitors[monitor].selected = Some(id);
        }
        self.arrange(Some(monitor));
        self.actions.push_back(DisplayAction::Show(handle));
        self.focus(None);
    }

    /// Stop managing a window. `destroyed` windows get no border restored.
    pub fn unmanage(&mut self, handle: WindowHandle, destroyed: bool) {
        let Some(id) = self.window_to_client(handle) else {
            return;
        };
        let scratch = self.scratch_tag();
        let (monitor, tags) = {
            let client = &self.clients[id];
            (client.monitor, client.tags)
        };
        if tags.intersects(scratch) {
            if let Some(m) = self.monitors.get_mut(monitor) {
                for tagset in &mut m.tagsets {
                    *tagset &= !scratch;
                }
            }
        }

        self.detach(id);
        self.detach_stack(id);
        if let Some(client) = self.clients.remove(id) {
            tracing::debug!("Unmanaged {:?} (destroyed: {destroyed})", client.handle);
            if !destroyed {
                self.actions.push_back(DisplayAction::SetBorderWidth {
                    window: client.handle,
                    width: client.old_border_width,
                });
            }
        }
        self.focus(None);
        self.arrange(Some(monitor));
    }

    fn apply_rules(&self, client: &mut Client) {
        let mut tags = TagMask::EMPTY;
        client.floating = false;
        for rule in self
            .rules
            .iter()
            .filter(|rule| rule.matches(&client.class, &client.instance, &client.name))
        {
            client.floating = rule.floating;
            tags |= rule.tags;
            client.border_width = if rule.hide_border { 0 } else { self.border_width };
            if let Some(monitor) = rule.monitor.filter(|&m| m < self.monitors.len()) {
                client.monitor = monitor;
            }
            if rule.floating {
                let area = self.monitors[client.monitor].window_area;
                let geometry = &mut client.geometry;
                if rule.w > 0 {
                    geometry.w = rule.w;
                }
                if rule.h > 0 {
                    geometry.h = rule.h;
                }
                if rule.x > 0 {
                    geometry.x = rule.x;
                } else if rule.x < 0 {
                    geometry.x = area.right() + rule.x;
                }
                if rule.y > 0 {
                    geometry.y = rule.y;
                } else if rule.y < 0 {
                    geometry.y = area.bottom() + rule.y;
                }
            }
        }
        let mask = self.tag_mask();
        client.tags = if (tags & mask).is_empty() {
            self.monitors[client.monitor].tagset() & mask
        } else {
            tags & mask
        };
    }

    /// Floating clients get what they ask for, tiled ones are told their current geometry.
    pub fn configure_request(&mut self, handle: WindowHandle, request: ConfigureRequest) {
        let Some(id) = self.window_to_client(handle) else {
            return;
        };
        let arranges = self
            .monitors
            .get(self.selected_monitor)
            .map_or(true, |m| m.layout().arranges());
        let Some(client) = self.clients.get_mut(id) else {
            return;
        };
        if let Some(border_width) = request.border_width {
            client.border_width = border_width;
            return;
        }
        if !client.floating && arranges {
            self.actions.push_back(DisplayAction::ConfigureNotify {
                window: client.handle,
                geometry: client.geometry,
                border_width: client.border_width,
            });
            return;
        }

        let screen = self.monitors[client.monitor].screen;
        let geometry = &mut client.geometry;
        let old = &mut client.old_geometry;
        if let Some(x) = request.x {
            old.x = geometry.x;
            geometry.x = screen.x + x;
        }
        if let Some(y) = request.y {
            old.y = geometry.y;
            geometry.y = screen.y + y;
        }
        if let Some(w) = request.w {
            old.w = geometry.w;
            geometry.w = w;
        }
        if let Some(h) = request.h {
            old.h = geometry.h;
            geometry.h = h;
        }
        if client.floating {
            let (x, y) = screen.centered(client.width(), client.height());
            if client.geometry.right() > screen.right() {
                client.geometry.x = x;
            }
            if client.geometry.bottom() > screen.bottom() {
                client.geometry.y = y;
            }
        }
        let moved_only = (request.x.is_some() || request.y.is_some())
            && request.w.is_none()
            && request.h.is_none();
        let (geometry, border_width) = (client.geometry, client.border_width);
        if moved_only {
            self.actions.push_back(DisplayAction::ConfigureNotify {
                window: handle,
                geometry,
                border_width,
            });
        }
        if self.is_visible(id) {
            self.actions.push_back(DisplayAction::MoveResize {
                window: handle,
                geometry,
                border_width,
            });
        }
    }

    /// Apply a property change. Returns `true` when the bars need a redraw.
    pub fn update_property(&mut self, handle: WindowHandle, property: WindowProperty) -> bool {
        let Some(id) = self.window_to_client(handle) else {
            return false;
        };
        let selected = self.selected_client() == Some(id);
        let parent_managed = match &property {
            WindowProperty::TransientFor(parent) => self.window_to_client(*parent).is_some(),
            _ => false,
        };
        let Some(client) = self.clients.get_mut(id) else {
            return false;
        };
        match property {
            WindowProperty::Title(name) => {
                client.name = name;
                self.monitors
                    .get(client.monitor)
                    .map_or(false, |m| m.selected == Some(id))
            }
            WindowProperty::SizeHints(hints) => {
                client.update_hints(hints);
                false
            }
            WindowProperty::WmHints {
                urgent,
                never_focus,
            } => {
                // the focused client never stays urgent
                client.urgent = urgent && !selected;
                client.never_focus = never_focus;
                true
            }
            WindowProperty::TransientFor(_) => {
                if client.floating || !parent_managed {
                    return false;
                }
                client.floating = true;
                let monitor = client.monitor;
                self.arrange(Some(monitor));
                true
            }
            WindowProperty::Dialog => {
                client.floating = true;
                false
            }
        }
    }

    fn client_monitor_mut(&mut self, id: ClientId) -> Option<&mut Monitor> {
        let index = self.clients.get(id)?.monitor;
        self.monitors.get_mut(index)
    }
}
