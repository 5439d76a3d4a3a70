use crate::models::{ClientId, Monitor, Xyhw};
use crate::State;

impl State {
    /// Sync the monitor set with the outputs reported by the display server.
    ///
    /// Duplicate rectangles count once. Clients of removed monitors move to the first monitor.
    /// Returns `true` when anything changed.
    pub fn update_monitors(&mut self, screens: &[Xyhw]) -> bool {
        let mut unique: Vec<Xyhw> = Vec::with_capacity(screens.len());
        for screen in screens {
            if !unique.contains(screen) {
                unique.push(*screen);
            }
        }
        if unique.is_empty() {
            tracing::warn!("Display server reported no outputs, keeping the current monitors");
            return false;
        }

        let bar_height = self.bar_height();
        let mut dirty = false;
        let existing = self.monitors.len();
        for (num, screen) in unique.iter().enumerate() {
            if num >= existing {
                self.monitors
                    .push(Monitor::new(num, *screen, &self.monitor_settings));
                dirty = true;
                continue;
            }
            let monitor = &mut self.monitors[num];
            if monitor.screen != *screen {
                monitor.num = num;
                monitor.screen = *screen;
                monitor.window_area = *screen;
                monitor.update_bar_position(bar_height);
                dirty = true;
            }
        }

        while self.monitors.len() > unique.len() {
            let Some(removed) = self.monitors.pop() else {
                break;
            };
            for id in removed.clients.iter().copied() {
                if let Some(client) = self.clients.get_mut(id) {
                    client.monitor = 0;
                }
                self.attach(id);
                self.attach_stack(id);
                dirty = true;
            }
            if self.selected_monitor == removed.num {
                self.selected_monitor = 0;
            }
        }

        if dirty {
            tracing::info!("Monitor set changed: {unique:?}");
            let (x, y) = self.pointer;
            self.selected_monitor = 0;
            self.selected_monitor = self.monitor_at(&Xyhw::new(x, y, 1, 1));
            let fullscreen: Vec<ClientId> = self
                .clients
                .iter()
                .filter(|(_, client)| client.fullscreen)
                .map(|(id, _)| id)
                .collect();
            for id in fullscreen {
                let screen = self.monitors[self.clients[id].monitor].screen;
                self.resize_client(id, screen);
            }
            self.focus(None);
            self.arrange(None);
        }
        dirty
    }

    /// Select the neighbouring monitor.
    pub fn focus_monitor(&mut self, direction: i32) {
        if self.monitors.len() < 2 {
            return;
        }
        let Some(target) = self.dir_to_monitor(direction) else {
            return;
        };
        if target == self.selected_monitor {
            return;
        }
        self.unfocus(self.selected_client(), false);
        self.selected_monitor = target;
        self.focus(None);
    }

    /// Select the monitor under the pointer. Returns `true` when it changed.
    pub fn focus_monitor_at(&mut self, x: i32, y: i32) -> bool {
        let target = self.monitor_at(&Xyhw::new(x, y, 1, 1));
        if target == self.selected_monitor {
            return false;
        }
        self.unfocus(self.selected_client(), true);
        self.selected_monitor = target;
        self.focus(None);
        true
    }

    /// Send the selection to the neighbouring monitor and follow it.
    pub fn tag_monitor(&mut self, direction: i32) {
        let Some(selected) = self.selected_client() else {
            return;
        };
        if self.monitors.len() < 2 {
            return;
        }
        if let Some(target) = self.dir_to_monitor(direction) {
            self.send_to_monitor(selected, target);
            self.switch_client(selected);
        }
    }

    /// Move a client to another monitor, taking on the tags that monitor shows.
    pub fn send_to_monitor(&mut self, id: ClientId, target: usize) {
        let Some(client) = self.clients.get(id) else {
            return;
        };
        if client.monitor == target || target >= self.monitors.len() {
            return;
        }
        self.unfocus(Some(id), true);
        self.detach(id);
        self.detach_stack(id);
        let tags = self.monitors[target].tagset() & self.tag_mask();
        if let Some(client) = self.clients.get_mut(id) {
            client.monitor = target;
            client.tags = tags;
        }
        self.attach_by_mode(id);
        self.attach_stack(id);
        self.focus(None);
        self.arrange(None);
    }
}
