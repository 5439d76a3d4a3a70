use crate::State;

impl State {
    /// Show every client of the selected monitor in a grid, or leave that mode again.
    ///
    /// Leaving goes to the tags of the client selected at that point. Clients marked hidden are
    /// hidden again on the way out, except the selection.
    pub fn toggle_overview(&mut self) {
        let index = self.selected_monitor;
        let Some(monitor) = self.monitors.get(index) else {
            return;
        };
        let selected = self.selected_client();
        if selected.map_or(false, |id| self.clients[id].fullscreen) {
            return;
        }
        let tag_mask = self.tag_mask();
        let target = selected
            .map(|id| self.clients[id].tags & tag_mask)
            .filter(|tags| !tags.is_empty())
            .unwrap_or_else(|| monitor.tagset() & tag_mask);
        let leaving = monitor.overview;

        for id in self.visible_clients(index) {
            if !leaving {
                self.show_window(id, false);
            } else if self.clients[id].hidden && Some(id) != selected {
                self.hide_window(id);
            }
        }
        self.monitors[index].overview = !leaving;
        tracing::debug!("Overview on monitor {index}: {}", !leaving);
        if !target.is_empty() {
            self.arrange(Some(index));
        }
        self.view(target);
        self.focus(self.selected_client());
    }
}
