use crate::layouts::Layout;
use crate::State;

impl State {
    pub fn inc_master_count(&mut self, delta: i32) {
        let index = self.selected_monitor;
        if let Some(monitor) = self.monitors.get_mut(index) {
            monitor.inc_master_count(delta);
            self.arrange(Some(index));
        }
    }

    /// See [`crate::models::Monitor::set_master_factor`] for how `value` is read.
    pub fn set_master_factor(&mut self, value: f32) {
        let index = self.selected_monitor;
        let default = self.monitor_settings.master_factor;
        let changed = self
            .monitors
            .get_mut(index)
            .map_or(false, |monitor| monitor.set_master_factor(value, default));
        if changed {
            self.arrange(Some(index));
        }
    }

    /// Switch layout. `None`, or the layout already in use, flips back to the previous one.
    pub fn set_layout(&mut self, layout: Option<Layout>) {
        let index = self.selected_monitor;
        let Some(monitor) = self.monitors.get_mut(index) else {
            return;
        };
        monitor.set_layout(layout);
        if monitor.selected.is_some() {
            self.arrange(Some(index));
        }
    }

    pub fn toggle_bar(&mut self) {
        let index = self.selected_monitor;
        let bar_height = self.bar_height();
        if let Some(monitor) = self.monitors.get_mut(index) {
            monitor.toggle_bar(bar_height);
            self.arrange(Some(index));
        }
    }
}
