//! The window manager's mutable model: monitors, the client arena and global toggles.

use crate::config::{Config, Rule, ScratchPad, StepDivisors};
use crate::errors::Result;
use crate::models::{
    Client, ClientId, Gaps, Mode, Monitor, MonitorSettings, TagMask, Tags, WindowHandle, Xyhw,
};
use crate::DisplayAction;
use slotmap::SlotMap;
use std::collections::VecDeque;

#[derive(Debug)]
pub struct State {
    pub monitors: Vec<Monitor>,
    pub clients: SlotMap<ClientId, Client>,
    pub selected_monitor: usize,
    pub tags: Tags,
    pub gaps_enabled: bool,
    pub smart_gaps: bool,
    pub mode: Mode,
    pub pointer: (i32, i32),
    pub actions: VecDeque<DisplayAction>,
    pub monitor_settings: MonitorSettings,
    pub border_width: i32,
    pub snap: i32,
    pub resize_hints: bool,
    pub lock_fullscreen: bool,
    pub float_gaps: Gaps,
    pub steps: StepDivisors,
    pub rules: Vec<Rule>,
    pub scratchpad: ScratchPad,
}

impl State {
    /// # Errors
    ///
    /// Fails when the configured tag labels are empty or too many for a tag mask.
    pub fn new(config: &impl Config) -> Result<Self> {
        let tags = Tags::new(config.tags())?;
        let monitor_settings = MonitorSettings {
            tag_count: tags.len(),
            master_factor: config.master_factor(),
            master_count: config.master_count(),
            show_bar: config.show_bar(),
            top_bar: config.top_bar(),
            bar_height: config.bar_height(),
            gaps: config.gaps().clamped(),
            layouts: config.layouts(),
        };

        Ok(Self {
            monitors: vec![],
            clients: SlotMap::with_key(),
            selected_monitor: 0,
            tags,
            gaps_enabled: true,
            smart_gaps: config.smart_gaps(),
            mode: Mode::Normal,
            pointer: (0, 0),
            actions: VecDeque::new(),
            monitor_settings,
            border_width: config.border_width(),
            snap: config.snap(),
            resize_hints: config.resize_hints(),
            lock_fullscreen: config.lock_fullscreen(),
            float_gaps: config.float_gaps().clamped(),
            steps: config.steps(),
            rules: config.rules(),
            scratchpad: config.scratchpad(),
        })
    }

    /// Every user tag.
    pub fn tag_mask(&self) -> TagMask {
        self.tags.mask()
    }

    /// The tag reserved for the scratchpad.
    pub fn scratch_tag(&self) -> TagMask {
        self.tags.scratch()
    }

    pub fn bar_height(&self) -> i32 {
        self.monitor_settings.bar_height
    }

    pub fn selected_client(&self) -> Option<ClientId> {
        self.monitors.get(self.selected_monitor)?.selected
    }

    pub fn window_to_client(&self, handle: WindowHandle) -> Option<ClientId> {
        self.clients
            .iter()
            .find(|(_, client)| client.handle == handle)
            .map(|(id, _)| id)
    }

    pub fn is_visible(&self, id: ClientId) -> bool {
        self.clients.get(id).map_or(false, |client| {
            self.monitors
                .get(client.monitor)
                .map_or(false, |monitor| client.is_visible_on(monitor))
        })
    }

    /// Visible clients the layout places.
    pub fn is_tiled(&self, id: ClientId) -> bool {
        self.is_visible(id)
            && self
                .clients
                .get(id)
                .map_or(false, |client| !client.floating && !client.iconic)
    }

    /// Tiled clients of a monitor in spatial order.
    pub fn tiled_clients(&self, monitor: usize) -> Vec<ClientId> {
        self.monitors.get(monitor).map_or_else(Vec::new, |m| {
            m.clients
                .iter()
                .copied()
                .filter(|&id| self.is_tiled(id))
                .collect()
        })
    }

    /// Visible clients of a monitor in spatial order.
    pub fn visible_clients(&self, monitor: usize) -> Vec<ClientId> {
        self.monitors.get(monitor).map_or_else(Vec::new, |m| {
            m.clients
                .iter()
                .copied()
                .filter(|&id| self.is_visible(id))
                .collect()
        })
    }

    /// Extent of the area covered by all monitors.
    pub fn screen_size(&self) -> (i32, i32) {
        self.monitors.iter().fold((0, 0), |(w, h), m| {
            (w.max(m.screen.right()), h.max(m.screen.bottom()))
        })
    }

    /// The monitor whose usable area overlaps `rect` the most, the selected one on a tie at zero.
    pub fn monitor_at(&self, rect: &Xyhw) -> usize {
        let mut best = self.selected_monitor;
        let mut area = 0;
        for (index, monitor) in self.monitors.iter().enumerate() {
            let overlap = monitor.window_area.intersection_area(rect);
            if overlap > area {
                area = overlap;
                best = index;
            }
        }
        best
    }

    /// The neighbouring monitor in `direction`, wrapping around.
    pub fn dir_to_monitor(&self, direction: i32) -> Option<usize> {
        let count = self.monitors.len();
        if count == 0 {
            return None;
        }
        let index = if direction > 0 {
            (self.selected_monitor + 1) % count
        } else {
            (self.selected_monitor + count - 1) % count
        };
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TestConfig;
    use crate::errors::TagError;

    #[test]
    fn too_many_tags_fail_at_startup() {
        let config = TestConfig {
            tags: (0..40).map(|i| i.to_string()).collect(),
            ..TestConfig::default()
        };
        assert!(matches!(
            State::new(&config),
            Err(TagError::TooManyTags { count: 40, .. })
        ));
    }

    #[test]
    fn monitors_are_found_by_overlap() {
        let mut state = State::new(&TestConfig::default()).unwrap();
        state.update_monitors(&[Xyhw::new(0, 0, 1920, 1080), Xyhw::new(1920, 0, 1280, 1024)]);
        assert_eq!(state.monitor_at(&Xyhw::new(1900, 10, 200, 200)), 1);
        assert_eq!(state.monitor_at(&Xyhw::new(100, 10, 200, 200)), 0);
        assert_eq!(state.monitor_at(&Xyhw::new(-500, -500, 10, 10)), 0);
        assert_eq!(state.screen_size(), (3200, 1080));
    }

    #[test]
    fn monitor_directions_wrap() {
        let mut state = State::new(&TestConfig::default()).unwrap();
        state.update_monitors(&[
            Xyhw::new(0, 0, 100, 100),
            Xyhw::new(100, 0, 100, 100),
            Xyhw::new(200, 0, 100, 100),
        ]);
        assert_eq!(state.dir_to_monitor(1), Some(1));
        assert_eq!(state.dir_to_monitor(-1), Some(2));
    }
}
