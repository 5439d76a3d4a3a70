use serde::{Deserialize, Serialize};

use crate::layouts::Layout;
use crate::models::{ClientId, Gaps, Pertag, PertagEntry, TagMask, Xyhw};

// Master factors outside this range are refused.
const MIN_MASTER_FACTOR: f32 = 0.05;
const MAX_MASTER_FACTOR: f32 = 0.95;

/// Defaults every new monitor starts from.
#[derive(Clone, Debug, PartialEq)]
pub struct MonitorSettings {
    pub tag_count: usize,
    pub master_factor: f32,
    pub master_count: i32,
    pub show_bar: bool,
    pub top_bar: bool,
    pub bar_height: i32,
    pub gaps: Gaps,
    pub layouts: Vec<Layout>,
}

/// One output and everything shown on it.
///
/// `clients` is the spatial order used by the layouts, `stack` the focus order (most recently
/// focused first) and `access` the history used to jump back to previous clients.
#[allow(clippy::struct_excessive_bools)]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Monitor {
    pub num: usize,
    pub layout_symbol: String,
    pub master_factor: f32,
    pub master_count: i32,
    pub bar_y: i32,
    pub screen: Xyhw,
    pub window_area: Xyhw,
    pub gaps: Gaps,
    pub selected_tags: usize,
    pub selected_layout: usize,
    pub tagsets: [TagMask; 2],
    pub layouts: [Layout; 2],
    pub show_bar: bool,
    pub top_bar: bool,
    pub overview: bool,
    pub clients: Vec<ClientId>,
    pub stack: Vec<ClientId>,
    pub access: Vec<ClientId>,
    pub selected: Option<ClientId>,
    pub pertag: Pertag,
}

impl Monitor {
    pub fn new(num: usize, screen: Xyhw, settings: &MonitorSettings) -> Self {
        let first = settings.layouts.first().copied().unwrap_or_default();
        let second = match settings.layouts.len() {
            0 => first,
            len => settings.layouts[1 % len],
        };
        let layouts = [first, second];
        let entry = PertagEntry {
            master_count: settings.master_count,
            master_factor: settings.master_factor,
            selected_layout: 0,
            layouts,
            show_bar: settings.show_bar,
        };
        let mut monitor = Self {
            num,
            layout_symbol: first.symbol().to_string(),
            master_factor: settings.master_factor,
            master_count: settings.master_count,
            bar_y: 0,
            screen,
            window_area: screen,
            gaps: settings.gaps,
            selected_tags: 0,
            selected_layout: 0,
            tagsets: [TagMask::tag(0); 2],
            layouts,
            show_bar: settings.show_bar,
            top_bar: settings.top_bar,
            overview: false,
            clients: vec![],
            stack: vec![],
            access: vec![],
            selected: None,
            pertag: Pertag::new(settings.tag_count, entry),
        };
        monitor.update_bar_position(settings.bar_height);
        monitor
    }

    /// The tag-set currently shown.
    pub fn tagset(&self) -> TagMask {
        self.tagsets[self.selected_tags]
    }

    pub fn set_tagset(&mut self, tagset: TagMask) {
        self.tagsets[self.selected_tags] = tagset;
    }

    pub fn layout(&self) -> Layout {
        self.layouts[self.selected_layout]
    }

    /// Load the live layout state from the resolved pertag slot.
    pub fn apply_pertag(&mut self, bar_height: i32) {
        let entry = *self.pertag.current_entry();
        self.master_count = entry.master_count;
        self.master_factor = entry.master_factor;
        self.selected_layout = entry.selected_layout;
        self.layouts = entry.layouts;
        if self.show_bar != entry.show_bar {
            self.toggle_bar(bar_height);
        }
    }

    pub fn write_pertag(&mut self, update: impl FnMut(&mut PertagEntry)) {
        let tagset = self.tagset();
        self.pertag.write(tagset, update);
    }

    /// Carve the bar out of the screen. A hidden bar is parked just outside of it.
    pub fn update_bar_position(&mut self, bar_height: i32) {
        self.window_area.y = self.screen.y;
        self.window_area.h = self.screen.h;
        if self.show_bar {
            self.window_area.h -= bar_height;
            if self.top_bar {
                self.bar_y = self.window_area.y;
                self.window_area.y += bar_height;
            } else {
                self.bar_y = self.window_area.y + self.window_area.h;
            }
        } else if self.top_bar {
            self.bar_y = -bar_height;
        } else {
            self.bar_y = self.window_area.h + bar_height;
        }
    }

    pub fn toggle_bar(&mut self, bar_height: i32) {
        self.show_bar = !self.show_bar;
        let show_bar = self.show_bar;
        self.write_pertag(|entry| entry.show_bar = show_bar);
        self.update_bar_position(bar_height);
    }

    pub fn inc_master_count(&mut self, delta: i32) {
        self.master_count = (self.master_count + delta).max(0);
        let master_count = self.master_count;
        self.write_pertag(|entry| entry.master_count = master_count);
    }

    /// Values below `1.0` are relative to the current factor, values above are absolute plus
    /// one, and `0.0` goes back to `default`.
    ///
    /// Returns `false` when nothing changed.
    pub fn set_master_factor(&mut self, value: f32, default: f32) -> bool {
        if !self.layout().arranges() {
            return false;
        }
        let factor = if value == 0.0 {
            default
        } else if value < 1.0 {
            value + self.master_factor
        } else {
            value - 1.0
        };
        if !(MIN_MASTER_FACTOR..=MAX_MASTER_FACTOR).contains(&factor) {
            return false;
        }
        self.master_factor = factor;
        self.write_pertag(|entry| entry.master_factor = factor);
        true
    }

    /// Requesting the layout already in use, or none, flips to the alternate layout.
    pub fn set_layout(&mut self, layout: Option<Layout>) {
        let requested = layout.filter(|&layout| layout != self.layout());
        self.selected_layout ^= 1;
        if let Some(layout) = requested {
            self.layouts[self.selected_layout] = layout;
        }
        self.layout_symbol = self.layout().symbol().to_string();

        let (selected, layout) = (self.selected_layout, self.layout());
        self.write_pertag(|entry| {
            entry.layouts[selected] = layout;
            entry.selected_layout = selected;
        });
    }

    pub(crate) fn unlink(list: &mut Vec<ClientId>, id: ClientId) {
        list.retain(|&other| other != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> MonitorSettings {
        MonitorSettings {
            tag_count: 9,
            master_factor: 0.55,
            master_count: 1,
            show_bar: true,
            top_bar: true,
            bar_height: 20,
            gaps: Gaps::uniform(10),
            layouts: vec![Layout::Tile, Layout::Monocle, Layout::Grid],
        }
    }

    fn monitor() -> Monitor {
        Monitor::new(0, Xyhw::new(0, 0, 1920, 1080), &settings())
    }

    #[test]
    fn the_bar_is_carved_out_of_the_screen() {
        let mut mon = monitor();
        assert_eq!(mon.window_area, Xyhw::new(0, 20, 1920, 1060));
        assert_eq!(mon.bar_y, 0);

        mon.top_bar = false;
        mon.update_bar_position(20);
        assert_eq!(mon.window_area, Xyhw::new(0, 0, 1920, 1060));
        assert_eq!(mon.bar_y, 1060);

        mon.toggle_bar(20);
        assert_eq!(mon.window_area, Xyhw::new(0, 0, 1920, 1080));
        assert_eq!(mon.bar_y, 1100);
    }

    #[test]
    fn layouts_start_with_the_first_two_configured() {
        let mon = monitor();
        assert_eq!(mon.layouts, [Layout::Tile, Layout::Monocle]);
        assert_eq!(mon.layout_symbol, "[]=");

        let single = MonitorSettings {
            layouts: vec![Layout::Grid],
            ..settings()
        };
        let mon = Monitor::new(0, Xyhw::new(0, 0, 100, 100), &single);
        assert_eq!(mon.layouts, [Layout::Grid, Layout::Grid]);
    }

    #[test]
    fn setting_the_current_layout_flips_back() {
        let mut mon = monitor();
        mon.set_layout(Some(Layout::Grid));
        assert_eq!(mon.layout(), Layout::Grid);
        assert_eq!(mon.layouts, [Layout::Tile, Layout::Grid]);
        mon.set_layout(Some(Layout::Grid));
        assert_eq!(mon.layout(), Layout::Tile);
        mon.set_layout(None);
        assert_eq!(mon.layout(), Layout::Grid);
        assert_eq!(mon.layout_symbol, "###");
    }

    #[test]
    fn master_factor_is_relative_absolute_or_reset() {
        let mut mon = monitor();
        assert!(mon.set_master_factor(0.05, 0.55));
        assert!((mon.master_factor - 0.6).abs() < 1e-6);
        assert!(mon.set_master_factor(1.3, 0.55));
        assert!((mon.master_factor - 0.3).abs() < 1e-6);
        assert!(mon.set_master_factor(0.0, 0.55));
        assert!((mon.master_factor - 0.55).abs() < 1e-6);
        assert!(!mon.set_master_factor(0.5, 0.55));
        assert!((mon.master_factor - 0.55).abs() < 1e-6);
    }

    #[test]
    fn master_factor_is_ignored_without_arrangement() {
        let mut mon = monitor();
        mon.set_layout(Some(Layout::Floating));
        assert!(!mon.set_master_factor(0.1, 0.55));
    }

    #[test]
    fn master_count_never_goes_negative() {
        let mut mon = monitor();
        mon.inc_master_count(-3);
        assert_eq!(mon.master_count, 0);
        mon.inc_master_count(2);
        assert_eq!(mon.master_count, 2);
        assert_eq!(mon.pertag.entry(1).map(|e| e.master_count), Some(2));
        assert_eq!(mon.pertag.entry(2).map(|e| e.master_count), Some(1));
    }
}
