use crate::models::{split_evenly, BarState, Tab, TagIndicator, TagMask};
use crate::{DisplayAction, State};

impl State {
    /// Queue a redraw of every bar.
    pub fn draw_bars(&mut self) {
        let bars: Vec<BarState> = (0..self.monitors.len())
            .filter_map(|index| self.bar_state(index))
            .collect();
        self.actions
            .extend(bars.into_iter().map(DisplayAction::DrawBar));
    }

    /// What the bar of monitor `index` shows.
    pub fn bar_state(&self, index: usize) -> Option<BarState> {
        let monitor = self.monitors.get(index)?;
        let tagset = monitor.tagset();
        let tags = self
            .tags
            .labels()
            .iter()
            .enumerate()
            .map(|(tag, label)| {
                let mask = TagMask::tag(tag);
                let mut on_tag = monitor
                    .clients
                    .iter()
                    .map(|&id| &self.clients[id])
                    .filter(|c| c.tags.intersects(mask));
                let lead_class = on_tag.clone().next().map(|c| c.class.clone());
                TagIndicator {
                    label: label.clone(),
                    lead_class,
                    occupied: on_tag.clone().next().is_some(),
                    selected: tagset.intersects(mask),
                    urgent: on_tag.any(|c| c.urgent),
                }
            })
            .collect();

        let shown = self.visible_clients(index);
        let widths = split_evenly(monitor.window_area.w, shown.len());
        let tabs = shown
            .iter()
            .zip(widths)
            .map(|(&id, width)| {
                let client = &self.clients[id];
                Tab {
                    window: client.handle,
                    title: client.name.clone(),
                    width,
                    focused: monitor.selected == Some(id),
                    floating: client.floating,
                    hidden: client.hidden,
                    urgent: client.urgent,
                }
            })
            .collect();

        Some(BarState {
            monitor: index,
            visible: monitor.show_bar,
            y: monitor.bar_y,
            selected: index == self.selected_monitor,
            tags,
            layout_symbol: monitor.layout_symbol.clone(),
            tabs,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::handlers::client_handler::tests::spec;
    use crate::models::{TagMask, WindowHandle};
    use crate::{DisplayAction, Manager};

    #[test]
    fn tags_show_occupancy_selection_and_urgency() {
        let mut manager = Manager::new_test();
        let state = &mut manager.state;
        state.manage(&spec(1));
        state.view(TagMask(0b100));
        let mut urgent = spec(2);
        urgent.class = "Mail".to_string();
        state.manage(&urgent);
        let id = state.window_to_client(WindowHandle(2)).unwrap();
        state.view(TagMask(0b1));
        state.clients[id].urgent = true;

        let bar = state.bar_state(0).unwrap();
        assert_eq!(bar.tags.len(), 9);
        assert!(bar.tags[0].occupied && bar.tags[0].selected);
        assert_eq!(bar.tags[0].lead_class.as_deref(), Some("Term"));
        assert!(!bar.tags[1].occupied);
        assert!(bar.tags[2].urgent && !bar.tags[2].selected);
        assert_eq!(bar.tags[2].lead_class.as_deref(), Some("Mail"));
        assert!(bar.selected);
    }

    #[test]
    fn tabs_split_the_bar_width_between_shown_clients() {
        let mut manager = Manager::new_test();
        let state = &mut manager.state;
        for handle in 1..=7 {
            state.manage(&spec(handle));
        }
        let bar = state.bar_state(0).unwrap();
        assert_eq!(bar.tabs.len(), 7);
        assert_eq!(bar.tabs.iter().map(|t| t.width).sum::<i32>(), 1920);
        assert_eq!(bar.tabs[0].width, 275);
        assert_eq!(bar.tabs[6].width, 274);
        assert_eq!(bar.tabs.iter().filter(|t| t.focused).count(), 1);
    }

    #[test]
    fn every_monitor_gets_a_bar() {
        let mut manager = Manager::new_test();
        let state = &mut manager.state;
        state.update_monitors(&[
            crate::models::Xyhw::new(0, 0, 1920, 1080),
            crate::models::Xyhw::new(1920, 0, 1280, 1024),
        ]);
        state.actions.clear();
        state.draw_bars();
        let bars = state
            .actions
            .iter()
            .filter(|a| matches!(a, DisplayAction::DrawBar(_)))
            .count();
        assert_eq!(bars, 2);
    }
}
