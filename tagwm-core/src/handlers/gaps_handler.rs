use crate::command::GapTarget;
use crate::models::Gaps;
use crate::State;

impl State {
    /// Replace the gaps of the selected monitor. Negative values become zero.
    pub fn set_gaps(&mut self, gaps: Gaps) {
        let index = self.selected_monitor;
        if let Some(monitor) = self.monitors.get_mut(index) {
            monitor.gaps = gaps.clamped();
            self.arrange(Some(index));
        }
    }

    /// Grow (or shrink, for a negative `delta`) the gaps named by `target`.
    pub fn inc_gaps(&mut self, target: GapTarget, delta: i32) {
        let Some(mut gaps) = self.monitors.get(self.selected_monitor).map(|m| m.gaps) else {
            return;
        };
        let (outer_h, outer_v, inner_h, inner_v) = match target {
            GapTarget::All => (true, true, true, true),
            GapTarget::Inner => (false, false, true, true),
            GapTarget::Outer => (true, true, false, false),
            GapTarget::InnerH => (false, false, true, false),
            GapTarget::InnerV => (false, false, false, true),
            GapTarget::OuterH => (true, false, false, false),
            GapTarget::OuterV => (false, true, false, false),
        };
        let step = |enabled: bool| if enabled { delta } else { 0 };
        gaps.outer_h += step(outer_h);
        gaps.outer_v += step(outer_v);
        gaps.inner_h += step(inner_h);
        gaps.inner_v += step(inner_v);
        self.set_gaps(gaps);
    }

    /// Turn all gaps off or back on, for every monitor.
    pub fn toggle_gaps(&mut self) {
        self.gaps_enabled = !self.gaps_enabled;
        self.arrange(None);
    }

    pub fn toggle_smart_gaps(&mut self) {
        self.smart_gaps = !self.smart_gaps;
        self.arrange(None);
    }

    /// Go back to the configured gaps on the selected monitor.
    pub fn default_gaps(&mut self) {
        self.set_gaps(self.monitor_settings.gaps);
    }
}

#[cfg(test)]
mod tests {
    use crate::command::GapTarget;
    use crate::handlers::client_handler::tests::spec;
    use crate::models::{Gaps, WindowHandle, Xyhw};
    use crate::Manager;

    #[test]
    fn increments_only_touch_their_target() {
        let mut manager = Manager::new_test();
        let state = &mut manager.state;
        state.inc_gaps(GapTarget::InnerV, 5);
        state.inc_gaps(GapTarget::Outer, -3);
        assert_eq!(
            state.monitors[0].gaps,
            Gaps {
                outer_h: 7,
                outer_v: 7,
                inner_h: 10,
                inner_v: 15,
            }
        );
        state.default_gaps();
        assert_eq!(state.monitors[0].gaps, Gaps::uniform(10));
    }

    #[test]
    fn gaps_never_go_negative() {
        let mut manager = Manager::new_test();
        let state = &mut manager.state;
        state.inc_gaps(GapTarget::All, -50);
        assert_eq!(state.monitors[0].gaps, Gaps::uniform(0));
    }

    #[test]
    fn smart_gaps_drop_the_outer_gap_for_one_client() {
        let mut manager = Manager::new_test();
        let state = &mut manager.state;
        state.manage(&spec(1));
        let id = state.window_to_client(WindowHandle(1)).unwrap();
        assert_eq!(state.clients[id].geometry, Xyhw::new(0, 0, 1910, 1046));
        state.toggle_smart_gaps();
        assert_eq!(state.clients[id].geometry, Xyhw::new(10, 10, 1890, 1026));
        state.toggle_gaps();
        assert_eq!(state.clients[id].geometry, Xyhw::new(0, 0, 1910, 1046));
    }
}
