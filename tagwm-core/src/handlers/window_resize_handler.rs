use crate::command::ResizeDirection;
use crate::models::Xyhw;
use crate::State;

impl State {
    /// Grow or shrink the selection by one step, keeping it inside the usable area.
    pub fn resize_window(&mut self, direction: ResizeDirection) {
        let Some(selected) = self.selected_client() else {
            return;
        };
        if self.clients[selected].fullscreen {
            return;
        }
        if !self.clients[selected].floating {
            self.toggle_floating();
        }
        let Some(area) = self
            .monitors
            .get(self.selected_monitor)
            .map(|m| m.window_area)
        else {
            return;
        };
        let client = &self.clients[selected];
        let (geometry, border) = (client.geometry, 2 * client.border_width);
        let (resize_v, resize_h) = (self.steps.resize_v.max(1), self.steps.resize_h.max(1));

        let (mut w, mut h) = (geometry.w, geometry.h);
        match direction {
            ResizeDirection::ExpandH => w += area.h / resize_v,
            ResizeDirection::ReduceH => w -= area.h / resize_v,
            ResizeDirection::ExpandV => h += area.w / resize_h,
            ResizeDirection::ReduceV => h -= area.w / resize_h,
        }
        w = w.max(area.w / resize_v);
        h = h.max(area.h / resize_h);
        if geometry.x + w + border > area.right() {
            w = area.right() - geometry.x - border;
        }
        if geometry.y + h + border > area.bottom() {
            h = area.bottom() - geometry.y - border;
        }

        self.resize(selected, Xyhw::new(geometry.x, geometry.y, w, h), true);
        let (px, py) = self.pointer;
        if geometry.contains_point(px, py) {
            let x = px.max(geometry.x + 1).min(geometry.x + w - 1);
            let y = py.max(geometry.y + 1).min(geometry.y + h - 1);
            self.warp_pointer(x, y);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::command::ResizeDirection;
    use crate::handlers::client_handler::tests::spec;
    use crate::models::{ClientId, WindowHandle, Xyhw};
    use crate::{DisplayAction, Manager, State};

    fn floating(state: &mut State, geometry: Xyhw) -> ClientId {
        let mut window = spec(1);
        window.dialog = true;
        state.manage(&window);
        let id = state.window_to_client(WindowHandle(1)).unwrap();
        state.clients[id].geometry = geometry;
        id
    }

    #[test]
    fn expanding_stops_at_the_usable_area() {
        let mut manager = Manager::new_test();
        let state = &mut manager.state;
        let id = floating(state, Xyhw::new(1600, 800, 200, 200));
        for _ in 0..10 {
            state.resize_window(ResizeDirection::ExpandH);
            state.resize_window(ResizeDirection::ExpandV);
        }
        let pinned = state.clients[id].geometry;
        assert_eq!(pinned.x + pinned.w + 10, 1920);
        assert_eq!(pinned.y + pinned.h + 10, 1056);
        state.resize_window(ResizeDirection::ExpandH);
        assert_eq!(state.clients[id].geometry, pinned);
    }

    #[test]
    fn reducing_stops_at_the_minimum() {
        let mut manager = Manager::new_test();
        let state = &mut manager.state;
        let id = floating(state, Xyhw::new(100, 100, 300, 300));
        for _ in 0..50 {
            state.resize_window(ResizeDirection::ReduceH);
            state.resize_window(ResizeDirection::ReduceV);
        }
        let geometry = state.clients[id].geometry;
        assert_eq!(geometry.w, 1920 / 20);
        assert_eq!(geometry.h, 1056 / 40);
    }

    #[test]
    fn the_pointer_stays_inside_a_shrinking_window() {
        let mut manager = Manager::new_test();
        let state = &mut manager.state;
        floating(state, Xyhw::new(100, 100, 400, 400));
        state.pointer = (490, 200);
        state.actions.clear();
        state.resize_window(ResizeDirection::ReduceH);
        let w = 400 - 1056 / 20;
        assert!(state.actions.contains(&DisplayAction::WarpPointer {
            x: 100 + w - 1,
            y: 200
        }));
    }
}
