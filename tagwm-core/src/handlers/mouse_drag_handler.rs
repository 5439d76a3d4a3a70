use crate::display_event::DragKind;
use crate::models::{ClientId, DragState, Mode, WindowHandle, Xyhw};
use crate::State;

// Motion events closer together than this are dropped.
const MOTION_INTERVAL_MS: u64 = 1000 / 60;

impl State {
    /// Start moving or resizing a client with the pointer. Returns `false` when the window
    /// cannot be dragged.
    pub fn start_drag(&mut self, handle: WindowHandle, kind: DragKind, x: i32, y: i32) -> bool {
        let Some(id) = self.window_to_client(handle) else {
            return false;
        };
        self.focus(Some(id));
        if self.selected_client() != Some(id) || self.clients[id].fullscreen {
            return false;
        }
        self.restack(self.selected_monitor);

        let client = &self.clients[id];
        let origin = client.geometry;
        let drag = DragState {
            client: id,
            origin,
            pointer: (x, y),
            last_motion: 0,
        };
        self.mode = match kind {
            DragKind::Move => Mode::Moving(drag),
            DragKind::Resize => {
                let bw = client.border_width;
                self.warp_pointer(origin.x + origin.w + bw - 1, origin.y + origin.h + bw - 1);
                Mode::Resizing(drag)
            }
        };
        tracing::trace!("Drag started: {:?}", self.mode);
        true
    }

    /// Follow the pointer during a drag. Returns `true` when something changed.
    pub fn drag_motion(&mut self, x: i32, y: i32, time: u64) -> bool {
        self.pointer = (x, y);
        let (drag, moving) = match &mut self.mode {
            Mode::Moving(drag) => (drag, true),
            Mode::Resizing(drag) => (drag, false),
            Mode::Normal => return false,
        };
        if time.saturating_sub(drag.last_motion) <= MOTION_INTERVAL_MS {
            return false;
        }
        drag.last_motion = time;
        let drag = *drag;
        if !self.clients.contains_key(drag.client) {
            self.mode = Mode::Normal;
            return false;
        }
        if moving {
            self.drag_move(drag, x, y);
        } else {
            self.drag_resize(drag, x, y);
        }
        true
    }

    /// Finish a drag. A client dropped on another monitor moves there.
    pub fn end_drag(&mut self) -> bool {
        let drag = match std::mem::take(&mut self.mode) {
            Mode::Moving(drag) => drag,
            Mode::Resizing(drag) => {
                if let Some(client) = self.clients.get(drag.client) {
                    let (g, bw) = (client.geometry, client.border_width);
                    self.warp_pointer(g.x + g.w + bw - 1, g.y + g.h + bw - 1);
                }
                drag
            }
            Mode::Normal => return false,
        };
        let Some(client) = self.clients.get(drag.client) else {
            return true;
        };
        let target = self.monitor_at(&client.geometry);
        if target != self.selected_monitor {
            self.send_to_monitor(drag.client, target);
            self.selected_monitor = target;
            self.focus(None);
        }
        true
    }

    fn drag_move(&mut self, drag: DragState, x: i32, y: i32) {
        let Some(area) = self.monitors.get(self.selected_monitor).map(|m| m.window_area) else {
            return;
        };
        let id = drag.client;
        let client = &self.clients[id];
        let (width, height) = (client.width(), client.height());
        let snap = self.snap;

        let mut nx = drag.origin.x + (x - drag.pointer.0);
        let mut ny = drag.origin.y + (y - drag.pointer.1);
        if (area.x - nx).abs() < snap {
            nx = area.x;
        } else if (area.right() - (nx + width)).abs() < snap {
            nx = area.right() - width;
        }
        if (area.y - ny).abs() < snap {
            ny = area.y;
        } else if (area.bottom() - (ny + height)).abs() < snap {
            ny = area.bottom() - height;
        }

        let current = client.geometry;
        let torn_off = (nx - current.x).abs() > snap || (ny - current.y).abs() > snap;
        self.float_dragged(id, torn_off);
        if self.drag_applies(id) {
            self.resize(id, Xyhw::new(nx, ny, current.w, current.h), true);
        }
    }

    fn drag_resize(&mut self, drag: DragState, x: i32, y: i32) {
        let Some(area) = self.monitors.get(self.selected_monitor).map(|m| m.window_area) else {
            return;
        };
        let id = drag.client;
        let client = &self.clients[id];
        let bw = client.border_width;
        let nw = (x - drag.origin.x - 2 * bw + 1).max(1);
        let nh = (y - drag.origin.y - 2 * bw + 1).max(1);

        let home = self
            .monitors
            .get(client.monitor)
            .map_or(area, |m| m.window_area);
        let inside = home.x + nw >= area.x
            && home.x + nw <= area.right()
            && home.y + nh >= area.y
            && home.y + nh <= area.bottom();
        let current = client.geometry;
        let torn_off =
            inside && ((nw - current.w).abs() > self.snap || (nh - current.h).abs() > self.snap);
        self.float_dragged(id, torn_off);
        if self.drag_applies(id) {
            let current = self.clients[id].geometry;
            self.resize(id, Xyhw::new(current.x, current.y, nw, nh), true);
        }
    }

    /// A tiled client dragged far enough leaves the layout.
    fn float_dragged(&mut self, id: ClientId, torn_off: bool) {
        if torn_off && !self.clients[id].floating && self.selected_layout_arranges() {
            self.toggle_floating();
        }
    }

    fn drag_applies(&self, id: ClientId) -> bool {
        self.clients[id].floating || !self.selected_layout_arranges()
    }

    fn selected_layout_arranges(&self) -> bool {
        self.monitors
            .get(self.selected_monitor)
            .map_or(false, |m| m.layout().arranges())
    }
}

#[cfg(test)]
mod tests {
    use crate::display_event::DragKind;
    use crate::handlers::client_handler::tests::spec;
    use crate::models::{ClientId, Mode, WindowHandle, Xyhw};
    use crate::{DisplayAction, Manager, State};

    fn floating(state: &mut State, handle: u64, geometry: Xyhw) -> ClientId {
        let mut window = spec(handle);
        window.dialog = true;
        state.manage(&window);
        let id = state.window_to_client(WindowHandle(handle)).unwrap();
        state.clients[id].geometry = geometry;
        id
    }

    #[test]
    fn dragging_moves_a_floating_client_with_the_pointer() {
        let mut manager = Manager::new_test();
        let state = &mut manager.state;
        let id = floating(state, 1, Xyhw::new(400, 400, 200, 200));
        assert!(state.start_drag(WindowHandle(1), DragKind::Move, 500, 500));
        assert!(state.mode.is_dragging());
        assert!(state.drag_motion(600, 550, 100));
        assert_eq!(state.clients[id].geometry, Xyhw::new(500, 450, 200, 200));
        assert!(state.end_drag());
        assert_eq!(state.mode, Mode::Normal);
    }

    #[test]
    fn motion_is_throttled() {
        let mut manager = Manager::new_test();
        let state = &mut manager.state;
        let id = floating(state, 1, Xyhw::new(400, 400, 200, 200));
        state.start_drag(WindowHandle(1), DragKind::Move, 500, 500);
        assert!(state.drag_motion(600, 500, 100));
        assert!(!state.drag_motion(700, 500, 110));
        assert_eq!(state.clients[id].geometry.x, 500);
        assert!(state.drag_motion(700, 500, 120));
        assert_eq!(state.clients[id].geometry.x, 600);
    }

    #[test]
    fn dragged_windows_snap_to_the_usable_area() {
        let mut manager = Manager::new_test();
        let state = &mut manager.state;
        let id = floating(state, 1, Xyhw::new(400, 400, 200, 200));
        state.start_drag(WindowHandle(1), DragKind::Move, 500, 500);
        state.drag_motion(120, 520, 100);
        assert_eq!(state.clients[id].geometry.x, 0);

        // the right edge snaps with the border counted
        state.drag_motion(1800, 520, 200);
        assert_eq!(state.clients[id].outer().right(), 1920);
    }

    #[test]
    fn small_drags_leave_tiled_clients_in_place() {
        let mut manager = Manager::new_test();
        let state = &mut manager.state;
        state.manage(&spec(1));
        let id = state.window_to_client(WindowHandle(1)).unwrap();
        let tiled = state.clients[id].geometry;
        state.start_drag(WindowHandle(1), DragKind::Move, 100, 100);
        state.drag_motion(110, 110, 100);
        assert!(!state.clients[id].floating);
        assert_eq!(state.clients[id].geometry, tiled);

        state.drag_motion(400, 400, 200);
        assert!(state.clients[id].floating);
    }

    #[test]
    fn resizing_follows_the_bottom_right_corner() {
        let mut manager = Manager::new_test();
        let state = &mut manager.state;
        let id = floating(state, 1, Xyhw::new(100, 100, 300, 200));
        state.actions.clear();
        state.start_drag(WindowHandle(1), DragKind::Resize, 200, 200);
        let bw = state.clients[id].border_width;
        assert!(state.actions.contains(&DisplayAction::WarpPointer {
            x: 100 + 300 + bw - 1,
            y: 100 + 200 + bw - 1,
        }));
        state.drag_motion(700, 500, 100);
        let geometry = state.clients[id].geometry;
        assert_eq!(geometry.w, 700 - 100 - 2 * bw + 1);
        assert_eq!(geometry.h, 500 - 100 - 2 * bw + 1);
    }

    #[test]
    fn fullscreen_clients_cannot_be_dragged() {
        let mut manager = Manager::new_test();
        let state = &mut manager.state;
        let id = floating(state, 1, Xyhw::new(100, 100, 300, 200));
        state.set_fullscreen(id, true);
        assert!(!state.start_drag(WindowHandle(1), DragKind::Move, 200, 200));
        assert_eq!(state.mode, Mode::Normal);
    }

    #[test]
    fn dropping_on_another_monitor_moves_the_client_there() {
        let mut manager = Manager::new_test();
        let state = &mut manager.state;
        state.update_monitors(&[Xyhw::new(0, 0, 1920, 1080), Xyhw::new(1920, 0, 1920, 1080)]);
        let id = floating(state, 1, Xyhw::new(400, 400, 200, 200));
        state.start_drag(WindowHandle(1), DragKind::Move, 500, 500);
        state.drag_motion(2500, 500, 100);
        state.end_drag();
        assert_eq!(state.clients[id].monitor, 1);
        assert_eq!(state.selected_monitor, 1);
        assert!(state.monitors[1].clients.contains(&id));
    }
}
