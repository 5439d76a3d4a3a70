use crate::layouts::{Layout, LayoutContext};
use crate::models::{ClientId, Xyhw};
use crate::{DisplayAction, State};

/// Layout symbol shown while a monitor is in overview.
pub const OVERVIEW_SYMBOL: &str = "[O]";

impl State {
    /// Show, hide and place the clients of one monitor, or of every monitor when `None`.
    pub fn arrange(&mut self, monitor: Option<usize>) {
        match monitor {
            Some(index) if index < self.monitors.len() => {
                self.show_hide(index);
                self.arrange_monitor(index);
                self.restack(index);
            }
            Some(_) => {}
            None => {
                for index in 0..self.monitors.len() {
                    self.show_hide(index);
                }
                for index in 0..self.monitors.len() {
                    self.arrange_monitor(index);
                }
            }
        }
    }

    /// Run the monitor's layout over its tiled clients. Overview always uses the grid.
    pub fn arrange_monitor(&mut self, index: usize) {
        let Some(monitor) = self.monitors.get(index) else {
            return;
        };
        let (layout, symbol) = if monitor.overview {
            (Layout::Grid, OVERVIEW_SYMBOL.to_string())
        } else {
            let layout = monitor.layout();
            let visible = self.visible_clients(index).len();
            let symbol = if layout == Layout::Monocle && visible > 0 {
                format!("[{visible}]")
            } else {
                layout.symbol().to_string()
            };
            (layout, symbol)
        };

        let tiled = self.tiled_clients(index);
        let borders: Vec<i32> = tiled
            .iter()
            .map(|&id| self.clients[id].border_width)
            .collect();
        let placements = {
            let monitor = &self.monitors[index];
            let ctx = LayoutContext {
                area: monitor.window_area,
                gaps: monitor
                    .gaps
                    .effective(self.gaps_enabled, self.smart_gaps, tiled.len()),
                master_count: monitor.master_count,
                master_factor: monitor.master_factor,
                borders: &borders,
            };
            layout.arrange(&ctx)
        };
        self.monitors[index].layout_symbol = symbol;
        for (id, geometry) in tiled.into_iter().zip(placements) {
            self.resize(id, geometry, false);
        }
    }

    /// Move visible clients to their position and park the others left of the screen.
    fn show_hide(&mut self, index: usize) {
        let Some(monitor) = self.monitors.get(index) else {
            return;
        };
        let stack = monitor.stack.clone();
        let floating_layout = !monitor.layout().arranges();

        for &id in &stack {
            if !self.is_visible(id) {
                continue;
            }
            let client = &self.clients[id];
            let geometry = client.geometry;
            self.actions.push_back(DisplayAction::MoveWindow {
                window: client.handle,
                x: geometry.x,
                y: geometry.y,
            });
            if (floating_layout || client.floating) && !client.fullscreen {
                self.resize(id, geometry, false);
            }
        }
        for &id in stack.iter().rev() {
            if self.is_visible(id) {
                continue;
            }
            let client = &self.clients[id];
            self.actions.push_back(DisplayAction::MoveWindow {
                window: client.handle,
                x: client.width() * -2,
                y: client.geometry.y,
            });
        }
    }

    /// Raise the selection when it floats and stack tiled clients in focus order.
    pub fn restack(&mut self, index: usize) {
        let Some(monitor) = self.monitors.get(index) else {
            return;
        };
        let Some(selected) = monitor.selected.and_then(|id| self.clients.get(id)) else {
            return;
        };
        let arranges = monitor.layout().arranges();
        if selected.floating || !arranges {
            self.actions.push_back(DisplayAction::Raise(selected.handle));
        }
        if !arranges {
            return;
        }
        let order: Vec<_> = monitor
            .stack
            .iter()
            .copied()
            .filter(|&id| self.is_visible(id) && !self.clients[id].floating)
            .map(|id| self.clients[id].handle)
            .collect();
        if !order.is_empty() {
            self.actions.push_back(DisplayAction::Restack(order));
        }
    }

    /// Resize a client when its size hints leave something to change.
    pub fn resize(&mut self, id: ClientId, geometry: Xyhw, interact: bool) {
        if let Some(geometry) = self.apply_size_hints(id, geometry, interact) {
            self.resize_client(id, geometry);
        }
    }

    /// Keep `geometry` reachable and honour the client's size hints.
    ///
    /// Interactive changes are bound by the whole screen, others by the usable area of the
    /// client's monitor. Returns `None` when the result equals the current geometry.
    pub fn apply_size_hints(
        &self,
        id: ClientId,
        mut geometry: Xyhw,
        interact: bool,
    ) -> Option<Xyhw> {
        let client = self.clients.get(id)?;
        let monitor = self.monitors.get(client.monitor)?;
        let border = 2 * client.border_width;

        geometry.w = geometry.w.max(1);
        geometry.h = geometry.h.max(1);
        if interact {
            let (screen_w, screen_h) = self.screen_size();
            if geometry.x > screen_w {
                geometry.x = screen_w - (geometry.w + border);
            }
            if geometry.y > screen_h {
                geometry.y = screen_h - (geometry.h + border);
            }
            if geometry.x + geometry.w + border < 0 {
                geometry.x = 0;
            }
            if geometry.y + geometry.h + border < 0 {
                geometry.y = 0;
            }
        } else {
            let area = monitor.window_area;
            if geometry.x >= area.right() {
                geometry.x = area.right() - (geometry.w + border);
            }
            if geometry.y >= area.bottom() {
                geometry.y = area.bottom() - (geometry.h + border);
            }
            if geometry.x + geometry.w + border <= area.x {
                geometry.x = area.x;
            }
            if geometry.y + geometry.h + border <= area.y {
                geometry.y = area.y;
            }
        }
        let bar_height = self.bar_height();
        geometry.w = geometry.w.max(bar_height);
        geometry.h = geometry.h.max(bar_height);

        if self.resize_hints || client.floating || !monitor.layout().arranges() {
            let (w, h) = client.hints.constrain(geometry.w, geometry.h);
            geometry.w = w;
            geometry.h = h;
        }
        (geometry != client.geometry).then_some(geometry)
    }

    /// Apply a geometry as is. A solitary client covers its own border.
    pub fn resize_client(&mut self, id: ClientId, geometry: Xyhw) {
        let solitary = self.is_solitary(id);
        let Some(client) = self.clients.get_mut(id) else {
            return;
        };
        client.old_geometry = client.geometry;
        client.geometry = geometry;

        let mut placed = geometry;
        let mut border_width = client.border_width;
        if solitary {
            placed.w += 2 * border_width;
            placed.h += 2 * border_width;
            border_width = 0;
        }
        self.actions.push_back(DisplayAction::MoveResize {
            window: client.handle,
            geometry: placed,
            border_width,
        });
    }

    /// A lone tiled client, or any tiled client under monocle, with no floating client beside it.
    pub fn is_solitary(&self, id: ClientId) -> bool {
        let Some(client) = self.clients.get(id) else {
            return false;
        };
        let Some(monitor) = self.monitors.get(client.monitor) else {
            return false;
        };
        if client.fullscreen || client.floating || monitor.overview || !monitor.layout().arranges()
        {
            return false;
        }
        let alone =
            monitor.layout() == Layout::Monocle || self.tiled_clients(client.monitor).len() == 1;
        let floating_sibling = self.visible_clients(client.monitor).into_iter().any(|other| {
            let other = &self.clients[other];
            other.floating && !other.iconic && other.handle != client.handle
        });
        alone && !floating_sibling
    }
}
