use crate::command::Direction;
use crate::models::{ClientId, Xyhw};
use crate::{DisplayAction, State};

/// A range on the axis a window moves along. `len` includes the border.
#[derive(Clone, Copy)]
struct Span {
    start: i32,
    len: i32,
}

impl Span {
    const fn end(self) -> i32 {
        self.start + self.len
    }
}

impl State {
    /// Move the selection one step, snapping to floating neighbours and the monitor edges.
    ///
    /// Tiled clients are made floating first. The pointer follows when it was over the client.
    pub fn move_window(&mut self, direction: Direction) {
        let Some(selected) = self.selected_client() else {
            return;
        };
        if self.clients[selected].fullscreen {
            return;
        }
        if !self.clients[selected].floating {
            self.toggle_floating();
        }

        let client = &self.clients[selected];
        let Some(monitor) = self.monitors.get(client.monitor) else {
            return;
        };
        let area = monitor.window_area;
        let geometry = client.geometry;
        let outer = client.outer();
        let neighbours = self.floating_neighbours(selected);
        let gaps = self.float_gaps;

        let (mut x, mut y) = (geometry.x, geometry.y);
        match direction {
            Direction::Up | Direction::Down => {
                let current = Span {
                    start: outer.y,
                    len: outer.h,
                };
                let edge = Span {
                    start: area.y,
                    len: area.h,
                };
                let others: Vec<Span> = neighbours
                    .iter()
                    .map(|o| Span {
                        start: o.y,
                        len: o.h,
                    })
                    .collect();
                let step = area.h / self.steps.move_v.max(1);
                y = if direction == Direction::Up {
                    snap_backward(current, y - step, &others, gaps.inner_h, edge, gaps.outer_h)
                } else {
                    snap_forward(current, y + step, &others, gaps.inner_h, edge, gaps.outer_h)
                };
            }
            Direction::Left | Direction::Right => {
                let current = Span {
                    start: outer.x,
                    len: outer.w,
                };
                let edge = Span {
                    start: area.x,
                    len: area.w,
                };
                let others: Vec<Span> = neighbours
                    .iter()
                    .map(|o| Span {
                        start: o.x,
                        len: o.w,
                    })
                    .collect();
                let step = area.w / self.steps.move_h.max(1);
                x = if direction == Direction::Left {
                    snap_backward(current, x - step, &others, gaps.inner_v, edge, gaps.outer_v)
                } else {
                    snap_forward(current, x + step, &others, gaps.inner_v, edge, gaps.outer_v)
                };
            }
        }

        self.resize(selected, Xyhw::new(x, y, geometry.w, geometry.h), true);
        let (px, py) = self.pointer;
        if geometry.contains_point(px, py) {
            self.warp_pointer(px + x - geometry.x, py + y - geometry.y);
        }
    }

    /// Outer rectangles of the floating clients shown next to `id`.
    fn floating_neighbours(&self, id: ClientId) -> Vec<Xyhw> {
        let Some(monitor) = self.clients.get(id).map(|c| c.monitor) else {
            return vec![];
        };
        self.visible_clients(monitor)
            .into_iter()
            .filter(|&other| other != id)
            .map(|other| &self.clients[other])
            .filter(|other| other.floating && !other.iconic && !other.fullscreen)
            .map(|other| other.outer())
            .collect()
    }

    pub(crate) fn warp_pointer(&mut self, x: i32, y: i32) {
        self.pointer = (x, y);
        self.actions.push_back(DisplayAction::WarpPointer { x, y });
    }
}

/// Snap a move towards lower coordinates.
fn snap_backward(
    current: Span,
    mut next: i32,
    others: &[Span],
    inner_gap: i32,
    area: Span,
    outer_gap: i32,
) -> i32 {
    for other in others {
        let after = other.end() + inner_gap;
        let before = other.start - inner_gap;
        if current.start > after && after > next {
            next = after;
        } else if current.end() > before && before > next + current.len {
            next = before - current.len;
        }
    }
    let (near, far) = (area.start + outer_gap, area.end() - outer_gap);
    if current.end() > far && far > next + current.len {
        next = far - current.len;
    } else if current.start > near && near > next {
        next = near;
    }
    // past the edge a window may stay where it is but never go further
    next.max(current.start.min(near))
}

/// Snap a move towards higher coordinates.
fn snap_forward(
    current: Span,
    mut next: i32,
    others: &[Span],
    inner_gap: i32,
    area: Span,
    outer_gap: i32,
) -> i32 {
    for other in others {
        let after = other.end() + inner_gap;
        let before = other.start - inner_gap;
        if current.end() < before && before < next + current.len {
            next = before - current.len;
        } else if current.start < after && after < next {
            next = after;
        }
    }
    let (near, far) = (area.start + outer_gap, area.end() - outer_gap);
    if current.start < near && near < next {
        next = near;
    } else if current.end() < far && far < next + current.len {
        next = far - current.len;
    }
    next.min(current.start.max(far - current.len))
}
