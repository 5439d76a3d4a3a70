//! Window and monitor rectangles.
use serde::{Deserialize, Serialize};

/// A rectangle, x,y from top left.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Xyhw {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Xyhw {
    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Strict containment, a point on the edge is outside.
    #[must_use]
    pub const fn contains_point(&self, x: i32, y: i32) -> bool {
        x > self.x && x < self.right() && y > self.y && y < self.bottom()
    }

    /// Area shared with `other`, zero when they do not overlap.
    #[must_use]
    pub fn intersection_area(&self, other: &Self) -> i32 {
        let w = (self.right().min(other.right()) - self.x.max(other.x)).max(0);
        let h = (self.bottom().min(other.bottom()) - self.y.max(other.y)).max(0);
        w * h
    }

    /// Top left corner that centers a `w` by `h` box inside `self`.
    #[must_use]
    pub const fn centered(&self, w: i32, h: i32) -> (i32, i32) {
        (self.x + (self.w / 2 - w / 2), self.y + (self.h / 2 - h / 2))
    }
}
