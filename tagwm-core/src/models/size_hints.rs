use serde::{Deserialize, Serialize};

/// Normal size hints announced by a window. Zero means "not set".
///
/// `min_aspect` is stored as height over width and `max_aspect` as width over height, so both
/// compare against the same kind of ratio when the size is constrained.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(default)]
pub struct SizeHints {
    pub base_w: i32,
    pub base_h: i32,
    pub inc_w: i32,
    pub inc_h: i32,
    pub max_w: i32,
    pub max_h: i32,
    pub min_w: i32,
    pub min_h: i32,
    pub min_aspect: f32,
    pub max_aspect: f32,
}

impl SizeHints {
    /// A window whose min and max size agree cannot be resized.
    #[must_use]
    pub const fn is_fixed(&self) -> bool {
        self.max_w != 0 && self.max_h != 0 && self.max_w == self.min_w && self.max_h == self.min_h
    }

    /// Apply base size, aspect, increments and min/max bounds to a requested size.
    #[must_use]
    pub fn constrain(&self, mut w: i32, mut h: i32) -> (i32, i32) {
        // ICCCM 4.1.2.3: the base size counts as the minimum when both agree
        let base_is_min = self.base_w == self.min_w && self.base_h == self.min_h;
        if !base_is_min {
            w -= self.base_w;
            h -= self.base_h;
        }
        if self.min_aspect > 0.0 && self.max_aspect > 0.0 {
            if self.max_aspect < w as f32 / h as f32 {
                w = (h as f32 * self.max_aspect + 0.5) as i32;
            } else if self.min_aspect < h as f32 / w as f32 {
                h = (w as f32 * self.min_aspect + 0.5) as i32;
            }
        }
        if base_is_min {
            w -= self.base_w;
            h -= self.base_h;
        }
        if self.inc_w > 0 {
            w -= w % self.inc_w;
        }
        if self.inc_h > 0 {
            h -= h % self.inc_h;
        }
        w = (w + self.base_w).max(self.min_w);
        h = (h + self.base_h).max(self.min_h);
        if self.max_w > 0 {
            w = w.min(self.max_w);
        }
        if self.max_h > 0 {
            h = h.min(self.max_h);
        }
        (w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_hints_keep_the_requested_size() {
        assert_eq!(SizeHints::default().constrain(640, 480), (640, 480));
    }

    #[test]
    fn increments_round_down_above_the_base() {
        let hints = SizeHints {
            base_w: 4,
            base_h: 4,
            inc_w: 10,
            inc_h: 20,
            ..SizeHints::default()
        };
        assert_eq!(hints.constrain(649, 491), (644, 484));
    }

    #[test]
    fn min_and_max_bound_the_result() {
        let hints = SizeHints {
            min_w: 100,
            min_h: 100,
            max_w: 300,
            max_h: 200,
            ..SizeHints::default()
        };
        assert_eq!(hints.constrain(50, 500), (100, 200));
        assert!(!hints.is_fixed());
    }

    #[test]
    fn aspect_limits_shrink_the_wider_side() {
        let hints = SizeHints {
            min_aspect: 1.0,
            max_aspect: 1.0,
            ..SizeHints::default()
        };
        assert_eq!(hints.constrain(400, 300), (300, 300));
        assert_eq!(hints.constrain(300, 400), (300, 300));
    }

    #[test]
    fn equal_min_and_max_is_fixed() {
        let hints = SizeHints {
            min_w: 200,
            min_h: 100,
            max_w: 200,
            max_h: 100,
            ..SizeHints::default()
        };
        assert!(hints.is_fixed());
        assert_eq!(hints.constrain(640, 480), (200, 100));
    }
}
