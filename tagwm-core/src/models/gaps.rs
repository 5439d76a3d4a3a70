use serde::{Deserialize, Serialize};

/// Spacing around and between tiled windows, in pixels.
///
/// `outer_h` is applied above and below the tiled area, `outer_v` left and right of it.
/// `inner_h` separates rows and `inner_v` separates columns.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Gaps {
    pub outer_h: i32,
    pub outer_v: i32,
    pub inner_h: i32,
    pub inner_v: i32,
}

impl Gaps {
    #[must_use]
    pub const fn uniform(size: i32) -> Self {
        Self {
            outer_h: size,
            outer_v: size,
            inner_h: size,
            inner_v: size,
        }
    }

    /// Gaps never go below zero.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            outer_h: self.outer_h.max(0),
            outer_v: self.outer_v.max(0),
            inner_h: self.inner_h.max(0),
            inner_v: self.inner_v.max(0),
        }
    }

    /// The gaps a layout actually uses for `tiled` clients.
    ///
    /// Disabled gaps collapse to zero. With smart gaps a lone client loses its outer gaps.
    #[must_use]
    pub const fn effective(self, enabled: bool, smart: bool, tiled: usize) -> Self {
        if !enabled {
            return Self::uniform(0);
        }
        if smart && tiled == 1 {
            return Self {
                outer_h: 0,
                outer_v: 0,
                ..self
            };
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smart_gaps_drop_outer_gaps_for_a_single_client() {
        let gaps = Gaps::uniform(10);
        let single = gaps.effective(true, true, 1);
        assert_eq!((single.outer_h, single.outer_v), (0, 0));
        assert_eq!((single.inner_h, single.inner_v), (10, 10));
        assert_eq!(gaps.effective(true, true, 2), gaps);
        assert_eq!(gaps.effective(true, false, 1), gaps);
    }

    #[test]
    fn disabled_gaps_are_zero() {
        assert_eq!(Gaps::uniform(10).effective(false, false, 3), Gaps::uniform(0));
    }

    #[test]
    fn negative_gaps_are_clamped() {
        let gaps = Gaps {
            outer_h: -4,
            outer_v: 3,
            inner_h: -1,
            inner_v: 0,
        };
        assert_eq!(
            gaps.clamped(),
            Gaps {
                outer_h: 0,
                outer_v: 3,
                inner_h: 0,
                inner_v: 0
            }
        );
    }
}
