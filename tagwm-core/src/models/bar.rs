//! What the bar renderer draws for one monitor.
use serde::{Deserialize, Serialize};

use crate::models::WindowHandle;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TagIndicator {
    pub label: String,
    /// Class of the first client on the tag, if any.
    pub lead_class: Option<String>,
    pub occupied: bool,
    pub selected: bool,
    pub urgent: bool,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Tab {
    pub window: WindowHandle,
    pub title: String,
    pub width: i32,
    pub focused: bool,
    pub floating: bool,
    pub hidden: bool,
    pub urgent: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct BarState {
    pub monitor: usize,
    pub visible: bool,
    pub y: i32,
    pub selected: bool,
    pub tags: Vec<TagIndicator>,
    pub layout_symbol: String,
    pub tabs: Vec<Tab>,
}

/// Split `total` pixels into `parts` widths. The first `total % parts` widths get one extra.
pub fn split_evenly(total: i32, parts: usize) -> Vec<i32> {
    if parts == 0 {
        return vec![];
    }
    let count = parts as i32;
    let (base, rest) = (total / count, total % count);
    (0..count).map(|i| base + i32::from(i < rest)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remainder_pixels_go_to_the_first_tabs() {
        assert_eq!(split_evenly(10, 3), vec![4, 3, 3]);
        assert_eq!(split_evenly(1000, 4).iter().sum::<i32>(), 1000);
        assert!(split_evenly(100, 0).is_empty());
    }
}
