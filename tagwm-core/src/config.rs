mod rule;
mod scratchpad;

use crate::layouts::Layout;
use crate::models::Gaps;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use rule::Rule;
pub use scratchpad::ScratchPad;

/// Divisors of the usable area used by the keyboard driven move and resize commands.
///
/// Moving vertically steps by `height / move_v`, horizontally by `width / move_h`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepDivisors {
    pub move_v: i32,
    pub move_h: i32,
    pub resize_v: i32,
    pub resize_h: i32,
}

impl Default for StepDivisors {
    fn default() -> Self {
        Self {
            move_v: 12,
            move_h: 16,
            resize_v: 20,
            resize_h: 40,
        }
    }
}

pub trait Config {
    /// Labels of the tags, their count fixes the tag mask width.
    fn tags(&self) -> Vec<String>;

    fn border_width(&self) -> i32;

    /// Distance in pixels at which a dragged window snaps to a monitor edge.
    fn snap(&self) -> i32;

    fn show_bar(&self) -> bool;
    fn top_bar(&self) -> bool;
    fn bar_height(&self) -> i32;

    fn gaps(&self) -> Gaps;
    fn smart_gaps(&self) -> bool;

    /// Snap distances used when moving floating windows with the keyboard.
    fn float_gaps(&self) -> Gaps;

    fn master_factor(&self) -> f32;
    fn master_count(&self) -> i32;

    /// Respect size hints for tiled windows too.
    fn resize_hints(&self) -> bool;

    /// Keep the focus on a fullscreen window while cycling.
    fn lock_fullscreen(&self) -> bool;

    /// The first layout is the default, the second the alternate.
    fn layouts(&self) -> Vec<Layout>;

    fn steps(&self) -> StepDivisors;

    fn rules(&self) -> Vec<Rule>;

    fn scratchpad(&self) -> ScratchPad;

    /// Where the status snapshot goes, `None` disables it.
    fn status_file(&self) -> Option<PathBuf>;
}

#[cfg(test)]
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Clone)]
pub struct TestConfig {
    pub tags: Vec<String>,
    pub border_width: i32,
    pub snap: i32,
    pub show_bar: bool,
    pub top_bar: bool,
    pub bar_height: i32,
    pub gaps: Gaps,
    pub smart_gaps: bool,
    pub float_gaps: Gaps,
    pub master_factor: f32,
    pub master_count: i32,
    pub resize_hints: bool,
    pub lock_fullscreen: bool,
    pub layouts: Vec<Layout>,
    pub steps: StepDivisors,
    pub rules: Vec<Rule>,
    pub scratchpad: ScratchPad,
    pub status_file: Option<PathBuf>,
}

#[cfg(test)]
impl Default for TestConfig {
    fn default() -> Self {
        Self {
            tags: (1..=9).map(|i| i.to_string()).collect(),
            border_width: 5,
            snap: 32,
            show_bar: true,
            top_bar: false,
            bar_height: 24,
            gaps: Gaps::uniform(10),
            smart_gaps: true,
            float_gaps: Gaps::uniform(10),
            master_factor: 0.55,
            master_count: 1,
            resize_hints: false,
            lock_fullscreen: true,
            layouts: vec![Layout::Tile, Layout::Monocle, Layout::Grid, Layout::Floating],
            steps: StepDivisors::default(),
            rules: vec![],
            scratchpad: ScratchPad::default(),
            status_file: None,
        }
    }
}

#[cfg(test)]
impl Config for TestConfig {
    fn tags(&self) -> Vec<String> {
        self.tags.clone()
    }
    fn border_width(&self) -> i32 {
        self.border_width
    }
    fn snap(&self) -> i32 {
        self.snap
    }
    fn show_bar(&self) -> bool {
        self.show_bar
    }
    fn top_bar(&self) -> bool {
        self.top_bar
    }
    fn bar_height(&self) -> i32 {
        self.bar_height
    }
    fn gaps(&self) -> Gaps {
        self.gaps
    }
    fn smart_gaps(&self) -> bool {
        self.smart_gaps
    }
    fn float_gaps(&self) -> Gaps {
        self.float_gaps
    }
    fn master_factor(&self) -> f32 {
        self.master_factor
    }
    fn master_count(&self) -> i32 {
        self.master_count
    }
    fn resize_hints(&self) -> bool {
        self.resize_hints
    }
    fn lock_fullscreen(&self) -> bool {
        self.lock_fullscreen
    }
    fn layouts(&self) -> Vec<Layout> {
        self.layouts.clone()
    }
    fn steps(&self) -> StepDivisors {
        self.steps
    }
    fn rules(&self) -> Vec<Rule> {
        self.rules.clone()
    }
    fn scratchpad(&self) -> ScratchPad {
        self.scratchpad.clone()
    }
    fn status_file(&self) -> Option<PathBuf> {
        self.status_file.clone()
    }
}
