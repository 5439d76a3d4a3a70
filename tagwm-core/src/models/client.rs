//! Managed windows.
#![allow(clippy::module_name_repetitions)]

use serde::{Deserialize, Serialize};

use crate::models::{Monitor, SizeHints, TagMask, Xyhw};

slotmap::new_key_type! {
    /// Stable index of a client in the arena. Never reused while the client lives.
    pub struct ClientId;
}

/// The display server's identifier for a window.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct WindowHandle(pub u64);

/// Everything the display server tells us about a window when it asks to be managed.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct WindowSpec {
    pub handle: WindowHandle,
    pub name: String,
    pub class: String,
    pub instance: String,
    pub geometry: Xyhw,
    pub border_width: i32,
    pub hints: SizeHints,
    pub transient_for: Option<WindowHandle>,
    pub dialog: bool,
    pub fullscreen: bool,
    pub urgent: bool,
    pub never_focus: bool,
}

/// A managed window.
///
/// `hidden` is the user's persisted choice to hide the client. `iconic` tracks whether it is
/// currently unmapped because of that choice.
#[allow(clippy::struct_excessive_bools)]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Client {
    pub handle: WindowHandle,
    pub name: String,
    pub class: String,
    pub instance: String,
    pub geometry: Xyhw,
    pub old_geometry: Xyhw,
    pub border_width: i32,
    pub old_border_width: i32,
    pub hints: SizeHints,
    pub tags: TagMask,
    pub monitor: usize,
    pub floating: bool,
    pub old_floating: bool,
    pub fixed: bool,
    pub urgent: bool,
    pub fullscreen: bool,
    pub never_focus: bool,
    pub hidden: bool,
    pub iconic: bool,
}

impl Client {
    #[must_use]
    pub fn new(spec: &WindowSpec, monitor: usize, border_width: i32) -> Self {
        Self {
            handle: spec.handle,
            name: spec.name.clone(),
            class: spec.class.clone(),
            instance: spec.instance.clone(),
            geometry: spec.geometry,
            old_geometry: spec.geometry,
            border_width,
            old_border_width: spec.border_width,
            hints: spec.hints,
            tags: TagMask::EMPTY,
            monitor,
            floating: false,
            old_floating: false,
            fixed: spec.hints.is_fixed(),
            urgent: spec.urgent,
            fullscreen: false,
            never_focus: spec.never_focus,
            hidden: false,
            iconic: false,
        }
    }

    /// Outer width, border included.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.geometry.w + 2 * self.border_width
    }

    /// Outer height, border included.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.geometry.h + 2 * self.border_width
    }

    /// Outer rectangle, border included.
    #[must_use]
    pub const fn outer(&self) -> Xyhw {
        Xyhw::new(self.geometry.x, self.geometry.y, self.width(), self.height())
    }

    /// A client is shown when its monitor is in overview or it shares a tag with the tag-set.
    #[must_use]
    pub fn is_visible_on(&self, monitor: &Monitor) -> bool {
        monitor.overview || self.tags.intersects(monitor.tagset())
    }

    pub fn update_hints(&mut self, hints: SizeHints) {
        self.hints = hints;
        self.fixed = hints.is_fixed();
    }
}
