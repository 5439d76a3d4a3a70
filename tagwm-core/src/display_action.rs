use crate::models::{BarState, WindowHandle, Xyhw};
use serde::{Deserialize, Serialize};

/// These are responses from the Window manager.
/// The display server should act on these actions.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum DisplayAction {
    /// Place a window. `geometry` excludes the border.
    MoveResize {
        window: WindowHandle,
        geometry: Xyhw,
        border_width: i32,
    },

    /// Move a window without touching its size.
    MoveWindow { window: WindowHandle, x: i32, y: i32 },

    /// Map a window the user had hidden.
    Show(WindowHandle),

    /// Unmap a window and mark it iconic.
    Hide(WindowHandle),

    /// Give input focus to a window, or to the root window when `None`.
    SetFocus(Option<WindowHandle>),

    /// Put a window above all others.
    Raise(WindowHandle),

    /// Stack the given windows below each other, first is top most.
    Restack(Vec<WindowHandle>),

    /// Makes sure the mouse is over a given point.
    WarpPointer { x: i32, y: i32 },

    /// Nicely ask a window if it would please close at its convenience.
    KillClient(WindowHandle),

    /// Restore the border a window had before it was managed.
    SetBorderWidth { window: WindowHandle, width: i32 },

    /// Announce the fullscreen state of a window.
    SetFullscreenHint { window: WindowHandle, fullscreen: bool },

    /// Confirm a window's current geometry when a request was refused.
    ConfigureNotify {
        window: WindowHandle,
        geometry: Xyhw,
        border_width: i32,
    },

    /// Redraw the bar of a monitor.
    DrawBar(BarState),
}
