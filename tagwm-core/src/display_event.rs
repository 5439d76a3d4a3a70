use crate::errors::ProtocolError;
use crate::models::{SizeHints, WindowHandle, WindowSpec, Xyhw};
use crate::Command;
use serde::{Deserialize, Serialize};

/// Geometry a window asked for. Fields it did not set are `None`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ConfigureRequest {
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub w: Option<i32>,
    pub h: Option<i32>,
    pub border_width: Option<i32>,
}

/// A window property that changed after the window was managed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum WindowProperty {
    Title(String),
    SizeHints(SizeHints),
    WmHints { urgent: bool, never_focus: bool },
    TransientFor(WindowHandle),
    Dialog,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FullscreenAction {
    Add,
    Remove,
    Toggle,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragKind {
    Move,
    Resize,
}

#[allow(clippy::large_enum_variant)]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum DisplayEvent {
    /// The outputs were (re)detected.
    MonitorsChanged(Vec<Xyhw>),
    WindowCreate(WindowSpec),
    WindowDestroy(WindowHandle),
    WindowUnmap(WindowHandle),
    ConfigureRequest(WindowHandle, ConfigureRequest),
    PropertyChanged(WindowHandle, WindowProperty),
    FullscreenRequest(WindowHandle, FullscreenAction),
    /// A client asked to become the active window.
    ActivateRequest(WindowHandle),
    /// The pointer entered a window, or the root window when `None`.
    EnterNotify {
        window: Option<WindowHandle>,
        x: i32,
        y: i32,
    },
    /// Pointer motion over the root window.
    Motion { x: i32, y: i32 },
    ButtonPress {
        window: Option<WindowHandle>,
        x: i32,
        y: i32,
    },
    DragStart {
        window: WindowHandle,
        kind: DragKind,
        x: i32,
        y: i32,
        time: u64,
    },
    DragMotion { x: i32, y: i32, time: u64 },
    DragEnd { x: i32, y: i32 },
    /// Part of a bar needs to be redrawn.
    Expose,
    SendCommand(Command),
    ProtocolError(ProtocolError),
}
