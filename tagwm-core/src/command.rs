use crate::layouts::Layout;
use crate::models::TagMask;
use serde::{Deserialize, Serialize};

/// Which gap magnitudes an increment applies to.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum GapTarget {
    All,
    Inner,
    Outer,
    InnerH,
    InnerV,
    OuterH,
    OuterV,
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ResizeDirection {
    ExpandH,
    ReduceH,
    ExpandV,
    ReduceV,
}

/// Which entries of the access history `SwitchPrevClient` may land on.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum SwitchMode {
    /// Any client.
    Window,
    /// A client sharing a tag with the selection.
    SameTag,
    /// A client on other tags.
    DiffTag,
    /// `Window` while a monocle layout is shown, `DiffTag` otherwise.
    Smart,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub enum Command {
    View(TagMask),
    ToggleView(TagMask),
    Tag(TagMask),
    ToggleTag(TagMask),
    ViewToLeft,
    ViewToRight,
    FocusStack(i32),
    SwitchPrevClient(SwitchMode),
    Zoom,
    FocusMonitor(i32),
    TagMonitor(i32),
    IncMasterCount(i32),
    SetMasterFactor(f32),
    SetLayout(Option<Layout>),
    ToggleBar,
    ToggleFloating,
    ToggleFullscreen,
    HideWindow,
    ShowWindow,
    ShowAll,
    ToggleWindow,
    KillClient,
    IncGaps(GapTarget, i32),
    ToggleGaps,
    ToggleSmartGaps,
    DefaultGaps,
    MoveWindow(Direction),
    ResizeWindow(ResizeDirection),
    ToggleOverview,
    ToggleScratchPad,
    Spawn(Vec<String>),
    Quit,
}
