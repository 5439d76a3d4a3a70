//! Objects (such as clients and monitors) the window manager works with.
mod bar;
mod client;
mod gaps;
mod manager;
mod mode;
mod monitor;
mod pertag;
mod size_hints;
mod tag;
mod xyhw;

pub use bar::{split_evenly, BarState, Tab, TagIndicator};
pub use client::{Client, ClientId, WindowHandle, WindowSpec};
pub use gaps::Gaps;
pub use manager::Manager;
pub use mode::{DragState, Mode};
pub use monitor::{Monitor, MonitorSettings};
pub use pertag::{Pertag, PertagEntry};
pub use size_hints::SizeHints;
pub use tag::{TagMask, Tags, MAX_TAGS};
pub use xyhw::Xyhw;
