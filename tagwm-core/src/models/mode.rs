use serde::{Deserialize, Serialize};

use crate::models::{ClientId, Xyhw};

/// Where a pointer drag started.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragState {
    pub client: ClientId,
    /// Client geometry when the drag started.
    pub origin: Xyhw,
    /// Pointer position when the drag started.
    pub pointer: (i32, i32),
    /// Timestamp in milliseconds of the last motion that was acted upon.
    pub last_motion: u64,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    Moving(DragState),
    Resizing(DragState),
    #[default]
    Normal,
}

impl Mode {
    pub fn is_dragging(&self) -> bool {
        !matches!(self, Self::Normal)
    }
}
