use serde::{Deserialize, Serialize};

/// The single scratchpad window, recognised by its title.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ScratchPad {
    pub name: String,
    /// Command spawned when no scratchpad window exists yet.
    pub command: Vec<String>,
}

impl Default for ScratchPad {
    fn default() -> Self {
        Self {
            name: "scratchpad".to_string(),
            command: vec!["st".to_string(), "-t".to_string(), "scratchpad".to_string()],
        }
    }
}
