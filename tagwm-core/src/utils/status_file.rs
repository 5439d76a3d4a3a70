//! Best effort snapshot of the selection for tools that want to peek at the manager.
use crate::errors::Result;
use crate::models::WindowHandle;
use crate::state::State;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// `$XDG_CACHE_HOME/tagwm/status.json`, creating the directory on the way.
///
/// # Errors
///
/// Fails when the cache directory cannot be determined or created.
pub fn default_path() -> Result<PathBuf> {
    Ok(xdg::BaseDirectories::with_prefix("tagwm")?.place_cache_file("status.json")?)
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusSnapshot {
    pub selected_monitor: usize,
    pub selected_window: Option<WindowHandle>,
}

impl From<&State> for StatusSnapshot {
    fn from(state: &State) -> Self {
        Self {
            selected_monitor: state.selected_monitor,
            selected_window: state
                .selected_client()
                .and_then(|id| state.clients.get(id))
                .map(|client| client.handle),
        }
    }
}

#[derive(Debug)]
pub struct StatusFile {
    path: PathBuf,
    last_state: String,
}

impl StatusFile {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            last_state: String::new(),
        }
    }

    /// Write the snapshot of `state` unless it is unchanged. Failures are logged and skipped.
    pub fn update(&mut self, state: &State) {
        if let Err(err) = self.write(&StatusSnapshot::from(state)) {
            tracing::warn!("Unable to write {}: {err}", self.path.display());
        }
    }

    fn write(&mut self, snapshot: &StatusSnapshot) -> Result<()> {
        let json = serde_json::to_string(snapshot)?;
        if json == self.last_state {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, &json)?;
        self.last_state = json;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::client_handler::tests::spec;
    use crate::Manager;

    #[test]
    fn the_snapshot_follows_the_selection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("status.json");
        let mut manager = Manager::new_test();
        let mut status = StatusFile::new(path.clone());

        status.update(&manager.state);
        let written: StatusSnapshot =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written.selected_window, None);

        manager.state.manage(&spec(4));
        status.update(&manager.state);
        let written: StatusSnapshot =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written.selected_window, Some(WindowHandle(4)));
        assert_eq!(written.selected_monitor, 0);
    }

    #[test]
    fn unchanged_snapshots_are_not_rewritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("status.json");
        let manager = Manager::new_test();
        let mut status = StatusFile::new(path.clone());
        status.update(&manager.state);
        fs::remove_file(&path).unwrap();
        status.update(&manager.state);
        assert!(!path.exists());
    }

    #[test]
    fn failing_writes_are_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        // a directory cannot be written as a file
        let mut status = StatusFile::new(dir.path().to_path_buf());
        let manager = Manager::new_test();
        status.update(&manager.state);
        assert!(status.last_state.is_empty());
    }
}
