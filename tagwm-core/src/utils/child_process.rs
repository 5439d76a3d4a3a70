//! Launches bound commands and keeps track of them until they exit.
use crate::errors::{Result, TagError};
use std::collections::HashMap;
use std::iter::{Extend, FromIterator};
use std::os::unix::process::CommandExt;
use std::process::{Child, Command, Stdio};
use std::sync::{atomic::AtomicBool, Arc};

pub type ChildID = u32;

/// A struct managing children processes.
#[derive(Debug, Default)]
pub struct Children {
    inner: HashMap<ChildID, Child>,
}

impl Children {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
    /// Insert a `Child` in the `Children`.
    ///
    /// # Returns
    /// - `true` if `child` is a new child-process
    /// - `false` if `child` is already known
    pub fn insert(&mut self, child: Child) -> bool {
        self.inner.insert(child.id(), child).is_none()
    }

    /// Remove all children precosses which finished
    pub fn remove_finished_children(&mut self) {
        self.inner
            .retain(|_, child| child.try_wait().map_or(true, |ret| ret.is_none()));
    }
}

impl FromIterator<Child> for Children {
    fn from_iter<T: IntoIterator<Item = Child>>(iter: T) -> Self {
        Self {
            inner: iter.into_iter().map(|child| (child.id(), child)).collect(),
        }
    }
}

impl Extend<Child> for Children {
    fn extend<T: IntoIterator<Item = Child>>(&mut self, iter: T) {
        self.inner
            .extend(iter.into_iter().map(|child| (child.id(), child)));
    }
}

/// Register the `SIGCHLD` signal handler. Once the signal is received,
/// the flag will be set true. User needs to manually clear the flag.
pub fn register_child_hook(flag: Arc<AtomicBool>) {
    _ = signal_hook::flag::register(signal_hook::consts::signal::SIGCHLD, flag)
        .map_err(|err| tracing::error!("Cannot register SIGCHLD signal handler: {:?}", err));
}

/// Start `argv` in its own process group, detached from our stdin and stdout.
///
/// The child keeps stderr so a failing launch reports there.
///
/// # Errors
///
/// Fails on an empty command or when the program cannot be started.
pub fn spawn(argv: &[String], children: &mut Children) -> Result<ChildID> {
    let (program, args) = argv.split_first().ok_or(TagError::EmptyCommand)?;
    let child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .process_group(0)
        .spawn()?;
    let pid = child.id();
    tracing::debug!("Spawned {program} as {pid}");
    children.insert(child);
    Ok(pid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_commands_are_refused() {
        let mut children = Children::new();
        assert!(matches!(
            spawn(&[], &mut children),
            Err(TagError::EmptyCommand)
        ));
        assert!(children.is_empty());
    }

    #[test]
    fn finished_children_are_reaped() {
        let mut children = Children::new();
        let pid = spawn(&["true".to_string()], &mut children).unwrap();
        assert!(pid > 0);
        assert_eq!(children.len(), 1);
        for _ in 0..250 {
            children.remove_finished_children();
            if children.is_empty() {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(20));
        }
        assert!(children.is_empty());
    }

    #[test]
    fn missing_programs_fail_to_spawn() {
        let mut children = Children::new();
        let result = spawn(&["/nonexistent/tagwm-test-binary".to_string()], &mut children);
        assert!(matches!(result, Err(TagError::IoError(_))));
    }
}
