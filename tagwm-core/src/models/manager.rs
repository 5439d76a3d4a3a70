use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::errors::Result;
use crate::state::State;
use crate::utils::child_process::Children;
use crate::utils::status_file::StatusFile;
use crate::DisplayEvent;
use std::collections::VecDeque;
use std::sync::{atomic::AtomicBool, Arc};

/// Maintains current program state.
#[derive(Debug)]
pub struct Manager<C, SERVER> {
    pub state: State,
    pub config: C,

    pub(crate) children: Children,
    pub(crate) reap_requested: Arc<AtomicBool>,
    pub(crate) quit_requested: bool,
    /// Events produced while executing actions, handled before asking the server again.
    pub(crate) event_buffer: VecDeque<DisplayEvent>,
    /// Events that arrived during a drag and wait for its end.
    pub(crate) deferred_events: VecDeque<DisplayEvent>,
    pub(crate) status_file: Option<StatusFile>,
    pub display_server: SERVER,
}

impl<C, SERVER> Manager<C, SERVER>
where
    C: Config,
    SERVER: DisplayServer,
{
    /// # Errors
    ///
    /// Fails when the configured tags cannot be represented.
    pub fn new(config: C) -> Result<Self> {
        let state = State::new(&config)?;
        let display_server = SERVER::new(&config);
        let status_file = config.status_file().map(StatusFile::new);

        Ok(Self {
            state,
            config,
            children: Default::default(),
            reap_requested: Default::default(),
            quit_requested: false,
            event_buffer: VecDeque::new(),
            deferred_events: VecDeque::new(),
            status_file,
            display_server,
        })
    }

    pub fn register_child_hook(&self) {
        crate::child_process::register_child_hook(self.reap_requested.clone());
    }

    /// Stop the event loop after the current iteration.
    pub fn quit(&mut self) {
        self.quit_requested = true;
    }
}

#[cfg(test)]
impl Manager<crate::config::TestConfig, crate::display_servers::MockDisplayServer> {
    /// A manager with the stock test configuration and one 1920x1080 monitor.
    pub fn new_test() -> Self {
        Self::new_test_with(crate::config::TestConfig::default())
    }

    pub fn new_test_with(config: crate::config::TestConfig) -> Self {
        let mut manager = Self::new(config).unwrap();
        manager
            .state
            .update_monitors(&[crate::models::Xyhw::new(0, 0, 1920, 1080)]);
        manager.state.actions.clear();
        manager
    }
}
