use super::{Config, DisplayEvent, DisplayServer};
use crate::display_action::DisplayAction;
use std::collections::VecDeque;

/// Replays queued events and records every action it is asked to carry out.
#[derive(Debug, Default, Clone)]
pub struct MockDisplayServer {
    pub events: VecDeque<DisplayEvent>,
    pub executed: Vec<DisplayAction>,
    pub flushes: usize,
}

impl DisplayServer for MockDisplayServer {
    fn new(_: &impl Config) -> Self {
        Self::default()
    }

    fn next_event(&mut self) -> Option<DisplayEvent> {
        self.events.pop_front()
    }

    fn execute_action(&mut self, act: DisplayAction) -> Option<DisplayEvent> {
        self.executed.push(act);
        None
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }
}
