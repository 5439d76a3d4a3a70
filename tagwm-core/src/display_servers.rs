#[cfg(test)]
mod mock_display_server;

use crate::config::Config;
use crate::display_action::DisplayAction;
use crate::DisplayEvent;

#[cfg(test)]
pub use self::mock_display_server::MockDisplayServer;

/// The connection to whatever draws the windows.
pub trait DisplayServer {
    fn new(config: &impl Config) -> Self;

    /// Block until the next event arrives. `None` once the connection is closed.
    fn next_event(&mut self) -> Option<DisplayEvent>;

    /// Carry out an action. Some actions answer with an event of their own.
    fn execute_action(&mut self, _act: DisplayAction) -> Option<DisplayEvent> {
        None
    }

    fn flush(&mut self);
}
