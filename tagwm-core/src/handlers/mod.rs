//! Everything that changes the state in response to events and commands.
mod arrange_handler;
mod bar_handler;
pub(crate) mod client_handler;
mod command_handler;
mod display_event_handler;
mod focus_handler;
mod gaps_handler;
mod layout_handler;
mod monitor_handler;
mod mouse_drag_handler;
mod overview_handler;
mod tag_handler;
mod window_move_handler;
mod window_resize_handler;
mod window_state_handler;

pub use arrange_handler::OVERVIEW_SYMBOL;
