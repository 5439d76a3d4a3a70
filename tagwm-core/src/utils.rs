//! Process and filesystem helpers around the event loop.
pub mod child_process;
pub mod status_file;
