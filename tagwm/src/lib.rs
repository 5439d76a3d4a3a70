mod config;
pub mod display_server;
pub mod utils;

pub use config::*;
