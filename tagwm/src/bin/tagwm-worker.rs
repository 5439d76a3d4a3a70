use std::panic;
use tagwm::display_server::StdioDisplayServer;
use tagwm_core::errors::TagError;
use tagwm_core::Manager;

fn main() {
    let config = tagwm::load();
    tagwm::utils::log::setup_logging(&config.log_level);
    tracing::info!("tagwm-worker booting...");

    let exit_status = panic::catch_unwind(move || {
        let mut manager = Manager::<tagwm::Config, StdioDisplayServer>::new(config)?;
        manager.register_child_hook();
        manager.event_loop()
    });

    match exit_status {
        Ok(Ok(()) | Err(TagError::DisplayClosed)) => tracing::info!("Completed"),
        Ok(Err(err)) => {
            tracing::error!("Completed with event loop error: {err}");
            std::process::exit(1);
        }
        Err(err) => {
            tracing::error!("Completed with error: {err:?}");
            std::process::exit(1);
        }
    }
}
