use tracing::{metadata::LevelFilter, Subscriber};
use tracing_subscriber::{filter::ParseError, layer::SubscriberExt, EnvFilter};

/// Build the subscriber for `level_regex`. An unparsable filter falls back to `debug` and the
/// parse error is handed back so it can be reported once logging works.
#[must_use]
pub fn parse_log_level(level_regex: &str) -> (impl Subscriber, Option<ParseError>) {
    let mut parse_err = None;
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::DEBUG.into())
        .parse(level_regex)
        .unwrap_or_else(|err| {
            parse_err = Some(err);
            EnvFilter::new("debug")
        });
    (get_subscribers(filter), parse_err)
}

/// Logs go to stderr, stdout carries the display actions.
pub fn get_subscribers(filter: EnvFilter) -> impl Subscriber {
    tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false),
    )
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
pub fn setup_logging(config_level: &str) {
    let level = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| config_level.to_owned());
    let (subscriber, parse_err) = parse_log_level(&level);
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Couldn't setup global subscriber (logger): {err}");
        return;
    }
    if let Some(err) = parse_err {
        tracing::warn!("Invalid log level {level:?}, logging at debug: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_levels_are_reported() {
        let (_, err) = parse_log_level("tagwm=loud");
        assert!(err.is_some());
        let (_, err) = parse_log_level("info,tagwm_core=trace");
        assert!(err.is_none());
    }
}
