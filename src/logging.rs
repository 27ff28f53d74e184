// src/logging.rs
use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_FILTER: &str = "health_poller=info,hyper=warn";

/// `RUST_LOG` wins whole; the default applies only when it is unset or invalid.
pub fn env_filter() -> EnvFilter {
    filter_from(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref())
}

pub fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the fmt subscriber on stderr; stdout carries the poll report.
pub fn init() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;
    use tracing_subscriber::layer::SubscriberExt;

    fn runner_debug_enabled(filter: EnvFilter) -> bool {
        let subscriber = tracing_subscriber::registry().with(filter);
        tracing::subscriber::with_default(subscriber, || {
            tracing::enabled!(target: "health_poller::poller::runner", Level::DEBUG)
        })
    }

    #[test]
    fn test_rust_log_can_enable_debug() {
        assert!(runner_debug_enabled(filter_from(Some("health_poller=debug"))));
    }

    #[test]
    fn test_default_filter_is_info() {
        assert!(!runner_debug_enabled(filter_from(None)));
    }

    #[test]
    fn test_invalid_rust_log_falls_back_to_default() {
        let filter = filter_from(Some("health_poller=notalevel"));
        assert_eq!(filter.to_string(), EnvFilter::new(DEFAULT_LOG_FILTER).to_string());
    }
}
