//! Tracing subscriber setup for the browser console.

use portfolio_adapter_browser::ConsoleMakeWriter;
use tracing_subscriber::EnvFilter;

/// Install the global `fmt` subscriber writing to the browser console.
///
/// An unparsable `filter` falls back to `info`. Installing twice (e.g. two
/// module instances on one page) keeps the first subscriber.
pub fn init(filter: &str) {
    let (env_filter, rejected) = match EnvFilter::try_new(filter) {
        Ok(env_filter) => (env_filter, None),
        Err(err) => (EnvFilter::new("info"), Some(err)),
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(ConsoleMakeWriter)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .try_init();

    if let Some(err) = rejected {
        tracing::warn!(filter, error = %err, "invalid log filter, using info");
    }
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
