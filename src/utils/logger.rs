use crate::utils::config::get_env_or_default;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Installs the global tracing subscriber
///
/// Log lines are timestamped and written to stderr so that standard output
/// only ever carries fetched documents. The level comes from `LOGLEVEL`
/// (default `INFO`); `debug` forces `DEBUG`. Calling it more than once is a
/// no-op.
pub fn setup_logger(debug: bool) {
    INIT.call_once(|| {
        let level = if debug {
            Level::DEBUG
        } else {
            get_env_or_default("LOGLEVEL", Level::INFO)
        };

        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .with_target(false)
            .finish();

        if tracing::subscriber::set_global_default(subscriber).is_err() {
            eprintln!("tracing subscriber already set");
        }
    });
}
