//! Logging setup
//!
//! Debug output shares stdout with the plugin output, without colours.

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber
///
/// `--debug` forces the `debug` level for this crate; otherwise `RUST_LOG`
/// decides and logging is off when it is unset.
pub fn init(debug: bool) {
    let filter = if debug {
        EnvFilter::new("check_nfs_client=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"))
    };

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}
