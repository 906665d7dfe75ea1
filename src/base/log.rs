use tracing::level_filters::LevelFilter;

/// Installs the global subscriber writing to stderr.
///
/// Only the first call takes effect. Returns whether this call installed the
/// subscriber; later calls are ignored so that tests can initialize logging
/// repeatedly.
pub fn init(level: LevelFilter) -> bool {
    let result = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();

    if result.is_err() {
        tracing::debug!("log: subscriber already installed");
        return false;
    }
    true
}
