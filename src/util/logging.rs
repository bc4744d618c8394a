// Logging setup - routes the `log` facade to stderr through fern

use log::LevelFilter;

/// Install the global logger.
///
/// Debug level with `verbose` or in debug builds, Info otherwise. A second
/// call is a no-op because the `log` facade only accepts one logger.
pub fn init(verbose: bool) {
    let level = if verbose || cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let result = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} {:<5} [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        // libsql and hyper are chatty at debug
        .level_for("libsql", LevelFilter::Warn)
        .level_for("hyper", LevelFilter::Warn)
        .level_for("reqwest", LevelFilter::Warn)
        .chain(std::io::stderr())
        .apply();

    if result.is_err() {
        crate::trace!("Logger already initialized");
    }
}
