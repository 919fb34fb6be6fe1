//! Runtime setup for the CLI

use log::LevelFilter;

/// Map the `-v` count to a log level.
pub fn log_level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialize `env_logger`. `RUST_LOG` takes precedence over `-v`.
pub fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(log_level_for(verbosity));
    builder.parse_default_env();
    builder.format_timestamp(None);

    if let Err(e) = builder.try_init() {
        // Already configured - this is fine
        eprintln!("Note: logger already configured: {}", e);
    }
}
