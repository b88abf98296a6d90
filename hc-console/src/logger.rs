//! Logging setup
//!
//! Logs go to stderr so table output on stdout stays clean. With a log
//! directory, output goes to a daily-rolling file instead.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber
///
/// `RUST_LOG` wins over `level` when set.
pub fn init_logger(level: &str, json: bool, log_dir: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    if let Some(dir) = log_dir.map(Path::new).filter(|dir| dir.is_dir()) {
        let appender = tracing_appender::rolling::daily(dir, "hc-console");
        let builder = builder.with_writer(appender).with_ansi(false);
        if json {
            builder.json().init();
        } else {
            builder.init();
        }
        return;
    }

    let builder = builder.with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
