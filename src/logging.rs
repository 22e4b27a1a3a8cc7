use std::path::PathBuf;

use chrono::Utc;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming a log file path.
pub const LOG_ENV_VAR: &str = "DONORLINK_LOG";

/// Install the `donorlink` subscriber.
///
/// Stdout carries command output only. Logs go to stderr unless
/// `DONORLINK_LOG` names a file, in which case each run writes its own
/// `{path}.{timestamp}.{pid}` without ANSI colours. `RUST_LOG` filters
/// (default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    let file = std::env::var(LOG_ENV_VAR).ok().and_then(|base| {
        let path = log_file_path(&base, Utc::now().timestamp(), std::process::id());
        match std::fs::File::create(&path) {
            Ok(file) => Some(file),
            Err(err) => {
                eprintln!("donorlink: cannot open log file {}: {err}", path.display());
                None
            }
        }
    });

    match file {
        Some(file) => registry
            .with(fmt::layer().with_writer(file).with_ansi(false).with_target(true))
            .init(),
        None => registry
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .init(),
    }
}

fn log_file_path(base: &str, timestamp: i64, pid: u32) -> PathBuf {
    PathBuf::from(format!("{base}.{timestamp}.{pid}"))
}
