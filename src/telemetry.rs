//! Tracing setup for the binary.
//!
//! The UI owns the terminal, so logs only go to a file: set `GRIDLOOP_LOG` to
//! a path to enable them. `RUST_LOG` filters as usual.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "GRIDLOOP_LOG";

/// Keeps the background log writer alive; drop it last.
#[derive(Debug)]
pub struct TelemetryGuard {
    _guard: Option<WorkerGuard>,
}

impl TelemetryGuard {
    fn disabled() -> Self {
        Self { _guard: None }
    }
}

pub fn init_tracing(default_level: &str) -> TelemetryGuard {
    let Some(path) = log_file_path_from_env() else {
        return TelemetryGuard::disabled();
    };

    let file = match std::fs::OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: failed to open log file {}: {}", path.display(), err);
            return TelemetryGuard::disabled();
        }
    };
    let (writer, guard) = tracing_appender::non_blocking(file);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_ansi(false)
        .with_writer(writer);

    if subscriber.try_init().is_err() {
        return TelemetryGuard::disabled();
    }

    TelemetryGuard {
        _guard: Some(guard),
    }
}

fn log_file_path_from_env() -> Option<PathBuf> {
    std::env::var_os(LOG_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
