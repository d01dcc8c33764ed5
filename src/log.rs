// src/log.rs
//
// Subscriber setup for the `logf!`/`logd!`/`loge!` macros (see macros.rs).
// GUI builds log to `.store/debug.log`; the CLI logs to stderr.
// `RUST_LOG` overrides the default `info` filter in both cases.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::consts::{LOG_FILE, STORE_DIR};

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install a subscriber appending to `.store/debug.log`.
/// Falls back to stderr if the store directory can't be created.
pub fn init_file() {
    let path = Path::new(STORE_DIR).join(LOG_FILE);
    if fs::create_dir_all(STORE_DIR).is_err() {
        return init_stderr();
    }
    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(f) => f,
        Err(_) => return init_stderr(),
    };

    // try_init: a second call (tests, re-entry) is a no-op
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
}

/// Install a subscriber writing to stderr, keeping stdout clean for reports.
pub fn init_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}
