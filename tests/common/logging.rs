//! Routes the crate's log and event callbacks into `tracing` and keeps a copy
//! for assertions.

#![allow(dead_code)] // Shared test helper; not every integration test uses every capture

use podium_lab::{LogLevel, set_event_callback, set_log_callback};
use std::sync::{Mutex, Once, OnceLock};

fn log_store() -> &'static Mutex<Vec<(LogLevel, String)>> {
    static STORE: OnceLock<Mutex<Vec<(LogLevel, String)>>> = OnceLock::new();
    STORE.get_or_init(|| Mutex::new(Vec::new()))
}

fn event_store() -> &'static Mutex<Vec<(String, String)>> {
    static STORE: OnceLock<Mutex<Vec<(String, String)>>> = OnceLock::new();
    STORE.get_or_init(|| Mutex::new(Vec::new()))
}

/// Install the tracing subscriber and the forwarding callbacks once per test binary.
pub fn setup_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();

        set_log_callback(|level, message| {
            match level {
                LogLevel::Debug => tracing::debug!("{message}"),
                LogLevel::Info => tracing::info!("{message}"),
                LogLevel::Warn => tracing::warn!("{message}"),
                LogLevel::Error => tracing::error!("{message}"),
            }
            log_store()
                .lock()
                .unwrap()
                .push((level, message.to_string()));
        });

        set_event_callback(|name, data| {
            tracing::trace!(event = name, "{data}");
            event_store()
                .lock()
                .unwrap()
                .push((name.to_string(), data.to_string()));
        });
    });
}

/// Every log line captured so far, across all tests in this binary.
pub fn captured_logs() -> Vec<(LogLevel, String)> {
    log_store().lock().unwrap().clone()
}

/// Every event captured so far, across all tests in this binary.
pub fn captured_events() -> Vec<(String, String)> {
    event_store().lock().unwrap().clone()
}
