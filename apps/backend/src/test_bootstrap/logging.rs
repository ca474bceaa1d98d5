#![cfg(test)]

//! Unified test logging initialization.
//!
//! Idempotent and race-safe; the level is taken from `TEST_LOG`, then
//! `RUST_LOG`, then falls back to `warn`.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // cargo output capture
            .without_time()
            .try_init()
            .ok(); // never panic if something else already initialized
    });
}
