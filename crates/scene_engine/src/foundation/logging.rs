//! Logging setup

pub use log::{debug, error, info, trace, warn};

/// Initialize env_logger with an `info` default filter.
///
/// Binaries call this once at startup; `RUST_LOG` overrides the default.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
