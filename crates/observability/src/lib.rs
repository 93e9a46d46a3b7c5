//! Tracing/logging setup shared by every entry point.

/// Initialize process-wide logging, format taken from `STOCKROOM_LOG_FORMAT`.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_with(tracing::LogFormat::from_env());
}

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use self::tracing::{LogFormat, init_with};
