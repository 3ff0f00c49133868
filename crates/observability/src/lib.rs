//! Tracing and logging (shared setup).

/// Tracing configuration (filters, formats).
pub mod tracing;

pub use crate::tracing::LogFormat;

/// Initialize process-wide logging using the format from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init(default_directive: &str) {
    tracing::init(LogFormat::from_env(), default_directive);
}
