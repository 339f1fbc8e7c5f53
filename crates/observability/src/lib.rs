//! Tracing and logging setup shared by the ticketing binaries.

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use self::tracing::LogFormat;

/// Initialize process-wide logging in the given format.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init(format: LogFormat) {
    self::tracing::init(format);
}

/// Initialize logging in the format named by `LOG_FORMAT`.
pub fn init_from_env() {
    init(LogFormat::from_env());
}
