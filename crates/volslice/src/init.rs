//! Logging setup for programs built on volslice.
//!
//! The library itself only emits through the `log` facade. Binaries and demos
//! call [`init_logging()`] to get output controlled by `RUST_LOG`.

/// Installs `env_logger` as the global logger.
///
/// Calling this more than once, or after another logger was installed, is
/// harmless.
///
/// # Example
///
/// ```no_run
/// volslice::init_logging();
/// log::info!("logging ready");
/// ```
pub fn init_logging() {
    if env_logger::try_init().is_ok() {
        log::debug!("volslice logging initialized");
    }
}
