//! Logging setup.

/// Initializes the `env_logger` backend for the `log` facade.
///
/// Filtering follows `RUST_LOG`. Calling this more than once, or after
/// another logger was installed, does nothing.
pub fn init_logging() {
    if env_logger::try_init().is_ok() {
        log::debug!("babyplots-rs logging initialized");
    }
}
