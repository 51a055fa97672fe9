//! Logging setup for the crate's unit tests.
//!
//! Buffer growth, trim and free emit `trace!` events when the
//! `tracing-integration` feature is on. Tests that want those events in
//! their captured output call [`init_test_logging`] first.

use std::sync::Once;

static INIT_LOGGING: Once = Once::new();

/// Install a trace-level subscriber writing to the test harness.
///
/// Only the first call installs anything.
pub(crate) fn init_test_logging() {
    INIT_LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .with_target(false)
            .with_ansi(false)
            .try_init();
    });
}
