//! Tracing compatibility layer for structured logging.
//!
//! This module provides a unified interface for logging that works whether or
//! not the `tracing-integration` feature is enabled:
//!
//! - **With feature enabled**: Re-exports from the `tracing` crate.
//! - **Without feature**: No-op macros that compile to nothing.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::tracing_compat::trace;
//!
//! trace!(old_capacity = 8, new_capacity = 16, "buffer grown");
//! ```
//!
//! # Feature Flag
//!
//! ```toml
//! parsebuf = { version = "0.1", features = ["tracing-integration"] }
//! ```

#[cfg(feature = "tracing-integration")]
pub(crate) use tracing::trace;

#[cfg(not(feature = "tracing-integration"))]
mod noop {
    //! No-op implementations when tracing is disabled.

    /// No-op trace-level logging macro.
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    pub(crate) use trace;
}

#[cfg(not(feature = "tracing-integration"))]
pub(crate) use noop::trace;
