//! # fsattr Utilities
//!
//! Shared logging and configuration helpers for the fsattr workspace.
//!
//! The core library only emits `tracing` events. Binaries install a
//! subscriber through this crate, configured from the environment or from
//! command-line flags.

pub mod logging;

// Re-export commonly used logging functions for convenience
pub use logging::{
    init_logging, init_logging_with_config, init_logging_with_level, LogConfig, LogFormat, LogLevel, LoggingError,
    LoggingGuard,
};
pub use tracing::{debug, error, info, trace, warn};
