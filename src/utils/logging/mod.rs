//! Logging utilities
//!
//! This module provides standardized log lines for engine operations. The
//! library only emits through the `log` facade; installing a logger is left to
//! the binary.

pub mod log;

// Re-export commonly used functions for convenience
pub use self::log::{log_operation_complete, log_operation_start, log_warning};
