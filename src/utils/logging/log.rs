//! Logging utilities
//!
//! This module provides standardized logging functions for operations.

use std::time::Duration;

/// Log an operation start with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `subject` - What the operation runs over (a patient, a file, a batch)
pub fn log_operation_start(operation: &str, subject: &str) {
    log::debug!("{operation} {subject}");
}

/// Log an operation completion with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `subject` - What the operation ran over
/// * `items` - Number of items processed
/// * `elapsed` - Optional elapsed time
pub fn log_operation_complete(
    operation: &str,
    subject: &str,
    items: usize,
    elapsed: Option<Duration>,
) {
    if let Some(duration) = elapsed {
        log::info!("Successfully {operation} {items} items for {subject} in {duration:?}");
    } else {
        log::info!("Successfully {operation} {items} items for {subject}");
    }
}

/// Log an operation warning with consistent format
///
/// # Arguments
/// * `message` - Warning message
/// * `subject` - Optional subject related to the warning
pub fn log_warning(message: &str, subject: Option<&str>) {
    if let Some(subject) = subject {
        log::warn!("{message}: {subject}");
    } else {
        log::warn!("{message}");
    }
}
