//! Error handling for the biomarker engine.
//!
//! The computational core degrades silently (unknown ids classify as normal,
//! missing inputs skip a formula), so errors only surface at the edges: parsing
//! identifiers, strict snapshot construction, configuration and file loading.

use std::io;

/// Specialized error type for the biomarker engine
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error decoding or encoding JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A name that resolves to no catalog entry
    #[error("Unknown biomarker: {0}")]
    UnknownBiomarker(String),

    /// A value that cannot take part in any calculation
    #[error("Invalid value for {id}: {value}")]
    InvalidValue {
        /// Canonical id of the biomarker
        id: String,
        /// The rejected value
        value: f64,
    },

    /// Configuration outside its allowed bounds
    #[error("Configuration error: {0}")]
    InvalidConfig(String),
}

impl EngineError {
    /// Create an invalid value error for a biomarker id
    pub fn invalid_value(id: impl Into<String>, value: f64) -> Self {
        Self::InvalidValue {
            id: id.into(),
            value,
        }
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
