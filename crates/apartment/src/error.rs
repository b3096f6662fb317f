//! Unified error type for the apartment crates.

use apartment_model::ModelError;

/// Top-level error that wraps all crate-specific errors.
///
/// The `#[from]` attribute on the wrapping variants generates `From`
/// impls, so `?` converts model, I/O and JSON errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum ApartmentError {
    /// A model-level error (bad phone number).
    #[error(transparent)]
    Model(#[from] ModelError),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file is not valid JSON for [`crate::FurnishConfig`].
    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}
