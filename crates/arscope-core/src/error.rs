//! Error types for arscope-rs.

use thiserror::Error;

/// The main error type for arscope-rs operations.
///
/// A placement ray-cast that misses the anchor surface is *not* an error;
/// that outcome is reported through the placement result enum instead.
#[derive(Error, Debug)]
pub enum ArScopeError {
    /// A pose with a non-finite component or a degenerate orientation.
    ///
    /// The transform sinks are guaranteed to be untouched when this is
    /// returned; the caller decides whether to drop the frame or surface a
    /// tracking warning.
    #[error("malformed pose: {reason}")]
    MalformedPose { reason: &'static str },

    /// Asynchronous asset load failed.
    ///
    /// Delivered through the loader callback; logged at the consumption
    /// point and never fatal. Repeated placement attempts by the user are
    /// the retry mechanism.
    #[error("asset load failed for '{reference}': {reason}")]
    AssetLoadFailed { reference: String, reason: String },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for arscope-rs operations.
pub type Result<T> = std::result::Result<T, ArScopeError>;
