use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, SimError>;

/// Errors raised while building a simulation or exporting its trajectory.
///
/// Every variant is produced before a run starts (or after it ends, for
/// export); stepping itself cannot fail.
#[derive(Debug, Error)]
pub enum SimError {
    /// A scalar parameter is out of range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// Explicit bath vectors do not match the configured molecule count.
    #[error(
        "bath shape mismatch: expected {expected} molecules, got {positions} positions and {velocities} velocities"
    )]
    ShapeMismatch {
        expected: usize,
        positions: usize,
        velocities: usize,
    },

    /// A supplied position or velocity has a NaN or infinite coordinate.
    #[error("non-finite value in {what}")]
    NonFinite { what: String },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl SimError {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
