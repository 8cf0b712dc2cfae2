/// Convenience result type used across scenereel.
pub type ReelResult<T> = Result<T, ReelError>;

/// Error taxonomy for the outer boundaries of the crate.
///
/// The per-frame resolvers never produce these; malformed scene data degrades to defaults.
#[derive(thiserror::Error, Debug)]
pub enum ReelError {
    /// Invalid scene data (strict mode), config or driver parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while driving frames (out-of-range requests, thread pool setup).
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// IO failures in sinks or loaders.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReelError {
    /// Build a [`ReelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ReelError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`ReelError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ReelError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
