/// Convenience result type used across Demoreel.
pub type DemoreelResult<T> = Result<T, DemoreelError>;

/// Top-level error taxonomy used by engine APIs.
///
/// There are only two moments an error can occur: while validating
/// configuration data (timelines, curves, spring parameters) and while
/// answering a frame query that is out of range or fed invalid primitive
/// parameters. There is no IO and no recoverable runtime failure; callers
/// propagate with `?`.
#[derive(thiserror::Error, Debug)]
pub enum DemoreelError {
    /// Invalid user-provided timeline or configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// An animation primitive invoked with invalid parameters.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors while evaluating timeline state for a frame.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing state vectors (fingerprint path only).
    #[error("serialization error: {0}")]
    Serde(String),
}

impl DemoreelError {
    /// Build a [`DemoreelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`DemoreelError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`DemoreelError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`DemoreelError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
