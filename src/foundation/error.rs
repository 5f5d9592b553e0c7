/// Convenience result type used across Daylight.
pub type DaylightResult<T> = Result<T, DaylightError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Numeric timeline input never produces one of these; it is clamped instead.
#[derive(thiserror::Error, Debug)]
pub enum DaylightError {
    /// Invalid caller-provided data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed or inconsistent engine configuration.
    #[error("config error: {0}")]
    Config(String),

    /// A consumer was constructed outside any time state container scope.
    #[error("missing time state container: {0} must be mounted beneath a TimeState scope")]
    MissingContainer(String),

    /// Errors while probing, decoding or encoding image layers.
    #[error("image error: {0}")]
    Image(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DaylightError {
    /// Build a [`DaylightError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`DaylightError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`DaylightError::MissingContainer`] value naming the consumer.
    pub fn missing_container(consumer: impl Into<String>) -> Self {
        Self::MissingContainer(consumer.into())
    }

    /// Build a [`DaylightError::Image`] value.
    pub fn image(msg: impl Into<String>) -> Self {
        Self::Image(msg.into())
    }

    /// Build a [`DaylightError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
