/// Crate-wide result alias.
pub type HueforgeResult<T> = Result<T, HueforgeError>;

/// Errors produced by the gradient pipeline.
#[derive(thiserror::Error, Debug)]
pub enum HueforgeError {
    /// Input did not satisfy a model invariant (stop count, ranges, dimensions, colors).
    #[error("validation error: {0}")]
    Validation(String),

    /// Pixel buffer or document construction failed.
    #[error("render error: {0}")]
    Render(String),

    /// Image or document encoding failed.
    #[error("encode error: {0}")]
    Encode(String),

    /// Filesystem access failed.
    #[error("io error: {0}")]
    Io(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, with its source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HueforgeError {
    /// Build a [`HueforgeError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`HueforgeError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`HueforgeError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`HueforgeError::Io`].
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Build a [`HueforgeError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
