/// Convenience result type used across spiralcast.
pub type SpiralResult<T> = Result<T, SpiralError>;

/// Top-level error taxonomy used by the renderer, pipeline and encoders.
///
/// Every variant is fatal for the run that produced it.
#[derive(thiserror::Error, Debug)]
pub enum SpiralError {
    /// Invalid parameters, schedule, format, CLI input or parameter file.
    ///
    /// Always raised before any frame is synthesized.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A worker failed while computing a frame.
    #[error("render error: {0}")]
    Render(String),

    /// The encoder could not open, write or finalize the output.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SpiralError {
    /// Build a [`SpiralError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`SpiralError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`SpiralError::Encoding`] value.
    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }

    /// Return `true` for [`SpiralError::Configuration`].
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
