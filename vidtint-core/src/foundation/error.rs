/// Convenience result type used across Vidtint.
pub type TintResult<T> = Result<T, TintError>;

/// Top-level error taxonomy used by pipeline APIs.
///
/// Variants map one-to-one onto the job's failure modes: invalid caller
/// input, the external decode/encode process, and per-frame file I/O.
/// Channel-shape mismatches (a frame without an alpha plane) are not errors;
/// transforms skip those frames and report the skip through [`JobStats`].
///
/// [`JobStats`]: crate::JobStats
#[derive(thiserror::Error, Debug)]
pub enum TintError {
    /// Malformed or out-of-range transform parameters, detected before any
    /// frame I/O happens.
    #[error("validation error: {0}")]
    Validation(String),

    /// The external decode step crashed or produced zero frames.
    #[error("decode error: {0}")]
    Decode(String),

    /// An individual frame file could not be read or written.
    #[error("frame io error: {0}")]
    FrameIo(String),

    /// The external encode step failed.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TintError {
    /// Build a [`TintError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TintError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`TintError::FrameIo`] value.
    pub fn frame_io(msg: impl Into<String>) -> Self {
        Self::FrameIo(msg.into())
    }

    /// Build a [`TintError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
