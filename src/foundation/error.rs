/// Convenience result type used across Stipple.
pub type StippleResult<T> = Result<T, StippleError>;

/// Top-level error taxonomy used by conversion APIs.
///
/// Only [`StippleError::NotFound`] and [`StippleError::Decode`] escape image construction; cache
/// failures are recovered inside the conversion pipeline.
#[derive(thiserror::Error, Debug)]
pub enum StippleError {
    /// No candidate path for an image identifier exists on disk.
    #[error("file not found: {0}")]
    NotFound(String),

    /// The resolved file exists but could not be decoded as an image.
    #[error("decode error: {0}")]
    Decode(String),

    /// Invalid user-provided configuration or container input.
    #[error("validation error: {0}")]
    Validation(String),

    /// A cache blob is missing, unreadable or malformed.
    #[error("cache read error: {0}")]
    CacheRead(String),

    /// A cache blob could not be persisted.
    #[error("cache write error: {0}")]
    CacheWrite(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StippleError {
    /// Build a [`StippleError::NotFound`] value.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Build a [`StippleError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`StippleError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StippleError::CacheRead`] value.
    pub fn cache_read(msg: impl Into<String>) -> Self {
        Self::CacheRead(msg.into())
    }

    /// Build a [`StippleError::CacheWrite`] value.
    pub fn cache_write(msg: impl Into<String>) -> Self {
        Self::CacheWrite(msg.into())
    }

    /// Build a [`StippleError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Return `true` for errors originating in the cache layer.
    pub fn is_cache_error(&self) -> bool {
        matches!(self, Self::CacheRead(_) | Self::CacheWrite(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
