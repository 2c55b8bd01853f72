use std::path::PathBuf;

/// Convenience result type used across layerstack.
pub type LayerStackResult<T> = Result<T, LayerStackError>;

/// Top-level error taxonomy used by library APIs.
///
/// Every variant is fatal: composition never retries or returns a partial canvas.
#[derive(thiserror::Error, Debug)]
pub enum LayerStackError {
    /// Template text is not valid JSON.
    #[error("invalid json: {0}")]
    InvalidJson(String),

    /// Template JSON is well-formed but does not describe a layer stack.
    #[error("malformed template: {0}")]
    MalformedTemplate(String),

    /// Neither `size` nor both `width`/`height` were given.
    #[error("missing canvas size: template needs `size` or both `width` and `height`")]
    MissingCanvasSize,

    /// A component path does not resolve to a readable file.
    #[error("image not found: '{}'", .0.display())]
    ImageNotFound(PathBuf),

    /// The file exists but could not be decoded as an image.
    #[error("unsupported format: '{}': {reason}", .path.display())]
    UnsupportedFormat {
        /// Resolved path of the offending file.
        path: PathBuf,
        /// Decoder message.
        reason: String,
    },

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LayerStackError {
    /// Build a [`LayerStackError::InvalidJson`] value.
    pub fn invalid_json(msg: impl Into<String>) -> Self {
        Self::InvalidJson(msg.into())
    }

    /// Build a [`LayerStackError::MalformedTemplate`] value.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedTemplate(msg.into())
    }

    /// Build a [`LayerStackError::UnsupportedFormat`] value.
    pub fn unsupported_format(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
