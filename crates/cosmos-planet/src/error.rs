//! Caller-facing generation errors.

use cosmos_features::FeatureError;
use cosmos_lighting::LightingError;
use cosmos_noise::FieldError;
use cosmos_texture::TextureError;

/// Everything that can stop a render.
///
/// `InvalidParameter` is the caller's to fix. The wrapped lower-level
/// errors mean a recipe or stage broke an internal contract; the same input
/// fails the same way every time.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerationError {
    #[error("invalid {field}: {reason}")]
    InvalidParameter { field: &'static str, reason: String },

    #[error(transparent)]
    Field(#[from] FieldError),

    #[error(transparent)]
    Texture(#[from] TextureError),

    #[error(transparent)]
    Feature(#[from] FeatureError),

    #[error(transparent)]
    Lighting(#[from] LightingError),
}

impl GenerationError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        GenerationError::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }
}
