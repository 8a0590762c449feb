//! Palette and colorizer error types.

use crate::body::BodyType;

/// Errors from palette lookups and texture painting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextureError {
    /// The palette of `body` has no such `<category>_<id>` key.
    #[error("unknown color category '{key}' for {body} palettes")]
    UnknownCategory { body: BodyType, key: String },

    /// A threshold band (or the `base` fallback) names a category missing
    /// from the color map.
    #[error("color map has no entry for category '{0}'")]
    MissingColor(String),

    /// Painting needs at least one threshold band.
    #[error("no threshold bands to paint with")]
    NoBands,

    /// The scalar field does not cover the raster pixel-for-pixel.
    #[error("field of {field:?} cannot paint a {image}x{image} raster")]
    FieldSize { image: u32, field: (u32, u32) },

    /// A body type name that matches none of the known types.
    #[error("unknown body type '{0}'")]
    UnknownBodyType(String),
}
