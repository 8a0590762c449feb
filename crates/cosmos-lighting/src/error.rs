/// Errors from lighting passes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LightingError {
    /// The normal map does not cover the image pixel-for-pixel.
    #[error("normal map of {normals:?} cannot light a {image}x{image} raster")]
    SizeMismatch { image: u32, normals: (u32, u32) },
}
