//! Raster error types.

/// Errors raised when adopting foreign image buffers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RasterError {
    /// Rasters in the pipeline are always square.
    #[error("raster must be square, got {width}x{height}")]
    NotSquare { width: u32, height: u32 },
}
