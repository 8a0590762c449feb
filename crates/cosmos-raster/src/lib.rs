//! Square RGBA rasters, 8-bit color algebra and sphere-disc geometry shared
//! by every stage of the planet renderer.

mod color;
mod error;
mod geometry;
mod raster;

pub use color::Color;
pub use error::RasterError;
pub use geometry::{Disc, DiscOffset};
pub use raster::RasterImage;

pub use ::image::{Rgba, RgbaImage};
