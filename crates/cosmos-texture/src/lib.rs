//! Planet surface coloring: body types, seeded palettes and the threshold
//! colorizer that turns a scalar field into a painted sphere disc.

mod body;
mod colorizer;
mod error;
mod palette;
mod palettes;

pub use body::BodyType;
pub use colorizer::{ColorMap, FALLBACK_CATEGORY, ThresholdBand, bands, paint};
pub use error::TextureError;
pub use palette::ColorPalette;
