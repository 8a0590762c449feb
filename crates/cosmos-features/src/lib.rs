//! Compositable feature layers drawn around or over a lit planet sprite:
//! ring systems, atmospheric glow and cloud cover.

mod atmosphere;
mod clouds;
mod distortion;
mod error;
mod rings;

pub use atmosphere::Atmosphere;
pub use clouds::{CloudLayer, CloudParams};
pub use distortion::{spherical_distortion, wind_shear};
pub use error::FeatureError;
pub use rings::{RING_CANVAS_FACTOR, RING_CATALOGUE, Ring, RingBand, RingParams, RingSystem};
