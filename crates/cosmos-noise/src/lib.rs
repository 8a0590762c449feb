//! Procedural noise for planet textures: seeded simplex, fractal, ridged and
//! cellular noise, domain warping, and normalized scalar fields.

mod engine;
mod error;
mod field;
mod layer;
pub mod seed;
mod worley;

pub use engine::{FractalParams, NoiseEngine};
pub use error::FieldError;
pub use field::ScalarField;
pub use layer::NoiseLayer;
pub use seed::{Stream, derive_seed, noise_seed, stream_rng};
pub use worley::{Distance, WorleyGrid};
