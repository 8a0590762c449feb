//! Analytic shading of sphere sprites: per-pixel sphere lighting from a
//! single distant light, and height-map relief lighting through a normal map.

mod error;
mod light;
mod normal_map;
mod sphere;

pub use error::LightingError;
pub use light::LightSource;
pub use normal_map::{DirectionalParams, NormalMap, apply_directional_light};
pub use sphere::{SphereLight, apply_sphere_lighting};
