//! Procedural planet sprites.
//!
//! A [`BodyDescriptor`] names a body type, a texture variation and the
//! optional rings, atmosphere and clouds. [`PlanetGenerator`] turns it into
//! a square RGBA [`RasterImage`]; the same descriptor always yields the same
//! pixels. [`BatchRenderer`] runs many descriptors on a worker pool.

mod batch;
mod context;
mod descriptor;
mod error;
mod generator;
mod recipe;
mod recipes;

pub use batch::{BatchError, BatchRenderer, JobId, RenderJob, RenderOutcome};
pub use context::{GenerationContext, Rendered, Stage, StageEvent, StageObserver};
pub use descriptor::{BodyDescriptor, DEFAULT_SIZE, MAX_SIZE, MIN_SIZE, Variation};
pub use error::GenerationError;
pub use generator::PlanetGenerator;
pub use recipe::{PostEffect, RecipeInputs, Surface, TextureRecipe, recipe_for};

pub use cosmos_features::{CloudParams, RingParams};
pub use cosmos_lighting::LightSource;
pub use cosmos_raster::RasterImage;
pub use cosmos_texture::BodyType;
