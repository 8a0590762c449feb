//! The body orchestrator: texture, lighting, clouds, rings, atmosphere.

use cosmos_features::{Atmosphere, CloudLayer, RingSystem};
use cosmos_lighting::apply_sphere_lighting;
use cosmos_noise::{NoiseEngine, Stream, noise_seed, stream_rng};
use cosmos_raster::RasterImage;
use cosmos_texture::ColorPalette;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::context::{GenerationContext, Rendered, Stage};
use crate::descriptor::BodyDescriptor;
use crate::error::GenerationError;
use crate::recipe::{RecipeInputs, Surface, recipe_for};

/// Renders planets from descriptors.
///
/// Holds no state between renders: every random draw comes from a stream
/// derived from the descriptor's seed, so renders on different threads
/// match sequential ones.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlanetGenerator;

impl PlanetGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Resolve the palette id `descriptor` asks for. 0 draws one from the
    /// variation stream.
    pub fn resolve_palette_id(descriptor: &BodyDescriptor) -> u32 {
        palette_id(descriptor, &mut stream_rng(descriptor.seed, Stream::Variation))
    }

    /// Render `descriptor`, reporting stage timings through `ctx`.
    ///
    /// The output is always `descriptor.size` square. Either every stage
    /// succeeds or an error is returned; there is no partial image.
    pub fn render(
        &self,
        descriptor: &BodyDescriptor,
        ctx: &mut GenerationContext,
    ) -> Result<Rendered, GenerationError> {
        descriptor.validate()?;
        ctx.begin();

        let seed = descriptor.seed;
        let body = descriptor.body;
        let size = descriptor.size;
        let mut palette = ColorPalette::new(seed);
        let mut variation_rng = stream_rng(seed, Stream::Variation);
        let palette_id = palette_id(descriptor, &mut variation_rng);

        let recipe = {
            let mut inputs = RecipeInputs::new(body, palette_id, &mut palette, &mut variation_rng);
            recipe_for(body, descriptor.variation, &mut inputs)?
        };

        let atmosphere = descriptor.atmosphere.map(|intensity| {
            Atmosphere::new(intensity, palette.atmosphere_color(body), descriptor.light)
        });
        let planet_size = atmosphere.map_or(size, |a| a.planet_size(size));

        let surface = ctx.time(Stage::Texture, || {
            let engine = NoiseEngine::new(noise_seed(seed, Stream::Terrain));
            recipe.paint_surface(&engine, planet_size)
        })?;

        let Surface {
            image,
            fields,
            islands,
        } = surface;
        let mut planet = ctx.time(Stage::Lighting, || {
            let lit = apply_sphere_lighting(image, &descriptor.light);
            Ok::<_, GenerationError>(recipe.finish(lit, &fields, islands.as_ref()))
        })?;

        if let Some(params) = &descriptor.clouds {
            let color = palette.cloud_color(body);
            planet = ctx.time(Stage::Clouds, || {
                let clouds = CloudLayer::generate(params, planet_size, color, &descriptor.light, seed)?;
                Ok::<_, GenerationError>(clouds.apply(planet))
            })?;
        }

        let ringed = match &descriptor.rings {
            Some(params) => {
                let color = palette.ring_color(body);
                Some(ctx.time(Stage::Rings, || {
                    let mut rng = stream_rng(seed, Stream::Rings);
                    let system = RingSystem::generate(params, color, &mut rng)?;
                    Ok::<_, GenerationError>(system.apply(&planet))
                })?)
            }
            None => None,
        };

        let haloed = match &atmosphere {
            Some(atmosphere) => Some(ctx.time(Stage::Atmosphere, || {
                Ok::<_, GenerationError>(atmosphere.apply(&planet, size))
            })?),
            None => None,
        };

        let image = match (ringed, haloed) {
            (Some(ringed), Some(haloed)) => ctx.time(Stage::Compose, || {
                let canvas = ringed.size();
                Ok::<_, GenerationError>(haloed.centered_on_canvas(canvas).composite_centered(&ringed))
            })?,
            (Some(ringed), None) => ringed,
            (None, Some(haloed)) => haloed,
            (None, None) => planet,
        };

        let image = if image.size() == size {
            image
        } else {
            ctx.time(Stage::Resize, || Ok::<_, GenerationError>(image.resize(size)))?
        };

        Ok(Rendered {
            image,
            stages: ctx.take_events(),
        })
    }

    /// Render without telemetry, returning only the image.
    pub fn render_image(&self, descriptor: &BodyDescriptor) -> Result<RasterImage, GenerationError> {
        Ok(self.render(descriptor, &mut GenerationContext::new())?.image)
    }
}

/// The first draw of the variation stream picks the palette when the
/// descriptor leaves it at 0; recipes continue from the same stream.
fn palette_id(descriptor: &BodyDescriptor, rng: &mut ChaCha8Rng) -> u32 {
    if descriptor.palette_id == 0 {
        rng.random_range(1..=ColorPalette::palette_count(descriptor.body))
    } else {
        ColorPalette::wrap_palette_id(descriptor.body, descriptor.palette_id)
    }
}
