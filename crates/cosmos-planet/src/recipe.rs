//! Texture recipes: the per-variation noise layers, weights, colors and
//! threshold bands that the shared colorizer turns into a planet surface.
//!
//! A recipe is plain data built by a pure function of the palette and the
//! variation stream. [`recipe_for`] looks the function up in a static table
//! keyed by body type and variation.

use cosmos_noise::{NoiseEngine, NoiseLayer, ScalarField};
use cosmos_raster::{Color, Disc, RasterImage, Rgba};
use cosmos_texture::{BodyType, ColorMap, ColorPalette, TextureError, ThresholdBand, bands, paint};
use image::Pixel;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::descriptor::Variation;
use crate::error::GenerationError;
use crate::recipes::{desert, furnace, ice, jovian, jungle, ocean, rocky, toxic, vital};

/// Palette access and seeded knobs handed to a recipe function.
pub struct RecipeInputs<'a> {
    body: BodyType,
    palette_id: u32,
    palette: &'a mut ColorPalette,
    rng: &'a mut ChaCha8Rng,
}

impl<'a> RecipeInputs<'a> {
    pub fn new(
        body: BodyType,
        palette_id: u32,
        palette: &'a mut ColorPalette,
        rng: &'a mut ChaCha8Rng,
    ) -> Self {
        Self {
            body,
            palette_id,
            palette,
            rng,
        }
    }

    pub fn palette_id(&self) -> u32 {
        self.palette_id
    }

    /// Draw a color for `category` from the selected palette.
    pub fn pick(&mut self, category: &str) -> Result<Color, TextureError> {
        let key = format!("{category}_{}", self.palette_id);
        self.palette.pick_color(self.body, &key)
    }

    /// Uniform draw from `[lo, hi)` on the variation stream.
    pub fn roll(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.rng.random::<f64>()
    }
}

/// Extra passes on top of the colorized surface.
#[derive(Clone, Debug, PartialEq)]
pub enum PostEffect {
    /// Gaussian blur of the painted surface, before lighting.
    Blur { sigma: f32 },
    /// Land where `layer` exceeds `1 - coverage`, blended over the surface
    /// with alpha and brightness rising with height. Before lighting.
    Islands {
        layer: NoiseLayer,
        coverage: f64,
        color: Color,
    },
    /// White sparkle where recipe layer `layer` exceeds `threshold`, with
    /// alpha `255 * (v - threshold) * gain` capped at `max_alpha`. Applied
    /// after lighting and skipped on islands.
    Shimmer {
        layer: usize,
        threshold: f32,
        gain: f32,
        max_alpha: u8,
    },
}

/// Island alpha above which no shimmer is drawn.
const SHIMMER_ISLAND_CUTOFF: u8 = 50;

/// Brightness gain of island land at full height.
const ISLAND_RELIEF: f64 = 0.3;

/// Everything needed to paint one body's surface.
#[derive(Clone, Debug, PartialEq)]
pub struct TextureRecipe {
    /// Color of the blank disc before painting, also the `base` fallback
    /// unless a recipe maps `base` itself.
    pub base: Color,
    pub layers: Vec<NoiseLayer>,
    pub weights: Vec<f32>,
    pub colors: ColorMap,
    pub bands: Vec<ThresholdBand>,
    pub post: Vec<PostEffect>,
}

impl TextureRecipe {
    pub fn new(base: Color) -> Self {
        Self {
            base,
            layers: Vec::new(),
            weights: Vec::new(),
            colors: ColorMap::new().with("base", base),
            bands: Vec::new(),
            post: Vec::new(),
        }
    }

    pub fn layer(mut self, layer: NoiseLayer, weight: f32) -> Self {
        self.layers.push(layer);
        self.weights.push(weight);
        self
    }

    pub fn color(mut self, category: &'static str, color: Color) -> Self {
        self.colors.insert(category, color);
        self
    }

    pub fn bands(mut self, pairs: &[(f32, &'static str)]) -> Self {
        self.bands = bands(pairs);
        self
    }

    pub fn post(mut self, effect: PostEffect) -> Self {
        self.post.push(effect);
        self
    }

    /// Render the layers, combine them and paint a `size` disc, then run
    /// the pre-lighting post effects.
    pub fn paint_surface(&self, engine: &NoiseEngine, size: u32) -> Result<Surface, GenerationError> {
        let fields: Vec<ScalarField> = self
            .layers
            .iter()
            .map(|layer| layer.render(engine, size))
            .collect();
        let combined = ScalarField::combine(&fields, Some(&self.weights))?;
        let mut image = paint(
            RasterImage::disc(size, self.base),
            &combined,
            &self.colors,
            &self.bands,
        )?;
        let mut islands = None;

        for effect in &self.post {
            match effect {
                PostEffect::Blur { sigma } => image = image.blur(*sigma),
                PostEffect::Islands {
                    layer,
                    coverage,
                    color,
                } => {
                    let mask = island_mask(&layer.render(engine, size), *coverage);
                    image = paint_islands(image, &mask, *color);
                    islands = Some(mask);
                }
                PostEffect::Shimmer { .. } => {}
            }
        }

        Ok(Surface {
            image,
            fields,
            islands,
        })
    }

    /// Run the post-lighting effects over the lit surface, given the
    /// layer fields and island mask from [`TextureRecipe::paint_surface`].
    pub fn finish(
        &self,
        lit: RasterImage,
        fields: &[ScalarField],
        islands: Option<&ScalarField>,
    ) -> RasterImage {
        let mut image = lit;
        for effect in &self.post {
            if let PostEffect::Shimmer {
                layer,
                threshold,
                gain,
                max_alpha,
            } = effect
            {
                let Some(field) = fields.get(*layer) else {
                    continue;
                };
                image = shimmer(
                    image,
                    field,
                    islands,
                    *threshold,
                    *gain,
                    *max_alpha,
                );
            }
        }
        image
    }
}

/// A painted, unlit surface and the raw layer fields it came from.
#[derive(Clone, Debug)]
pub struct Surface {
    pub image: RasterImage,
    /// Raw (unnormalized) field per recipe layer.
    pub fields: Vec<ScalarField>,
    /// Island alpha in `[0, 1]`, when the recipe has islands.
    pub islands: Option<ScalarField>,
}

/// Island alpha in `[0, 1]`: zero below `1 - coverage`, ramping to one at
/// the top of the field. Clipped to the disc.
fn island_mask(heights: &ScalarField, coverage: f64) -> ScalarField {
    let (size, _) = heights.dimensions();
    let disc = Disc::of(size);
    let threshold = (1.0 - coverage) as f32;
    let mut mask = ScalarField::zeros(size, size);
    if threshold >= 1.0 {
        return mask;
    }
    for y in 0..size {
        for x in 0..size {
            let v = heights.get(x, y);
            if v > threshold && disc.contains(x, y) {
                mask.set(x, y, ((v - threshold) / (1.0 - threshold)).min(1.0));
            }
        }
    }
    mask
}

fn paint_islands(image: RasterImage, mask: &ScalarField, land: Color) -> RasterImage {
    image.map_pixels(|x, y, px| {
        let height = mask.get(x, y);
        let alpha = (255.0 * height) as u8;
        if alpha == 0 || px[3] == 0 {
            return px;
        }
        let tinted = land.adjust_brightness((1.0 + ISLAND_RELIEF * f64::from(height)) as f32);
        let mut out = px;
        out.blend(&Rgba([tinted.r, tinted.g, tinted.b, alpha]));
        out
    })
}

fn shimmer(
    image: RasterImage,
    waves: &ScalarField,
    islands: Option<&ScalarField>,
    threshold: f32,
    gain: f32,
    max_alpha: u8,
) -> RasterImage {
    let cutoff = f32::from(SHIMMER_ISLAND_CUTOFF) / 255.0;
    let disc = Disc::of(image.size());
    image.map_pixels(|x, y, px| {
        let v = waves.get(x, y);
        if v <= threshold || px[3] == 0 || !disc.contains(x, y) {
            return px;
        }
        if islands.is_some_and(|mask| mask.get(x, y) > cutoff) {
            return px;
        }
        let alpha = (255.0 * (v - threshold) * gain).min(f32::from(max_alpha)) as u8;
        let mut out = px;
        out.blend(&Rgba([255, 255, 255, alpha]));
        out
    })
}

type RecipeFn = fn(Variation, &mut RecipeInputs<'_>) -> Result<TextureRecipe, TextureError>;

/// One recipe function per body type; each handles its own variations.
const RECIPES: [(BodyType, RecipeFn); 9] = [
    (BodyType::Desert, desert::recipe),
    (BodyType::Ocean, ocean::recipe),
    (BodyType::Furnace, furnace::recipe),
    (BodyType::Jovian, jovian::recipe),
    (BodyType::Vital, vital::recipe),
    (BodyType::Toxic, toxic::recipe),
    (BodyType::Ice, ice::recipe),
    (BodyType::Rocky, rocky::recipe),
    (BodyType::Jungle, jungle::recipe),
];

/// Build the recipe for `variation` of `body`.
pub fn recipe_for(
    body: BodyType,
    variation: Variation,
    inputs: &mut RecipeInputs<'_>,
) -> Result<TextureRecipe, GenerationError> {
    if !variation.belongs_to(body) {
        return Err(GenerationError::invalid(
            "variation",
            format!("'{variation}' is not a {body} variation"),
        ));
    }
    let build = RECIPES
        .iter()
        .find(|(b, _)| *b == body)
        .map(|(_, f)| *f)
        .ok_or_else(|| GenerationError::invalid("body type", format!("no recipe for {body}")))?;
    Ok(build(variation, inputs)?)
}

#[cfg(test)]
mod tests {
    use cosmos_noise::{Stream, stream_rng};

    use super::*;

    fn build(body: BodyType, variation: Variation, seed: u32) -> TextureRecipe {
        let mut palette = ColorPalette::new(seed);
        let mut rng = stream_rng(seed, Stream::Variation);
        let mut inputs = RecipeInputs::new(body, 1, &mut palette, &mut rng);
        recipe_for(body, variation, &mut inputs).unwrap()
    }

    #[test]
    fn test_every_variation_builds_a_consistent_recipe() {
        for body in BodyType::ALL {
            for &variation in Variation::all(body) {
                let recipe = build(body, variation, 99);
                assert!(!recipe.layers.is_empty(), "{body}/{variation} has no layers");
                assert_eq!(
                    recipe.layers.len(),
                    recipe.weights.len(),
                    "{body}/{variation} layer and weight counts differ"
                );
                assert!(!recipe.bands.is_empty(), "{body}/{variation} has no bands");
                for band in &recipe.bands {
                    assert!(
                        recipe.colors.get(band.category).is_some(),
                        "{body}/{variation} band '{}' has no color",
                        band.category
                    );
                }
                assert!(recipe.colors.get("base").is_some());
            }
        }
    }

    #[test]
    fn test_recipes_are_reproducible() {
        let a = build(BodyType::Toxic, Variation::AcidLakes, 5);
        let b = build(BodyType::Toxic, Variation::AcidLakes, 5);
        assert_eq!(a, b);
    }

    #[test]
    fn test_mismatched_variation_is_rejected() {
        let mut palette = ColorPalette::new(1);
        let mut rng = stream_rng(1, Stream::Variation);
        let mut inputs = RecipeInputs::new(BodyType::Ice, 1, &mut palette, &mut rng);
        let err = recipe_for(BodyType::Ice, Variation::Dunes, &mut inputs).unwrap_err();
        assert!(matches!(err, GenerationError::InvalidParameter { .. }));
    }

    #[test]
    fn test_paint_surface_keeps_disc_footprint() {
        let recipe = build(BodyType::Rocky, Variation::Cratered, 3);
        let surface = recipe.paint_surface(&NoiseEngine::new(3), 64).unwrap();
        assert_eq!(surface.image.pixel(0, 0)[3], 0);
        assert_eq!(surface.image.pixel(32, 32)[3], 255);
        assert_eq!(surface.fields.len(), recipe.layers.len());
        assert!(surface.islands.is_none());
    }

    #[test]
    fn test_island_mask_ramps_above_threshold() {
        let heights = ScalarField::generate(32, 32, |x, _| x);
        let mask = island_mask(&heights, 0.2);
        assert_eq!(mask.get(16, 16), 0.0, "0.5 is below the 0.8 threshold");
        assert!(mask.get(29, 16) > 0.0);
        assert_eq!(mask.get(31, 0), 0.0, "corner is off the disc");
        assert_eq!(island_mask(&heights, 0.0).values().iter().sum::<f32>(), 0.0);
    }

    #[test]
    fn test_shimmer_brightens_only_above_threshold() {
        let image = RasterImage::disc(32, Color::rgb(0, 0, 100));
        let waves = ScalarField::generate(32, 32, |x, _| x);
        let out = shimmer(image.clone(), &waves, None, 0.65, 10.0, 100);
        assert_eq!(out.pixel(10, 16), image.pixel(10, 16));
        assert!(out.pixel(24, 16)[0] > 0, "x = 0.75 should sparkle");
    }

    #[test]
    fn test_shimmer_skips_islands() {
        let image = RasterImage::disc(32, Color::rgb(0, 0, 100));
        let waves = ScalarField::generate(32, 32, |_, _| 1.0);
        let islands = ScalarField::generate(32, 32, |_, _| 1.0);
        let out = shimmer(image.clone(), &waves, Some(&islands), 0.65, 10.0, 100);
        assert_eq!(out, image);
    }
}
