//! Vital: habitable worlds with oceans, coasts, biomes and ice caps.

use cosmos_noise::NoiseLayer;
use cosmos_raster::Color;
use cosmos_texture::TextureError;

use crate::descriptor::Variation;
use crate::recipe::{RecipeInputs, TextureRecipe};

/// Field value below which a pixel is water.
const OCEAN_LEVEL: f32 = 0.6;
const ARCHIPELAGO_OCEAN_LEVEL: f32 = 0.7;
const PANGAEA_OCEAN_LEVEL: f32 = 0.5;

const GOLDEN: Color = Color::rgb(255, 215, 0);

pub(crate) fn recipe(
    variation: Variation,
    inputs: &mut RecipeInputs<'_>,
) -> Result<TextureRecipe, TextureError> {
    let base = inputs.pick("base")?;
    let water = inputs.pick("water")?;
    let land = inputs.pick("land")?;
    let highlight = inputs.pick("highlight")?;
    let mountain = inputs.pick("mountain")?;
    let coast = water.blend(land, 0.7);
    let recipe = TextureRecipe::new(base);

    Ok(match variation {
        Variation::Archipelago => {
            let level = ARCHIPELAGO_OCEAN_LEVEL;
            recipe
                .layer(NoiseLayer::worley(10).warped(0.3, 0.6), 0.6)
                .layer(NoiseLayer::fractal(4, 0.6, 2.0, 2.5).warped(0.15, 0.4), 0.2)
                .layer(NoiseLayer::fractal(5, 0.7, 2.0, 3.0).warped(0.4, 0.7), 0.2)
                .color("deep_water", water.adjust_brightness(0.6))
                .color("medium_water", water.adjust_brightness(0.8))
                .color("shallow_water", water.adjust_brightness(1.2))
                .color("beach", coast)
                .color("lowland", land)
                .color("forest", land.blend(highlight, 0.6))
                .color("mountain", mountain)
                .bands(&[
                    (level * 0.7, "deep_water"),
                    (level * 0.85, "medium_water"),
                    (level, "shallow_water"),
                    (level + 0.05, "beach"),
                    (level + 0.1, "lowland"),
                    (level + 0.15, "forest"),
                    (1.0, "mountain"),
                ])
        }
        Variation::Pangaea => {
            let ice = inputs.pick("ice")?;
            let level = PANGAEA_OCEAN_LEVEL;
            recipe
                .layer(NoiseLayer::fractal(4, 0.8, 2.0, 2.0).warped(0.1, 0.3), 0.7)
                .layer(NoiseLayer::fractal(5, 0.6, 2.0, 4.0).warped(0.2, 0.5), 0.15)
                .layer(NoiseLayer::ridged(5, 0.7, 2.0, 3.0).warped(0.3, 0.6), 0.15)
                .color("ocean", water)
                .color("coast", coast)
                .color("desert", land.blend(GOLDEN, 0.4))
                .color("plains", land)
                .color("forest", land.blend(highlight, 0.7))
                .color("tundra", land.blend(ice, 0.4))
                .color("mountain", mountain)
                .color("ice", ice)
                .bands(&[
                    (level, "ocean"),
                    (level + 0.05, "coast"),
                    (0.6, "desert"),
                    (0.7, "plains"),
                    (0.8, "forest"),
                    (0.9, "tundra"),
                    (0.95, "mountain"),
                    (1.0, "ice"),
                ])
        }
        _ => {
            let shallow = inputs.pick("shallow")?;
            let ice = inputs.pick("ice")?;
            let level = OCEAN_LEVEL;
            recipe
                .layer(NoiseLayer::fractal(5, 0.7, 2.0, 3.0).warped(0.2, 0.5), 0.6)
                .layer(NoiseLayer::Latitude { gain: 1.0 }.warped(0.1, 0.3), 0.2)
                .layer(NoiseLayer::ridged(4, 0.6, 2.0, 2.5).warped(0.3, 0.6), 0.2)
                .color("deep_ocean", water.adjust_brightness(0.7))
                .color("ocean", water)
                .color("shallow_water", shallow)
                .color("coast", coast)
                .color("lowland", land)
                .color("highland", highlight)
                .color("mountain", mountain)
                .color("ice", ice)
                .bands(&[
                    (level * 0.7, "deep_ocean"),
                    (level * 0.9, "ocean"),
                    (level, "shallow_water"),
                    (level + 0.05, "coast"),
                    (0.75, "lowland"),
                    (0.85, "highland"),
                    (0.95, "mountain"),
                    (1.0, "ice"),
                ])
        }
    })
}
