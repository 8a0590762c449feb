//! Ice: glaciers, snowy tundra and frozen seas with cracked pack ice.

use cosmos_noise::NoiseLayer;
use cosmos_texture::TextureError;

use crate::descriptor::Variation;
use crate::recipe::{RecipeInputs, TextureRecipe};

pub(crate) fn recipe(
    variation: Variation,
    inputs: &mut RecipeInputs<'_>,
) -> Result<TextureRecipe, TextureError> {
    let crystal = inputs.roll(0.7, 1.3);
    let snow = inputs.roll(0.6, 1.0);
    let base = inputs.pick("base")?;
    let highlight = inputs.pick("highlight")?;
    let shadow = inputs.pick("shadow")?;
    let recipe = TextureRecipe::new(base).color("shadow", shadow);

    Ok(match variation {
        Variation::Tundra => {
            let rock = inputs.pick("rock")?;
            recipe
                .layer(NoiseLayer::fractal(5, 0.6, 2.0, 3.0 * snow).warped(0.1, 0.3), 0.6)
                .layer(NoiseLayer::cellular(3.0).warped(0.2, 0.4), 0.25)
                .layer(NoiseLayer::ridged(4, 0.7, 2.0, 4.0).warped(0.3, 0.5), 0.15)
                .color("rock", rock)
                .color("ice", base)
                .color("snow", highlight)
                .bands(&[(0.3, "rock"), (0.5, "shadow"), (0.7, "ice"), (1.0, "snow")])
        }
        Variation::FrozenOcean => {
            let water = inputs.pick("water")?;
            recipe
                .layer(NoiseLayer::cellular(2.5).warped(0.1, 0.3), 0.5)
                .layer(
                    NoiseLayer::ridged(5, 0.8, 2.0, 3.0).warped(0.2, 0.5 * crystal),
                    0.3,
                )
                .layer(NoiseLayer::cellular(4.0).inverted().warped(0.3, 0.6), 0.2)
                .color("water", water)
                .color("ice", base)
                .color("ridge", highlight)
                .bands(&[(0.3, "water"), (0.5, "shadow"), (0.8, "ice"), (1.0, "ridge")])
        }
        _ => {
            let deep = inputs.pick("deep")?;
            recipe
                .layer(
                    NoiseLayer::ridged(6, 0.8, 2.0, 3.5).warped(0.2, 0.5 * crystal),
                    0.5,
                )
                .layer(NoiseLayer::cellular(2.0 * crystal).warped(0.1, 0.3), 0.3)
                .layer(NoiseLayer::fractal(5, 0.7, 2.2, 4.0).warped(0.3, 0.6), 0.2)
                .color("deep", deep)
                .color("highlight", highlight)
                .bands(&[
                    (0.3, "deep"),
                    (0.5, "shadow"),
                    (0.8, "base"),
                    (1.0, "highlight"),
                ])
        }
    })
}
