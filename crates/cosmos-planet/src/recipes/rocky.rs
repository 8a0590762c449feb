//! Rocky: airless worlds with craters, fracture networks or ridged ranges.

use cosmos_noise::NoiseLayer;
use cosmos_texture::TextureError;

use crate::descriptor::Variation;
use crate::recipe::{RecipeInputs, TextureRecipe};

pub(crate) fn recipe(
    variation: Variation,
    inputs: &mut RecipeInputs<'_>,
) -> Result<TextureRecipe, TextureError> {
    let crater_density = inputs.roll(0.6, 1.0);
    let roughness = inputs.roll(0.7, 1.2);
    let base = inputs.pick("base")?;
    let highlight = inputs.pick("highlight")?;
    let shadow = inputs.pick("shadow")?;
    let recipe = TextureRecipe::new(base);

    Ok(match variation {
        Variation::Fractured => {
            let fracture = inputs.pick("fracture")?;
            recipe
                .layer(
                    NoiseLayer::ridged(5, 0.8, 2.0, 3.0 * roughness).warped(0.2, 0.5),
                    0.4,
                )
                .layer(NoiseLayer::cellular(4.0).warped(0.3, 0.6), 0.4)
                .layer(NoiseLayer::cellular(6.0).inverted().warped(0.4, 0.7), 0.2)
                .color("deep", shadow)
                .color("fracture", fracture)
                .color("ridge", highlight)
                .bands(&[
                    (0.3, "deep"),
                    (0.5, "fracture"),
                    (0.8, "base"),
                    (1.0, "ridge"),
                ])
        }
        Variation::Mountainous => {
            let peak = inputs.pick("peak")?;
            let fracture = inputs.pick("fracture")?;
            recipe
                .layer(
                    NoiseLayer::ridged(8, 0.95, 2.5, 5.0).warped(0.1, 0.3 * roughness),
                    0.45,
                )
                .layer(NoiseLayer::ridged(6, 0.9, 2.2, 3.5).warped(0.2, 0.4), 0.25)
                .layer(NoiseLayer::cellular(4.0).inverted().warped(0.15, 0.35), 0.2)
                .layer(NoiseLayer::cellular(5.0).warped(0.4, 0.7), 0.1)
                .color("chasm", fracture)
                .color("valley", shadow)
                .color("ridge", highlight)
                .color("peak", peak)
                .bands(&[
                    (0.2, "chasm"),
                    (0.4, "valley"),
                    (0.7, "base"),
                    (0.9, "ridge"),
                    (1.0, "peak"),
                ])
        }
        _ => {
            let crater = inputs.pick("crater")?;
            let craters = (15.0 * crater_density) as u32;
            recipe
                .layer(NoiseLayer::cellular(2.0 * roughness).warped(0.2, 0.4), 0.3)
                .layer(NoiseLayer::worley(craters).inverted().warped(0.1, 0.3), 0.5)
                .layer(NoiseLayer::ridged(4, 0.7, 2.0, 3.0).warped(0.15, 0.35), 0.2)
                .color("shadow", shadow)
                .color("crater", crater)
                .color("highlight", highlight)
                .bands(&[
                    (0.3, "shadow"),
                    (0.5, "crater"),
                    (0.8, "base"),
                    (1.0, "highlight"),
                ])
        }
    })
}
