//! Jovian: gas giants built from horizontally stretched bands.

use cosmos_noise::NoiseLayer;
use cosmos_texture::TextureError;

use crate::descriptor::Variation;
use crate::recipe::{PostEffect, RecipeInputs, TextureRecipe};

/// Softening applied to nebulous giants before lighting.
const NEBULOUS_BLUR: f32 = 1.2;

pub(crate) fn recipe(
    variation: Variation,
    inputs: &mut RecipeInputs<'_>,
) -> Result<TextureRecipe, TextureError> {
    let base = inputs.pick("base")?;
    let highlight = inputs.pick("highlight")?;
    let shadow = inputs.pick("shadow")?;
    let midtone = inputs.pick("midtone")?;
    let recipe = TextureRecipe::new(base)
        .color("highlight", highlight)
        .color("shadow", shadow)
        .color("midtone", midtone);

    Ok(match variation {
        Variation::Storm => {
            let storm = inputs.pick("storm")?;
            recipe
                .layer(NoiseLayer::ridged(5, 0.7, 2.2, 3.5).warped(0.15, 0.6), 0.5)
                .layer(NoiseLayer::worley(8).inverted(), 0.3)
                .layer(NoiseLayer::fractal(4, 0.5, 2.0, 2.0).stretched(1.0, 4.0), 0.2)
                .color("storm", storm)
                .bands(&[
                    (0.2, "shadow"),
                    (0.4, "base"),
                    (0.6, "midtone"),
                    (0.8, "highlight"),
                    (1.0, "storm"),
                ])
        }
        Variation::Nebulous => recipe
            .layer(NoiseLayer::fractal(8, 0.5, 2.0, 2.0).warped(0.05, 0.2), 0.7)
            .layer(
                NoiseLayer::fractal(6, 0.6, 2.0, 3.0)
                    .warped(0.1, 0.3)
                    .stretched(1.0, 2.0),
                0.3,
            )
            .bands(&[
                (0.3, "shadow"),
                (0.5, "base"),
                (0.7, "midtone"),
                (1.0, "highlight"),
            ])
            .post(PostEffect::Blur {
                sigma: NEBULOUS_BLUR,
            }),
        _ => recipe
            .layer(
                NoiseLayer::fractal(5, 0.6, 2.0, 3.0)
                    .warped(0.1, 0.3)
                    .stretched(1.0, 5.0),
                0.7,
            )
            .layer(NoiseLayer::fractal(6, 0.7, 2.0, 4.0).warped(0.2, 0.4), 0.3)
            .bands(&[
                (0.25, "shadow"),
                (0.5, "base"),
                (0.75, "midtone"),
                (1.0, "highlight"),
            ]),
    })
}
