//! Furnace: molten worlds with dark crust over glowing rivers and vents.

use cosmos_noise::NoiseLayer;
use cosmos_raster::Color;
use cosmos_texture::TextureError;

use crate::descriptor::Variation;
use crate::recipe::{RecipeInputs, TextureRecipe};

const ASH_GREY: Color = Color::rgb(128, 128, 128);
const CINDER: Color = Color::rgb(50, 50, 50);

pub(crate) fn recipe(
    variation: Variation,
    inputs: &mut RecipeInputs<'_>,
) -> Result<TextureRecipe, TextureError> {
    let base = inputs.pick("base")?;
    let highlight = inputs.pick("highlight")?;
    let shadow = inputs.pick("shadow")?;
    let special = inputs.pick("special")?;
    let recipe = TextureRecipe::new(base);

    Ok(match variation {
        Variation::EmberWastes => recipe
            .layer(NoiseLayer::fractal(5, 0.6, 2.0, 3.5).warped(0.15, 0.3), 0.5)
            .layer(NoiseLayer::ridged(7, 0.7, 2.0, 6.0).warped(0.4, 0.6), 0.3)
            .layer(NoiseLayer::fractal(4, 0.5, 2.0, 2.5).warped(0.2, 0.4), 0.2)
            .color("coal", shadow)
            .color("ash", shadow.blend(ASH_GREY, 0.4))
            .color("ember", highlight)
            .color("glow", special)
            .bands(&[(0.4, "coal"), (0.7, "ash"), (0.9, "ember"), (1.0, "glow")]),
        Variation::VolcanicHellscape => recipe
            .layer(NoiseLayer::ridged(6, 0.7, 2.0, 5.0).warped(0.25, 0.5), 0.4)
            .layer(NoiseLayer::fractal(5, 0.65, 2.0, 4.0).warped(0.3, 0.7), 0.4)
            .layer(NoiseLayer::fractal(4, 0.6, 2.0, 3.0).warped(0.2, 0.4), 0.2)
            .color("crater", shadow.blend(CINDER, 0.6))
            .color("rock", shadow)
            .color("lava", highlight)
            .color("glow", special)
            .bands(&[(0.3, "crater"), (0.6, "rock"), (0.8, "lava"), (1.0, "glow")]),
        _ => recipe
            .layer(NoiseLayer::ridged(6, 0.65, 2.0, 4.0).warped(0.3, 0.8), 0.6)
            .layer(NoiseLayer::fractal(4, 0.5, 2.0, 3.0).warped(0.2, 0.4), 0.3)
            .layer(NoiseLayer::fractal(8, 0.7, 2.0, 5.0), 0.1)
            .color("crust", shadow)
            .color("magma", highlight)
            .color("magma_glow", highlight.blend(special, 0.7))
            .bands(&[
                (0.3, "crust"),
                (0.6, "base"),
                (0.8, "magma"),
                (1.0, "magma_glow"),
            ]),
    })
}
