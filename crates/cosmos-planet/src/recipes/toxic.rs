//! Toxic: dead surfaces cut by glowing veins, acid lakes or corrosive
//! storms.

use cosmos_noise::NoiseLayer;
use cosmos_raster::Color;
use cosmos_texture::TextureError;

use crate::descriptor::Variation;
use crate::recipe::{RecipeInputs, TextureRecipe};

const DEAD_SURFACE: Color = Color::rgb(15, 15, 20);

pub(crate) fn recipe(
    variation: Variation,
    inputs: &mut RecipeInputs<'_>,
) -> Result<TextureRecipe, TextureError> {
    let toxicity = inputs.roll(0.6, 1.0);
    let corrosion = inputs.roll(0.7, 1.3);
    let base = inputs.pick("base")?;
    let highlight = inputs.pick("highlight")?;
    let shadow = inputs.pick("shadow")?;
    let recipe = TextureRecipe::new(base);

    Ok(match variation {
        Variation::AcidLakes => {
            let acid = inputs.pick("acid")?;
            recipe
                .layer(NoiseLayer::fractal(5, 0.7, 2.0, 2.5).warped(0.2, 0.4), 0.3)
                .layer(
                    NoiseLayer::fractal(4, 0.8, 2.0, 3.0 * toxicity).warped(0.3, 0.6),
                    0.5,
                )
                .layer(NoiseLayer::worley(12).warped(0.6, 0.9 * corrosion), 0.2)
                .color("shadow", shadow)
                .color("surface", base)
                .color("acid", acid)
                .color("bubble", highlight)
                .bands(&[
                    (0.4, "shadow"),
                    (0.6, "surface"),
                    (0.8, "acid"),
                    (0.95, "bubble"),
                ])
        }
        Variation::CorrosiveStorms => {
            let glow = inputs.pick("glow")?;
            recipe
                .layer(NoiseLayer::fractal(4, 0.7, 2.0, 2.0).warped(0.2, 0.4), 0.3)
                .layer(
                    NoiseLayer::ridged(6, 0.6, 2.0, 4.0 * toxicity).warped(0.4, 0.7 * corrosion),
                    0.5,
                )
                .layer(NoiseLayer::ridged(7, 0.8, 2.2, 5.0).warped(0.6, 0.9), 0.2)
                .color("surface", base)
                .color("storm", shadow)
                .color("lightning", highlight)
                .color("discharge", glow)
                .bands(&[
                    (0.4, "surface"),
                    (0.7, "storm"),
                    (0.9, "lightning"),
                    (0.97, "discharge"),
                ])
        }
        _ => {
            let vein = inputs.pick("vein")?;
            let glow = inputs.pick("glow")?;
            recipe
                .layer(NoiseLayer::cellular(2.5).warped(0.2, 0.4), 0.3)
                .layer(
                    NoiseLayer::ridged(7, 0.9, 2.2, 4.0 * toxicity).warped(0.1, 1.5 * corrosion),
                    0.4,
                )
                .layer(
                    NoiseLayer::ridged(6, 0.8, 2.0, 3.5)
                        .inverted()
                        .warped(0.15, 1.2),
                    0.2,
                )
                .layer(NoiseLayer::ridged(5, 0.7, 2.5, 5.0).warped(0.3, 0.7), 0.1)
                .color("dead", DEAD_SURFACE)
                .color("surface", shadow.blend(DEAD_SURFACE, 0.7))
                .color("vein_shadow", vein.blend(DEAD_SURFACE, 0.5))
                .color("vein", vein.blend(Color::WHITE, 0.4))
                .color("glow", glow)
                .bands(&[
                    (0.3, "dead"),
                    (0.6, "surface"),
                    (0.8, "vein_shadow"),
                    (0.9, "vein"),
                    (0.95, "glow"),
                ])
        }
    })
}
