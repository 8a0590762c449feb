//! Jungle: layered vegetation, from dense undergrowth to glowing canopies.

use cosmos_noise::NoiseLayer;
use cosmos_texture::TextureError;

use crate::descriptor::Variation;
use crate::recipe::{RecipeInputs, TextureRecipe};

pub(crate) fn recipe(
    variation: Variation,
    inputs: &mut RecipeInputs<'_>,
) -> Result<TextureRecipe, TextureError> {
    let density = inputs.roll(0.7, 1.0);
    let growth = inputs.roll(0.6, 1.2);
    let base = inputs.pick("base")?;
    let highlight = inputs.pick("highlight")?;
    let shadow = inputs.pick("shadow")?;
    let recipe = TextureRecipe::new(base)
        .color("shadow", shadow)
        .color("highlight", highlight);

    Ok(match variation {
        Variation::Canopy => {
            let undergrowth = inputs.pick("undergrowth")?;
            recipe
                .layer(
                    NoiseLayer::fractal(5, 0.75, 2.0, 2.5 * density).warped(0.15, 0.35 * growth),
                    0.4,
                )
                .layer(NoiseLayer::fractal(4, 0.65, 2.0, 3.0).warped(0.25, 0.45), 0.4)
                .layer(NoiseLayer::cellular(2.5).inverted().warped(0.35, 0.55), 0.2)
                .color("understory", undergrowth)
                .color("midlevel", undergrowth.blend(base, 0.5))
                .color("canopy", base)
                .bands(&[
                    (0.2, "shadow"),
                    (0.4, "understory"),
                    (0.6, "midlevel"),
                    (0.85, "canopy"),
                    (1.0, "highlight"),
                ])
        }
        Variation::Bioluminescent => {
            let glow = inputs.pick("glow")?;
            let dark = base.adjust_brightness(0.35);
            let cells = (12.0 * density) as u32;
            recipe
                .layer(
                    NoiseLayer::fractal(5, 0.7, 2.0, 3.0 * density).warped(0.2, 0.4 * growth),
                    0.4,
                )
                .layer(NoiseLayer::worley(cells).inverted().warped(0.3, 0.5), 0.4)
                .layer(NoiseLayer::ridged(6, 0.8, 2.2, 4.0).warped(0.25, 0.45), 0.2)
                .color("dark", dark)
                .color("dim", dark.blend(glow, 0.35))
                .color("medium", dark.blend(glow, 0.7))
                .color("bright", glow)
                .bands(&[
                    (0.2, "shadow"),
                    (0.5, "dark"),
                    (0.7, "dim"),
                    (0.85, "medium"),
                    (1.0, "bright"),
                ])
        }
        _ => {
            let undergrowth = inputs.pick("undergrowth")?;
            let vine = inputs.pick("vine")?;
            recipe
                .layer(
                    NoiseLayer::fractal(6, 0.8, 2.2, 3.0 * density).warped(0.2, 0.5 * growth),
                    0.5,
                )
                .layer(NoiseLayer::ridged(5, 0.7, 2.0, 4.0).warped(0.3, 0.6), 0.3)
                .layer(NoiseLayer::cellular(3.0).inverted().warped(0.4, 0.7), 0.2)
                .color("undergrowth", undergrowth)
                .color("vine", vine)
                .bands(&[
                    (0.2, "shadow"),
                    (0.4, "undergrowth"),
                    (0.7, "base"),
                    (0.9, "vine"),
                    (1.0, "highlight"),
                ])
        }
    })
}
