//! Desert: warped dunes over ridged canyons, weathered by fine erosion.

use cosmos_noise::NoiseLayer;
use cosmos_texture::TextureError;

use crate::descriptor::Variation;
use crate::recipe::{RecipeInputs, TextureRecipe};

/// Scale multipliers for the dune, canyon and erosion layers.
fn scales(variation: Variation) -> (f64, f64, f64) {
    match variation {
        Variation::Dunes => (1.4, 0.8, 1.0),
        Variation::Mesa => (0.8, 1.6, 0.8),
        _ => (1.0, 1.0, 1.0),
    }
}

pub(crate) fn recipe(
    variation: Variation,
    inputs: &mut RecipeInputs<'_>,
) -> Result<TextureRecipe, TextureError> {
    let (dune, canyon, erosion) = scales(variation);
    let base = inputs.pick("base")?;
    let highlight = inputs.pick("highlight")?;
    let shadow = inputs.pick("shadow")?;

    Ok(TextureRecipe::new(base)
        .layer(
            NoiseLayer::fractal(6, 0.5, 2.0, 4.0 * dune).warped(0.1, 0.3 * dune),
            0.5,
        )
        .layer(NoiseLayer::ridged(4, 0.6, 2.5, 3.0 * canyon), 0.3)
        .layer(
            NoiseLayer::fractal(3, 0.4, 2.0, 5.0 * erosion).warped(0.2, 0.5 * erosion),
            0.2,
        )
        .color("highlight", highlight)
        .color("shadow", shadow)
        .bands(&[(0.3, "shadow"), (0.7, "base"), (1.0, "highlight")]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arid_uses_unit_scales() {
        assert_eq!(scales(Variation::Arid), (1.0, 1.0, 1.0));
        assert!(scales(Variation::Mesa).1 > 1.0, "mesas deepen the canyons");
    }
}
