//! Ocean: wave-textured water, optionally dotted with islands or reefs,
//! finished with a sparkle on the wave crests.

use cosmos_noise::NoiseLayer;
use cosmos_texture::TextureError;

use crate::descriptor::Variation;
use crate::recipe::{PostEffect, RecipeInputs, TextureRecipe};

fn waves() -> NoiseLayer {
    NoiseLayer::fractal(5, 0.6, 2.0, 3.0).warped(0.3, 0.4)
}

fn island_heights() -> NoiseLayer {
    NoiseLayer::ridged(3, 0.7, 2.5, 4.0)
}

pub(crate) fn recipe(
    variation: Variation,
    inputs: &mut RecipeInputs<'_>,
) -> Result<TextureRecipe, TextureError> {
    let base = inputs.pick("base")?;

    if variation == Variation::WaterWorld {
        return Ok(TextureRecipe::new(base)
            .layer(waves(), 1.0)
            .bands(&[(1.0, "base")])
            .post(PostEffect::Shimmer {
                layer: 0,
                threshold: 0.65,
                gain: 10.0,
                max_alpha: 100,
            }));
    }

    let highlight = inputs.pick("highlight")?;
    let shadow = inputs.pick("shadow")?;
    let land = inputs.pick("land")?;
    let (land, coverage, shallow_upper) = if variation == Variation::Reef {
        let foam = inputs.pick("foam")?;
        (land.blend(foam, 0.5), 0.08, 0.55)
    } else {
        (land, 0.15, 0.7)
    };

    Ok(TextureRecipe::new(base)
        .layer(waves(), 0.2)
        .layer(NoiseLayer::fractal(4, 0.5, 2.0, 2.0), 0.5)
        .layer(NoiseLayer::fractal(3, 0.4, 2.0, 6.0).warped(0.1, 0.2), 0.3)
        .color("deep", shadow)
        .color("shallow", highlight)
        .bands(&[(0.35, "deep"), (shallow_upper, "base"), (1.0, "shallow")])
        .post(PostEffect::Islands {
            layer: island_heights(),
            coverage,
            color: land,
        })
        .post(PostEffect::Shimmer {
            layer: 0,
            threshold: 0.75,
            gain: 8.0,
            max_alpha: 80,
        }))
}

#[cfg(test)]
mod tests {
    use cosmos_noise::{Stream, stream_rng};
    use cosmos_texture::{BodyType, ColorPalette};

    use super::*;

    #[test]
    fn test_water_world_has_no_islands() {
        let mut palette = ColorPalette::new(8);
        let mut rng = stream_rng(8, Stream::Variation);
        let mut inputs = RecipeInputs::new(BodyType::Ocean, 2, &mut palette, &mut rng);
        let recipe = recipe(Variation::WaterWorld, &mut inputs).unwrap();
        assert!(
            !recipe
                .post
                .iter()
                .any(|p| matches!(p, PostEffect::Islands { .. }))
        );
        assert_eq!(recipe.layers, vec![waves()]);
    }

    #[test]
    fn test_reef_islands_are_sparser_than_archipelago() {
        let coverage = |variation| {
            let mut palette = ColorPalette::new(8);
            let mut rng = stream_rng(8, Stream::Variation);
            let mut inputs = RecipeInputs::new(BodyType::Ocean, 1, &mut palette, &mut rng);
            recipe(variation, &mut inputs)
                .unwrap()
                .post
                .iter()
                .find_map(|p| match p {
                    PostEffect::Islands { coverage, .. } => Some(*coverage),
                    _ => None,
                })
                .unwrap()
        };
        assert!(coverage(Variation::Reef) < coverage(Variation::Archipelago));
    }
}
