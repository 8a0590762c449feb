//! Seeded color selection from the static per-body palettes.

use cosmos_noise::{Stream, stream_rng};
use cosmos_raster::Color;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::body::BodyType;
use crate::error::TextureError;
use crate::palettes::{self, CLOUD_COLORS};

/// Per-generation color source.
///
/// The tables are immutable; only the draw sequence advances. Two palettes
/// built from the same seed return the same colors for the same sequence of
/// calls.
#[derive(Clone, Debug)]
pub struct ColorPalette {
    rng: ChaCha8Rng,
}

impl ColorPalette {
    /// A palette drawing from the body seed's palette stream.
    pub fn new(body_seed: u32) -> Self {
        Self::from_rng(stream_rng(body_seed, Stream::Palette))
    }

    pub fn from_rng(rng: ChaCha8Rng) -> Self {
        Self { rng }
    }

    /// Number of numbered palettes defined for `body`.
    pub fn palette_count(body: BodyType) -> u32 {
        palettes::surface_palettes(body).len() as u32
    }

    /// Map any palette id into `1..=palette_count(body)`.
    ///
    /// Ids past the end wrap around; id 0 wraps to the last palette.
    pub fn wrap_palette_id(body: BodyType, id: u32) -> u32 {
        let count = Self::palette_count(body);
        (id + count - 1) % count + 1
    }

    /// Category names defined by palette `id` of `body`, in table order.
    pub fn categories(body: BodyType, id: u32) -> Vec<&'static str> {
        let id = Self::wrap_palette_id(body, id);
        palettes::surface_palettes(body)[(id - 1) as usize]
            .iter()
            .map(|(name, _)| *name)
            .collect()
    }

    /// Pick one of the candidates for `key`, a `<category>_<palette id>`
    /// name such as `"base_1"`.
    pub fn pick_color(&mut self, body: BodyType, key: &str) -> Result<Color, TextureError> {
        let candidates = lookup(body, key).ok_or_else(|| TextureError::UnknownCategory {
            body,
            key: key.to_string(),
        })?;
        Ok(self.choose(candidates))
    }

    /// Semi-transparent glow color for the atmosphere layer.
    pub fn atmosphere_color(&mut self, body: BodyType) -> Color {
        self.choose(palettes::atmosphere_colors(body))
    }

    /// Base ring color, before per-band brightness and opacity.
    pub fn ring_color(&mut self, body: BodyType) -> Color {
        self.choose(palettes::ring_colors(body))
    }

    /// Cloud color. White for every body type.
    pub fn cloud_color(&mut self, _body: BodyType) -> Color {
        self.choose(CLOUD_COLORS)
    }

    /// Uniform draw from a non-empty static candidate list.
    fn choose(&mut self, candidates: &'static [Color]) -> Color {
        candidates[self.rng.random_range(0..candidates.len())]
    }
}

fn lookup(body: BodyType, key: &str) -> Option<&'static [Color]> {
    let (category, id) = key.rsplit_once('_')?;
    let id: usize = id.parse().ok()?;
    let palette = palettes::surface_palettes(body).get(id.checked_sub(1)?)?;
    palette
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, colors)| *colors)
        .filter(|colors| !colors.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_first_pick() {
        let mut a = ColorPalette::new(12345);
        let mut b = ColorPalette::new(12345);
        assert_eq!(
            a.pick_color(BodyType::Desert, "base_1").unwrap(),
            b.pick_color(BodyType::Desert, "base_1").unwrap()
        );
    }

    #[test]
    fn test_pick_is_one_of_the_candidates() {
        let mut palette = ColorPalette::new(7);
        let candidates = lookup(BodyType::Ocean, "land_2").unwrap();
        for _ in 0..20 {
            let color = palette.pick_color(BodyType::Ocean, "land_2").unwrap();
            assert!(candidates.contains(&color));
        }
    }

    #[test]
    fn test_unknown_category_fails_fast() {
        let mut palette = ColorPalette::new(1);
        let err = palette.pick_color(BodyType::Desert, "lava_1").unwrap_err();
        assert_eq!(
            err,
            TextureError::UnknownCategory {
                body: BodyType::Desert,
                key: "lava_1".to_string()
            }
        );
    }

    #[test]
    fn test_unnumbered_or_out_of_range_keys_fail() {
        let mut palette = ColorPalette::new(1);
        assert!(palette.pick_color(BodyType::Rocky, "base").is_err());
        assert!(palette.pick_color(BodyType::Rocky, "base_0").is_err());
        assert!(palette.pick_color(BodyType::Rocky, "base_4").is_err());
        assert!(palette.pick_color(BodyType::Jovian, "base_5").is_ok());
    }

    #[test]
    fn test_wrap_palette_id() {
        assert_eq!(ColorPalette::wrap_palette_id(BodyType::Desert, 1), 1);
        assert_eq!(ColorPalette::wrap_palette_id(BodyType::Desert, 3), 3);
        assert_eq!(ColorPalette::wrap_palette_id(BodyType::Desert, 4), 1);
        assert_eq!(ColorPalette::wrap_palette_id(BodyType::Desert, 8), 2);
        assert_eq!(ColorPalette::wrap_palette_id(BodyType::Jovian, 6), 1);
        assert_eq!(ColorPalette::wrap_palette_id(BodyType::Jovian, 0), 5);
    }

    #[test]
    fn test_cloud_color_is_white() {
        let mut palette = ColorPalette::new(3);
        let cloud = palette.cloud_color(BodyType::Furnace);
        assert_eq!((cloud.r, cloud.g, cloud.b), (255, 255, 255));
    }

    #[test]
    fn test_categories_lists_type_specific_entries() {
        let cats = ColorPalette::categories(BodyType::Rocky, 1);
        assert!(cats.contains(&"crater"));
        assert!(cats.contains(&"peak"));
    }
}
