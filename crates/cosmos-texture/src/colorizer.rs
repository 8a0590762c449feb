//! Threshold-band colorization of a scalar field onto the sphere disc.

use cosmos_noise::ScalarField;
use cosmos_raster::{Color, Disc, RasterImage};
use hashbrown::HashMap;

use crate::error::TextureError;

/// Category painted when a value lies above every band.
pub const FALLBACK_CATEGORY: &str = "base";

/// Upper bound (inclusive) of a value range and the category it paints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThresholdBand {
    pub upper: f32,
    pub category: &'static str,
}

impl ThresholdBand {
    pub const fn new(upper: f32, category: &'static str) -> Self {
        Self { upper, category }
    }
}

/// Shorthand for a band list: `bands(&[(0.3, "shadow"), (1.0, "base")])`.
pub fn bands(pairs: &[(f32, &'static str)]) -> Vec<ThresholdBand> {
    pairs
        .iter()
        .map(|&(upper, category)| ThresholdBand::new(upper, category))
        .collect()
}

/// Resolved colors by category name for one texture.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColorMap {
    colors: HashMap<&'static str, Color>,
}

impl ColorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: &'static str, color: Color) -> Option<Color> {
        self.colors.insert(category, color)
    }

    /// Builder form of [`ColorMap::insert`].
    pub fn with(mut self, category: &'static str, color: Color) -> Self {
        self.colors.insert(category, color);
        self
    }

    pub fn get(&self, category: &str) -> Option<Color> {
        self.colors.get(category).copied()
    }

    /// Like [`ColorMap::get`], but a missing category is an error.
    pub fn require(&self, category: &str) -> Result<Color, TextureError> {
        self.get(category)
            .ok_or_else(|| TextureError::MissingColor(category.to_string()))
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl FromIterator<(&'static str, Color)> for ColorMap {
    fn from_iter<I: IntoIterator<Item = (&'static str, Color)>>(iter: I) -> Self {
        Self {
            colors: iter.into_iter().collect(),
        }
    }
}

/// Paint every visible pixel of the disc with the color of the band its
/// field value falls into.
///
/// Bands are matched in ascending order of `upper`, so a value equal to a
/// bound takes that band. Values above the last bound use the `base`
/// category. Pixels outside the disc, or fully transparent in `base`, are
/// left as they are.
pub fn paint(
    base: RasterImage,
    field: &ScalarField,
    colors: &ColorMap,
    bands: &[ThresholdBand],
) -> Result<RasterImage, TextureError> {
    if bands.is_empty() {
        return Err(TextureError::NoBands);
    }
    let size = base.size();
    if field.dimensions() != (size, size) {
        return Err(TextureError::FieldSize {
            image: size,
            field: field.dimensions(),
        });
    }

    let mut resolved = bands
        .iter()
        .map(|band| Ok((band.upper, colors.require(band.category)?)))
        .collect::<Result<Vec<_>, TextureError>>()?;
    resolved.sort_by(|a, b| a.0.total_cmp(&b.0));
    let fallback = colors.get(FALLBACK_CATEGORY);

    let disc = Disc::of(size);
    let mut out = base;
    for y in 0..size {
        for x in 0..size {
            if !disc.contains(x, y) || out.pixel(x, y)[3] == 0 {
                continue;
            }
            let value = field.get(x, y);
            let color = match resolved.iter().find(|(upper, _)| value <= *upper) {
                Some(&(_, color)) => color,
                None => fallback
                    .ok_or_else(|| TextureError::MissingColor(FALLBACK_CATEGORY.to_string()))?,
            };
            out.put_pixel(x, y, color.to_rgba());
        }
    }
    Ok(out)
}
