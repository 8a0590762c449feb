//! The render request: what body to draw and which features to put on it.

use std::fmt;

use cosmos_features::{CloudParams, RingParams};
use cosmos_lighting::LightSource;
use cosmos_texture::BodyType;

use crate::error::GenerationError;

/// Default output size in pixels.
pub const DEFAULT_SIZE: u32 = 512;
pub const MIN_SIZE: u32 = 64;
pub const MAX_SIZE: u32 = 4096;

/// Texture variation of a body type.
///
/// Each body type accepts three variations; [`Variation::all`] lists them
/// with the default first. `Archipelago` is shared by ocean and vital
/// bodies, with different recipes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variation {
    Arid,
    Dunes,
    Mesa,
    WaterWorld,
    Archipelago,
    Reef,
    MagmaRivers,
    EmberWastes,
    VolcanicHellscape,
    Bands,
    Storm,
    Nebulous,
    Earthlike,
    Pangaea,
    ToxicVeins,
    AcidLakes,
    CorrosiveStorms,
    Glacier,
    Tundra,
    FrozenOcean,
    Cratered,
    Fractured,
    Mountainous,
    Overgrown,
    Canopy,
    Bioluminescent,
}

impl Variation {
    /// Variations accepted by `body`, default first.
    pub const fn all(body: BodyType) -> &'static [Variation] {
        use Variation::*;
        match body {
            BodyType::Desert => &[Arid, Dunes, Mesa],
            BodyType::Ocean => &[WaterWorld, Archipelago, Reef],
            BodyType::Furnace => &[MagmaRivers, EmberWastes, VolcanicHellscape],
            BodyType::Jovian => &[Bands, Storm, Nebulous],
            BodyType::Vital => &[Earthlike, Archipelago, Pangaea],
            BodyType::Toxic => &[ToxicVeins, AcidLakes, CorrosiveStorms],
            BodyType::Ice => &[Glacier, Tundra, FrozenOcean],
            BodyType::Rocky => &[Cratered, Fractured, Mountainous],
            BodyType::Jungle => &[Overgrown, Canopy, Bioluminescent],
        }
    }

    pub const fn default_for(body: BodyType) -> Variation {
        Self::all(body)[0]
    }

    /// Snake-case name, e.g. `"water_world"`.
    pub const fn name(self) -> &'static str {
        match self {
            Variation::Arid => "arid",
            Variation::Dunes => "dunes",
            Variation::Mesa => "mesa",
            Variation::WaterWorld => "water_world",
            Variation::Archipelago => "archipelago",
            Variation::Reef => "reef",
            Variation::MagmaRivers => "magma_rivers",
            Variation::EmberWastes => "ember_wastes",
            Variation::VolcanicHellscape => "volcanic_hellscape",
            Variation::Bands => "bands",
            Variation::Storm => "storm",
            Variation::Nebulous => "nebulous",
            Variation::Earthlike => "earthlike",
            Variation::Pangaea => "pangaea",
            Variation::ToxicVeins => "toxic_veins",
            Variation::AcidLakes => "acid_lakes",
            Variation::CorrosiveStorms => "corrosive_storms",
            Variation::Glacier => "glacier",
            Variation::Tundra => "tundra",
            Variation::FrozenOcean => "frozen_ocean",
            Variation::Cratered => "cratered",
            Variation::Fractured => "fractured",
            Variation::Mountainous => "mountainous",
            Variation::Overgrown => "overgrown",
            Variation::Canopy => "canopy",
            Variation::Bioluminescent => "bioluminescent",
        }
    }

    /// Parse a variation name for `body`. Case-insensitive; `-` is accepted
    /// for `_`. A name valid only for another body type is rejected.
    pub fn parse(body: BodyType, name: &str) -> Result<Variation, GenerationError> {
        let wanted = name.trim().replace('-', "_");
        Self::all(body)
            .iter()
            .copied()
            .find(|v| v.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| {
                GenerationError::invalid(
                    "variation",
                    format!("'{name}' is not a {body} variation"),
                )
            })
    }

    pub fn belongs_to(self, body: BodyType) -> bool {
        Self::all(body).contains(&self)
    }
}

impl fmt::Display for Variation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One render request. Build with [`BodyDescriptor::new`] and the `with_*`
/// methods, then [`validate`](BodyDescriptor::validate) (the generator
/// does this too).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyDescriptor {
    pub seed: u32,
    /// Output side length in pixels.
    pub size: u32,
    pub body: BodyType,
    pub variation: Variation,
    pub light: LightSource,
    /// `None` disables rings.
    pub rings: Option<RingParams>,
    /// Atmosphere intensity; `None` disables the glow.
    pub atmosphere: Option<f64>,
    /// `None` disables clouds.
    pub clouds: Option<CloudParams>,
    /// 1-based palette id; out-of-range ids wrap. 0 derives one from the
    /// seed.
    pub palette_id: u32,
}

impl BodyDescriptor {
    /// A featureless body of the default variation at the default size.
    pub fn new(body: BodyType, seed: u32) -> Self {
        Self {
            seed,
            size: DEFAULT_SIZE,
            body,
            variation: Variation::default_for(body),
            light: LightSource::default(),
            rings: None,
            atmosphere: None,
            clouds: None,
            palette_id: 0,
        }
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn with_variation(mut self, variation: Variation) -> Self {
        self.variation = variation;
        self
    }

    pub fn with_light(mut self, light: LightSource) -> Self {
        self.light = light;
        self
    }

    pub fn with_rings(mut self, rings: RingParams) -> Self {
        self.rings = Some(rings);
        self
    }

    pub fn with_atmosphere(mut self, intensity: f64) -> Self {
        self.atmosphere = Some(intensity);
        self
    }

    pub fn with_clouds(mut self, clouds: CloudParams) -> Self {
        self.clouds = Some(clouds);
        self
    }

    pub fn with_palette_id(mut self, palette_id: u32) -> Self {
        self.palette_id = palette_id;
        self
    }

    /// Check every field against its documented range.
    ///
    /// Returns the first violation. Nothing is clamped; NaN fails every
    /// range check.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&self.size) {
            return Err(GenerationError::invalid(
                "size",
                format!("{} is outside {MIN_SIZE}..={MAX_SIZE}", self.size),
            ));
        }
        if !self.variation.belongs_to(self.body) {
            return Err(GenerationError::invalid(
                "variation",
                format!("'{}' is not a {} variation", self.variation, self.body),
            ));
        }
        check_range("light angle", self.light.angle_deg, 0.0, 360.0, false)?;
        check_range("light intensity", self.light.intensity, 0.1, 2.0, true)?;
        check_range("light falloff", self.light.falloff, 0.0, 1.0, true)?;
        check_range("light ambient", self.light.ambient, 0.0, 1.0, true)?;
        if let Some(rings) = &self.rings {
            if !(1..=3).contains(&rings.complexity) {
                return Err(GenerationError::invalid(
                    "ring complexity",
                    format!("{} is outside 1..=3", rings.complexity),
                ));
            }
            check_range("ring tilt", rings.tilt_deg, -45.0, 45.0, true)?;
        }
        if let Some(intensity) = self.atmosphere {
            check_range("atmosphere intensity", intensity, 0.0, 1.0, true)?;
        }
        if let Some(clouds) = &self.clouds {
            check_range("cloud coverage", clouds.coverage, 0.0, 1.0, true)?;
            check_range("cloud wind", clouds.wind, 0.0, 1.0, true)?;
        }
        Ok(())
    }
}

fn check_range(
    field: &'static str,
    value: f64,
    lo: f64,
    hi: f64,
    inclusive: bool,
) -> Result<(), GenerationError> {
    let ok = if inclusive {
        (lo..=hi).contains(&value)
    } else {
        (lo..hi).contains(&value)
    };
    if ok {
        Ok(())
    } else {
        let close = if inclusive { ']' } else { ')' };
        Err(GenerationError::invalid(
            field,
            format!("{value} is outside [{lo}, {hi}{close}"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_body_has_three_variations() {
        for body in BodyType::ALL {
            assert_eq!(Variation::all(body).len(), 3, "{body}");
            assert!(Variation::default_for(body).belongs_to(body));
        }
    }

    #[test]
    fn test_parse_variation() {
        assert_eq!(
            Variation::parse(BodyType::Ocean, "Water-World"),
            Ok(Variation::WaterWorld)
        );
        assert_eq!(
            Variation::parse(BodyType::Vital, "archipelago"),
            Ok(Variation::Archipelago)
        );
        let err = Variation::parse(BodyType::Desert, "storm").unwrap_err();
        assert!(matches!(
            err,
            GenerationError::InvalidParameter {
                field: "variation",
                ..
            }
        ));
    }

    #[test]
    fn test_default_descriptor_is_valid() {
        for body in BodyType::ALL {
            assert_eq!(BodyDescriptor::new(body, 1).validate(), Ok(()), "{body}");
        }
    }

    #[test]
    fn test_out_of_range_fields_are_rejected() {
        let base = BodyDescriptor::new(BodyType::Desert, 12345);
        let cases = [
            (base.with_size(32), "size"),
            (base.with_variation(Variation::Storm), "variation"),
            (
                base.with_light(LightSource::new(360.0, 1.0, 0.6)),
                "light angle",
            ),
            (
                base.with_light(LightSource::new(45.0, 0.05, 0.6)),
                "light intensity",
            ),
            (
                base.with_light(LightSource::new(45.0, 1.0, f64::NAN)),
                "light falloff",
            ),
            (
                base.with_rings(RingParams {
                    complexity: 4,
                    tilt_deg: 0.0,
                }),
                "ring complexity",
            ),
            (
                base.with_rings(RingParams {
                    complexity: 2,
                    tilt_deg: -50.0,
                }),
                "ring tilt",
            ),
            (base.with_atmosphere(1.5), "atmosphere intensity"),
            (
                base.with_clouds(CloudParams {
                    coverage: -0.1,
                    wind: 0.0,
                }),
                "cloud coverage",
            ),
        ];
        for (descriptor, expected) in cases {
            match descriptor.validate() {
                Err(GenerationError::InvalidParameter { field, .. }) => {
                    assert_eq!(field, expected)
                }
                other => panic!("expected {expected} to be rejected, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_range_bounds_are_inclusive_where_documented() {
        let edge = BodyDescriptor::new(BodyType::Ice, 7)
            .with_size(MAX_SIZE)
            .with_light(LightSource::new(0.0, 2.0, 1.0))
            .with_rings(RingParams {
                complexity: 3,
                tilt_deg: 45.0,
            })
            .with_atmosphere(1.0)
            .with_clouds(CloudParams {
                coverage: 1.0,
                wind: 1.0,
            });
        assert_eq!(edge.validate(), Ok(()));
    }
}
