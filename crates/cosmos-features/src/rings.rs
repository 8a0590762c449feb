//! Saturn-like ring systems drawn around a planet sprite.
//!
//! Bands are concentric ellipses on a canvas larger than the planet. Each
//! band is split into the arcs outside the planet disc, drawn first and
//! darkened, and the part crossing the near half of the disc, drawn after
//! the planet. The planet therefore hides the far side of every band while
//! the near side passes in front of it.

use cosmos_noise::seed::det_sin;
use cosmos_raster::{Color, Disc, RasterImage, Rgba};
use image::Pixel;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::error::FeatureError;

/// Ring canvas side length as a multiple of the planet raster size.
pub const RING_CANVAS_FACTOR: f64 = 2.5;

/// Viewing elevation of an untilted ring plane, in degrees.
const BASE_ELEVATION_DEG: f64 = 23.6;

/// RGB multiplier for arcs behind the planet.
const BEHIND_SHADE: f64 = 0.6;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// One band of a ring system, in planet radii.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingBand {
    pub inner: f64,
    pub outer: f64,
    pub opacity: f64,
    pub brightness: f64,
    /// Solid bands are always fully opaque.
    pub solid: bool,
}

const fn band(inner: f64, outer: f64, opacity: f64, brightness: f64, solid: bool) -> RingBand {
    RingBand {
        inner,
        outer,
        opacity,
        brightness,
        solid,
    }
}

/// D, C, B (inner, middle, outer), Cassini, A inner, Encke, A middle,
/// Keeler, A outer, F and G.
pub const RING_CATALOGUE: [RingBand; 13] = [
    band(1.20, 1.23, 0.9, 0.7, false),
    band(1.24, 1.35, 0.98, 0.75, false),
    band(1.36, 1.45, 1.0, 0.95, true),
    band(1.46, 1.55, 1.0, 1.0, true),
    band(1.56, 1.65, 1.0, 0.9, false),
    band(1.66, 1.70, 0.8, 0.6, false),
    band(1.71, 1.85, 0.98, 0.9, true),
    band(1.86, 1.87, 0.7, 0.5, false),
    band(1.88, 1.95, 0.98, 0.85, false),
    band(1.96, 1.965, 0.7, 0.4, false),
    band(1.97, 2.05, 0.95, 0.8, false),
    band(2.10, 2.12, 0.9, 0.7, true),
    band(2.15, 2.20, 0.85, 0.5, false),
];

const A_OUTER: usize = 10;
const G_RING: usize = 12;

impl RingBand {
    /// Seeded variation of a catalogue band.
    fn varied(self, rng: &mut ChaCha8Rng) -> Self {
        let opacity = (self.opacity * (0.9 + 0.15 * rng.random::<f64>())).clamp(0.7, 1.0);
        let brightness = (self.brightness * (0.95 + 0.1 * rng.random::<f64>())).clamp(0.7, 1.0);
        Self {
            opacity: if self.solid { 1.0 } else { opacity },
            brightness,
            ..self
        }
    }

    /// A random thin ringlet somewhere across the main system.
    fn ringlet(rng: &mut ChaCha8Rng) -> Self {
        let inner = 1.25 + 0.85 * rng.random::<f64>();
        let thickness = 0.005 + 0.01 * rng.random::<f64>();
        let opacity = 0.8 + 0.2 * rng.random::<f64>();
        let brightness = 0.8 + 0.2 * rng.random::<f64>();
        let solid = rng.random::<f64>() < 0.25;
        Self {
            inner,
            outer: inner + thickness,
            opacity: if solid { 1.0 } else { opacity },
            brightness,
            solid,
        }
    }
}

/// A band with its resolved color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ring {
    pub band: RingBand,
    pub color: Color,
}

/// Caller-facing ring options.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingParams {
    /// 1 (sparse) to 3 (every catalogue band).
    pub complexity: u8,
    /// Tilt in degrees. Positive tilts bring the lower half of the system
    /// in front of the planet, negative tilts the upper half.
    pub tilt_deg: f64,
}

impl Default for RingParams {
    fn default() -> Self {
        Self {
            complexity: 2,
            tilt_deg: 0.0,
        }
    }
}

/// Which half of the image carries the near side of the rings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NearSide {
    Lower,
    Upper,
}

impl NearSide {
    #[inline]
    fn contains(self, dy: f64) -> bool {
        match self {
            NearSide::Lower => dy >= 0.0,
            NearSide::Upper => dy <= 0.0,
        }
    }
}

/// A generated ring system, ready to be drawn around any planet raster.
#[derive(Clone, Debug, PartialEq)]
pub struct RingSystem {
    rings: Vec<Ring>,
    vertical_factor: f64,
    near_side: NearSide,
}

impl RingSystem {
    /// Select and vary bands for `params`, drawing from `rng`.
    pub fn generate(
        params: &RingParams,
        base_color: Color,
        rng: &mut ChaCha8Rng,
    ) -> Result<Self, FeatureError> {
        let pick = |indices: &[usize]| -> Vec<RingBand> {
            indices.iter().map(|&i| RING_CATALOGUE[i]).collect()
        };
        let (mut selected, ringlets) = match params.complexity {
            1 => {
                let mut bands = pick(&[1, 3, 6]);
                if rng.random::<f64>() > 0.5 {
                    bands.push(RING_CATALOGUE[A_OUTER]);
                }
                (bands, rng.random_range(0..=2u32))
            }
            2 => {
                let mut bands = pick(&[1, 2, 3, 4, 6, 8]);
                if rng.random::<f64>() > 0.3 {
                    bands.push(RING_CATALOGUE[A_OUTER]);
                }
                if rng.random::<f64>() > 0.5 {
                    bands.push(RING_CATALOGUE[G_RING]);
                }
                (bands, rng.random_range(1..=3u32))
            }
            3 => (RING_CATALOGUE.to_vec(), rng.random_range(2..=5u32)),
            other => return Err(FeatureError::InvalidComplexity(other)),
        };

        for band in &mut selected {
            *band = band.varied(rng);
        }
        for _ in 0..ringlets {
            selected.push(RingBand::ringlet(rng));
        }
        selected.sort_by(|a, b| a.inner.total_cmp(&b.inner));

        let rings = selected
            .into_iter()
            .map(|band| {
                let jitter = 1.0 + (rng.random::<f64>() - 0.5) * 0.1;
                Ring {
                    band,
                    color: band_color(base_color, &band, jitter),
                }
            })
            .collect();

        let elevation = (BASE_ELEVATION_DEG + params.tilt_deg.abs()).to_radians();
        Ok(Self {
            rings,
            vertical_factor: det_sin(elevation).max(0.05),
            near_side: if params.tilt_deg < 0.0 {
                NearSide::Upper
            } else {
                NearSide::Lower
            },
        })
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    /// Ratio of an ellipse's vertical to horizontal radius.
    pub fn vertical_factor(&self) -> f64 {
        self.vertical_factor
    }

    /// Side length of the ring canvas for a planet raster of `planet_size`.
    pub fn canvas_size(planet_size: u32) -> u32 {
        (f64::from(planet_size) * RING_CANVAS_FACTOR) as u32
    }

    /// Draw the system around `planet`, returning the larger ring canvas
    /// with the planet centered in it.
    pub fn apply(&self, planet: &RasterImage) -> RasterImage {
        let size = planet.size();
        let canvas = Self::canvas_size(size);
        let center = f64::from(canvas / 2);
        let radius = planet_radius(planet);
        let disc = Disc::new(center, center, radius);
        let ellipses: Vec<Ellipses> = self
            .rings
            .iter()
            .map(|ring| Ellipses::new(ring, radius, self.vertical_factor))
            .collect();

        let behind = RasterImage::new(canvas).map_pixels(|x, y, _| {
            if disc.contains(x, y) {
                return TRANSPARENT;
            }
            let (dx, dy) = (f64::from(x) - center, f64::from(y) - center);
            let mut px = TRANSPARENT;
            for e in ellipses.iter().filter(|e| e.contains(dx, dy)) {
                px.blend(&e.behind);
            }
            px
        });

        let offset = i64::from((canvas - size) / 2);
        let front = RasterImage::new(canvas).map_pixels(|x, y, _| {
            let (dx, dy) = (f64::from(x) - center, f64::from(y) - center);
            if !disc.contains(x, y) || !self.near_side.contains(dy) {
                return TRANSPARENT;
            }
            let mut px = TRANSPARENT;
            for e in ellipses.iter().filter(|e| e.contains(dx, dy)) {
                px.blend(&e.front);
            }
            px
        });

        behind.composite(planet, offset, offset).composite(&front, 0, 0)
    }
}

/// `(r·b, g·b, b·b, a·opacity)` with `b = brightness * jitter`.
fn band_color(base: Color, band: &RingBand, jitter: f64) -> Color {
    let brightness = band.brightness * jitter;
    let scale = |c: u8| (f64::from(c) * brightness).min(255.0) as u8;
    Color::rgba(
        scale(base.r),
        scale(base.g),
        scale(base.b),
        (f64::from(base.alpha()) * band.opacity) as u8,
    )
}

/// Planet radius in pixels: half the smaller side of the opaque bounding
/// box, or half the raster when nothing is visible.
fn planet_radius(planet: &RasterImage) -> f64 {
    let size = planet.size();
    let mut bbox: Option<(u32, u32, u32, u32)> = None;
    for y in 0..size {
        for x in 0..size {
            if planet.pixel(x, y)[3] == 0 {
                continue;
            }
            bbox = Some(match bbox {
                None => (x, y, x, y),
                Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
            });
        }
    }
    let diameter = match bbox {
        Some((x0, y0, x1, y1)) => (x1 - x0 + 1).min(y1 - y0 + 1),
        None => size,
    };
    f64::from(diameter / 2)
}

/// Pixel radii of one band and its two draw colors.
struct Ellipses {
    outer: (f64, f64),
    inner: (f64, f64),
    behind: Rgba<u8>,
    front: Rgba<u8>,
}

impl Ellipses {
    fn new(ring: &Ring, planet_radius: f64, vertical_factor: f64) -> Self {
        let radii = |factor: f64| {
            let rx = (planet_radius * factor).floor();
            (rx, (rx * vertical_factor).floor())
        };
        let front = ring.color;
        let behind = Color {
            r: (f64::from(front.r) * BEHIND_SHADE) as u8,
            g: (f64::from(front.g) * BEHIND_SHADE) as u8,
            b: (f64::from(front.b) * BEHIND_SHADE) as u8,
            ..front
        };
        Self {
            outer: radii(ring.band.outer),
            inner: radii(ring.band.inner),
            behind: behind.to_rgba(),
            front: front.to_rgba(),
        }
    }

    #[inline]
    fn contains(&self, dx: f64, dy: f64) -> bool {
        inside(self.outer, dx, dy) && !inside(self.inner, dx, dy)
    }
}

#[inline]
fn inside((rx, ry): (f64, f64), dx: f64, dy: f64) -> bool {
    if rx <= 0.0 || ry <= 0.0 {
        return false;
    }
    let (u, v) = (dx / rx, dy / ry);
    u * u + v * v <= 1.0
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    const RING_COLOR: Color = Color::rgba(210, 180, 140, 200);
    const PLANET: Color = Color::rgb(20, 40, 200);

    fn system(complexity: u8, tilt_deg: f64, seed: u64) -> RingSystem {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        RingSystem::generate(
            &RingParams {
                complexity,
                tilt_deg,
            },
            RING_COLOR,
            &mut rng,
        )
        .unwrap()
    }

    #[test]
    fn test_invalid_complexity() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for complexity in [0, 4] {
            let err = RingSystem::generate(
                &RingParams {
                    complexity,
                    tilt_deg: 0.0,
                },
                RING_COLOR,
                &mut rng,
            )
            .unwrap_err();
            assert_eq!(err, FeatureError::InvalidComplexity(complexity));
        }
    }

    #[test]
    fn test_band_counts_per_complexity() {
        for seed in 0..20 {
            let n1 = system(1, 0.0, seed).rings().len();
            let n2 = system(2, 0.0, seed).rings().len();
            let n3 = system(3, 0.0, seed).rings().len();
            assert!((3..=6).contains(&n1), "complexity 1 gave {n1} bands");
            assert!((7..=11).contains(&n2), "complexity 2 gave {n2} bands");
            assert!((15..=18).contains(&n3), "complexity 3 gave {n3} bands");
        }
    }

    #[test]
    fn test_bands_sorted_and_solid_bands_opaque() {
        let rings = system(3, 0.0, 42);
        for pair in rings.rings().windows(2) {
            assert!(pair[0].band.inner <= pair[1].band.inner);
        }
        for ring in rings.rings() {
            if ring.band.solid {
                assert_eq!(ring.band.opacity, 1.0);
                assert_eq!(ring.color.alpha(), RING_COLOR.alpha());
            }
            assert!(ring.band.opacity >= 0.7 && ring.band.opacity <= 1.0);
        }
    }

    #[test]
    fn test_same_seed_same_system() {
        assert_eq!(system(2, 10.0, 9), system(2, 10.0, 9));
    }

    #[test]
    fn test_vertical_factor_from_tilt() {
        let flat = system(1, 0.0, 1).vertical_factor();
        assert!((flat - 0.4).abs() < 0.01, "untilted factor ~0.4, got {flat}");
        let steep = system(1, -45.0, 1).vertical_factor();
        assert!(steep > flat);
        assert_eq!(steep, system(1, 45.0, 1).vertical_factor());
    }

    #[test]
    fn test_canvas_size() {
        assert_eq!(RingSystem::canvas_size(512), 1280);
        assert_eq!(RingSystem::canvas_size(100), 250);
    }

    #[test]
    fn test_planet_hides_far_side_and_near_side_covers_planet() {
        let planet = RasterImage::disc(100, PLANET);
        let canvas = system(3, 0.0, 7).apply(&planet);
        assert_eq!(canvas.size(), 250);
        let c = 125;
        // B middle spans 30 px above and below the center on the x axis.
        assert_eq!(
            canvas.pixel(c, c - 30),
            PLANET.to_rgba(),
            "far side of the ring must be behind the planet"
        );
        assert_ne!(
            canvas.pixel(c, c + 30),
            PLANET.to_rgba(),
            "near side of the ring must be drawn over the planet"
        );
        assert!(canvas.pixel(c + 75, c)[3] > 0, "arc beside the planet is drawn");
        assert_eq!(canvas.pixel(0, 0)[3], 0);
    }

    #[test]
    fn test_negative_tilt_swaps_near_side() {
        let planet = RasterImage::disc(100, PLANET);
        let rings = system(3, -0.0001, 7);
        let canvas = rings.apply(&planet);
        let c = 125;
        assert_ne!(canvas.pixel(c, c - 30), PLANET.to_rgba());
        assert_eq!(canvas.pixel(c, c + 30), PLANET.to_rgba());
    }

    #[test]
    fn test_planet_radius_from_alpha_bbox() {
        let planet = RasterImage::disc(40, PLANET).centered_on_canvas(64);
        assert_eq!(planet_radius(&planet), 20.0);
        assert_eq!(planet_radius(&RasterImage::new(64)), 32.0);
    }
}
