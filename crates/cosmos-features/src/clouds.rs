//! Stylized cloud cover.
//!
//! A [`CloudLayer`] is generated once per body and keeps its intermediate
//! products (coverage field, alpha mask, lit texture) so callers can inspect
//! or reuse them. Nothing is shared between layers.

use cosmos_lighting::{
    DirectionalParams, LightSource, NormalMap, SphereLight, apply_directional_light,
    apply_sphere_lighting,
};
use cosmos_noise::seed::det_pow;
use cosmos_noise::{NoiseEngine, NoiseLayer, ScalarField, Stream, noise_seed};
use cosmos_raster::{Color, Disc, RasterImage, Rgba};
use image::{GrayImage, Luma};

use crate::distortion::{spherical_distortion, wind_shear};
use crate::error::FeatureError;

/// Weights of the base, cellular, detail, edge-ridged and organization
/// layers.
const LAYER_WEIGHTS: [f32; 5] = [0.4, 0.25, 0.15, 0.15, 0.05];

/// Mid-range of the coverage field that gets the S-curve.
const CURVE_LOW: f32 = 0.35;
const CURVE_HIGH: f32 = 0.75;

const BASE_THRESHOLD: f64 = 0.42;
const EDGE_WIDTH: f64 = 0.1;

const RELIEF_STRENGTH: f64 = 2.0;
const RELIEF: DirectionalParams = DirectionalParams {
    ambient: 0.3,
    diffuse: 1.0,
    specular: 0.0,
    shininess: 10.0,
};

/// Maximum alpha gain on the lit hemisphere and loss on the night side.
const LIT_BOOST: f64 = 0.72;
const SHADOW_CUT: f64 = 0.5;

const DISTORTION: f64 = 0.15;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CloudParams {
    /// Fraction of the disc to cover, in `[0, 1]`.
    pub coverage: f64,
    /// Wind shear strength in `[0, 1]`; zero disables it.
    pub wind: f64,
}

impl Default for CloudParams {
    fn default() -> Self {
        Self {
            coverage: 0.5,
            wind: 0.0,
        }
    }
}

/// A generated cloud texture and the fields it was built from.
#[derive(Clone, Debug)]
pub struct CloudLayer {
    params: CloudParams,
    field: ScalarField,
    mask: GrayImage,
    texture: RasterImage,
}

impl CloudLayer {
    /// Build clouds for a `size × size` planet lit by `light`.
    ///
    /// Noise comes from the body seed's cloud stream; wind shear from its
    /// wind stream.
    pub fn generate(
        params: &CloudParams,
        size: u32,
        color: Color,
        light: &LightSource,
        body_seed: u32,
    ) -> Result<Self, FeatureError> {
        let engine = NoiseEngine::new(noise_seed(body_seed, Stream::Clouds));
        let field = coverage_field(&engine, size)?;
        let cluster = NoiseLayer::fractal(2, 0.6, 1.8, 0.8)
            .warped(0.02, 0.05)
            .render(&engine, size)
            .normalize();
        let mask = build_mask(&field, &cluster, params.coverage);

        let fill = Rgba([color.r, color.g, color.b, 0]);
        let painted = RasterImage::new(size).map_pixels(|x, y, _| {
            let Luma([alpha]) = *mask.get_pixel(x, y);
            Rgba([fill[0], fill[1], fill[2], alpha])
        });

        let lit = apply_sphere_lighting(painted, light);
        let normals = NormalMap::from_height(&field, RELIEF_STRENGTH);
        let lit = apply_directional_light(lit, &normals, light.direction(), &RELIEF)?;

        let sphere = SphereLight::new(*light, size);
        let boosted = lit.map_pixels(|x, y, px| match sphere.illumination(x, y) {
            Some(dot) if px[3] > 0 => {
                let gain = if dot >= 0.0 {
                    1.0 + LIT_BOOST * dot
                } else {
                    1.0 + SHADOW_CUT * dot
                };
                let alpha = (f64::from(px[3]) * gain).clamp(0.0, 255.0) as u8;
                Rgba([px[0], px[1], px[2], alpha])
            }
            _ => px,
        });

        let mut texture = spherical_distortion(boosted, DISTORTION);
        if params.wind > 0.0 {
            let gusts = NoiseLayer::fractal(3, 0.5, 2.0, 2.0)
                .render(
                    &NoiseEngine::new(noise_seed(body_seed, Stream::Wind)),
                    size,
                )
                .normalize();
            texture = wind_shear(texture, &gusts, params.wind, light.angle_deg + 90.0);
        }

        Ok(Self {
            params: *params,
            field,
            mask,
            texture,
        })
    }

    pub fn params(&self) -> &CloudParams {
        &self.params
    }

    /// Combined, S-curved coverage field in `[0, 1]`.
    pub fn coverage_field(&self) -> &ScalarField {
        &self.field
    }

    /// Cloud alpha before lighting and distortion.
    pub fn mask(&self) -> &GrayImage {
        &self.mask
    }

    /// The final lit cloud texture.
    pub fn texture(&self) -> &RasterImage {
        &self.texture
    }

    /// Number of mask pixels with any cloud.
    pub fn mask_coverage(&self) -> usize {
        self.mask.pixels().filter(|Luma([a])| *a > 0).count()
    }

    /// Composite the clouds over `planet`, centered.
    pub fn apply(&self, planet: RasterImage) -> RasterImage {
        planet.composite_centered(&self.texture)
    }
}

fn coverage_field(engine: &NoiseEngine, size: u32) -> Result<ScalarField, FeatureError> {
    let layers = [
        NoiseLayer::fractal(3, 0.7, 2.0, 1.3).warped(0.03, 0.1),
        NoiseLayer::worley(5).inverted(),
        NoiseLayer::fractal(3, 0.5, 2.2, 2.0),
        NoiseLayer::ridged(2, 0.6, 1.8, 1.0).warped(0.02, 0.06),
        NoiseLayer::fractal(1, 0.5, 2.0, 0.6),
    ];
    let fields: Vec<ScalarField> = layers
        .iter()
        .map(|layer| layer.render(engine, size).normalize())
        .collect();
    Ok(ScalarField::combine(&fields, Some(&LAYER_WEIGHTS))?.map(s_curve))
}

/// Steepen the mid-range so cloud and gap separate cleanly.
fn s_curve(v: f32) -> f32 {
    if v > CURVE_LOW && v < CURVE_HIGH {
        let t = (v - CURVE_LOW) / (CURVE_HIGH - CURVE_LOW);
        CURVE_LOW + (CURVE_HIGH - CURVE_LOW) * t.powf(1.5)
    } else {
        v
    }
}

fn build_mask(field: &ScalarField, cluster: &ScalarField, coverage: f64) -> GrayImage {
    let (size, _) = field.dimensions();
    let disc = Disc::of(size);
    let threshold = BASE_THRESHOLD - det_pow(coverage, 0.7) * 0.55;
    GrayImage::from_fn(size, size, |x, y| {
        if !disc.contains(x, y) {
            return Luma([0]);
        }
        let value = f64::from(field.get(x, y));
        let cluster = f64::from(cluster.get(x, y));
        Luma([cloud_alpha(value, cluster, threshold, coverage)])
    })
}

/// Alpha for one coverage value.
///
/// Low cluster values raise the local threshold to open gaps even at high
/// coverage. Values within [`EDGE_WIDTH`] below the threshold form a soft
/// edge; above it alpha climbs through three density zones.
fn cloud_alpha(value: f64, cluster: f64, threshold: f64, coverage: f64) -> u8 {
    let mut local = threshold;
    if cluster < 0.3 {
        local += (0.3 - cluster) * (0.25 - 0.15 * coverage);
    }
    let edge_start = local - EDGE_WIDTH;
    if value <= edge_start {
        return 0;
    }
    let alpha = if value < local {
        let edge = (value - edge_start) / EDGE_WIDTH;
        60.0 + 60.0 * det_pow(edge, 1.2)
    } else {
        let n = if local < 1.0 {
            ((value - local) / (1.0 - local)).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let zone = if n < 0.3 {
            120.0 + 200.0 * n
        } else if n < 0.6 {
            180.0 + 150.0 * (n - 0.3)
        } else {
            225.0 + 30.0 * (n - 0.6)
        };
        zone * (0.9 + 0.2 * cluster)
    };
    alpha.clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(coverage: f64, wind: f64) -> CloudLayer {
        CloudLayer::generate(
            &CloudParams { coverage, wind },
            96,
            Color::WHITE,
            &LightSource::default(),
            12345,
        )
        .unwrap()
    }

    #[test]
    fn test_coverage_field_in_unit_range() {
        let clouds = layer(0.5, 0.0);
        let (lo, hi) = clouds.coverage_field().min_max();
        assert!(lo >= 0.0 && hi <= 1.0, "coverage field [{lo}, {hi}]");
    }

    #[test]
    fn test_more_coverage_more_cloud_pixels() {
        let sparse = layer(0.2, 0.0).mask_coverage();
        let dense = layer(0.9, 0.0).mask_coverage();
        assert!(dense > sparse, "coverage 0.9 gave {dense}, 0.2 gave {sparse}");
    }

    #[test]
    fn test_mask_is_clipped_to_disc() {
        let clouds = layer(1.0, 0.0);
        assert_eq!(clouds.mask().get_pixel(0, 0)[0], 0);
        assert_eq!(clouds.mask().get_pixel(95, 0)[0], 0);
        assert_eq!(clouds.texture().pixel(0, 95)[3], 0);
    }

    #[test]
    fn test_same_seed_same_clouds() {
        assert_eq!(layer(0.6, 0.3).texture(), layer(0.6, 0.3).texture());
    }

    #[test]
    fn test_wind_changes_texture() {
        assert_ne!(layer(0.6, 1.0).texture(), layer(0.6, 0.0).texture());
    }

    #[test]
    fn test_cloud_alpha_zones() {
        // Threshold 0.4, no cluster gap.
        assert_eq!(cloud_alpha(0.25, 0.5, 0.4, 0.5), 0, "below the edge band");
        let edge = cloud_alpha(0.35, 0.5, 0.4, 0.5);
        assert!((60..=120).contains(&edge), "edge alpha {edge}");
        let core = cloud_alpha(1.0, 0.5, 0.4, 0.5);
        // n = 1 -> 225 + 12 = 237, times 1.0
        assert_eq!(core, 237);
    }

    #[test]
    fn test_cluster_gap_raises_threshold() {
        // Just above the plain threshold, but a low cluster value opens a gap.
        let open = cloud_alpha(0.45, 0.5, 0.4, 0.2);
        let gap = cloud_alpha(0.31, 0.0, 0.4, 0.2);
        assert!(open > 0);
        assert_eq!(gap, 0, "threshold 0.4 + 0.3 * 0.22 pushes the edge past 0.31");
    }

    #[test]
    fn test_s_curve_fixed_points() {
        assert_eq!(s_curve(0.2), 0.2);
        assert_eq!(s_curve(0.9), 0.9);
        assert!((s_curve(0.55) - (0.35 + 0.4 * 0.5f32.powf(1.5))).abs() < 1e-6);
        assert!(s_curve(0.55) < 0.55);
    }

    #[test]
    fn test_apply_keeps_planet_size() {
        let clouds = layer(0.5, 0.0);
        let planet = RasterImage::disc(96, Color::rgb(10, 80, 20));
        assert_eq!(clouds.apply(planet).size(), 96);
    }
}
