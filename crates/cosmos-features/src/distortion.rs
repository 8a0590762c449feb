//! Pixel displacement passes for flat textures laid over a sphere.

use std::f64::consts::FRAC_PI_2;

use cosmos_noise::ScalarField;
use cosmos_noise::seed::{det_asin, det_cos, det_sin};
use cosmos_raster::{Disc, RasterImage, Rgba};

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Radial distortion that makes a flat texture read as wrapped onto the
/// sphere.
///
/// A pixel at normalized distance `d` samples from
/// `d(1 - s) + s * asin(d) / (π/2)`, which squeezes content towards the limb.
/// Nearest-neighbour sampling; pixels off the disc become transparent.
pub fn spherical_distortion(image: RasterImage, strength: f64) -> RasterImage {
    let size = image.size();
    let disc = Disc::of(size);
    let source = image.clone();
    image.map_pixels(|x, y, _| {
        let offset = disc.offset(x, y);
        if offset.distance > 1.0 {
            return TRANSPARENT;
        }
        if offset.distance == 0.0 {
            return source.pixel(x, y);
        }
        let d = offset.distance;
        let src_d = d * (1.0 - strength) + strength * det_asin(d) / FRAC_PI_2;
        let scale = src_d / d * disc.radius;
        sample_nearest(&source, disc.cx + offset.dx * scale, disc.cy + offset.dy * scale)
    })
}

/// Shear `image` along `angle_deg` by `strength * 10 * n` pixels, where `n`
/// is `noise` remapped from `[0, 1]` to `[-1, 1]`.
///
/// Transparent pixels stay transparent. A `strength` of zero returns the
/// image unchanged.
pub fn wind_shear(
    image: RasterImage,
    noise: &ScalarField,
    strength: f64,
    angle_deg: f64,
) -> RasterImage {
    if strength <= 0.0 || noise.dimensions() != (image.size(), image.size()) {
        return image;
    }
    let a = angle_deg.rem_euclid(360.0).to_radians();
    let (wx, wy) = (det_cos(a) * strength * 10.0, det_sin(a) * strength * 10.0);
    let source = image.clone();
    image.map_pixels(|x, y, px| {
        if px[3] == 0 {
            return px;
        }
        let n = f64::from(noise.get(x, y)) * 2.0 - 1.0;
        sample_nearest(&source, f64::from(x) + wx * n, f64::from(y) + wy * n)
    })
}

/// Nearest pixel to `(x, y)`, clamped into the raster.
fn sample_nearest(image: &RasterImage, x: f64, y: f64) -> Rgba<u8> {
    let max = f64::from(image.size().saturating_sub(1));
    image.pixel(x.round().clamp(0.0, max) as u32, y.round().clamp(0.0, max) as u32)
}
