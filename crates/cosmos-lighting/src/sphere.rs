//! Whole-body shading: each disc pixel is lit as a point on a unit sphere.

use cosmos_noise::seed::det_pow;
use cosmos_raster::{Disc, RasterImage, Rgba};

use crate::light::LightSource;

/// A light bound to the disc of a `size × size` raster.
#[derive(Clone, Copy, Debug)]
pub struct SphereLight {
    light: LightSource,
    direction: glam::DVec3,
    disc: Disc,
}

impl SphereLight {
    pub fn new(light: LightSource, size: u32) -> Self {
        Self {
            light,
            direction: light.direction(),
            disc: Disc::of(size),
        }
    }

    pub fn light(&self) -> &LightSource {
        &self.light
    }

    /// Cosine between the sphere normal at `(x, y)` and the light, in
    /// `[-1, 1]`. Negative on the night side. `None` outside the disc.
    pub fn illumination(&self, x: u32, y: u32) -> Option<f64> {
        let offset = self.disc.offset(x, y);
        if offset.distance > 1.0 {
            return None;
        }
        let normal = glam::DVec3::from_array(offset.normal());
        Some(normal.dot(self.direction))
    }

    /// Brightness multiplier for a given illumination.
    pub fn factor(&self, illumination: f64) -> f64 {
        let LightSource {
            intensity,
            falloff,
            ambient,
            ..
        } = self.light;
        if illumination < 0.0 {
            ambient
        } else {
            ambient + (1.0 - ambient) * intensity * det_pow(illumination, falloff)
        }
    }

    /// Shade one pixel. Transparent pixels and pixels off the disc are
    /// returned unchanged.
    #[inline]
    pub fn shade(&self, x: u32, y: u32, px: Rgba<u8>) -> Rgba<u8> {
        if px[3] == 0 {
            return px;
        }
        match self.illumination(x, y) {
            Some(dot) => {
                let factor = self.factor(dot);
                let scale = |c: u8| (f64::from(c) * factor).min(255.0) as u8;
                Rgba([scale(px[0]), scale(px[1]), scale(px[2]), px[3]])
            }
            None => px,
        }
    }
}

/// Light the sphere disc of `image` from `light`. Alpha is never changed.
pub fn apply_sphere_lighting(image: RasterImage, light: &LightSource) -> RasterImage {
    let sphere = SphereLight::new(*light, image.size());
    image.map_pixels(|x, y, px| sphere.shade(x, y, px))
}
