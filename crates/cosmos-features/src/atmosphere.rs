//! Atmospheric glow around the planet limb.

use cosmos_lighting::LightSource;
use cosmos_noise::seed::det_exp;
use cosmos_raster::{Color, RasterImage, Rgba};

/// Glow thickness per unit of intensity, as a fraction of the output size.
const PADDING_FRACTION: f64 = 0.05;

/// Exponential opacity falloff across the glow.
const FALLOFF: f64 = 3.0;

/// Glow layer settings for one body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Atmosphere {
    /// In `[0, 1]`.
    pub intensity: f64,
    pub color: Color,
    pub light: LightSource,
}

impl Atmosphere {
    pub fn new(intensity: f64, color: Color, light: LightSource) -> Self {
        Self {
            intensity,
            color,
            light,
        }
    }

    /// Glow thickness in pixels for an output of `size`.
    pub fn padding(&self, size: u32) -> u32 {
        (f64::from(size) * PADDING_FRACTION * self.intensity) as u32
    }

    /// Size at which the planet must be rendered so that planet plus glow
    /// fills exactly `size` pixels.
    pub fn planet_size(&self, size: u32) -> u32 {
        size.saturating_sub(2 * self.padding(size)).max(1)
    }

    /// Peak glow alpha, scaled by intensity.
    fn base_alpha(&self) -> f64 {
        (f64::from(self.color.alpha()) * (0.5 + 1.5 * self.intensity)).min(255.0)
    }

    /// Surround `planet` with the glow on a `size × size` canvas.
    ///
    /// The glow is built from concentric rings whose alpha decays
    /// exponentially with distance from the limb and is dimmed (never below
    /// half) away from the light. It is blurred, then the planet is pasted
    /// back on top at the center.
    pub fn apply(&self, planet: &RasterImage, size: u32) -> RasterImage {
        let padding = self.padding(size);
        if padding == 0 {
            return planet.clone().centered_on_canvas(size);
        }
        let rings = padding.max(4);
        let center = f64::from(size / 2);
        let planet_radius = f64::from(planet.size() / 2);
        let outer = planet_radius + f64::from(padding);
        let base_alpha = self.base_alpha();
        let light = self.light.planar_direction();
        let (r, g, b) = (self.color.r, self.color.g, self.color.b);

        let glow = RasterImage::new(size).map_pixels(|x, y, _| {
            let offset = glam::DVec2::new(f64::from(x) - center, f64::from(y) - center);
            let distance = offset.length();
            if distance > outer {
                return Rgba([0, 0, 0, 0]);
            }
            let t = if distance <= planet_radius {
                0.0
            } else {
                let ring = ((distance - planet_radius) / f64::from(padding) * f64::from(rings))
                    .floor()
                    .min(f64::from(rings - 1));
                ring / f64::from(rings)
            };
            let facing = if distance > 0.0 {
                0.75 + 0.25 * (offset / distance).dot(light)
            } else {
                1.0
            };
            let alpha = base_alpha * det_exp(-FALLOFF * t) * facing;
            Rgba([r, g, b, alpha.clamp(0.0, 255.0) as u8])
        });

        let sigma = (f64::from(padding) / 3.0).max(1.0) as f32;
        glow.blur(sigma).composite_centered(planet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GLOW: Color = Color::rgba(150, 200, 255, 70);

    fn atmosphere(intensity: f64) -> Atmosphere {
        Atmosphere::new(intensity, GLOW, LightSource::new(0.0, 1.0, 0.6))
    }

    #[test]
    fn test_padding_and_planet_size() {
        let atmo = atmosphere(0.5);
        assert_eq!(atmo.padding(512), 12);
        assert_eq!(atmo.planet_size(512), 488);
        assert_eq!(atmosphere(1.0).padding(512), 25);
        assert_eq!(atmosphere(0.0).padding(512), 0);
    }

    #[test]
    fn test_output_is_requested_size_with_planet_on_top() {
        let atmo = atmosphere(1.0);
        let planet = RasterImage::disc(atmo.planet_size(256), Color::rgb(200, 10, 10));
        let out = atmo.apply(&planet, 256);
        assert_eq!(out.size(), 256);
        assert_eq!(out.pixel(128, 128), Rgba([200, 10, 10, 255]));
    }

    #[test]
    fn test_glow_surrounds_limb_and_fades_out() {
        let atmo = atmosphere(1.0);
        let size = 256;
        let planet = RasterImage::disc(atmo.planet_size(size), Color::rgb(200, 10, 10));
        let out = atmo.apply(&planet, size);
        // Planet radius 116, glow 12 px thick.
        let near = out.pixel(128, 128 - 117)[3];
        let far = out.pixel(128, 128 - 126)[3];
        assert!(near > 0, "glow just outside the limb");
        assert!(near > far, "glow fades with distance");
        assert_eq!(out.pixel(0, 0)[3], 0, "corners stay clear");
    }

    #[test]
    fn test_lit_side_glows_brighter() {
        let atmo = atmosphere(1.0);
        let size = 256;
        let planet = RasterImage::disc(atmo.planet_size(size), Color::WHITE);
        let out = atmo.apply(&planet, size);
        let lit = out.pixel(128 + 118, 128)[3];
        let dark = out.pixel(128 - 118, 128)[3];
        assert!(lit > dark, "light from the right: {lit} vs {dark}");
    }

    #[test]
    fn test_zero_intensity_only_recenters() {
        let atmo = atmosphere(0.0);
        let planet = RasterImage::disc(64, Color::WHITE);
        assert_eq!(atmo.apply(&planet, 64), planet);
    }
}
