//! Relief lighting from a height field.
//!
//! A [`NormalMap`] is derived from a [`ScalarField`] by forward differences
//! and then lit with a Phong-style ambient + diffuse + specular model.

use cosmos_noise::ScalarField;
use cosmos_noise::seed::det_pow;
use cosmos_raster::{RasterImage, Rgba};

use crate::error::LightingError;

/// View direction for specular highlights: straight out of the image.
const VIEW: glam::DVec3 = glam::DVec3::Z;

/// Per-pixel unit surface normals.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalMap {
    width: u32,
    height: u32,
    normals: Vec<glam::DVec3>,
}

impl NormalMap {
    /// Normals `normalize(-gx, -gy, 1)` from forward differences of
    /// `heights`, scaled by `strength`. The last column has no x gradient
    /// and the last row no y gradient.
    pub fn from_height(heights: &ScalarField, strength: f64) -> Self {
        let (width, height) = heights.dimensions();
        let mut normals = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                let here = f64::from(heights.get(x, y));
                let gx = if x + 1 < width {
                    f64::from(heights.get(x + 1, y)) - here
                } else {
                    0.0
                };
                let gy = if y + 1 < height {
                    f64::from(heights.get(x, y + 1)) - here
                } else {
                    0.0
                };
                normals.push(glam::DVec3::new(-gx * strength, -gy * strength, 1.0).normalize());
            }
        }
        Self {
            width,
            height,
            normals,
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> glam::DVec3 {
        self.normals[(y * self.width + x) as usize]
    }
}

/// Coefficients of the relief lighting model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalParams {
    pub ambient: f64,
    pub diffuse: f64,
    /// Zero disables the specular term.
    pub specular: f64,
    pub shininess: f64,
}

impl Default for DirectionalParams {
    fn default() -> Self {
        Self {
            ambient: 0.2,
            diffuse: 0.8,
            specular: 0.0,
            shininess: 10.0,
        }
    }
}

/// Shade every pixel of `image` with `normals` against `light_dir`.
///
/// `rgb = c * (ambient + diffuse * n·l) + 255 * specular * (r·v)^shininess`
/// with `r = 2(n·l)n - l`, both dot products clamped to `[0, 1]`. Alpha is
/// kept.
pub fn apply_directional_light(
    image: RasterImage,
    normals: &NormalMap,
    light_dir: glam::DVec3,
    params: &DirectionalParams,
) -> Result<RasterImage, LightingError> {
    let size = image.size();
    if normals.dimensions() != (size, size) {
        return Err(LightingError::SizeMismatch {
            image: size,
            normals: normals.dimensions(),
        });
    }
    let light = light_dir.normalize();
    Ok(image.map_pixels(|x, y, px| {
        let n = normals.get(x, y);
        let ndotl = n.dot(light).clamp(0.0, 1.0);
        let highlight = if params.specular > 0.0 {
            let reflection = 2.0 * ndotl * n - light;
            255.0 * params.specular * det_pow(reflection.dot(VIEW).clamp(0.0, 1.0), params.shininess)
        } else {
            0.0
        };
        let factor = params.ambient + params.diffuse * ndotl;
        let shade = |c: u8| (f64::from(c) * factor + highlight).clamp(0.0, 255.0) as u8;
        Rgba([shade(px[0]), shade(px[1]), shade(px[2]), px[3]])
    }))
}

#[cfg(test)]
mod tests {
    use cosmos_raster::Color;

    use super::*;

    #[test]
    fn test_flat_height_points_at_viewer() {
        let normals = NormalMap::from_height(&ScalarField::zeros(8, 8), 2.0);
        assert_eq!(normals.get(3, 3), glam::DVec3::Z);
    }

    #[test]
    fn test_x_ramp_tilts_normal_against_slope() {
        let ramp = ScalarField::generate(8, 8, |x, _| x);
        let normals = NormalMap::from_height(&ramp, 4.0);
        let n = normals.get(2, 2);
        assert!(n.x < 0.0, "uphill to the right tilts the normal left");
        assert!(n.y.abs() < 1e-9);
        assert!((n.length() - 1.0).abs() < 1e-9);
        assert_eq!(normals.get(7, 2), glam::DVec3::Z, "last column has no gradient");
    }

    #[test]
    fn test_light_from_viewer_keeps_color() {
        let normals = NormalMap::from_height(&ScalarField::zeros(8, 8), 1.0);
        let image = RasterImage::disc(8, Color::rgb(100, 150, 200));
        let lit =
            apply_directional_light(image, &normals, glam::DVec3::Z, &DirectionalParams::default())
                .unwrap();
        assert_eq!(lit.pixel(4, 4), Rgba([100, 150, 200, 255]));
    }

    #[test]
    fn test_grazing_light_leaves_ambient() {
        let normals = NormalMap::from_height(&ScalarField::zeros(8, 8), 1.0);
        let image = RasterImage::disc(8, Color::WHITE);
        let lit =
            apply_directional_light(image, &normals, glam::DVec3::X, &DirectionalParams::default())
                .unwrap();
        assert_eq!(lit.pixel(4, 4), Rgba([51, 51, 51, 255]));
    }

    #[test]
    fn test_specular_adds_highlight() {
        let normals = NormalMap::from_height(&ScalarField::zeros(8, 8), 1.0);
        let params = DirectionalParams {
            ambient: 0.0,
            diffuse: 0.0,
            specular: 0.5,
            shininess: 10.0,
        };
        let image = RasterImage::disc(8, Color::rgb(0, 0, 0));
        let lit = apply_directional_light(image, &normals, glam::DVec3::Z, &params).unwrap();
        assert_eq!(lit.pixel(4, 4), Rgba([127, 127, 127, 255]));
    }

    #[test]
    fn test_size_mismatch_is_an_error() {
        let normals = NormalMap::from_height(&ScalarField::zeros(4, 4), 1.0);
        let err = apply_directional_light(
            RasterImage::new(8),
            &normals,
            glam::DVec3::Z,
            &DirectionalParams::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            LightingError::SizeMismatch {
                image: 8,
                normals: (4, 4)
            }
        );
    }
}
