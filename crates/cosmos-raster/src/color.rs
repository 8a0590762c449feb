//! 8-bit colors with an optional alpha channel, and the color algebra the
//! palette and feature layers share.

use image::Rgba;

/// An RGB color, optionally carrying alpha.
///
/// Palette entries for surfaces are plain RGB; atmosphere and ring entries
/// carry alpha. A missing alpha means fully opaque when written to a raster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: Option<u8>,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: None }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r,
            g,
            b,
            a: Some(a),
        }
    }

    /// Effective alpha: the stored one, or 255.
    #[inline]
    pub fn alpha(self) -> u8 {
        self.a.unwrap_or(255)
    }

    pub fn with_alpha(self, a: u8) -> Self {
        Self { a: Some(a), ..self }
    }

    /// Linear interpolation per channel; `ratio = 0` is `self`, `1` is `other`.
    ///
    /// Alpha is interpolated when either side has one, treating the missing
    /// side as 255. Channels truncate toward zero.
    pub fn blend(self, other: Color, ratio: f32) -> Color {
        let mix = |a: u8, b: u8| (f32::from(a) * (1.0 - ratio) + f32::from(b) * ratio) as u8;
        let a = match (self.a, other.a) {
            (None, None) => None,
            _ => Some(mix(self.alpha(), other.alpha())),
        };
        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a,
        }
    }

    /// Multiply RGB by `factor`, clamped to `[0, 255]`. Alpha is kept.
    pub fn adjust_brightness(self, factor: f32) -> Color {
        let scale = |c: u8| (f32::from(c) * factor).min(255.0) as u8;
        Color {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
            a: self.a,
        }
    }

    /// The raster pixel for this color.
    #[inline]
    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, self.alpha()])
    }
}

impl From<Color> for Rgba<u8> {
    fn from(color: Color) -> Self {
        color.to_rgba()
    }
}

impl From<Rgba<u8>> for Color {
    fn from(px: Rgba<u8>) -> Self {
        Color::rgba(px[0], px[1], px[2], px[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        let a = Color::rgb(10, 20, 30);
        let b = Color::rgb(200, 100, 0);
        assert_eq!(a.blend(b, 0.0), a);
        assert_eq!(a.blend(b, 1.0), b);
    }

    #[test]
    fn test_blend_truncates() {
        let mid = Color::rgb(0, 0, 0).blend(Color::rgb(255, 101, 3), 0.5);
        assert_eq!(mid, Color::rgb(127, 50, 1));
    }

    #[test]
    fn test_blend_rgb_with_rgba_treats_missing_alpha_as_opaque() {
        let rgb = Color::rgb(100, 100, 100);
        let rgba = Color::rgba(100, 100, 100, 55);
        assert_eq!(rgb.blend(rgba, 0.5).a, Some(155));
        assert_eq!(rgba.blend(rgb, 0.5).a, Some(155));
        assert_eq!(rgb.blend(rgb, 0.5).a, None);
    }

    #[test]
    fn test_adjust_brightness_clamps_and_keeps_alpha() {
        let c = Color::rgba(200, 100, 10, 77);
        assert_eq!(c.adjust_brightness(2.0), Color::rgba(255, 200, 20, 77));
        assert_eq!(c.adjust_brightness(0.5), Color::rgba(100, 50, 5, 77));
        assert_eq!(c.adjust_brightness(-1.0), Color::rgba(0, 0, 0, 77));
    }

    #[test]
    fn test_to_rgba_defaults_alpha() {
        assert_eq!(Color::rgb(1, 2, 3).to_rgba(), Rgba([1, 2, 3, 255]));
        assert_eq!(Color::rgba(1, 2, 3, 4).to_rgba(), Rgba([1, 2, 3, 4]));
    }
}
