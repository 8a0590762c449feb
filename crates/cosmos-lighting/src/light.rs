//! The single distant light that shades a body and its feature layers.

use cosmos_noise::seed::{det_cos, det_sin};

/// Ambient floor applied to every lit pixel, including the night side.
pub const DEFAULT_AMBIENT: f64 = 0.1;

/// A light at infinity in image space.
///
/// `angle_deg` is measured counter-clockwise from the right: 0° lights the
/// body from the right, 90° from the top of the image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightSource {
    pub angle_deg: f64,
    /// Scales the diffuse term.
    pub intensity: f64,
    /// Exponent on the diffuse term; higher values sharpen the terminator.
    pub falloff: f64,
    pub ambient: f64,
}

impl Default for LightSource {
    fn default() -> Self {
        Self {
            angle_deg: 45.0,
            intensity: 1.0,
            falloff: 0.6,
            ambient: DEFAULT_AMBIENT,
        }
    }
}

impl LightSource {
    pub fn new(angle_deg: f64, intensity: f64, falloff: f64) -> Self {
        Self {
            angle_deg,
            intensity,
            falloff,
            ambient: DEFAULT_AMBIENT,
        }
    }

    /// In-plane direction towards the light, `(cos a, -sin a)`.
    ///
    /// Image rows grow downwards, hence the negated y.
    pub fn planar_direction(&self) -> glam::DVec2 {
        let a = self.angle_deg.to_radians();
        glam::DVec2::new(det_cos(a), -det_sin(a))
    }

    /// Unit vector towards the light, tilted out of the image plane
    /// towards the viewer: `normalize(cos a, -sin a, 1)`.
    pub fn direction(&self) -> glam::DVec3 {
        self.planar_direction().extend(1.0).normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_is_normalized() {
        for angle in [0.0, 45.0, 90.0, 180.0, 271.5] {
            let len = LightSource::new(angle, 1.0, 0.6).direction().length();
            assert!(
                (len - 1.0).abs() < 1e-12,
                "direction must be unit length, got {len}"
            );
        }
    }

    #[test]
    fn test_zero_degrees_lights_from_the_right() {
        let dir = LightSource::new(0.0, 1.0, 0.6).direction();
        assert!(dir.x > 0.7 && dir.y.abs() < 1e-12);
    }

    #[test]
    fn test_ninety_degrees_lights_from_the_top() {
        let planar = LightSource::new(90.0, 1.0, 0.6).planar_direction();
        assert!(planar.x.abs() < 1e-12);
        assert!(
            (planar.y + 1.0).abs() < 1e-12,
            "top of the image is negative y, got {}",
            planar.y
        );
    }
}
