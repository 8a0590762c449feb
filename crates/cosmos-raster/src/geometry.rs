//! The circular footprint of a sphere sprite inside a square raster.

/// Center and radius of the sphere disc in a `size × size` raster.
///
/// The center sits at integer pixel `(size / 2, size / 2)` and the radius is
/// `size / 2`, so the disc touches all four edges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Disc {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

/// A pixel's position relative to the disc, in units of the radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiscOffset {
    pub dx: f64,
    pub dy: f64,
    /// `sqrt(dx² + dy²)`; at most 1 inside the disc.
    pub distance: f64,
}

impl DiscOffset {
    /// Unit sphere normal `(dx, dy, sqrt(1 - d²))` for a pixel inside the disc.
    #[inline]
    pub fn normal(&self) -> [f64; 3] {
        let z = (1.0 - self.distance * self.distance).max(0.0).sqrt();
        [self.dx, self.dy, z]
    }
}

impl Disc {
    /// The disc filling a `size × size` raster.
    pub fn of(size: u32) -> Self {
        let half = f64::from(size / 2);
        Self {
            cx: half,
            cy: half,
            radius: half,
        }
    }

    /// A disc with an explicit center and radius.
    pub fn new(cx: f64, cy: f64, radius: f64) -> Self {
        Self { cx, cy, radius }
    }

    /// Offset of pixel `(x, y)` from the center, normalized by the radius.
    #[inline]
    pub fn offset(&self, x: u32, y: u32) -> DiscOffset {
        let dx = (f64::from(x) - self.cx) / self.radius;
        let dy = (f64::from(y) - self.cy) / self.radius;
        DiscOffset {
            dx,
            dy,
            distance: (dx * dx + dy * dy).sqrt(),
        }
    }

    /// Whether pixel `(x, y)` lies inside or on the disc boundary.
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        let dx = f64::from(x) - self.cx;
        let dy = f64::from(y) - self.cy;
        dx * dx + dy * dy <= self.radius * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disc_of_even_size() {
        let disc = Disc::of(512);
        assert_eq!((disc.cx, disc.cy, disc.radius), (256.0, 256.0, 256.0));
        assert!(disc.contains(256, 256));
        assert!(disc.contains(0, 256), "left edge touches the disc");
        assert!(!disc.contains(0, 0), "corners are outside");
    }

    #[test]
    fn test_offset_at_center_points_at_viewer() {
        let disc = Disc::of(100);
        let off = disc.offset(50, 50);
        assert_eq!(off.distance, 0.0);
        assert_eq!(off.normal(), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_offset_normal_is_unit_inside_disc() {
        let disc = Disc::of(64);
        let off = disc.offset(40, 20);
        let [x, y, z] = off.normal();
        assert!(off.distance <= 1.0);
        assert!(((x * x + y * y + z * z) - 1.0).abs() < 1e-9);
    }
}
