//! Cellular (Worley) noise over a jittered feature-point grid.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Distance metric used to find the nearest feature point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Distance {
    #[default]
    Euclidean,
    Manhattan,
    Chebyshev,
}

impl Distance {
    #[inline]
    fn measure(self, dx: f64, dy: f64) -> f64 {
        match self {
            Distance::Euclidean => (dx * dx + dy * dy).sqrt(),
            Distance::Manhattan => dx.abs() + dy.abs(),
            Distance::Chebyshev => dx.abs().max(dy.abs()),
        }
    }
}

/// One feature point per cell of a `cells × cells` grid covering `[0, 1)²`.
///
/// The grid tiles: samples outside the unit square (common after domain
/// warping) see the same points shifted by whole tiles.
#[derive(Clone, Debug)]
pub struct WorleyGrid {
    cells: u32,
    /// Feature points in normalized coordinates, row-major by cell.
    points: Vec<(f64, f64)>,
}

impl WorleyGrid {
    /// Scatter the feature points for `(seed, cells)`.
    ///
    /// `cells` must be at least 1.
    pub fn new(seed: u32, cells: u32) -> Self {
        debug_assert!(cells > 0, "worley grid needs at least one cell");

        let mut rng = ChaCha8Rng::seed_from_u64((u64::from(seed) << 32) | u64::from(cells));
        let inv = 1.0 / f64::from(cells);
        let mut points = Vec::with_capacity((cells * cells) as usize);
        for cy in 0..cells {
            for cx in 0..cells {
                let jx: f64 = rng.random();
                let jy: f64 = rng.random();
                points.push(((f64::from(cx) + jx) * inv, (f64::from(cy) + jy) * inv));
            }
        }

        Self { cells, points }
    }

    /// Grid resolution along one axis.
    pub fn cells(&self) -> u32 {
        self.cells
    }

    /// Distance to the nearest feature point, scaled by the cell count and
    /// clamped to `[0, 1]`. Smaller means closer to a feature point.
    pub fn sample(&self, x: f64, y: f64, distance: Distance) -> f64 {
        let cells = i64::from(self.cells);
        let inv = 1.0 / self.cells as f64;
        let cx = (x * self.cells as f64).floor() as i64;
        let cy = (y * self.cells as f64).floor() as i64;

        let mut nearest = f64::MAX;
        for ny in (cy - 1)..=(cy + 1) {
            let wy = ny.rem_euclid(cells);
            let shift_y = (ny - wy) as f64 * inv;
            for nx in (cx - 1)..=(cx + 1) {
                let wx = nx.rem_euclid(cells);
                let shift_x = (nx - wx) as f64 * inv;
                let (px, py) = self.points[(wy * cells + wx) as usize];
                let d = distance.measure(px + shift_x - x, py + shift_y - y);
                nearest = nearest.min(d);
            }
        }

        (nearest * self.cells as f64).min(1.0)
    }
}
