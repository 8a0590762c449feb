//! Multi-algorithm 2D noise over normalized coordinates.
//!
//! The engine wraps a seeded [`noise::Simplex`] generator and builds the
//! fractal, ridged, cellular and domain-warped variants on top of it. Every
//! function is pure in `(x, y, params)`; the only state is the seed fixed at
//! construction.

use noise::{NoiseFn, Simplex};

use crate::worley::{Distance, WorleyGrid};

/// Octave parameters shared by the fractal and ridged variants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FractalParams {
    /// Number of octaves to accumulate. Must be at least 1.
    pub octaves: u32,
    /// Amplitude multiplier between successive octaves.
    pub persistence: f64,
    /// Frequency multiplier between successive octaves.
    pub lacunarity: f64,
    /// Frequency of the first octave, in features per unit of normalized space.
    pub scale: f64,
}

impl FractalParams {
    /// Shorthand constructor in the `(octaves, persistence, lacunarity, scale)`
    /// order used by the texture recipes.
    pub const fn new(octaves: u32, persistence: f64, lacunarity: f64, scale: f64) -> Self {
        Self {
            octaves,
            persistence,
            lacunarity,
            scale,
        }
    }
}

impl Default for FractalParams {
    fn default() -> Self {
        Self::new(6, 0.5, 2.0, 1.0)
    }
}

/// Seeded noise engine.
///
/// Octave counts and scales are validated by callers; the engine does not
/// clamp them.
#[derive(Clone, Debug)]
pub struct NoiseEngine {
    simplex: Simplex,
    seed: u32,
}

impl NoiseEngine {
    /// Create an engine for the given seed.
    pub fn new(seed: u32) -> Self {
        Self {
            simplex: Simplex::new(seed),
            seed,
        }
    }

    /// The seed this engine was built with.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Gradient noise at frequency `scale`, in `[-1, 1]`.
    #[inline]
    pub fn simplex(&self, x: f64, y: f64, scale: f64) -> f64 {
        self.simplex.get([x * scale, y * scale]).clamp(-1.0, 1.0)
    }

    /// Fractal sum of simplex octaves, divided by the sum of amplitudes.
    ///
    /// Stays in `[-1, 1]` because every octave does.
    pub fn fractal(&self, x: f64, y: f64, params: &FractalParams) -> f64 {
        debug_assert!(params.octaves > 0, "fractal noise needs at least one octave");

        let mut total = 0.0;
        let mut frequency = params.scale;
        let mut amplitude = 1.0;
        let mut amplitude_sum = 0.0;

        for _ in 0..params.octaves {
            total += self.simplex(x, y, frequency) * amplitude;
            amplitude_sum += amplitude;
            frequency *= params.lacunarity;
            amplitude *= params.persistence;
        }

        total / amplitude_sum
    }

    /// Ridged multifractal: each octave contributes `(1 - |n|)²`.
    ///
    /// Returns a value in `[0, 1]` with sharp crests where the base noise
    /// crosses zero.
    pub fn ridged(&self, x: f64, y: f64, params: &FractalParams) -> f64 {
        debug_assert!(params.octaves > 0, "ridged noise needs at least one octave");

        let mut total = 0.0;
        let mut frequency = params.scale;
        let mut amplitude = 1.0;
        let mut amplitude_sum = 0.0;

        for _ in 0..params.octaves {
            let ridge = 1.0 - self.simplex(x, y, frequency).abs();
            total += ridge * ridge * amplitude;
            amplitude_sum += amplitude;
            frequency *= params.lacunarity;
            amplitude *= params.persistence;
        }

        (total / amplitude_sum).clamp(0.0, 1.0)
    }

    /// Build the Worley feature-point grid for `cells × cells` cells.
    ///
    /// The grid depends only on the engine seed and `cells`; sampling it
    /// repeatedly never re-randomizes the points.
    pub fn worley_grid(&self, cells: u32) -> WorleyGrid {
        WorleyGrid::new(self.seed, cells)
    }

    /// One-off cellular sample with `max(1, floor(10 * scale))` cells.
    ///
    /// Builds a fresh grid on every call; field generation should build the
    /// grid once with [`NoiseEngine::worley_grid`] instead.
    pub fn cellular(&self, x: f64, y: f64, scale: f64) -> f64 {
        let cells = ((10.0 * scale) as u32).max(1);
        self.worley_grid(cells).sample(x, y, Distance::Euclidean)
    }

    /// Offset `(x, y)` by simplex noise at `warp_scale`, scaled by `strength`.
    ///
    /// The y offset samples with swapped axes so the two offsets are
    /// decorrelated.
    #[inline]
    pub fn warp(&self, x: f64, y: f64, warp_scale: f64, strength: f64) -> (f64, f64) {
        (
            x + self.simplex(x, y, warp_scale) * strength,
            y + self.simplex(y, x, warp_scale) * strength,
        )
    }

    /// Evaluate `base` at the coordinates produced by `warp`.
    #[inline]
    pub fn domain_warp<W, B>(&self, x: f64, y: f64, warp: W, base: B) -> f64
    where
        W: Fn(f64, f64) -> (f64, f64),
        B: Fn(f64, f64) -> f64,
    {
        let (wx, wy) = warp(x, y);
        base(wx, wy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn grid_points() -> impl Iterator<Item = (f64, f64)> {
        (0..40).flat_map(|i| (0..40).map(move |j| (i as f64 / 40.0, j as f64 / 40.0)))
    }

    #[test]
    fn test_determinism_same_seed_same_coord() {
        let a = NoiseEngine::new(42);
        let b = NoiseEngine::new(42);
        let params = FractalParams::new(6, 0.5, 2.0, 4.0);

        for (x, y) in grid_points() {
            let va = a.fractal(x, y, &params);
            let vb = b.fractal(x, y, &params);
            assert!(
                (va - vb).abs() < EPSILON,
                "Same seed + same coord must match: {va} vs {vb}"
            );
        }
    }

    #[test]
    fn test_different_seeds_produce_different_values() {
        let a = NoiseEngine::new(1);
        let b = NoiseEngine::new(999);
        let params = FractalParams::new(4, 0.5, 2.0, 3.0);

        let differs = grid_points().any(|(x, y)| {
            (a.fractal(x, y, &params) - b.fractal(x, y, &params)).abs() > EPSILON
        });
        assert!(differs, "Different seeds should produce different noise");
    }

    #[test]
    fn test_simplex_in_range() {
        let engine = NoiseEngine::new(7);
        for (x, y) in grid_points() {
            let v = engine.simplex(x, y, 8.0);
            assert!((-1.0..=1.0).contains(&v), "simplex {v} out of range");
        }
    }

    #[test]
    fn test_fractal_in_range() {
        let engine = NoiseEngine::new(12345);
        let params = FractalParams::new(8, 0.7, 2.0, 5.0);
        for (x, y) in grid_points() {
            let v = engine.fractal(x, y, &params);
            assert!((-1.0..=1.0).contains(&v), "fractal {v} out of range");
        }
    }

    #[test]
    fn test_ridged_in_range() {
        let engine = NoiseEngine::new(12345);
        let params = FractalParams::new(6, 0.65, 2.0, 4.0);
        for (x, y) in grid_points() {
            let v = engine.ridged(x, y, &params);
            assert!((0.0..=1.0).contains(&v), "ridged {v} out of range");
        }
    }

    #[test]
    fn test_single_octave_fractal_equals_simplex() {
        let engine = NoiseEngine::new(3);
        let params = FractalParams::new(1, 0.5, 2.0, 2.5);
        let f = engine.fractal(0.3, 0.7, &params);
        let s = engine.simplex(0.3, 0.7, 2.5);
        assert!((f - s).abs() < EPSILON);
    }

    #[test]
    fn test_warp_zero_strength_is_identity() {
        let engine = NoiseEngine::new(5);
        let (wx, wy) = engine.warp(0.25, 0.75, 0.3, 0.0);
        assert_eq!((wx, wy), (0.25, 0.75));
    }

    #[test]
    fn test_domain_warp_moves_sample_point() {
        let engine = NoiseEngine::new(5);
        let base = |x: f64, y: f64| x + y;
        let plain = engine.domain_warp(0.4, 0.6, |x, y| (x, y), base);
        let warped = engine.domain_warp(0.4, 0.6, |x, y| engine.warp(x, y, 3.0, 0.5), base);
        assert!((plain - 1.0).abs() < EPSILON);
        assert!((plain - warped).abs() > EPSILON, "warp should shift the sample");
    }

    #[test]
    fn test_cellular_in_range() {
        let engine = NoiseEngine::new(11);
        for (x, y) in grid_points().take(100) {
            let v = engine.cellular(x, y, 0.5);
            assert!((0.0..=1.0).contains(&v), "cellular {v} out of range");
        }
    }
}
