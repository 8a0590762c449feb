//! Declarative noise layers.
//!
//! Texture recipes describe their fields as [`NoiseLayer`] trees instead of
//! closures, so a recipe is plain data that can be compared, logged and
//! rendered by any engine. Rendering compiles the tree once (building Worley
//! grids up front) and then samples it per pixel without allocating.

use crate::engine::{FractalParams, NoiseEngine};
use crate::field::ScalarField;
use crate::worley::{Distance, WorleyGrid};

/// A noise function of normalized `(x, y)`.
#[derive(Clone, Debug, PartialEq)]
pub enum NoiseLayer {
    /// Single-octave simplex at `scale`, in `[-1, 1]`.
    Simplex { scale: f64 },
    /// Fractal sum, in `[-1, 1]`.
    Fractal(FractalParams),
    /// Ridged multifractal, in `[0, 1]`.
    Ridged(FractalParams),
    /// Nearest-feature distance, in `[0, 1]`.
    Worley { cells: u32, distance: Distance },
    /// `1 - inner`.
    Inverted(Box<NoiseLayer>),
    /// `inner` sampled at domain-warped coordinates.
    Warped {
        scale: f64,
        strength: f64,
        inner: Box<NoiseLayer>,
    },
    /// `inner` sampled at `(x * sx, y * sy)`; used for banded structures.
    Stretched {
        sx: f64,
        sy: f64,
        inner: Box<NoiseLayer>,
    },
    /// Distance from the equator, `|2y - 1| * gain`. Not noise at all, but
    /// warping it gives ragged climate zones.
    Latitude { gain: f64 },
}

impl NoiseLayer {
    pub fn fractal(octaves: u32, persistence: f64, lacunarity: f64, scale: f64) -> Self {
        NoiseLayer::Fractal(FractalParams::new(octaves, persistence, lacunarity, scale))
    }

    pub fn ridged(octaves: u32, persistence: f64, lacunarity: f64, scale: f64) -> Self {
        NoiseLayer::Ridged(FractalParams::new(octaves, persistence, lacunarity, scale))
    }

    /// Euclidean Worley noise on a `cells × cells` grid.
    pub fn worley(cells: u32) -> Self {
        NoiseLayer::Worley {
            cells,
            distance: Distance::Euclidean,
        }
    }

    pub fn inverted(self) -> Self {
        NoiseLayer::Inverted(Box::new(self))
    }

    /// Wrap this layer in a domain warp.
    pub fn warped(self, scale: f64, strength: f64) -> Self {
        NoiseLayer::Warped {
            scale,
            strength,
            inner: Box::new(self),
        }
    }

    pub fn stretched(self, sx: f64, sy: f64) -> Self {
        NoiseLayer::Stretched {
            sx,
            sy,
            inner: Box::new(self),
        }
    }

    /// Worley noise with `max(1, floor(10 * scale))` cells, matching
    /// [`NoiseEngine::cellular`].
    pub fn cellular(scale: f64) -> Self {
        Self::worley(((10.0 * scale) as u32).max(1))
    }

    /// Render this layer to a `size × size` field with `engine`.
    pub fn render(&self, engine: &NoiseEngine, size: u32) -> ScalarField {
        let sampler = Sampler::compile(self, engine);
        ScalarField::generate(size, size, |x, y| sampler.sample(engine, x, y))
    }
}

/// A compiled layer: Worley grids are materialized once per render.
enum Sampler {
    Simplex(f64),
    Fractal(FractalParams),
    Ridged(FractalParams),
    Worley(WorleyGrid, Distance),
    Inverted(Box<Sampler>),
    Warped {
        scale: f64,
        strength: f64,
        inner: Box<Sampler>,
    },
    Stretched {
        sx: f64,
        sy: f64,
        inner: Box<Sampler>,
    },
    Latitude(f64),
}

impl Sampler {
    fn compile(layer: &NoiseLayer, engine: &NoiseEngine) -> Self {
        match layer {
            NoiseLayer::Simplex { scale } => Sampler::Simplex(*scale),
            NoiseLayer::Fractal(p) => Sampler::Fractal(*p),
            NoiseLayer::Ridged(p) => Sampler::Ridged(*p),
            NoiseLayer::Worley { cells, distance } => {
                Sampler::Worley(engine.worley_grid(*cells), *distance)
            }
            NoiseLayer::Inverted(inner) => Sampler::Inverted(Box::new(Self::compile(inner, engine))),
            NoiseLayer::Warped {
                scale,
                strength,
                inner,
            } => Sampler::Warped {
                scale: *scale,
                strength: *strength,
                inner: Box::new(Self::compile(inner, engine)),
            },
            NoiseLayer::Stretched { sx, sy, inner } => Sampler::Stretched {
                sx: *sx,
                sy: *sy,
                inner: Box::new(Self::compile(inner, engine)),
            },
            NoiseLayer::Latitude { gain } => Sampler::Latitude(*gain),
        }
    }

    fn sample(&self, engine: &NoiseEngine, x: f64, y: f64) -> f64 {
        match self {
            Sampler::Simplex(scale) => engine.simplex(x, y, *scale),
            Sampler::Fractal(p) => engine.fractal(x, y, p),
            Sampler::Ridged(p) => engine.ridged(x, y, p),
            Sampler::Worley(grid, distance) => grid.sample(x, y, *distance),
            Sampler::Inverted(inner) => 1.0 - inner.sample(engine, x, y),
            Sampler::Warped {
                scale,
                strength,
                inner,
            } => engine.domain_warp(
                x,
                y,
                |wx, wy| engine.warp(wx, wy, *scale, *strength),
                |wx, wy| inner.sample(engine, wx, wy),
            ),
            Sampler::Stretched { sx, sy, inner } => inner.sample(engine, x * sx, y * sy),
            Sampler::Latitude(gain) => (y * 2.0 - 1.0).abs() * gain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_matches_direct_sampling() {
        let engine = NoiseEngine::new(21);
        let params = FractalParams::new(4, 0.5, 2.0, 3.0);
        let field = NoiseLayer::Fractal(params).render(&engine, 16);

        let direct = engine.fractal(5.0 / 16.0, 9.0 / 16.0, &params) as f32;
        assert_eq!(field.get(5, 9), direct);
    }

    #[test]
    fn test_inverted_worley_in_range() {
        let engine = NoiseEngine::new(4);
        let field = NoiseLayer::worley(8).inverted().render(&engine, 32);
        let (lo, hi) = field.min_max();
        assert!(lo >= 0.0 && hi <= 1.0, "inverted worley range [{lo}, {hi}]");
        assert!(hi > 0.8, "feature points should sit near 1 after inversion");
    }

    #[test]
    fn test_warped_layer_differs_from_plain() {
        let engine = NoiseEngine::new(9);
        let plain = NoiseLayer::fractal(3, 0.5, 2.0, 4.0);
        let warped = plain.clone().warped(0.3, 0.8);
        assert_ne!(plain.render(&engine, 16), warped.render(&engine, 16));
    }

    #[test]
    fn test_stretched_layer_samples_scaled_coordinates() {
        let engine = NoiseEngine::new(13);
        let field = NoiseLayer::Simplex { scale: 2.0 }
            .stretched(1.0, 5.0)
            .render(&engine, 8);
        let expected = engine.simplex(3.0 / 8.0, 5.0 * 2.0 / 8.0, 2.0) as f32;
        assert_eq!(field.get(3, 2), expected);
    }

    #[test]
    fn test_render_deterministic() {
        let layer = NoiseLayer::ridged(4, 0.6, 2.5, 3.0).warped(0.2, 0.5);
        let a = layer.render(&NoiseEngine::new(77), 24);
        let b = layer.render(&NoiseEngine::new(77), 24);
        assert_eq!(a, b);
    }

    #[test]
    fn test_latitude_peaks_at_poles() {
        let engine = NoiseEngine::new(1);
        let field = NoiseLayer::Latitude { gain: 0.5 }.render(&engine, 8);
        assert_eq!(field.get(3, 0), 0.5, "top row is a pole");
        assert_eq!(field.get(3, 4), 0.0, "row 4 of 8 is the equator");
    }
}
