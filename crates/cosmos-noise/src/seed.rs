//! Deterministic seeded generation utilities.
//!
//! Every component of a body render owns its own child RNG stream derived
//! from the single body seed, plus deterministic math functions via `libm`
//! so shading results do not depend on the platform libc.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// ---------------------------------------------------------------------------
// Seed streams
// ---------------------------------------------------------------------------

/// A per-purpose child stream of the body seed.
///
/// Each stream has a fixed offset that is added to the body seed, so two
/// components never draw from the same sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stream {
    /// Noise fields that make up the base texture.
    Terrain,
    /// Palette color draws.
    Palette,
    /// Ring catalogue selection and jitter.
    Rings,
    /// Cloud coverage fields.
    Clouds,
    /// Atmosphere glow.
    Atmosphere,
    /// Variation-specific choices (palette id, feature densities).
    Variation,
    /// Cloud wind displacement.
    Wind,
    /// Secondary texture details such as islands and shimmer.
    Details,
}

impl Stream {
    /// Offset added to the body seed for this stream.
    pub const fn offset(self) -> u64 {
        match self {
            Stream::Terrain => 0,
            Stream::Palette => 1,
            Stream::Rings => 2,
            Stream::Clouds => 3,
            Stream::Atmosphere => 4,
            Stream::Variation => 5,
            Stream::Wind => 6,
            Stream::Details => 7,
        }
    }
}

/// Derive the seed of a child stream from the body seed.
///
/// The body seed is a `u32`, so widening to `u64` before adding the offset
/// never wraps and every stream of every body seed is distinct.
pub fn derive_seed(body_seed: u32, stream: Stream) -> u64 {
    u64::from(body_seed) + stream.offset()
}

/// Noise-crate seed for a stream. The `noise` generators take a `u32`.
pub fn noise_seed(body_seed: u32, stream: Stream) -> u32 {
    body_seed.wrapping_add(stream.offset() as u32)
}

/// Deterministic RNG for a child stream.
///
/// The returned RNG produces an identical sequence for the same
/// `(body_seed, stream)` pair, regardless of thread or platform.
pub fn stream_rng(body_seed: u32, stream: Stream) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(derive_seed(body_seed, stream))
}

// ---------------------------------------------------------------------------
// Deterministic math (libm)
// ---------------------------------------------------------------------------

/// Deterministic sine using libm (not platform libc).
#[inline]
pub fn det_sin(x: f64) -> f64 {
    libm::sin(x)
}

/// Deterministic cosine using libm.
#[inline]
pub fn det_cos(x: f64) -> f64 {
    libm::cos(x)
}

/// Deterministic sqrt using libm.
#[inline]
pub fn det_sqrt(x: f64) -> f64 {
    libm::sqrt(x)
}

/// Deterministic power function using libm.
#[inline]
pub fn det_pow(base: f64, exp: f64) -> f64 {
    libm::pow(base, exp)
}

/// Deterministic exponential using libm.
#[inline]
pub fn det_exp(x: f64) -> f64 {
    libm::exp(x)
}

/// Deterministic arcsine using libm.
#[inline]
pub fn det_asin(x: f64) -> f64 {
    libm::asin(x)
}
