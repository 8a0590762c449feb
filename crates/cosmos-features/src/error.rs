//! Feature layer error types.

use cosmos_lighting::LightingError;
use cosmos_noise::FieldError;

/// Errors from ring, atmosphere and cloud generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeatureError {
    /// Ring complexity must be 1, 2 or 3.
    #[error("ring complexity {0} is not in 1..=3")]
    InvalidComplexity(u8),

    #[error(transparent)]
    Field(#[from] FieldError),

    #[error(transparent)]
    Lighting(#[from] LightingError),
}
