//! Scalar-field error types.

/// Contract violations when building or combining scalar fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// `combine` was called with no fields.
    #[error("cannot combine an empty list of fields")]
    Empty,

    /// The weight list does not match the field list.
    #[error("{weights} weights supplied for {fields} fields")]
    WeightCount { fields: usize, weights: usize },

    /// A field's dimensions differ from the first field's.
    #[error("field is {found:?}, expected {expected:?}")]
    ShapeMismatch {
        expected: (u32, u32),
        found: (u32, u32),
    },

    /// Raw values do not fill the requested grid.
    #[error("expected {expected} values, found {found}")]
    ValueCount { expected: usize, found: usize },
}
