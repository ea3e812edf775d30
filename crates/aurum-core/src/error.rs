use thiserror::Error;

/// Validation and contract errors exposed by `aurum-core`.
///
/// Absence or non-positivity of a quote field is a hard failure, never
/// a zero substitution.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be strictly positive, got {value}")]
    NonPositiveValue { field: &'static str, value: f64 },

    #[error("invalid trade date '{value}', expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("invalid source '{value}', expected one of yahoo, fixture, manual")]
    InvalidSource { value: String },
}

/// Errors from the premium computation itself.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ComputeError {
    /// The fair-value denominator evaluated to zero or non-finite.
    /// Callers must treat this as a data-source fault and abort the
    /// run instead of substituting a value.
    #[error("fair value is degenerate ({fair_value}); refusing to compute a premium")]
    DegenerateFairValue { fair_value: f64 },
}
