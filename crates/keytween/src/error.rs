//! Error types for curve construction.

use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Errors that can occur while building a curve.
///
/// Construction validates exactly one condition: the keyframe collection
/// must be non-empty. Degenerate numeric input (duplicate x-values,
/// non-finite coordinates) is deliberately not validated; it propagates as
/// floating-point results that may poison the affected region of the curve.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    /// No keyframes were supplied to the curve builder.
    #[error("at least one keyframe is required")]
    EmptyKeyframes,
}
