//! # Keytween
//!
//! Monotone keyframe curve construction and evaluation for animation
//! timelines.
//!
//! Keytween builds a continuous curve through an unordered set of `(x, y)`
//! keyframes and evaluates it at arbitrary `x`. Tangents are estimated with
//! Steffen's monotonicity-constrained method, so the curve never overshoots
//! between keyframes: wherever the input data is monotone the curve is
//! monotone, and a keyframe that is a local extremum of the data stays the
//! extremum of the curve. Naive cubic splines give neither guarantee.
//!
//! This crate provides:
//!
//! - **Keyframes**: the `(x, y)` control points a curve passes through
//! - **Slope Estimation**: Steffen tangent limiting ([`steffen_slope`])
//! - **Curve Construction**: sorting, tangent assignment, segment assembly
//! - **Evaluation**: clamped lookup via binary search and a Hermite blend
//! - **Sampling**: batch evaluation and even-grid resampling
//!
//! ## Design Philosophy
//!
//! - **No Overshoot**: tangents are limited so a segment cannot introduce
//!   an extremum absent from its endpoints
//! - **Immutable After Build**: [`MonotoneCurve`] is a plain value with no
//!   interior mutability, safe to share across reader threads
//! - **Garbage In, Garbage Out**: only empty input is validated; duplicate
//!   x-values and non-finite coordinates propagate as whatever
//!   floating-point result falls out
//!
//! ## Example
//!
//! ```rust
//! use keytween::MonotoneCurve;
//!
//! let curve = MonotoneCurve::from_pairs(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]).unwrap();
//!
//! // Keyframes are hit exactly.
//! assert_eq!(curve.evaluate(1.0), 1.0);
//! // Queries outside the keyframe range clamp to the boundary values.
//! assert_eq!(curve.evaluate(-5.0), 0.0);
//! assert_eq!(curve.evaluate(99.0), 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::float_cmp)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

mod builder;
mod curve;
pub mod error;
mod keyframe;
mod sampling;
mod segment;
pub mod slope;

pub use curve::MonotoneCurve;
pub use error::{CurveError, CurveResult};
pub use keyframe::Keyframe;
pub use segment::Segment;
pub use slope::steffen_slope;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::{Keyframe, MonotoneCurve, Segment};
}
