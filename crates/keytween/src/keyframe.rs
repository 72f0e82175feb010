//! Keyframe control points.

use serde::{Deserialize, Serialize};

/// A fixed `(x, y)` control point the curve passes through exactly.
///
/// `x` is the position on the interpolation axis (typically a timeline
/// stamp), `y` the animated value at that position. Keyframes handed to
/// [`MonotoneCurve::new`](crate::MonotoneCurve::new) need not be sorted.
///
/// Keyframes serialize as `{"x": ..., "y": ...}` objects; the `[x, y]` pair
/// form that animation tools commonly emit converts via `From<[f64; 2]>`.
///
/// # Example
///
/// ```rust
/// use keytween::Keyframe;
///
/// let a = Keyframe::new(0.5, 2.0);
/// let b: Keyframe = (0.5, 2.0).into();
/// let c: Keyframe = [0.5, 2.0].into();
/// assert_eq!(a, b);
/// assert_eq!(a, c);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Position on the interpolation axis.
    pub x: f64,
    /// Value at `x`.
    pub y: f64,
}

impl Keyframe {
    /// Creates a keyframe at `x` with value `y`.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Keyframe {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Keyframe {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}
