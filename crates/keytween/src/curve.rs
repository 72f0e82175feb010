//! Monotone curve construction and evaluation.

use std::cmp::Ordering;

use crate::builder::build_segments;
use crate::error::{CurveError, CurveResult};
use crate::keyframe::Keyframe;
use crate::segment::Segment;

/// A monotonicity-preserving curve through a fixed set of keyframes.
///
/// The curve passes through every keyframe exactly and never overshoots
/// between them: wherever consecutive keyframes are monotone the curve is
/// monotone, and a keyframe that is a local extremum of the data remains
/// the extremum of the curve. Queries outside the keyframe range clamp to
/// the boundary values.
///
/// A built curve is immutable and holds no interior mutability, so a shared
/// reference can be evaluated from any number of threads concurrently.
///
/// # Example
///
/// ```rust
/// use keytween::MonotoneCurve;
///
/// // Input order does not matter; keyframes are sorted by x on build.
/// let curve = MonotoneCurve::from_pairs(&[(2.0, 1.0), (0.0, 0.0), (1.0, 1.0)]).unwrap();
///
/// assert_eq!(curve.evaluate(1.0), 1.0);
/// // The plateau between x = 1 and x = 2 is not overshot.
/// assert!(curve.evaluate(1.5) <= 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct MonotoneCurve {
    pub(crate) first: Keyframe,
    pub(crate) last: Keyframe,
    pub(crate) segments: Vec<Segment>,
}

impl MonotoneCurve {
    /// Builds a curve through `points`.
    ///
    /// The points are sorted ascending by x (a total order, so NaN
    /// coordinates sort rather than panic) and the segment table is
    /// assembled in a single forward pass. Build runs once; the returned
    /// curve is read-only.
    ///
    /// Duplicate x-values are not rejected: they produce zero-width
    /// segments whose division-by-zero results poison the curve around
    /// that x, per the crate's garbage-in, garbage-out contract.
    ///
    /// # Arguments
    ///
    /// * `points` - The keyframes the curve must pass through, in any order
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::EmptyKeyframes`] if `points` is empty.
    pub fn new(points: Vec<Keyframe>) -> CurveResult<Self> {
        if points.is_empty() {
            return Err(CurveError::EmptyKeyframes);
        }

        let mut keyframes = points;
        keyframes.sort_by(|a, b| a.x.total_cmp(&b.x));

        let segments = build_segments(&keyframes);
        let first = keyframes[0];
        let last = keyframes[keyframes.len() - 1];

        Ok(Self {
            first,
            last,
            segments,
        })
    }

    /// Builds a curve from `(x, y)` pairs.
    ///
    /// Convenience wrapper over [`new`](Self::new) for callers holding
    /// plain tuples.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> CurveResult<Self> {
        Self::new(pairs.iter().copied().map(Keyframe::from).collect())
    }

    /// Evaluates the curve at `x`.
    ///
    /// Queries at or outside the boundary keyframes return the boundary
    /// y-values exactly (flat extrapolation); this also makes `-inf` and
    /// `+inf` queries return the first and last y respectively. Interior
    /// queries binary-search the segment containing `x` and blend within
    /// it.
    ///
    /// A NaN query propagates NaN. If degenerate input (duplicate
    /// x-values, non-finite coordinates) leaves an interior query with no
    /// covering segment, the result is NaN as well.
    pub fn evaluate(&self, x: f64) -> f64 {
        if x <= self.first.x {
            return self.first.y;
        }
        if x >= self.last.x {
            return self.last.y;
        }

        match self.segment_index(x) {
            Some(index) => self.segments[index].evaluate(x),
            None => f64::NAN,
        }
    }

    /// Smallest keyframe x.
    pub fn min_x(&self) -> f64 {
        self.first.x
    }

    /// Largest keyframe x.
    pub fn max_x(&self) -> f64 {
        self.last.x
    }

    /// Checks if `x` is within the keyframe range.
    pub fn in_range(&self, x: f64) -> bool {
        x >= self.first.x && x <= self.last.x
    }

    /// The keyframe with the smallest x.
    pub fn first(&self) -> Keyframe {
        self.first
    }

    /// The keyframe with the largest x.
    pub fn last(&self) -> Keyframe {
        self.last
    }

    /// The segment table, ordered ascending by x.
    ///
    /// One segment per consecutive keyframe pair; a single-keyframe curve
    /// has none.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Finds the index of the segment with `x0 <= x < x1`, if any.
    ///
    /// Segments are contiguous and ordered, so a probe comparing against
    /// its own range drives a standard binary search.
    pub(crate) fn segment_index(&self, x: f64) -> Option<usize> {
        self.segments
            .binary_search_by(|segment| {
                if x < segment.x0() {
                    Ordering::Greater
                } else if x >= segment.x1() {
                    Ordering::Less
                } else {
                    Ordering::Equal
                }
            })
            .ok()
    }
}
