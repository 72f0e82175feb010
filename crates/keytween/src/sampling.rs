//! Batch evaluation and even-grid resampling.
//!
//! Animation runtimes tend to query a curve many times per frame at nearby,
//! usually ascending x-values. The batch entry points here reuse the
//! previously hit segment as a lookup hint before falling back to the
//! binary search, and the grid sampler bakes a curve into a fixed-step
//! keyframe table.

use crate::curve::MonotoneCurve;
use crate::keyframe::Keyframe;

impl MonotoneCurve {
    /// Evaluates the curve at every query in `xs`.
    ///
    /// Equivalent to calling [`evaluate`](Self::evaluate) once per query,
    /// but consecutive queries landing in the same or the next segment skip
    /// the binary search, which makes ascending sweeps cheap.
    pub fn evaluate_batch(&self, xs: &[f64]) -> Vec<f64> {
        let mut results = Vec::with_capacity(xs.len());
        let mut hint = 0;

        for &x in xs {
            if x <= self.first.x {
                results.push(self.first.y);
            } else if x >= self.last.x {
                results.push(self.last.y);
            } else if let Some(index) = self.segment_index_with_hint(hint, x) {
                hint = index;
                results.push(self.segments[index].evaluate(x));
            } else {
                results.push(f64::NAN);
            }
        }
        results
    }

    /// Resamples the curve into `count` evenly spaced keyframes across
    /// `[min_x, max_x]`, endpoints included.
    ///
    /// Useful for baking a curve into a fixed-step table for playback.
    /// `count == 1` yields just the first keyframe; `count == 0` yields an
    /// empty table.
    pub fn sample(&self, count: usize) -> Vec<Keyframe> {
        if count == 0 {
            return Vec::new();
        }
        if count == 1 {
            return vec![self.first];
        }

        let step = (self.last.x - self.first.x) / (count - 1) as f64;
        (0..count)
            .map(|i| {
                let x = self.first.x + step * i as f64;
                Keyframe::new(x, self.evaluate(x))
            })
            .collect()
    }

    /// Looks at `hint` and its successor before falling back to the binary
    /// search.
    fn segment_index_with_hint(&self, hint: usize, x: f64) -> Option<usize> {
        if let Some(segment) = self.segments.get(hint) {
            if segment.contains(x) {
                return Some(hint);
            }
        }
        if let Some(segment) = self.segments.get(hint + 1) {
            if segment.contains(x) {
                return Some(hint + 1);
            }
        }
        self.segment_index(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn curve(pairs: &[(f64, f64)]) -> MonotoneCurve {
        MonotoneCurve::from_pairs(pairs).unwrap()
    }

    #[test]
    fn test_batch_matches_pointwise_evaluation() {
        let curve = curve(&[(0.0, 0.0), (1.0, 3.0), (2.5, 2.0), (4.0, 4.0)]);
        let queries: Vec<f64> = (-10..=50).map(|i| f64::from(i) * 0.1).collect();

        let batch = curve.evaluate_batch(&queries);

        assert_eq!(batch.len(), queries.len());
        for (x, batched) in queries.iter().zip(&batch) {
            assert_eq!(*batched, curve.evaluate(*x), "mismatch at x = {}", x);
        }
    }

    #[test]
    fn test_batch_handles_descending_and_repeated_queries() {
        let curve = curve(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.5), (3.0, 2.0)]);
        let queries = [2.9, 0.3, 0.3, 1.7, 2.9, 0.1];

        let batch = curve.evaluate_batch(&queries);

        for (x, batched) in queries.iter().zip(&batch) {
            assert_eq!(*batched, curve.evaluate(*x));
        }
    }

    #[test]
    fn test_batch_on_empty_queries() {
        let curve = curve(&[(0.0, 0.0), (1.0, 1.0)]);

        assert!(curve.evaluate_batch(&[]).is_empty());
    }

    #[test]
    fn test_sample_grid_spacing_and_endpoints() {
        let curve = curve(&[(0.0, 0.0), (4.0, 8.0)]);
        let samples = curve.sample(5);

        assert_eq!(samples.len(), 5);
        for (i, sample) in samples.iter().enumerate() {
            assert_relative_eq!(sample.x, i as f64, epsilon = 1e-12);
        }
        assert_eq!(samples[0].y, 0.0);
        assert_eq!(samples[4].y, 8.0);
    }

    #[test]
    fn test_sample_degenerate_counts() {
        let curve = curve(&[(1.0, 2.0), (3.0, 4.0)]);

        assert!(curve.sample(0).is_empty());

        let one = curve.sample(1);
        assert_eq!(one.len(), 1);
        assert_eq!(one[0], Keyframe::new(1.0, 2.0));
    }

    #[test]
    fn test_sample_values_match_evaluate() {
        let curve = curve(&[(0.0, 1.0), (1.0, 0.0), (2.0, 2.0), (3.0, 1.0)]);

        for sample in curve.sample(31) {
            assert_eq!(sample.y, curve.evaluate(sample.x));
        }
    }
}
