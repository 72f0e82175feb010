//! Segment table construction.
//!
//! A single forward pass over the sorted keyframes assembles the segment
//! table. The tangent at a keyframe needs the keyframe after it, so the
//! pass carries a three-point sliding window and emits each segment once
//! its right endpoint's successor arrives. The boundary tangents are pinned
//! to zero: the first by the fold's initial pending value, the last by the
//! final segment's construction.

use crate::keyframe::Keyframe;
use crate::segment::Segment;
use crate::slope::steffen_slope;

/// Sliding window of the fold, one state per number of keyframes seen.
///
/// `pending_tangent` is the tangent already computed at `prev` — the left
/// tangent of the next segment to emit. Its initial zero is what gives the
/// first segment a flat incoming tangent.
enum Window {
    Empty,
    One(Keyframe),
    Pair {
        prev_prev: Keyframe,
        prev: Keyframe,
        pending_tangent: f64,
    },
}

struct BuildState {
    segments: Vec<Segment>,
    window: Window,
}

/// Builds the segment table for keyframes already sorted ascending by x.
///
/// N keyframes produce N - 1 segments; fewer than two produce none.
pub(crate) fn build_segments(sorted: &[Keyframe]) -> Vec<Segment> {
    let initial = BuildState {
        segments: Vec::with_capacity(sorted.len().saturating_sub(1)),
        window: Window::Empty,
    };

    finish(sorted.iter().copied().fold(initial, advance))
}

fn advance(mut state: BuildState, point: Keyframe) -> BuildState {
    state.window = match state.window {
        Window::Empty => Window::One(point),
        Window::One(prev) => Window::Pair {
            prev_prev: prev,
            prev: point,
            pending_tangent: 0.0,
        },
        Window::Pair {
            prev_prev,
            prev,
            pending_tangent,
        } => {
            // The window around `prev` is complete, which fixes the tangent
            // there and finishes the segment ending at `prev`.
            let tangent =
                steffen_slope(prev_prev.x, prev.x, point.x, prev_prev.y, prev.y, point.y);
            state
                .segments
                .push(Segment::between(prev_prev, prev, pending_tangent, tangent));
            Window::Pair {
                prev_prev: prev,
                prev: point,
                pending_tangent: tangent,
            }
        }
    };
    state
}

fn finish(mut state: BuildState) -> Vec<Segment> {
    // The final segment's outgoing tangent, like the first's incoming one,
    // is fixed at zero.
    if let Window::Pair {
        prev_prev,
        prev,
        pending_tangent,
    } = state.window
    {
        state
            .segments
            .push(Segment::between(prev_prev, prev, pending_tangent, 0.0));
    }
    state.segments
}
