//! Offset-driven card motion.
//!
//! Every visual property of the active card is a pure function of its
//! horizontal offset, so the renderer never keeps animation state of its own.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

use crate::consts::{COMMIT_THRESHOLD_PX, MAX_ROTATION_DEG, ROTATION_RANGE_PX};

/// Piecewise-linear interpolation of `value` over `input` stops into
/// `output` stops, clamped to the first/last output outside the input range.
///
/// `input` must be ascending and the same length as `output`. Mismatched or
/// empty stop lists yield `0.0`.
#[must_use]
pub fn interpolate(value: f64, input: &[f64], output: &[f64]) -> f64 {
    if input.is_empty() || input.len() != output.len() {
        return 0.0;
    }
    let last = input.len() - 1;
    if value <= input[0] {
        return output[0];
    }
    if value >= input[last] {
        return output[last];
    }
    for i in 0..last {
        let (lo, hi) = (input[i], input[i + 1]);
        if value >= lo && value <= hi {
            let span = hi - lo;
            if span <= 0.0 {
                return output[i + 1];
            }
            let t = (value - lo) / span;
            return output[i] + (output[i + 1] - output[i]) * t;
        }
    }
    output[last]
}

/// Card tilt in degrees: `[-200, 200] -> [-25, 25]`.
#[must_use]
pub fn rotation_deg(offset: f64) -> f64 {
    interpolate(
        offset,
        &[-ROTATION_RANGE_PX, ROTATION_RANGE_PX],
        &[-MAX_ROTATION_DEG, MAX_ROTATION_DEG],
    )
}

/// Card opacity: fully opaque within the commit threshold, fading to zero at
/// the rotation range.
#[must_use]
pub fn opacity(offset: f64) -> f64 {
    interpolate(
        offset,
        &[-ROTATION_RANGE_PX, -COMMIT_THRESHOLD_PX, 0.0, COMMIT_THRESHOLD_PX, ROTATION_RANGE_PX],
        &[0.0, 1.0, 1.0, 1.0, 0.0],
    )
}

/// Opacity of the "LIKE" stamp: `[0, 100] -> [0, 1]`.
#[must_use]
pub fn like_stamp_opacity(offset: f64) -> f64 {
    interpolate(offset, &[0.0, COMMIT_THRESHOLD_PX], &[0.0, 1.0])
}

/// Opacity of the "NOPE" stamp: `[-100, 0] -> [1, 0]`.
#[must_use]
pub fn nope_stamp_opacity(offset: f64) -> f64 {
    interpolate(offset, &[-COMMIT_THRESHOLD_PX, 0.0], &[1.0, 0.0])
}

/// Snapshot of everything the renderer needs to place the active card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    pub offset: f64,
    pub rotation_deg: f64,
    pub opacity: f64,
    pub like_opacity: f64,
    pub nope_opacity: f64,
}

impl CardTransform {
    #[must_use]
    pub fn at(offset: f64) -> Self {
        Self {
            offset,
            rotation_deg: rotation_deg(offset),
            opacity: opacity(offset),
            like_opacity: like_stamp_opacity(offset),
            nope_opacity: nope_stamp_opacity(offset),
        }
    }

    /// CSS `transform` value for this snapshot.
    #[must_use]
    pub fn css_transform(&self) -> String {
        format!("translateX({:.1}px) rotate({:.2}deg)", self.offset, self.rotation_deg)
    }
}
