//! Piecewise-linear interpolation mappings.
//!
//! An [`InterpolationMap`] turns an animation scalar into a dependent visual
//! property (opacity, scale factor, position offset, rotation angle). All
//! validation happens once at construction; evaluation is infallible and
//! allocation-free, so it is safe to call on every frame tick.

use serde::{Deserialize, Serialize};

use crate::error::{MotionError, Result};

/// A validated mapping from input breakpoints to output breakpoints.
///
/// Evaluation below the first breakpoint clamps to the first output value,
/// evaluation above the last breakpoint clamps to the last output value, and
/// evaluation between two breakpoints interpolates linearly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpolationMap {
    input: Vec<f64>,
    output: Vec<f64>,
}

impl InterpolationMap {
    /// Creates a mapping from `input` breakpoints to `output` breakpoints.
    ///
    /// # Errors
    ///
    /// Returns an error when fewer than two breakpoints are supplied, the
    /// ranges differ in length, a value is NaN or infinite, the input
    /// breakpoints are out of order, or an input segment has zero width.
    pub fn new(input: impl Into<Vec<f64>>, output: impl Into<Vec<f64>>) -> Result<Self> {
        let input = input.into();
        let output = output.into();

        if input.len() < 2 {
            return Err(MotionError::TooFewBreakpoints { len: input.len() });
        }
        if input.len() != output.len() {
            return Err(MotionError::MismatchedRanges {
                input_len: input.len(),
                output_len: output.len(),
            });
        }
        if input.iter().any(|v| !v.is_finite()) {
            return Err(MotionError::NonFinite {
                context: "input breakpoints",
            });
        }
        if output.iter().any(|v| !v.is_finite()) {
            return Err(MotionError::NonFinite {
                context: "output breakpoints",
            });
        }
        for (i, pair) in input.windows(2).enumerate() {
            if pair[1] < pair[0] {
                return Err(MotionError::UnorderedBreakpoints { index: i + 1 });
            }
            if pair[1] == pair[0] {
                return Err(MotionError::DegenerateRange { index: i });
            }
        }

        Ok(Self { input, output })
    }

    /// Evaluates the mapping at `value`.
    ///
    /// Out-of-range values clamp to the nearest output endpoint. The caller
    /// is expected to pass a finite value (animation channels only produce
    /// finite values).
    #[must_use]
    pub fn eval(&self, value: f64) -> f64 {
        let last = self.input.len() - 1;
        if value <= self.input[0] {
            return self.output[0];
        }
        if value >= self.input[last] {
            return self.output[last];
        }

        // Index of the first breakpoint strictly above `value`; the segment
        // [i - 1, i] brackets it. Bounds are safe after the clamps above.
        let i = self.input.partition_point(|&b| b <= value);
        let (lo, hi) = (self.input[i - 1], self.input[i]);
        let t = (value - lo) / (hi - lo);
        self.output[i - 1] + t * (self.output[i] - self.output[i - 1])
    }

    /// Returns the input breakpoints.
    #[must_use]
    pub fn input(&self) -> &[f64] {
        &self.input
    }

    /// Returns the output breakpoints.
    #[must_use]
    pub fn output(&self) -> &[f64] {
        &self.output
    }
}

/// Builds a mapping and evaluates it in one call.
///
/// Convenience for one-off evaluations; frame-loop callers should build an
/// [`InterpolationMap`] once and reuse it.
///
/// # Errors
///
/// Same conditions as [`InterpolationMap::new`].
pub fn interpolate(value: f64, input: &[f64], output: &[f64]) -> Result<f64> {
    Ok(InterpolationMap::new(input, output)?.eval(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    #[test]
    fn midpoint_maps_linearly() {
        let map = InterpolationMap::new([0.0, 1.0], [0.0, 100.0]).unwrap();
        assert_eq!(map.eval(0.5), 50.0);
    }

    #[test_case(-1.0, 0.0; "below first breakpoint clamps low")]
    #[test_case(0.0, 0.0; "at first breakpoint")]
    #[test_case(1.0, 100.0; "at last breakpoint")]
    #[test_case(2.0, 100.0; "above last breakpoint clamps high")]
    fn unit_range_edges(value: f64, expected: f64) {
        let map = InterpolationMap::new([0.0, 1.0], [0.0, 100.0]).unwrap();
        assert_eq!(map.eval(value), expected);
    }

    #[test]
    fn multi_segment_brackets_correctly() {
        // The ripple opacity curve from the map screen: fade 0.8 -> 0.4 -> 0.
        let map = InterpolationMap::new([0.0, 0.5, 1.0], [0.8, 0.4, 0.0]).unwrap();
        assert!((map.eval(0.25) - 0.6).abs() < 1e-12);
        assert!((map.eval(0.5) - 0.4).abs() < 1e-12);
        assert!((map.eval(0.75) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn descending_output_is_allowed() {
        let map = InterpolationMap::new([0.0, 1.0], [20.0, -20.0]).unwrap();
        assert_eq!(map.eval(0.5), 0.0);
        assert_eq!(map.eval(-3.0), 20.0);
        assert_eq!(map.eval(9.0), -20.0);
    }

    #[test]
    fn too_few_breakpoints_rejected() {
        let err = InterpolationMap::new([0.0], [1.0]).unwrap_err();
        assert_eq!(err, MotionError::TooFewBreakpoints { len: 1 });
    }

    #[test]
    fn mismatched_lengths_rejected() {
        let err = InterpolationMap::new([0.0, 0.5, 1.0], [0.0, 1.0]).unwrap_err();
        assert_eq!(
            err,
            MotionError::MismatchedRanges {
                input_len: 3,
                output_len: 2
            }
        );
    }

    #[test]
    fn zero_width_segment_rejected() {
        let err = InterpolationMap::new([0.0, 0.5, 0.5, 1.0], [0.0, 1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(err, MotionError::DegenerateRange { index: 1 });
    }

    #[test]
    fn unordered_breakpoints_rejected() {
        let err = InterpolationMap::new([0.0, 1.0, 0.5], [0.0, 1.0, 2.0]).unwrap_err();
        assert_eq!(err, MotionError::UnorderedBreakpoints { index: 2 });
    }

    #[test]
    fn non_finite_breakpoints_rejected() {
        let err = InterpolationMap::new([0.0, f64::NAN], [0.0, 1.0]).unwrap_err();
        assert_eq!(
            err,
            MotionError::NonFinite {
                context: "input breakpoints"
            }
        );

        let err = InterpolationMap::new([0.0, 1.0], [0.0, f64::INFINITY]).unwrap_err();
        assert_eq!(
            err,
            MotionError::NonFinite {
                context: "output breakpoints"
            }
        );
    }

    #[test]
    fn interpolate_helper_clamps_and_maps() {
        assert_eq!(interpolate(0.5, &[0.0, 1.0], &[0.0, 100.0]).unwrap(), 50.0);
        assert_eq!(interpolate(-1.0, &[0.0, 1.0], &[0.0, 100.0]).unwrap(), 0.0);
        assert_eq!(interpolate(2.0, &[0.0, 1.0], &[0.0, 100.0]).unwrap(), 100.0);
    }

    #[test]
    fn serialization_roundtrip() {
        let original = InterpolationMap::new([0.0, 0.5, 1.0], [1.0, 1.05, 1.0]).unwrap();
        let json = serde_json::to_string(&original).unwrap();
        let parsed: InterpolationMap = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
    }

    proptest! {
        #[test]
        fn eval_stays_within_output_bounds(value in -1e6f64..1e6) {
            let map = InterpolationMap::new([0.0, 0.3, 1.0], [2.0, 5.0, 9.0]).unwrap();
            let out = map.eval(value);
            prop_assert!((2.0..=9.0).contains(&out));
        }

        #[test]
        fn eval_is_monotone_for_monotone_output(a in -10.0f64..10.0, b in -10.0f64..10.0) {
            let map = InterpolationMap::new([0.0, 0.4, 1.0], [0.0, 40.0, 100.0]).unwrap();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(map.eval(lo) <= map.eval(hi));
        }

        #[test]
        fn clamping_below_and_above(value in -1e6f64..1e6) {
            let map = InterpolationMap::new([0.0, 1.0], [0.0, 100.0]).unwrap();
            if value <= 0.0 {
                prop_assert_eq!(map.eval(value), 0.0);
            }
            if value >= 1.0 {
                prop_assert_eq!(map.eval(value), 100.0);
            }
        }
    }
}
