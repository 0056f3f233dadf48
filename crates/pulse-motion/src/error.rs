//! Error types for the pulse-motion crate.

use thiserror::Error;

/// Errors that can occur when configuring animation primitives.
///
/// Every variant is a construction-time failure. Once a map, channel, or
/// timeline has been built, evaluation and ticking are infallible.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MotionError {
    /// An interpolation segment has zero width.
    #[error("degenerate input segment at index {index}: adjacent breakpoints are equal")]
    DegenerateRange {
        /// Index of the first breakpoint of the zero-width segment.
        index: usize,
    },

    /// Input breakpoints are not in non-decreasing order.
    #[error("input breakpoints out of order at index {index}")]
    UnorderedBreakpoints {
        /// Index of the breakpoint that is smaller than its predecessor.
        index: usize,
    },

    /// Input and output ranges differ in length.
    #[error("mismatched ranges: {input_len} input breakpoints vs {output_len} output breakpoints")]
    MismatchedRanges {
        /// Number of input breakpoints supplied.
        input_len: usize,
        /// Number of output breakpoints supplied.
        output_len: usize,
    },

    /// Fewer than two breakpoints were supplied.
    #[error("interpolation needs at least 2 breakpoints, got {len}")]
    TooFewBreakpoints {
        /// Number of breakpoints supplied.
        len: usize,
    },

    /// A breakpoint, endpoint, or target is NaN or infinite.
    #[error("non-finite value in {context}")]
    NonFinite {
        /// What was being validated when the non-finite value was found.
        context: &'static str,
    },

    /// An animation duration is unusable (zero-length).
    #[error("invalid duration: {reason}")]
    InvalidDuration {
        /// The reason the duration is invalid.
        reason: String,
    },

    /// A timeline was built with no segments.
    #[error("timeline has no segments")]
    EmptyTimeline,
}

/// Result type for motion operations.
pub type Result<T> = std::result::Result<T, MotionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_degenerate_range() {
        let err = MotionError::DegenerateRange { index: 2 };
        assert_eq!(
            err.to_string(),
            "degenerate input segment at index 2: adjacent breakpoints are equal"
        );
    }

    #[test]
    fn error_display_unordered_breakpoints() {
        let err = MotionError::UnorderedBreakpoints { index: 1 };
        assert_eq!(err.to_string(), "input breakpoints out of order at index 1");
    }

    #[test]
    fn error_display_mismatched_ranges() {
        let err = MotionError::MismatchedRanges {
            input_len: 3,
            output_len: 2,
        };
        assert_eq!(
            err.to_string(),
            "mismatched ranges: 3 input breakpoints vs 2 output breakpoints"
        );
    }

    #[test]
    fn error_display_too_few_breakpoints() {
        let err = MotionError::TooFewBreakpoints { len: 1 };
        assert_eq!(
            err.to_string(),
            "interpolation needs at least 2 breakpoints, got 1"
        );
    }

    #[test]
    fn error_display_invalid_duration() {
        let err = MotionError::InvalidDuration {
            reason: "duration must be positive".to_string(),
        };
        assert_eq!(err.to_string(), "invalid duration: duration must be positive");
    }

    #[test]
    fn error_display_empty_timeline() {
        assert_eq!(MotionError::EmptyTimeline.to_string(), "timeline has no segments");
    }
}
