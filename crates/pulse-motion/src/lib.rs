//! Animation primitives for the Aqua Pulse groundwater dashboard.
//!
//! `pulse-motion` answers one question per frame: given the elapsed time the
//! host frame loop has supplied, what value does a dependent visual property
//! take. It owns no clock and spawns nothing; screens own their channels and
//! drop them on unmount.
//!
//! # Building blocks
//!
//! - [`AnimationChannel`]: a progress scalar driven from a start to an end
//!   value over a duration, in `one-shot`, `loop`, or `ping-pong` mode
//! - [`Timeline`]: a chain of segments for asymmetric ornaments (fall fast,
//!   snap back) with the same drive modes
//! - [`InterpolationMap`]: a clamped piecewise-linear mapping from an
//!   animation scalar to a visual property
//!
//! All configuration errors surface at construction time; evaluation and
//! ticking never fail.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use pulse_motion::{AnimationChannel, DriveMode, InterpolationMap};
//!
//! // Pulse a marker between scale 1.0 and 1.05 every two seconds.
//! let mut pulse = AnimationChannel::unit(Duration::from_millis(2000), DriveMode::PingPong)
//!     .unwrap();
//! let scale = InterpolationMap::new([0.0, 1.0], [1.0, 1.05]).unwrap();
//!
//! pulse.tick(Duration::from_millis(500));
//! assert_eq!(pulse.progress(), 0.25);
//! assert!((scale.eval(pulse.progress()) - 1.0125).abs() < 1e-9);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod channel;
pub mod error;
pub mod interp;
pub mod sequence;

// Re-export main types at crate root
pub use channel::{AnimationChannel, ChannelState, DriveMode};
pub use error::{MotionError, Result};
pub use interp::{interpolate, InterpolationMap};
pub use sequence::{Segment, Timeline};
