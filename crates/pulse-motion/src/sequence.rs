//! Multi-segment animation timelines.
//!
//! Some ornaments are not a single back-and-forth sweep: the alert droplet
//! falls for 800ms and snaps home in 200ms, the station ripple expands for
//! 2s and collapses in 100ms. A [`Timeline`] chains segments (target value
//! plus duration) and is driven by the same external frame ticks as an
//! [`crate::AnimationChannel`], with the same drive modes.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::channel::{ChannelState, DriveMode};
use crate::error::{MotionError, Result};

/// One leg of a [`Timeline`]: drive the scalar to `target` over `duration`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    target: f64,
    duration: Duration,
}

impl Segment {
    /// Creates a segment.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDuration` for a zero duration and `NonFinite` for a
    /// NaN or infinite target.
    pub fn new(target: f64, duration: Duration) -> Result<Self> {
        if duration.is_zero() {
            return Err(MotionError::InvalidDuration {
                reason: "segment duration must be positive".to_string(),
            });
        }
        if !target.is_finite() {
            return Err(MotionError::NonFinite {
                context: "segment target",
            });
        }
        Ok(Self { target, duration })
    }

    /// The value the scalar reaches at the end of this segment.
    #[must_use]
    pub const fn target(&self) -> f64 {
        self.target
    }

    /// How long this segment takes.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }
}

/// An ordered chain of segments evaluated against accumulated frame time.
///
/// In `Loop` mode the whole chain repeats from the start value; in
/// `PingPong` mode odd cycles play the chain backwards; in `OneShot` mode
/// the scalar holds the final target once the chain finishes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    start: f64,
    segments: Vec<Segment>,
    mode: DriveMode,
    total: Duration,
    elapsed: Duration,
    state: ChannelState,
}

impl Timeline {
    /// Creates a timeline starting at `start` and playing `segments` in
    /// order.
    ///
    /// # Errors
    ///
    /// Returns `EmptyTimeline` when no segments are supplied and `NonFinite`
    /// when the start value is NaN or infinite. Segment validation happens
    /// in [`Segment::new`].
    pub fn new(start: f64, segments: Vec<Segment>, mode: DriveMode) -> Result<Self> {
        if segments.is_empty() {
            return Err(MotionError::EmptyTimeline);
        }
        if !start.is_finite() {
            return Err(MotionError::NonFinite {
                context: "timeline start",
            });
        }

        let mut total = Duration::ZERO;
        for segment in &segments {
            total = total.saturating_add(segment.duration);
        }

        Ok(Self {
            start,
            segments,
            mode,
            total,
            elapsed: Duration::ZERO,
            state: ChannelState::Idle,
        })
    }

    /// Advances the timeline by `dt` of frame time.
    pub fn tick(&mut self, dt: Duration) {
        if self.state == ChannelState::Completed {
            return;
        }
        self.elapsed = self.elapsed.saturating_add(dt);
        self.state = if self.elapsed >= self.total {
            match self.mode {
                DriveMode::OneShot => ChannelState::Completed,
                DriveMode::Loop | DriveMode::PingPong => ChannelState::Looping,
            }
        } else {
            ChannelState::Running
        };
    }

    /// Rewinds to the start and re-arms the timeline.
    pub fn restart(&mut self) {
        self.elapsed = Duration::ZERO;
        self.state = ChannelState::Idle;
    }

    /// Current scalar value.
    #[must_use]
    pub fn value(&self) -> f64 {
        let total = self.total.as_nanos();
        let elapsed = self.elapsed.as_nanos();
        let cycles = elapsed / total;
        let in_cycle = elapsed % total;

        let local = match self.mode {
            DriveMode::OneShot => {
                if cycles > 0 {
                    return self.final_target();
                }
                in_cycle
            }
            DriveMode::Loop => in_cycle,
            DriveMode::PingPong => {
                if cycles % 2 == 0 {
                    in_cycle
                } else {
                    total - in_cycle
                }
            }
        };

        self.value_at(local)
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> ChannelState {
        self.state
    }

    /// Total duration of one full pass over the chain.
    #[must_use]
    pub const fn total_duration(&self) -> Duration {
        self.total
    }

    /// The configured segments.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    fn final_target(&self) -> f64 {
        // Safe: constructor rejects empty segment lists.
        self.segments.last().map_or(self.start, Segment::target)
    }

    /// Evaluates the chain at `local` nanoseconds into a forward pass.
    fn value_at(&self, local: u128) -> f64 {
        let mut from = self.start;
        let mut offset: u128 = 0;
        for segment in &self.segments {
            let span = segment.duration.as_nanos();
            if local < offset + span {
                let t = (local - offset) as f64 / span as f64;
                return from + t * (segment.target - from);
            }
            from = segment.target;
            offset += span;
        }
        self.final_target()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    /// The droplet ornament: fall to 1.0 over 800ms, snap home in 200ms.
    fn droplet() -> Timeline {
        Timeline::new(
            0.0,
            vec![
                Segment::new(1.0, ms(800)).unwrap(),
                Segment::new(0.0, ms(200)).unwrap(),
            ],
            DriveMode::Loop,
        )
        .unwrap()
    }

    #[test]
    fn empty_timeline_rejected() {
        let err = Timeline::new(0.0, Vec::new(), DriveMode::Loop).unwrap_err();
        assert_eq!(err, MotionError::EmptyTimeline);
    }

    #[test]
    fn zero_duration_segment_rejected() {
        let err = Segment::new(1.0, Duration::ZERO).unwrap_err();
        assert!(matches!(err, MotionError::InvalidDuration { .. }));
    }

    #[test]
    fn non_finite_target_rejected() {
        let err = Segment::new(f64::INFINITY, ms(100)).unwrap_err();
        assert_eq!(
            err,
            MotionError::NonFinite {
                context: "segment target"
            }
        );
    }

    #[test]
    fn idle_at_start_value() {
        let timeline = droplet();
        assert_eq!(timeline.state(), ChannelState::Idle);
        assert_eq!(timeline.value(), 0.0);
        assert_eq!(timeline.total_duration(), ms(1000));
    }

    #[test]
    fn walks_segments_in_order() {
        let mut timeline = droplet();

        timeline.tick(ms(400));
        assert_eq!(timeline.value(), 0.5);
        assert_eq!(timeline.state(), ChannelState::Running);

        // 900ms: halfway through the 200ms return leg.
        timeline.tick(ms(500));
        assert_eq!(timeline.value(), 0.5);
    }

    #[test]
    fn loop_mode_is_periodic_over_the_whole_chain() {
        let mut timeline = droplet();
        timeline.tick(ms(400));
        let phase_value = timeline.value();

        timeline.tick(ms(5000));
        assert_eq!(timeline.value(), phase_value);
        assert_eq!(timeline.state(), ChannelState::Looping);
    }

    #[test]
    fn one_shot_holds_final_target() {
        let mut timeline = Timeline::new(
            0.0,
            vec![
                Segment::new(10.0, ms(100)).unwrap(),
                Segment::new(4.0, ms(100)).unwrap(),
            ],
            DriveMode::OneShot,
        )
        .unwrap();

        timeline.tick(ms(250));
        assert_eq!(timeline.state(), ChannelState::Completed);
        assert_eq!(timeline.value(), 4.0);

        timeline.tick(ms(1000));
        assert_eq!(timeline.value(), 4.0);
    }

    #[test]
    fn ping_pong_plays_the_chain_backwards_on_odd_cycles() {
        let mut timeline = Timeline::new(
            0.0,
            vec![Segment::new(1.0, ms(1000)).unwrap()],
            DriveMode::PingPong,
        )
        .unwrap();

        timeline.tick(ms(1250));
        assert_eq!(timeline.value(), 0.75);
    }

    #[test]
    fn restart_rearms() {
        let mut timeline = droplet();
        timeline.tick(ms(950));
        timeline.restart();
        assert_eq!(timeline.state(), ChannelState::Idle);
        assert_eq!(timeline.value(), 0.0);
    }

    #[test]
    fn serialization_roundtrip() {
        let mut original = droplet();
        original.tick(ms(123));

        let json = serde_json::to_string(&original).unwrap();
        let parsed: Timeline = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
    }
}
