//! Frame-tick driven animation channels.
//!
//! An [`AnimationChannel`] is an independent progress scalar owned by a
//! screen. The host frame loop supplies elapsed-time ticks; the channel
//! only answers "what value does the scalar take now". Channels never share
//! state and are torn down by dropping them with the owning screen.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{MotionError, Result};

/// How a channel behaves when it reaches its end value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DriveMode {
    /// Run once and hold the end value.
    #[default]
    OneShot,
    /// Snap back to the start and run again, indefinitely.
    Loop,
    /// Reverse direction at each end, indefinitely.
    PingPong,
}

impl DriveMode {
    /// Returns the mode as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OneShot => "one-shot",
            Self::Loop => "loop",
            Self::PingPong => "ping-pong",
        }
    }

    /// Returns true if the mode repeats indefinitely.
    #[must_use]
    pub const fn is_repeating(&self) -> bool {
        matches!(self, Self::Loop | Self::PingPong)
    }
}

impl std::fmt::Display for DriveMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle state of an [`AnimationChannel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelState {
    /// Created but never ticked; the scalar holds its start value.
    Idle,
    /// Ticking, still inside the first pass.
    Running,
    /// A repeating channel that has finished at least one pass.
    Looping,
    /// A one-shot channel that reached its end value. Terminal.
    Completed,
}

impl ChannelState {
    /// Returns the state as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Looping => "looping",
            Self::Completed => "completed",
        }
    }
}

impl std::fmt::Display for ChannelState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An independent animation scalar advanced by externally supplied ticks.
///
/// `progress()` and `value()` are pure functions of the accumulated elapsed
/// time, so a loop channel is exactly periodic with period = duration and a
/// one-shot channel holds its end value forever after the duration elapses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationChannel {
    start: f64,
    end: f64,
    duration: Duration,
    mode: DriveMode,
    elapsed: Duration,
    state: ChannelState,
}

impl AnimationChannel {
    /// Creates a channel that drives a scalar from `start` to `end` over
    /// `duration`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDuration` when `duration` is zero and `NonFinite`
    /// when either endpoint is NaN or infinite. Malformed configuration
    /// fails here, never at tick time.
    pub fn new(start: f64, end: f64, duration: Duration, mode: DriveMode) -> Result<Self> {
        if duration.is_zero() {
            return Err(MotionError::InvalidDuration {
                reason: "duration must be positive".to_string(),
            });
        }
        if !start.is_finite() || !end.is_finite() {
            return Err(MotionError::NonFinite {
                context: "channel endpoints",
            });
        }

        Ok(Self {
            start,
            end,
            duration,
            mode,
            elapsed: Duration::ZERO,
            state: ChannelState::Idle,
        })
    }

    /// Creates a unit channel from 0.0 to 1.0, the shape most ornaments use.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDuration` when `duration` is zero.
    pub fn unit(duration: Duration, mode: DriveMode) -> Result<Self> {
        Self::new(0.0, 1.0, duration, mode)
    }

    /// Advances the channel by `dt` of frame time.
    ///
    /// Ticking a completed channel is a no-op; a stalled frame clock simply
    /// means no calls arrive and the scalar stops advancing.
    pub fn tick(&mut self, dt: Duration) {
        if self.state == ChannelState::Completed {
            return;
        }
        self.elapsed = self.elapsed.saturating_add(dt);
        self.state = if self.elapsed >= self.duration {
            match self.mode {
                DriveMode::OneShot => ChannelState::Completed,
                DriveMode::Loop | DriveMode::PingPong => ChannelState::Looping,
            }
        } else {
            ChannelState::Running
        };
    }

    /// Rewinds to the start and re-arms the channel.
    ///
    /// Used when a screen re-triggers a one-shot transition (e.g. toggling
    /// dark mode replays the fade).
    pub fn restart(&mut self) {
        self.elapsed = Duration::ZERO;
        self.state = ChannelState::Idle;
    }

    /// Current progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        let dur = self.duration.as_nanos();
        let elapsed = self.elapsed.as_nanos();
        // Integer cycle arithmetic keeps looping channels exactly periodic.
        let in_cycle = elapsed % dur;
        let cycles = elapsed / dur;
        match self.mode {
            DriveMode::OneShot => {
                if cycles > 0 {
                    1.0
                } else {
                    in_cycle as f64 / dur as f64
                }
            }
            DriveMode::Loop => in_cycle as f64 / dur as f64,
            DriveMode::PingPong => {
                let phase = in_cycle as f64 / dur as f64;
                if cycles % 2 == 0 {
                    phase
                } else {
                    1.0 - phase
                }
            }
        }
    }

    /// Current scalar value in `[start, end]`.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.start + self.progress() * (self.end - self.start)
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> ChannelState {
        self.state
    }

    /// The configured drive mode.
    #[must_use]
    pub const fn mode(&self) -> DriveMode {
        self.mode
    }

    /// The configured duration of one pass.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Total frame time accumulated so far.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// The configured start value.
    #[must_use]
    pub const fn start(&self) -> f64 {
        self.start
    }

    /// The configured end value.
    #[must_use]
    pub const fn end(&self) -> f64 {
        self.end
    }

    /// Returns true once a one-shot channel holds its end value.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.state == ChannelState::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    mod construction_tests {
        use super::*;

        #[test]
        fn zero_duration_rejected() {
            let err = AnimationChannel::unit(Duration::ZERO, DriveMode::Loop).unwrap_err();
            assert!(matches!(err, MotionError::InvalidDuration { .. }));
        }

        #[test]
        fn non_finite_endpoint_rejected() {
            let err =
                AnimationChannel::new(0.0, f64::NAN, ms(100), DriveMode::OneShot).unwrap_err();
            assert_eq!(
                err,
                MotionError::NonFinite {
                    context: "channel endpoints"
                }
            );
        }

        #[test]
        fn starts_idle_at_start_value() {
            let channel = AnimationChannel::new(2.0, 8.0, ms(1000), DriveMode::OneShot).unwrap();
            assert_eq!(channel.state(), ChannelState::Idle);
            assert_eq!(channel.progress(), 0.0);
            assert_eq!(channel.value(), 2.0);
        }
    }

    mod one_shot_tests {
        use super::*;

        #[test]
        fn advances_and_holds_end_value() {
            let mut channel = AnimationChannel::new(0.0, 200.0, ms(2000), DriveMode::OneShot)
                .unwrap();

            channel.tick(ms(500));
            assert_eq!(channel.state(), ChannelState::Running);
            assert_eq!(channel.progress(), 0.25);
            assert_eq!(channel.value(), 50.0);

            channel.tick(ms(1500));
            assert_eq!(channel.state(), ChannelState::Completed);
            assert_eq!(channel.value(), 200.0);

            // Terminal: further ticks never move the value past the end.
            channel.tick(ms(10_000));
            assert_eq!(channel.state(), ChannelState::Completed);
            assert_eq!(channel.progress(), 1.0);
            assert_eq!(channel.value(), 200.0);
        }

        #[test]
        fn never_overshoots() {
            let mut channel = AnimationChannel::unit(ms(100), DriveMode::OneShot).unwrap();
            for _ in 0..50 {
                channel.tick(ms(7));
                assert!(channel.progress() <= 1.0);
            }
        }

        #[test]
        fn restart_rearms_a_completed_channel() {
            let mut channel = AnimationChannel::unit(ms(500), DriveMode::OneShot).unwrap();
            channel.tick(ms(600));
            assert!(channel.is_completed());

            channel.restart();
            assert_eq!(channel.state(), ChannelState::Idle);
            assert_eq!(channel.progress(), 0.0);

            channel.tick(ms(250));
            assert_eq!(channel.state(), ChannelState::Running);
            assert_eq!(channel.progress(), 0.5);
        }
    }

    mod loop_tests {
        use super::*;

        #[test]
        fn periodic_with_period_equal_to_duration() {
            let mut channel = AnimationChannel::unit(ms(1000), DriveMode::Loop).unwrap();
            channel.tick(ms(250));
            let first_pass = channel.progress();

            // Three more full cycles land on the same phase exactly.
            channel.tick(ms(3000));
            assert_eq!(channel.progress(), first_pass);
            assert_eq!(channel.state(), ChannelState::Looping);
        }

        #[test]
        fn snaps_back_to_start_at_cycle_boundary() {
            let mut channel = AnimationChannel::unit(ms(1000), DriveMode::Loop).unwrap();
            channel.tick(ms(1000));
            assert_eq!(channel.progress(), 0.0);
            assert_eq!(channel.state(), ChannelState::Looping);
        }

        #[test]
        fn keeps_looping_forever() {
            let mut channel = AnimationChannel::new(0.0, 360.0, ms(200), DriveMode::Loop).unwrap();
            channel.tick(ms(20_050));
            assert_eq!(channel.state(), ChannelState::Looping);
            assert_eq!(channel.value(), 90.0);
        }
    }

    mod ping_pong_tests {
        use super::*;

        #[test]
        fn reverses_direction_each_cycle() {
            let mut channel = AnimationChannel::unit(ms(1000), DriveMode::PingPong).unwrap();

            channel.tick(ms(250));
            assert_eq!(channel.progress(), 0.25);

            // 1250ms total: second pass, heading back down.
            channel.tick(ms(1000));
            assert_eq!(channel.progress(), 0.75);

            // 2250ms total: third pass, heading up again.
            channel.tick(ms(1000));
            assert_eq!(channel.progress(), 0.25);
        }

        #[test]
        fn touches_end_at_cycle_boundary() {
            let mut channel = AnimationChannel::unit(ms(1000), DriveMode::PingPong).unwrap();
            channel.tick(ms(1000));
            assert_eq!(channel.progress(), 1.0);
            assert_eq!(channel.state(), ChannelState::Looping);

            channel.tick(ms(1000));
            assert_eq!(channel.progress(), 0.0);
        }
    }

    mod serde_tests {
        use super::*;

        #[test]
        fn drive_mode_labels() {
            assert_eq!(DriveMode::OneShot.as_str(), "one-shot");
            assert_eq!(DriveMode::Loop.as_str(), "loop");
            assert_eq!(DriveMode::PingPong.as_str(), "ping-pong");
            assert!(!DriveMode::OneShot.is_repeating());
            assert!(DriveMode::PingPong.is_repeating());
        }

        #[test]
        fn channel_serialization_roundtrip() {
            let mut original = AnimationChannel::unit(ms(1500), DriveMode::PingPong).unwrap();
            original.tick(ms(333));

            let json = serde_json::to_string(&original).unwrap();
            let parsed: AnimationChannel = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, original);
            assert_eq!(parsed.progress(), original.progress());
        }
    }
}
