//! Animation wiring for the dashboard screens.
//!
//! All decorative motion on every screen hangs off one [`Ornaments`] bundle
//! owned by the `App`: the frame loop ticks it, the draw functions read the
//! derived visual values. Channels never share state; dropping the app
//! tears everything down.

use std::time::Duration;

use pulse_motion::{AnimationChannel, DriveMode, InterpolationMap, Result, Segment, Timeline};
use tracing::warn;

/// One animation pass of the tank fill (index screen `tankFillAnimation`).
const TANK_FILL_MS: u64 = 2000;

/// The decorative animation channels plus the mappings that turn their
/// scalars into visual properties.
#[derive(Debug, Clone)]
pub struct Ornaments {
    // Overview
    tank_fill: AnimationChannel,
    wave: AnimationChannel,
    // Stations
    marker_pulse: AnimationChannel,
    sweep: AnimationChannel,
    ripple: Timeline,
    // Alerts
    droplet: Timeline,
    card_flip: Timeline,
    // Analysis
    chart_reveal: AnimationChannel,
    forecast_pulse: AnimationChannel,
    // Conserve
    card_float: AnimationChannel,
    particle: Timeline,
    // Profile
    avatar_pulse: AnimationChannel,
    mode_fade: AnimationChannel,

    wave_shift: InterpolationMap,
    marker_scale: InterpolationMap,
    ripple_scale: InterpolationMap,
    ripple_alpha: InterpolationMap,
    droplet_drop: InterpolationMap,
    droplet_alpha: InterpolationMap,
    flip_angle: InterpolationMap,
    chart_scale: InterpolationMap,
    forecast_scale: InterpolationMap,
    float_lift: InterpolationMap,
    particle_rise: InterpolationMap,
    particle_alpha: InterpolationMap,
    avatar_scale: InterpolationMap,
    mode_dim: InterpolationMap,
}

impl Ornaments {
    /// Builds the full ornament bundle, filling the tank toward
    /// `level_pct`.
    ///
    /// # Errors
    ///
    /// Only on malformed configuration; every duration and breakpoint here
    /// is a screen constant, so failures indicate a programming error.
    pub fn new(level_pct: f64) -> Result<Self> {
        let ms = Duration::from_millis;
        Ok(Self {
            tank_fill: AnimationChannel::new(
                0.0,
                level_pct.clamp(0.0, 100.0),
                ms(TANK_FILL_MS),
                DriveMode::OneShot,
            )?,
            wave: AnimationChannel::unit(ms(3000), DriveMode::PingPong)?,
            marker_pulse: AnimationChannel::unit(ms(1500), DriveMode::PingPong)?,
            sweep: AnimationChannel::new(0.0, 360.0, ms(20_000), DriveMode::Loop)?,
            ripple: Timeline::new(
                0.0,
                vec![Segment::new(1.0, ms(2000))?, Segment::new(0.0, ms(100))?],
                DriveMode::Loop,
            )?,
            droplet: Timeline::new(
                0.0,
                vec![Segment::new(1.0, ms(800))?, Segment::new(0.0, ms(200))?],
                DriveMode::Loop,
            )?,
            card_flip: Timeline::new(
                0.0,
                vec![Segment::new(0.5, ms(150))?, Segment::new(0.0, ms(150))?],
                DriveMode::OneShot,
            )?,
            chart_reveal: AnimationChannel::unit(ms(1500), DriveMode::OneShot)?,
            forecast_pulse: AnimationChannel::unit(ms(2000), DriveMode::PingPong)?,
            card_float: AnimationChannel::unit(ms(3000), DriveMode::PingPong)?,
            particle: Timeline::new(
                0.0,
                vec![Segment::new(1.0, ms(2000))?, Segment::new(0.0, ms(100))?],
                DriveMode::Loop,
            )?,
            avatar_pulse: AnimationChannel::unit(ms(3000), DriveMode::PingPong)?,
            mode_fade: AnimationChannel::unit(ms(500), DriveMode::OneShot)?,

            wave_shift: InterpolationMap::new([0.0, 1.0], [-20.0, 20.0])?,
            marker_scale: InterpolationMap::new([0.0, 1.0], [1.0, 1.3])?,
            ripple_scale: InterpolationMap::new([0.0, 1.0], [1.0, 3.0])?,
            ripple_alpha: InterpolationMap::new([0.0, 0.5, 1.0], [0.8, 0.4, 0.0])?,
            droplet_drop: InterpolationMap::new([0.0, 1.0], [0.0, 20.0])?,
            droplet_alpha: InterpolationMap::new([0.0, 0.5, 1.0], [1.0, 0.7, 0.0])?,
            flip_angle: InterpolationMap::new([0.0, 0.5, 1.0], [0.0, 90.0, 0.0])?,
            chart_scale: InterpolationMap::new([0.0, 1.0], [0.8, 1.0])?,
            forecast_scale: InterpolationMap::new([0.0, 1.0], [1.0, 1.1])?,
            float_lift: InterpolationMap::new([0.0, 1.0], [0.0, -10.0])?,
            particle_rise: InterpolationMap::new([0.0, 1.0], [0.0, -30.0])?,
            particle_alpha: InterpolationMap::new([0.0, 0.5, 1.0], [1.0, 0.5, 0.0])?,
            avatar_scale: InterpolationMap::new([0.0, 1.0], [1.0, 1.05])?,
            mode_dim: InterpolationMap::new([0.0, 1.0], [1.0, 0.8])?,
        })
    }

    /// Advances every channel by one frame of `dt`.
    pub fn tick(&mut self, dt: Duration) {
        self.tank_fill.tick(dt);
        self.wave.tick(dt);
        self.marker_pulse.tick(dt);
        self.sweep.tick(dt);
        self.ripple.tick(dt);
        self.droplet.tick(dt);
        self.card_flip.tick(dt);
        self.chart_reveal.tick(dt);
        self.forecast_pulse.tick(dt);
        self.card_float.tick(dt);
        self.particle.tick(dt);
        self.avatar_pulse.tick(dt);
        self.mode_fade.tick(dt);
    }

    /// Re-aims the tank fill from its current value toward `level_pct`.
    pub fn retarget_tank(&mut self, level_pct: f64) {
        let target = level_pct.clamp(0.0, 100.0);
        match AnimationChannel::new(
            self.tank_fill.value(),
            target,
            Duration::from_millis(TANK_FILL_MS),
            DriveMode::OneShot,
        ) {
            Ok(channel) => self.tank_fill = channel,
            Err(err) => warn!(%err, "tank retarget rejected"),
        }
    }

    /// Replays the card-flip flash (alert selection changed).
    pub fn flash_card(&mut self) {
        self.card_flip.restart();
    }

    /// Replays the dark-mode fade (mode toggled).
    pub fn replay_mode_fade(&mut self) {
        self.mode_fade.restart();
    }

    /// Tank fill ratio in `[0, 1]` for the gauge widget.
    #[must_use]
    pub fn tank_ratio(&self) -> f64 {
        (self.tank_fill.value() / 100.0).clamp(0.0, 1.0)
    }

    /// The fill level (percent) the tank is animating toward.
    #[must_use]
    pub fn tank_target_pct(&self) -> f64 {
        self.tank_fill.end()
    }

    /// Horizontal wave offset in `[-20, 20]`.
    #[must_use]
    pub fn wave_shift(&self) -> f64 {
        self.wave_shift.eval(self.wave.progress())
    }

    /// Station marker scale in `[1, 1.3]`.
    #[must_use]
    pub fn marker_scale(&self) -> f64 {
        self.marker_scale.eval(self.marker_pulse.progress())
    }

    /// Sweep angle in `[0, 360)` degrees.
    #[must_use]
    pub fn sweep_angle(&self) -> f64 {
        self.sweep.value()
    }

    /// Ripple ring scale in `[1, 3]`.
    #[must_use]
    pub fn ripple_scale(&self) -> f64 {
        self.ripple_scale.eval(self.ripple.value())
    }

    /// Ripple opacity fading `0.8 -> 0`.
    #[must_use]
    pub fn ripple_alpha(&self) -> f64 {
        self.ripple_alpha.eval(self.ripple.value())
    }

    /// Droplet fall offset in `[0, 20]` rows.
    #[must_use]
    pub fn droplet_drop(&self) -> f64 {
        self.droplet_drop.eval(self.droplet.value())
    }

    /// Droplet opacity fading `1 -> 0`.
    #[must_use]
    pub fn droplet_alpha(&self) -> f64 {
        self.droplet_alpha.eval(self.droplet.value())
    }

    /// Card flip angle in `[0, 90]` degrees, back to 0 at rest.
    #[must_use]
    pub fn flip_angle(&self) -> f64 {
        self.flip_angle.eval(self.card_flip.value())
    }

    /// Chart reveal scale in `[0.8, 1]`.
    #[must_use]
    pub fn chart_scale(&self) -> f64 {
        self.chart_scale.eval(self.chart_reveal.progress())
    }

    /// Chart reveal progress in `[0, 1]`.
    #[must_use]
    pub fn chart_progress(&self) -> f64 {
        self.chart_reveal.progress()
    }

    /// Forecast card scale in `[1, 1.1]`.
    #[must_use]
    pub fn forecast_scale(&self) -> f64 {
        self.forecast_scale.eval(self.forecast_pulse.progress())
    }

    /// Tip card lift in `[-10, 0]` rows.
    #[must_use]
    pub fn float_lift(&self) -> f64 {
        self.float_lift.eval(self.card_float.progress())
    }

    /// Particle rise offset in `[-30, 0]` rows.
    #[must_use]
    pub fn particle_rise(&self) -> f64 {
        self.particle_rise.eval(self.particle.value())
    }

    /// Particle opacity fading `1 -> 0`.
    #[must_use]
    pub fn particle_alpha(&self) -> f64 {
        self.particle_alpha.eval(self.particle.value())
    }

    /// Avatar scale in `[1, 1.05]`.
    #[must_use]
    pub fn avatar_scale(&self) -> f64 {
        self.avatar_scale.eval(self.avatar_pulse.progress())
    }

    /// Screen brightness multiplier during the dark-mode fade.
    #[must_use]
    pub fn mode_dim(&self) -> f64 {
        self.mode_dim.eval(self.mode_fade.progress())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_motion::ChannelState;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn builds_with_any_sane_level() {
        for level in [0.0, 42.0, 72.0, 100.0, 250.0] {
            assert!(Ornaments::new(level).is_ok());
        }
    }

    #[test]
    fn tank_fills_toward_level() {
        let mut ornaments = Ornaments::new(72.0).unwrap();
        assert_eq!(ornaments.tank_ratio(), 0.0);

        ornaments.tick(ms(1000));
        assert_eq!(ornaments.tank_ratio(), 0.36);

        ornaments.tick(ms(5000));
        assert_eq!(ornaments.tank_ratio(), 0.72);
    }

    #[test]
    fn retarget_resumes_from_current_value() {
        let mut ornaments = Ornaments::new(80.0).unwrap();
        ornaments.tick(ms(1000)); // halfway: 40%

        ornaments.retarget_tank(20.0);
        assert_eq!(ornaments.tank_ratio(), 0.4);

        ornaments.tick(ms(2000));
        assert_eq!(ornaments.tank_ratio(), 0.2);
    }

    #[test]
    fn retarget_clamps_out_of_range_levels() {
        let mut ornaments = Ornaments::new(50.0).unwrap();
        ornaments.retarget_tank(500.0);
        assert_eq!(ornaments.tank_target_pct(), 100.0);
    }

    #[test]
    fn wave_shift_stays_in_band() {
        let mut ornaments = Ornaments::new(50.0).unwrap();
        for _ in 0..100 {
            ornaments.tick(ms(173));
            let shift = ornaments.wave_shift();
            assert!((-20.0..=20.0).contains(&shift));
        }
    }

    #[test]
    fn ripple_fades_as_it_expands() {
        let mut ornaments = Ornaments::new(50.0).unwrap();
        ornaments.tick(ms(1500)); // 0.75 into the 2s expansion
        assert!(ornaments.ripple_scale() > 2.0);
        assert!(ornaments.ripple_alpha() < 0.4);
    }

    #[test]
    fn card_flip_is_one_shot_and_replayable() {
        let mut ornaments = Ornaments::new(50.0).unwrap();
        ornaments.tick(ms(75));
        assert_eq!(ornaments.flip_angle(), 45.0);

        ornaments.tick(ms(300));
        assert_eq!(ornaments.flip_angle(), 0.0);

        ornaments.flash_card();
        ornaments.tick(ms(150));
        assert_eq!(ornaments.flip_angle(), 90.0);
    }

    #[test]
    fn mode_fade_completes_and_replays() {
        let mut ornaments = Ornaments::new(50.0).unwrap();
        ornaments.tick(ms(600));
        assert!((ornaments.mode_dim() - 0.8).abs() < 1e-12);

        ornaments.replay_mode_fade();
        assert_eq!(ornaments.mode_dim(), 1.0);
    }

    #[test]
    fn sweep_keeps_looping() {
        let mut ornaments = Ornaments::new(50.0).unwrap();
        ornaments.tick(ms(25_000));
        assert_eq!(ornaments.sweep_angle(), 90.0);
        // Loop channels never complete.
        ornaments.tick(ms(100_000));
        assert_ne!(
            AnimationChannel::unit(ms(10), DriveMode::Loop).unwrap().state(),
            ChannelState::Completed
        );
    }
}
