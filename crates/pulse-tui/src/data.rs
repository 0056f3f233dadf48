//! Seed content and the demo data feed
//!
//! There is no live backend; everything here is representative mock
//! content: the DWLR station network, an alert backlog, conservation tips,
//! and a background task that nudges readings to keep the screens alive.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::debug;

use pulse_theme::{
    AchievementTier, ActivityKind, AlertOutcome, AlertSeverity, ImpactLevel, Period, StationHealth,
};

use crate::app::{
    Achievement, ActivityItem, AlertRecord, App, ConservationTip, Readings, Station,
};
use crate::events::AppEvent;

/// One update pushed by the data feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DataEvent {
    /// Fresh headline readings
    Readings {
        /// Tank fill level in percent
        water_level_pct: f64,
        /// Recharge rate in liters per minute
        recharge_lpm: f64,
        /// Quality index out of 10
        quality_index: f64,
    },
    /// A single station reported a new level
    StationLevel {
        /// Station id
        id: u32,
        /// Water level in meters
        level_m: f64,
    },
    /// Something happened worth putting in the feed
    Activity {
        /// Feed tone
        kind: ActivityKind,
        /// Message text
        message: String,
    },
}

/// Applies a feed update to the app state.
pub fn apply_data_event(app: &mut App, event: DataEvent) {
    match event {
        DataEvent::Readings {
            water_level_pct,
            recharge_lpm,
            quality_index,
        } => {
            let readings = Readings {
                water_level_pct,
                recharge_lpm,
                quality_index,
                ..app.readings.clone()
            };
            app.apply_readings(readings);
        }
        DataEvent::StationLevel { id, level_m } => {
            app.apply_station_level(id, level_m);
        }
        DataEvent::Activity { kind, message } => {
            app.add_activity(ActivityItem {
                timestamp: chrono::Utc::now().timestamp_millis(),
                kind,
                message,
            });
        }
    }
}

/// Seeds the DWLR station network.
pub fn seed_stations() -> Vec<Station> {
    let raw: [(u32, &str, f64, f64, f64); 5] = [
        (1, "Station Alpha", 28.6139, 77.2090, 4.2),
        (2, "Station Beta", 28.6219, 77.2190, 2.1),
        (3, "Station Gamma", 28.6039, 77.1990, 1.3),
        (4, "Station Delta", 28.6339, 77.2290, 5.8),
        (5, "Station Echo", 28.5939, 77.1890, 7.2),
    ];

    raw.into_iter()
        .map(|(id, name, latitude, longitude, level_m)| Station {
            id,
            name: name.to_string(),
            latitude,
            longitude,
            level_m,
            health: StationHealth::from_level_m(level_m),
        })
        .collect()
}

/// Seeds the alert backlog.
pub fn seed_alerts() -> Vec<AlertRecord> {
    let now = chrono::Utc::now().timestamp_millis();
    vec![
        AlertRecord {
            id: 1,
            severity: AlertSeverity::Critical,
            outcome: AlertOutcome::Active,
            title: "Water level critically low".to_string(),
            message: "Station Gamma reports 1.3m, below the 2.0m critical threshold. \
                      Irrigation drawdown suspected."
                .to_string(),
            location: "Station Gamma".to_string(),
            timestamp: now - 2 * 60 * 60 * 1000,
        },
        AlertRecord {
            id: 2,
            severity: AlertSeverity::Warning,
            outcome: AlertOutcome::Active,
            title: "Declining trend detected".to_string(),
            message: "Station Beta has dropped 0.4m over the past week. Recharge is not \
                      keeping pace with extraction."
                .to_string(),
            location: "Station Beta".to_string(),
            timestamp: now - 6 * 60 * 60 * 1000,
        },
        AlertRecord {
            id: 3,
            severity: AlertSeverity::Success,
            outcome: AlertOutcome::Resolved,
            title: "Recharge target met".to_string(),
            message: "Monsoon recharge at Station Echo reached the seasonal target two \
                      weeks early."
                .to_string(),
            location: "Station Echo".to_string(),
            timestamp: now - 24 * 60 * 60 * 1000,
        },
        AlertRecord {
            id: 4,
            severity: AlertSeverity::Info,
            outcome: AlertOutcome::Active,
            title: "Sensor maintenance scheduled".to_string(),
            message: "Station Delta goes offline for calibration on Saturday between \
                      02:00 and 04:00."
                .to_string(),
            location: "Station Delta".to_string(),
            timestamp: now - 48 * 60 * 60 * 1000,
        },
    ]
}

/// Seeds the conservation tips.
pub fn seed_tips() -> Vec<ConservationTip> {
    vec![
        ConservationTip {
            id: 1,
            category: "agriculture".to_string(),
            icon: "💧".to_string(),
            title: "Switch to drip irrigation".to_string(),
            description: "Drip systems deliver water directly to the root zone, cutting \
                          field losses from evaporation and runoff."
                .to_string(),
            impact: ImpactLevel::VeryHigh,
            savings: "30-50% less water".to_string(),
        },
        ConservationTip {
            id: 2,
            category: "home".to_string(),
            icon: "🏠".to_string(),
            title: "Harvest rooftop rainwater".to_string(),
            description: "A modest rooftop system recharges the local aquifer and covers \
                          non-potable household use through the dry season."
                .to_string(),
            impact: ImpactLevel::High,
            savings: "up to 40,000 L/year".to_string(),
        },
        ConservationTip {
            id: 3,
            category: "urban".to_string(),
            icon: "🔧".to_string(),
            title: "Fix leaking fixtures".to_string(),
            description: "A single dripping tap wastes thousands of liters a year. Check \
                          joints and washers quarterly."
                .to_string(),
            impact: ImpactLevel::Medium,
            savings: "up to 11,000 L/year".to_string(),
        },
        ConservationTip {
            id: 4,
            category: "environment".to_string(),
            icon: "🌾".to_string(),
            title: "Plant native species".to_string(),
            description: "Native vegetation thrives on local rainfall and needs little to \
                          no irrigation once established."
                .to_string(),
            impact: ImpactLevel::High,
            savings: "50-75% less garden water".to_string(),
        },
    ]
}

/// Seeds the achievements.
pub fn seed_achievements() -> Vec<Achievement> {
    vec![
        Achievement {
            id: 1,
            tier: AchievementTier::Saver,
            progress_pct: 100,
        },
        Achievement {
            id: 2,
            tier: AchievementTier::Warrior,
            progress_pct: 65,
        },
        Achievement {
            id: 3,
            tier: AchievementTier::Hero,
            progress_pct: 30,
        },
    ]
}

/// Seeds the initial activity feed.
pub fn seed_activity() -> Vec<ActivityItem> {
    let now = chrono::Utc::now().timestamp_millis();
    vec![
        ActivityItem {
            timestamp: now - 10 * 60 * 1000,
            kind: ActivityKind::Positive,
            message: "Recharge rate improved at Station Echo".to_string(),
        },
        ActivityItem {
            timestamp: now - 45 * 60 * 1000,
            kind: ActivityKind::Warning,
            message: "Level dipped below 2.5m at Station Beta".to_string(),
        },
        ActivityItem {
            timestamp: now - 90 * 60 * 1000,
            kind: ActivityKind::Neutral,
            message: "Daily readings synced from 5 stations".to_string(),
        },
    ]
}

/// Usage series for the analysis charts, current then previous period.
#[must_use]
pub fn trend_series(period: Period) -> (&'static [u64], &'static [u64]) {
    match period {
        Period::Daily => (
            &[68, 70, 66, 71, 69, 73, 70],
            &[52, 50, 54, 51, 55, 53, 56],
        ),
        Period::Weekly => (
            &[65, 72, 68, 75, 71, 78, 74],
            &[45, 52, 48, 55, 51, 58, 54],
        ),
        Period::Monthly => (
            &[62, 66, 71, 69, 74, 70, 76],
            &[48, 51, 47, 53, 50, 55, 52],
        ),
        Period::Seasonal => (
            &[58, 64, 72, 78, 74, 68, 61],
            &[42, 47, 53, 58, 55, 50, 44],
        ),
    }
}

/// Background task that pushes randomized readings into the event channel.
///
/// Runs until the receiver drops.
pub async fn run_demo_feed(tx: mpsc::UnboundedSender<AppEvent>, interval: Duration) {
    let mut rng = StdRng::from_entropy();
    let mut ticker = tokio::time::interval(interval);
    let mut level_pct = 72.0_f64;

    loop {
        ticker.tick().await;

        level_pct = (level_pct + rng.gen_range(-3.0..3.0)).clamp(10.0, 95.0);
        let event = if rng.gen_bool(0.7) {
            DataEvent::Readings {
                water_level_pct: level_pct,
                recharge_lpm: rng.gen_range(110.0..180.0),
                quality_index: rng.gen_range(7.0..9.5),
            }
        } else {
            let id = rng.gen_range(1..=5);
            DataEvent::StationLevel {
                id,
                level_m: rng.gen_range(0.8..8.0),
            }
        };

        debug!(?event, "demo feed update");
        if tx.send(AppEvent::DataUpdate(event)).is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn station_health_matches_seeded_levels() {
        let stations = seed_stations();
        assert_eq!(stations.len(), 5);
        assert_eq!(stations[0].health, StationHealth::Normal);
        assert_eq!(stations[1].health, StationHealth::Warning);
        assert_eq!(stations[2].health, StationHealth::Critical);
        assert_eq!(stations[4].health, StationHealth::Excellent);
    }

    #[test]
    fn alert_backlog_has_one_resolved_entry() {
        let alerts = seed_alerts();
        assert_eq!(alerts.len(), 4);
        let resolved = alerts
            .iter()
            .filter(|a| a.outcome == AlertOutcome::Resolved)
            .count();
        assert_eq!(resolved, 1);
    }

    #[test]
    fn trend_series_are_paired_and_nonempty() {
        for period in Period::ALL {
            let (current, previous) = trend_series(period);
            assert_eq!(current.len(), previous.len());
            assert!(!current.is_empty());
        }
    }

    #[test]
    fn readings_event_updates_level_and_tank() {
        let mut app = App::new().unwrap();
        apply_data_event(
            &mut app,
            DataEvent::Readings {
                water_level_pct: 50.0,
                recharge_lpm: 160.0,
                quality_index: 8.0,
            },
        );
        assert_eq!(app.readings.water_level_pct, 50.0);
        assert_eq!(app.readings.recharge_lpm, 160.0);
        assert_eq!(app.ornaments.tank_target_pct(), 50.0);
        // Untouched fields keep their previous values.
        assert_eq!(app.readings.depth_m, -4.5);
    }

    #[test]
    fn station_event_rebuckets_health() {
        let mut app = App::new().unwrap();
        apply_data_event(&mut app, DataEvent::StationLevel { id: 4, level_m: 7.5 });
        let delta = app.stations.iter().find(|s| s.id == 4).unwrap();
        assert_eq!(delta.health, StationHealth::Excellent);
    }

    #[test]
    fn activity_event_lands_at_the_front() {
        let mut app = App::new().unwrap();
        apply_data_event(
            &mut app,
            DataEvent::Activity {
                kind: ActivityKind::Positive,
                message: "test entry".to_string(),
            },
        );
        assert_eq!(app.activity[0].message, "test entry");
    }

    #[test]
    fn event_round_trips_through_json() {
        let event = DataEvent::StationLevel { id: 2, level_m: 3.5 };
        let json = serde_json::to_string(&event).unwrap();
        let back: DataEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
