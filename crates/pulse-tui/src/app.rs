//! Application state for the Aqua Pulse TUI

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use pulse_theme::{
    AchievementTier, ActivityKind, AlertOutcome, AlertSeverity, Period, Selection, StationHealth,
    UserRole,
};

use crate::data;
use crate::motion::Ornaments;

/// Maximum number of activity items to keep
const MAX_ACTIVITY_ITEMS: usize = 100;

/// Tab titles in header order
pub const TAB_TITLES: [&str; 6] = [
    "Overview",
    "Stations",
    "Alerts",
    "Analysis",
    "Conserve",
    "Profile",
];

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Is the app running
    pub running: bool,

    /// Currently selected tab
    pub selected_tab: usize,

    /// Headline aquifer readings
    pub readings: Readings,

    /// DWLR station network
    pub stations: Vec<Station>,

    /// Cursor into the station table
    pub station_cursor: usize,

    /// Station opened in the detail pane
    pub selected_station: Selection<u32>,

    /// Alert feed
    pub alerts: Vec<AlertRecord>,

    /// Cursor into the alert list
    pub alert_cursor: usize,

    /// Alert opened in the detail pane
    pub selected_alert: Selection<u32>,

    /// Water-saving tips
    pub tips: Vec<ConservationTip>,

    /// Cursor into the tip list
    pub tip_cursor: usize,

    /// Tip opened in the detail pane
    pub selected_tip: Selection<u32>,

    /// Conservation achievements
    pub achievements: Vec<Achievement>,

    /// Conservation points total
    pub user_points: u32,

    /// Reporting window on the analysis tab
    pub period: Period,

    /// Recent activity feed
    pub activity: VecDeque<ActivityItem>,

    /// Scroll offset for the activity feed
    pub activity_scroll: usize,

    /// Audience role on the profile tab
    pub role: UserRole,

    /// Dark-mode flag
    pub dark_mode: bool,

    /// Notifications flag
    pub notifications: bool,

    /// Decorative animation channels
    pub ornaments: Ornaments,

    /// Last update timestamp
    pub last_update: Option<i64>,
}

impl App {
    /// Builds the app with seeded mock content.
    ///
    /// # Errors
    ///
    /// Only when the animation constants are malformed, which would be a
    /// programming error.
    pub fn new() -> pulse_motion::Result<Self> {
        let readings = Readings::default();
        let ornaments = Ornaments::new(readings.water_level_pct)?;
        let mut activity = VecDeque::with_capacity(MAX_ACTIVITY_ITEMS);
        activity.extend(data::seed_activity());

        Ok(Self {
            running: true,
            selected_tab: 0,
            readings,
            stations: data::seed_stations(),
            station_cursor: 0,
            selected_station: Selection::none(),
            alerts: data::seed_alerts(),
            alert_cursor: 0,
            selected_alert: Selection::none(),
            tips: data::seed_tips(),
            tip_cursor: 0,
            selected_tip: Selection::none(),
            achievements: data::seed_achievements(),
            user_points: 1250,
            period: Period::default(),
            activity,
            activity_scroll: 0,
            role: UserRole::default(),
            dark_mode: false,
            notifications: true,
            ornaments,
            last_update: None,
        })
    }

    /// Pushes an activity item, trimming the feed to its cap.
    pub fn add_activity(&mut self, item: ActivityItem) {
        self.activity.push_front(item);
        if self.activity.len() > MAX_ACTIVITY_ITEMS {
            self.activity.pop_back();
        }
    }

    /// Moves to the next tab, wrapping around.
    pub fn next_tab(&mut self) {
        self.selected_tab = (self.selected_tab + 1) % TAB_TITLES.len();
    }

    /// Moves to the previous tab, wrapping around.
    pub fn prev_tab(&mut self) {
        if self.selected_tab > 0 {
            self.selected_tab -= 1;
        } else {
            self.selected_tab = TAB_TITLES.len() - 1;
        }
    }

    /// Moves the active list cursor down on the current tab.
    pub fn cursor_down(&mut self) {
        match self.selected_tab {
            0 => {
                if self.activity_scroll < self.activity.len().saturating_sub(1) {
                    self.activity_scroll += 1;
                }
            }
            1 => Self::step(&mut self.station_cursor, self.stations.len()),
            2 => Self::step(&mut self.alert_cursor, self.alerts.len()),
            4 => Self::step(&mut self.tip_cursor, self.tips.len()),
            _ => {}
        }
    }

    /// Moves the active list cursor up on the current tab.
    pub fn cursor_up(&mut self) {
        match self.selected_tab {
            0 => self.activity_scroll = self.activity_scroll.saturating_sub(1),
            1 => self.station_cursor = self.station_cursor.saturating_sub(1),
            2 => self.alert_cursor = self.alert_cursor.saturating_sub(1),
            4 => self.tip_cursor = self.tip_cursor.saturating_sub(1),
            _ => {}
        }
    }

    fn step(cursor: &mut usize, len: usize) {
        if *cursor < len.saturating_sub(1) {
            *cursor += 1;
        }
    }

    /// Toggles the detail pane for the item under the cursor.
    pub fn activate(&mut self) {
        match self.selected_tab {
            1 => {
                if let Some(station) = self.stations.get(self.station_cursor) {
                    self.selected_station.toggle(station.id);
                }
            }
            2 => {
                if let Some(alert) = self.alerts.get(self.alert_cursor) {
                    self.selected_alert.toggle(alert.id);
                    self.ornaments.flash_card();
                }
            }
            4 => {
                if let Some(tip) = self.tips.get(self.tip_cursor) {
                    self.selected_tip.toggle(tip.id);
                }
            }
            _ => {}
        }
    }

    /// Closes whichever detail pane is open on the current tab.
    pub fn dismiss_detail(&mut self) {
        match self.selected_tab {
            1 => self.selected_station.clear(),
            2 => self.selected_alert.clear(),
            4 => self.selected_tip.clear(),
            _ => {}
        }
    }

    /// Marks the selected (or cursored) alert with `outcome`.
    pub fn set_alert_outcome(&mut self, outcome: AlertOutcome) {
        let id = self
            .selected_alert
            .get()
            .copied()
            .or_else(|| self.alerts.get(self.alert_cursor).map(|a| a.id));
        let Some(id) = id else { return };

        if let Some(alert) = self.alerts.iter_mut().find(|a| a.id == id) {
            alert.outcome = outcome;
            let kind = match outcome {
                AlertOutcome::Resolved => ActivityKind::Positive,
                _ => ActivityKind::Neutral,
            };
            let message = format!("Alert '{}' {}", alert.title, outcome);
            self.add_activity(ActivityItem {
                timestamp: chrono::Utc::now().timestamp_millis(),
                kind,
                message,
            });
        }
    }

    /// Cycles the analysis reporting window.
    pub fn cycle_period(&mut self) {
        self.period = self.period.next();
    }

    /// Cycles the profile role.
    pub fn cycle_role(&mut self) {
        self.role = self.role.next();
    }

    /// Flips dark mode and replays the fade transition.
    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        self.ornaments.replay_mode_fade();
    }

    /// Flips the notifications switch.
    pub fn toggle_notifications(&mut self) {
        self.notifications = !self.notifications;
    }

    /// Applies a fresh set of headline readings.
    pub fn apply_readings(&mut self, readings: Readings) {
        self.readings = readings;
        self.ornaments.retarget_tank(self.readings.water_level_pct);
        self.last_update = Some(chrono::Utc::now().timestamp_millis());
    }

    /// Updates one station's level and re-buckets its health.
    pub fn apply_station_level(&mut self, id: u32, level_m: f64) {
        if let Some(station) = self.stations.iter_mut().find(|s| s.id == id) {
            station.level_m = level_m;
            station.health = StationHealth::from_level_m(level_m);
        }
    }
}

/// Headline aquifer readings shown on the overview tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Readings {
    /// Tank fill level in percent
    pub water_level_pct: f64,
    /// Depth of the water table in meters (negative = below ground)
    pub depth_m: f64,
    /// Available water in millions of liters
    pub available_ml: f64,
    /// Change in available water since the previous period, percent
    pub available_change_pct: f64,
    /// Recharge rate in liters per minute
    pub recharge_lpm: f64,
    /// Change in recharge rate since the previous period, percent
    pub recharge_change_pct: f64,
    /// Quality index out of 10
    pub quality_index: f64,
    /// Change in quality index since the previous period
    pub quality_change: f64,
}

impl Default for Readings {
    fn default() -> Self {
        Self {
            water_level_pct: 72.0,
            depth_m: -4.5,
            available_ml: 2.8,
            available_change_pct: 5.2,
            recharge_lpm: 145.0,
            recharge_change_pct: -2.1,
            quality_index: 8.4,
            quality_change: 0.3,
        }
    }
}

/// One DWLR monitoring station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Station id
    pub id: u32,
    /// Display name
    pub name: String,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Measured water level in meters
    pub level_m: f64,
    /// Health bucket derived from the level
    pub health: StationHealth,
}

/// One alert in the feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRecord {
    /// Alert id
    pub id: u32,
    /// Severity bucket
    pub severity: AlertSeverity,
    /// What the user did with it
    pub outcome: AlertOutcome,
    /// Short title
    pub title: String,
    /// Full message
    pub message: String,
    /// Where the alert originated
    pub location: String,
    /// When the alert fired, epoch millis
    pub timestamp: i64,
}

/// One water-saving tip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConservationTip {
    /// Tip id
    pub id: u32,
    /// Audience category (agriculture, home, urban, environment)
    pub category: String,
    /// Decorative glyph
    pub icon: String,
    /// Short title
    pub title: String,
    /// Full description
    pub description: String,
    /// Impact bucket
    pub impact: pulse_theme::ImpactLevel,
    /// Headline savings claim
    pub savings: String,
}

/// One conservation achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    /// Achievement id
    pub id: u32,
    /// Tier (fixes title, color, and glyph)
    pub tier: AchievementTier,
    /// Completion in percent
    pub progress_pct: u16,
}

/// One entry in the recent-activity feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityItem {
    /// When it happened, epoch millis
    pub timestamp: i64,
    /// Feed tone
    pub kind: ActivityKind,
    /// Message text
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new().unwrap()
    }

    #[test]
    fn starts_on_overview_with_content() {
        let app = app();
        assert_eq!(app.selected_tab, 0);
        assert!(app.running);
        assert!(!app.stations.is_empty());
        assert!(!app.alerts.is_empty());
        assert!(!app.tips.is_empty());
        assert!(!app.achievements.is_empty());
    }

    #[test]
    fn tab_cycling_wraps_both_ways() {
        let mut app = app();
        for _ in 0..TAB_TITLES.len() {
            app.next_tab();
        }
        assert_eq!(app.selected_tab, 0);

        app.prev_tab();
        assert_eq!(app.selected_tab, TAB_TITLES.len() - 1);
    }

    #[test]
    fn cursor_stops_at_list_edges() {
        let mut app = app();
        app.selected_tab = 2;
        for _ in 0..50 {
            app.cursor_down();
        }
        assert_eq!(app.alert_cursor, app.alerts.len() - 1);

        for _ in 0..50 {
            app.cursor_up();
        }
        assert_eq!(app.alert_cursor, 0);
    }

    #[test]
    fn activate_toggles_the_alert_detail() {
        let mut app = app();
        app.selected_tab = 2;
        app.activate();
        let first = app.alerts[0].id;
        assert!(app.selected_alert.is_selected(&first));

        // Re-activating the same item closes the pane.
        app.activate();
        assert!(app.selected_alert.is_empty());
    }

    #[test]
    fn selecting_another_alert_replaces_the_detail() {
        let mut app = app();
        app.selected_tab = 2;
        app.activate();
        app.cursor_down();
        app.activate();
        let second = app.alerts[1].id;
        assert_eq!(app.selected_alert.get(), Some(&second));
    }

    #[test]
    fn resolving_an_alert_records_activity() {
        let mut app = app();
        app.selected_tab = 2;
        let before = app.activity.len();
        app.activate();
        app.set_alert_outcome(AlertOutcome::Resolved);

        assert_eq!(app.alerts[0].outcome, AlertOutcome::Resolved);
        assert_eq!(app.activity.len(), before + 1);
        assert_eq!(app.activity[0].kind, ActivityKind::Positive);
    }

    #[test]
    fn dismiss_without_selection_uses_the_cursor() {
        let mut app = app();
        app.selected_tab = 2;
        app.cursor_down();
        app.set_alert_outcome(AlertOutcome::Dismissed);
        assert_eq!(app.alerts[1].outcome, AlertOutcome::Dismissed);
    }

    #[test]
    fn period_and_role_cycles_wrap() {
        let mut app = app();
        let start_period = app.period;
        for _ in 0..Period::ALL.len() {
            app.cycle_period();
        }
        assert_eq!(app.period, start_period);

        let start_role = app.role;
        for _ in 0..UserRole::ALL.len() {
            app.cycle_role();
        }
        assert_eq!(app.role, start_role);
    }

    #[test]
    fn dark_mode_toggle_replays_the_fade() {
        let mut app = app();
        app.ornaments.tick(std::time::Duration::from_millis(600));
        assert!(app.ornaments.mode_dim() < 1.0);

        app.toggle_dark_mode();
        assert!(app.dark_mode);
        assert_eq!(app.ornaments.mode_dim(), 1.0);
    }

    #[test]
    fn readings_update_retargets_the_tank() {
        let mut app = app();
        let readings = Readings {
            water_level_pct: 30.0,
            ..Readings::default()
        };
        app.apply_readings(readings);
        assert_eq!(app.ornaments.tank_target_pct(), 30.0);
        assert!(app.last_update.is_some());
    }

    #[test]
    fn station_level_update_rebuckets_health() {
        let mut app = app();
        let id = app.stations[0].id;
        app.apply_station_level(id, 1.0);
        assert_eq!(app.stations[0].health, StationHealth::Critical);
        assert_eq!(app.stations[0].level_m, 1.0);
    }

    #[test]
    fn activity_feed_is_capped() {
        let mut app = app();
        for i in 0..300 {
            app.add_activity(ActivityItem {
                timestamp: i,
                kind: ActivityKind::Neutral,
                message: format!("event {i}"),
            });
        }
        assert_eq!(app.activity.len(), MAX_ACTIVITY_ITEMS);
        // Newest first.
        assert_eq!(app.activity[0].timestamp, 299);
    }
}
