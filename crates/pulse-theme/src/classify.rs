//! Per-screen category classifiers.
//!
//! Every screen carries a small closed enum (alert severity, station health,
//! impact level, ...) that the render layer turns into a color and a glyph.
//! Classification is total: every enum value resolves, and the string entry
//! points resolve unknown labels to [`Classification::DEFAULT`] instead of
//! failing. Labels are matched case-insensitively because the source data is
//! free-form mock content.

use serde::{Deserialize, Serialize};

use crate::tokens::{Classification, ColorToken, IconToken};

/// A closed category set that resolves to a display color and glyph.
pub trait Classify {
    /// Returns the color/icon pair for this category. Total, never fails.
    fn classify(&self) -> Classification;
}

/// Severity of an alert on the alerts screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    /// Requires immediate attention.
    Critical,
    /// Should be investigated.
    Warning,
    /// Informational, no action required.
    #[default]
    Info,
    /// A previously reported condition recovered.
    Success,
}

impl AlertSeverity {
    /// Returns the severity as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Success => "success",
        }
    }

    /// Parses a label, case-insensitively.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "critical" => Some(Self::Critical),
            "warning" => Some(Self::Warning),
            "info" => Some(Self::Info),
            "success" => Some(Self::Success),
            _ => None,
        }
    }

    /// Classifies a free-form label, falling back to the neutral default.
    #[must_use]
    pub fn classify_label(label: &str) -> Classification {
        Self::from_label(label).map_or(Classification::DEFAULT, |s| s.classify())
    }
}

impl Classify for AlertSeverity {
    fn classify(&self) -> Classification {
        match self {
            Self::Critical => Classification::new(ColorToken::Alert, IconToken::AlertTriangle),
            Self::Warning => Classification::new(ColorToken::Caution, IconToken::AlertTriangle),
            Self::Info => Classification::new(ColorToken::Current, IconToken::Info),
            Self::Success => Classification::new(ColorToken::Flourish, IconToken::CheckCircle),
        }
    }
}

impl std::fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What happened to an alert after the user acted on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertOutcome {
    /// Still open.
    #[default]
    Active,
    /// Marked resolved from the detail pane.
    Resolved,
    /// Dismissed without action.
    Dismissed,
}

impl AlertOutcome {
    /// Returns the outcome as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Resolved => "resolved",
            Self::Dismissed => "dismissed",
        }
    }

    /// Returns true while the alert still needs attention.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl Classify for AlertOutcome {
    fn classify(&self) -> Classification {
        match self {
            Self::Active => Classification::new(ColorToken::Current, IconToken::Bell),
            Self::Resolved => Classification::new(ColorToken::Flourish, IconToken::CheckCircle),
            Self::Dismissed => Classification::new(ColorToken::Mist, IconToken::Info),
        }
    }
}

impl std::fmt::Display for AlertOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Health of a DWLR monitoring station on the map screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StationHealth {
    /// Water level well above seasonal norms.
    Excellent,
    /// Within the expected band.
    #[default]
    Normal,
    /// Below the expected band.
    Warning,
    /// Critically low.
    Critical,
}

impl StationHealth {
    /// Returns the health as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Normal => "normal",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }

    /// Parses a label, case-insensitively.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "excellent" => Some(Self::Excellent),
            "normal" => Some(Self::Normal),
            "warning" => Some(Self::Warning),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }

    /// Classifies a free-form label, falling back to the neutral default.
    #[must_use]
    pub fn classify_label(label: &str) -> Classification {
        Self::from_label(label).map_or(Classification::DEFAULT, |s| s.classify())
    }

    /// Buckets a measured water level (meters) into a health band.
    ///
    /// Bands follow the original station thresholds: below 2m is critical,
    /// below 3m warns, above 7m is excellent.
    #[must_use]
    pub fn from_level_m(level: f64) -> Self {
        if level < 2.0 {
            Self::Critical
        } else if level < 3.0 {
            Self::Warning
        } else if level >= 7.0 {
            Self::Excellent
        } else {
            Self::Normal
        }
    }
}

impl Classify for StationHealth {
    fn classify(&self) -> Classification {
        match self {
            Self::Excellent => Classification::new(ColorToken::Flourish, IconToken::CheckCircle),
            Self::Normal => Classification::new(ColorToken::Current, IconToken::CheckCircle),
            Self::Warning => Classification::new(ColorToken::Caution, IconToken::AlertTriangle),
            Self::Critical => Classification::new(ColorToken::Alert, IconToken::AlertTriangle),
        }
    }
}

impl std::fmt::Display for StationHealth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Impact level of a water-saving recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImpactLevel {
    /// Very high impact on conservation.
    VeryHigh,
    /// High impact.
    High,
    /// Medium impact.
    Medium,
    /// Critical: preventing damage rather than saving water.
    Critical,
}

impl ImpactLevel {
    /// Returns the impact level as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::VeryHigh => "very high impact",
            Self::High => "high impact",
            Self::Medium => "medium impact",
            Self::Critical => "critical",
        }
    }

    /// Parses a label, case-insensitively.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "very high impact" => Some(Self::VeryHigh),
            "high impact" => Some(Self::High),
            "medium impact" => Some(Self::Medium),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }

    /// Classifies a free-form label, falling back to the neutral default.
    #[must_use]
    pub fn classify_label(label: &str) -> Classification {
        Self::from_label(label).map_or(Classification::DEFAULT, |s| s.classify())
    }
}

impl Classify for ImpactLevel {
    fn classify(&self) -> Classification {
        match self {
            Self::VeryHigh => Classification::new(ColorToken::Flourish, IconToken::Droplet),
            Self::High => Classification::new(ColorToken::Current, IconToken::Droplet),
            Self::Medium => Classification::new(ColorToken::Caution, IconToken::Info),
            Self::Critical => Classification::new(ColorToken::Alert, IconToken::AlertTriangle),
        }
    }
}

impl std::fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Conservation achievement tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementTier {
    /// Entry tier.
    Saver,
    /// Middle tier.
    Warrior,
    /// Top tier.
    Hero,
}

impl AchievementTier {
    /// Returns the tier as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Saver => "saver",
            Self::Warrior => "warrior",
            Self::Hero => "hero",
        }
    }

    /// Display title of the tier.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Saver => "Water Saver",
            Self::Warrior => "Water Warrior",
            Self::Hero => "Water Hero",
        }
    }
}

impl Classify for AchievementTier {
    fn classify(&self) -> Classification {
        match self {
            Self::Saver => Classification::new(ColorToken::Current, IconToken::Droplet),
            Self::Warrior => Classification::new(ColorToken::Flourish, IconToken::Sword),
            Self::Hero => Classification::new(ColorToken::Caution, IconToken::Trophy),
        }
    }
}

impl std::fmt::Display for AchievementTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Audience role picked on the profile screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Irrigation-focused view.
    #[default]
    Farmer,
    /// Data-focused view.
    Researcher,
    /// Policy-focused view.
    Policymaker,
}

impl UserRole {
    /// All roles in selector order.
    pub const ALL: [Self; 3] = [Self::Farmer, Self::Researcher, Self::Policymaker];

    /// Returns the role as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Farmer => "farmer",
            Self::Researcher => "researcher",
            Self::Policymaker => "policymaker",
        }
    }

    /// Parses a label, case-insensitively.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "farmer" => Some(Self::Farmer),
            "researcher" => Some(Self::Researcher),
            "policymaker" => Some(Self::Policymaker),
            _ => None,
        }
    }

    /// Classifies a free-form label, falling back to the neutral default.
    #[must_use]
    pub fn classify_label(label: &str) -> Classification {
        Self::from_label(label).map_or(Classification::DEFAULT, |s| s.classify())
    }

    /// The next role in selector order, wrapping around.
    #[must_use]
    pub const fn next(&self) -> Self {
        match self {
            Self::Farmer => Self::Researcher,
            Self::Researcher => Self::Policymaker,
            Self::Policymaker => Self::Farmer,
        }
    }
}

impl Classify for UserRole {
    fn classify(&self) -> Classification {
        match self {
            Self::Farmer => Classification::new(ColorToken::Flourish, IconToken::Leaf),
            Self::Researcher => Classification::new(ColorToken::Current, IconToken::Flask),
            Self::Policymaker => Classification::new(ColorToken::Caution, IconToken::Landmark),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Direction of a stat-card reading since the previous period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Reading improved.
    Up,
    /// Reading declined.
    Down,
}

impl Trend {
    /// Returns the trend as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl Classify for Trend {
    fn classify(&self) -> Classification {
        match self {
            Self::Up => Classification::new(ColorToken::Flourish, IconToken::TrendUp),
            Self::Down => Classification::new(ColorToken::Alert, IconToken::TrendDown),
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tone of an entry in the recent-activity feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    /// Good news (level rose, quality improved).
    Positive,
    /// Routine event.
    #[default]
    Neutral,
    /// Needs attention.
    Warning,
}

impl ActivityKind {
    /// Returns the kind as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Warning => "warning",
        }
    }
}

impl Classify for ActivityKind {
    fn classify(&self) -> Classification {
        match self {
            Self::Positive => Classification::new(ColorToken::Flourish, IconToken::CheckCircle),
            Self::Neutral => Classification::new(ColorToken::Current, IconToken::Info),
            Self::Warning => Classification::new(ColorToken::Caution, IconToken::AlertTriangle),
        }
    }
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reporting window on the analysis screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// One day of readings.
    Daily,
    /// One week of readings.
    #[default]
    Weekly,
    /// One month of readings.
    Monthly,
    /// A full season of readings.
    Seasonal,
}

impl Period {
    /// All periods in selector order.
    pub const ALL: [Self; 4] = [Self::Daily, Self::Weekly, Self::Monthly, Self::Seasonal];

    /// Returns the period as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Seasonal => "seasonal",
        }
    }

    /// The next period in selector order, wrapping around.
    #[must_use]
    pub const fn next(&self) -> Self {
        match self {
            Self::Daily => Self::Weekly,
            Self::Weekly => Self::Monthly,
            Self::Monthly => Self::Seasonal,
            Self::Seasonal => Self::Daily,
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
