//! Display tokens resolved by the classifiers.
//!
//! The render surface decides what a token looks like (terminal color,
//! glyph width, pixels); this module only fixes the closed vocabulary and
//! the reference RGB values of the Aqua Pulse palette.

use serde::{Deserialize, Serialize};

/// A display color from the Aqua Pulse palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    /// Critical red (#FF4444).
    Alert,
    /// Warning amber (#FFB800).
    Caution,
    /// Positive green (#00FF88).
    Flourish,
    /// Informational cyan (#00D4FF).
    Current,
    /// Neutral slate (#4A90A4), the fallback color.
    Mist,
}

impl ColorToken {
    /// Returns the token as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Alert => "alert",
            Self::Caution => "caution",
            Self::Flourish => "flourish",
            Self::Current => "current",
            Self::Mist => "mist",
        }
    }

    /// Reference RGB value of this token.
    #[must_use]
    pub const fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Self::Alert => (0xFF, 0x44, 0x44),
            Self::Caution => (0xFF, 0xB8, 0x00),
            Self::Flourish => (0x00, 0xFF, 0x88),
            Self::Current => (0x00, 0xD4, 0xFF),
            Self::Mist => (0x4A, 0x90, 0xA4),
        }
    }
}

impl std::fmt::Display for ColorToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A glyph choice resolved alongside a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconToken {
    /// Warning triangle.
    AlertTriangle,
    /// Check mark in a circle.
    CheckCircle,
    /// Informational mark, the fallback icon.
    Info,
    /// Notification bell.
    Bell,
    /// Map pin for stations.
    MapPin,
    /// Water droplet.
    Droplet,
    /// Achievement trophy.
    Trophy,
    /// Crossed swords for the warrior tier.
    Sword,
    /// Crop leaf for the farmer role.
    Leaf,
    /// Lab flask for the researcher role.
    Flask,
    /// Government building for the policymaker role.
    Landmark,
    /// Rising trend arrow.
    TrendUp,
    /// Falling trend arrow.
    TrendDown,
}

impl IconToken {
    /// Returns the token as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AlertTriangle => "alert-triangle",
            Self::CheckCircle => "check-circle",
            Self::Info => "info",
            Self::Bell => "bell",
            Self::MapPin => "map-pin",
            Self::Droplet => "droplet",
            Self::Trophy => "trophy",
            Self::Sword => "sword",
            Self::Leaf => "leaf",
            Self::Flask => "flask",
            Self::Landmark => "landmark",
            Self::TrendUp => "trend-up",
            Self::TrendDown => "trend-down",
        }
    }

    /// Terminal glyph for this token.
    #[must_use]
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::AlertTriangle => "⚠",
            Self::CheckCircle => "✔",
            Self::Info => "ℹ",
            Self::Bell => "🔔",
            Self::MapPin => "📍",
            Self::Droplet => "💧",
            Self::Trophy => "🏆",
            Self::Sword => "⚔",
            Self::Leaf => "🌾",
            Self::Flask => "🔬",
            Self::Landmark => "🏛",
            Self::TrendUp => "▲",
            Self::TrendDown => "▼",
        }
    }
}

impl std::fmt::Display for IconToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The color/icon pair a classifier resolves a category to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Classification {
    /// Display color.
    pub color: ColorToken,
    /// Display glyph.
    pub icon: IconToken,
}

impl Classification {
    /// The neutral fallback pair returned for unknown categories.
    pub const DEFAULT: Self = Self {
        color: ColorToken::Mist,
        icon: IconToken::Info,
    };

    /// Creates a classification.
    #[must_use]
    pub const fn new(color: ColorToken, icon: IconToken) -> Self {
        Self { color, icon }
    }
}

impl Default for Classification {
    fn default() -> Self {
        Self::DEFAULT
    }
}
