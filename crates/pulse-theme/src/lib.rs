//! Status classification and selection state for the Aqua Pulse dashboard.
//!
//! Every screen of the dashboard carries a small closed category set (alert
//! severity, station health, impact level, achievement tier, user role) that
//! the render layer turns into a display color and a glyph. `pulse-theme`
//! fixes those vocabularies and guarantees total classification: every enum
//! value resolves, and unknown free-form labels resolve to a neutral default
//! instead of failing.
//!
//! # Example
//!
//! ```rust
//! use pulse_theme::{AlertSeverity, Classification, Classify, ColorToken};
//!
//! let c = AlertSeverity::Critical.classify();
//! assert_eq!(c.color, ColorToken::Alert);
//!
//! // Unknown labels never fail; they fall back to the neutral pair.
//! assert_eq!(AlertSeverity::classify_label("mystery"), Classification::DEFAULT);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod selection;
pub mod tokens;

// Re-export main types at crate root
pub use classify::{
    AchievementTier, ActivityKind, AlertOutcome, AlertSeverity, Classify, ImpactLevel, Period,
    StationHealth, Trend, UserRole,
};
pub use selection::Selection;
pub use tokens::{Classification, ColorToken, IconToken};
