//! Aqua Pulse Terminal UI Library
//!
//! Terminal dashboard for groundwater readings from the DWLR station
//! network. This library provides the screens, mock content, and animation
//! wiring; interaction (alert triage, role and display toggles) mutates
//! session state only and is never written back upstream.

pub mod app;
pub mod data;
pub mod events;
pub mod motion;
pub mod ui;
