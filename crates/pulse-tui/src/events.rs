//! Event handling for the Aqua Pulse TUI

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;
use tracing::info;

use pulse_theme::{ActivityKind, AlertOutcome};

use crate::app::{ActivityItem, App};
use crate::data::DataEvent;

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// Terminal key press
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick for periodic updates
    Tick,
    /// Data update from the feed
    DataUpdate(DataEvent),
}

/// Event handler that polls for terminal events
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
    _tx: mpsc::UnboundedSender<AppEvent>,
}

impl EventHandler {
    /// Starts the polling task and returns the handler.
    #[must_use]
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let event_tx = tx.clone();

        // Spawn terminal event handler
        tokio::spawn(async move {
            loop {
                if event::poll(tick_rate).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key)) => {
                            if event_tx.send(AppEvent::Key(key)).is_err() {
                                break;
                            }
                        }
                        Ok(Event::Resize(w, h)) => {
                            if event_tx.send(AppEvent::Resize(w, h)).is_err() {
                                break;
                            }
                        }
                        _ => {}
                    }
                } else if event_tx.send(AppEvent::Tick).is_err() {
                    break;
                }
            }
        });

        Self { rx, _tx: tx }
    }

    /// Waits for the next event.
    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }

    /// Returns a sender for feeding events from other tasks.
    #[must_use]
    pub fn sender(&self) -> mpsc::UnboundedSender<AppEvent> {
        self._tx.clone()
    }
}

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.running = false;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
        }
        KeyCode::Tab | KeyCode::Right => {
            app.next_tab();
        }
        KeyCode::BackTab | KeyCode::Left => {
            app.prev_tab();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.cursor_up();
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.cursor_down();
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.activate();
        }
        KeyCode::Esc => {
            app.dismiss_detail();
        }
        KeyCode::Char('r') => match app.selected_tab {
            2 => app.set_alert_outcome(AlertOutcome::Resolved),
            5 => app.cycle_role(),
            _ => {}
        },
        KeyCode::Char('d') if app.selected_tab == 2 => {
            app.set_alert_outcome(AlertOutcome::Dismissed);
        }
        KeyCode::Char('p') if app.selected_tab == 3 => {
            app.cycle_period();
        }
        KeyCode::Char('m') => {
            app.toggle_dark_mode();
        }
        KeyCode::Char('n') => {
            app.toggle_notifications();
        }
        KeyCode::Char('e') if app.selected_tab == 5 => {
            // Export is a stub; the dashboard has no outbound integrations.
            info!(period = %app.period, "export requested");
            app.add_activity(ActivityItem {
                timestamp: chrono::Utc::now().timestamp_millis(),
                kind: ActivityKind::Neutral,
                message: format!("Export queued for {} report", app.period),
            });
        }
        KeyCode::Char('s') if app.selected_tab == 5 => {
            info!("share requested");
            app.add_activity(ActivityItem {
                timestamp: chrono::Utc::now().timestamp_millis(),
                kind: ActivityKind::Positive,
                message: "Conservation progress shared".to_string(),
            });
        }
        KeyCode::Char(c @ '1'..='6') => {
            app.selected_tab = (c as usize) - ('1' as usize);
        }
        _ => {}
    }
}
