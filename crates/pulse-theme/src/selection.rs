//! Transient per-screen selection state.
//!
//! Each screen holds at most one selected item (alert, station, tip, ...).
//! Selecting replaces the reference unconditionally; there is no history
//! stack and no validation. The selection lives and dies with the screen.

use serde::{Deserialize, Serialize};

/// At most one selected item of type `T`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection<T> {
    current: Option<T>,
}

impl<T> Selection<T> {
    /// An empty selection.
    #[must_use]
    pub const fn none() -> Self {
        Self { current: None }
    }

    /// Replaces the selection with `item`. Last write wins.
    pub fn select(&mut self, item: T) {
        self.current = Some(item);
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// The currently selected item, if any.
    #[must_use]
    pub const fn get(&self) -> Option<&T> {
        self.current.as_ref()
    }

    /// Takes the selected item out, leaving the selection empty.
    pub fn take(&mut self) -> Option<T> {
        self.current.take()
    }

    /// Returns true when nothing is selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}

impl<T: PartialEq> Selection<T> {
    /// Selects `item`, or clears when it is already selected.
    ///
    /// This is the re-tap behavior of the detail panes: tapping the open
    /// item closes it, tapping another replaces the content.
    pub fn toggle(&mut self, item: T) {
        if self.current.as_ref() == Some(&item) {
            self.current = None;
        } else {
            self.current = Some(item);
        }
    }

    /// Returns true when `item` is the selected one.
    #[must_use]
    pub fn is_selected(&self, item: &T) -> bool {
        self.current.as_ref() == Some(item)
    }
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::none()
    }
}
