//! Outbound notification channel
//!
//! The one path by which view-layer interaction feeds back into the outer
//! application: a structured event channel instead of browser events and
//! blocking alerts.

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::types::CellId;

/// Events emitted to the outer controller
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    /// A chart brush/box selection completed (empty on deselect)
    CellsSelected { cells: Vec<CellId> },
    /// User-visible, non-blocking status message
    Notice(String),
}

/// Sink for cross-cutting notifications raised by views
pub trait Notifier: Send + Sync {
    /// Raise a cells-selected notification (empty set on deselect)
    fn cells_selected(&self, cells: Vec<CellId>);

    /// Raise a user-visible notice (e.g. "not a cell property")
    fn notice(&self, message: &str);
}

/// [`Notifier`] implementation over a crossbeam channel
pub struct ChannelNotifier {
    tx: Sender<DashboardEvent>,
}

impl ChannelNotifier {
    /// Create a notifier plus the receiver the outer controller drains
    pub fn new() -> (Self, Receiver<DashboardEvent>) {
        let (tx, rx) = unbounded();
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn cells_selected(&self, cells: Vec<CellId>) {
        tracing::debug!(count = cells.len(), "cells selected");
        // A send fails only when the outer controller has gone away
        let _ = self.tx.send(DashboardEvent::CellsSelected { cells });
    }

    fn notice(&self, message: &str) {
        let _ = self.tx.send(DashboardEvent::Notice(message.to_string()));
    }
}
