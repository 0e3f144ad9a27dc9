//! # CellVis-RS: Single-Cell Dashboard View Layer
//!
//! The client-side view core of an interactive single-cell-analysis dashboard:
//! a tree of visualization panels (distribution plot, signature table, cluster
//! heatmap, cell/selection summaries) that render server-supplied analytical
//! results and react to two external signals: a *status* change (what is
//! selected/plotted now) and a *data* change (freshly fetched values for the
//! thing currently plotted).
//!
//! ## Architecture
//!
//! - **Store**: [`GlobalState`] is the single source of truth, mutated only
//!   through its atomic merge operation and injected into every component
//! - **Views**: each panel is a struct implementing the [`View`] trait
//!   (`init`, `update`, `resize`, lazy flags), iterated polymorphically by the
//!   [`Container`]
//! - **Container**: owns the child views and the tab/nav policy, fans status
//!   deltas out to children and coalesces resize bursts
//! - **Seams**: rendering surfaces ([`render`]), the fetch capability
//!   ([`fetch`]) and the outbound notification channel ([`notify`]) are
//!   injected trait objects, so the core runs without a rendering environment
//!
//! ## Update protocol
//!
//! A user action calls [`Dashboard::set_status`] with a partial delta. The
//! delta is merge-committed into the store first, then fanned out unchanged to
//! every child view. Each child inspects only the keys it cares about; if it
//! must redraw while hidden it sets a lazy flag instead, and the deferred draw
//! runs when its tab next becomes active.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use cellvis_rs::{Dashboard, DashboardConfig, GlobalState, StatusDelta};
//! use cellvis_rs::notify::ChannelNotifier;
//!
//! let store = Arc::new(GlobalState::default());
//! let (notifier, events) = ChannelNotifier::new();
//! let mut dashboard = Dashboard::new(
//!     store.clone(),
//!     DashboardConfig::default(),
//!     fetcher,
//!     Arc::new(notifier),
//!     surfaces,
//! );
//! dashboard.init().await?;
//!
//! dashboard
//!     .set_status(
//!         StatusDelta::default().with_plotted_item("CD8A", cellvis_rs::ItemType::Gene),
//!     )
//!     .await?;
//! ```

pub mod chart;
pub mod config;
pub mod container;
pub mod dashboard;
pub mod debounce;
pub mod error;
pub mod fetch;
pub mod format;
pub mod notify;
pub mod render;
pub mod state;
pub mod types;
pub mod views;

// Re-export commonly used types
pub use config::DashboardConfig;
pub use container::Container;
pub use dashboard::Dashboard;
pub use error::{CellVisError, Result};
pub use state::{GlobalState, Status, StatusDelta};
pub use types::{CellId, ItemType, SelectionType, Value, ViewKind};
pub use views::View;
