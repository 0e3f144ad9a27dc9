//! Dashboard entry point wiring the store and the container
//!
//! The outer application owns a [`Dashboard`] and drives it with the two
//! external signals: status deltas ([`Dashboard::set_status`]) and fresh data
//! payloads (the `set_*` data methods). Status deltas commit to the store
//! first and then propagate; a malformed delta is rejected before any child
//! observes it.

use std::collections::HashMap;
use std::sync::Arc;

use crate::chart::BrushSelection;
use crate::config::DashboardConfig;
use crate::container::{CellListExport, Container, Surfaces};
use crate::error::Result;
use crate::fetch::{DataFetcher, SigInfo};
use crate::notify::Notifier;
use crate::state::{GlobalState, StatusDelta};
use crate::types::{CellId, Value, ViewKind};

pub struct Dashboard {
    store: Arc<GlobalState>,
    container: Container,
}

impl Dashboard {
    pub fn new(
        store: Arc<GlobalState>,
        config: DashboardConfig,
        fetcher: Arc<dyn DataFetcher>,
        notifier: Arc<dyn Notifier>,
        surfaces: Surfaces,
    ) -> Self {
        let container = Container::new(
            store.clone(),
            Arc::new(config),
            fetcher,
            notifier,
            surfaces,
        );
        Self { store, container }
    }

    /// One-time setup of the whole panel tree
    pub async fn init(&mut self) -> Result<()> {
        self.container.init().await
    }

    /// Commit a status delta and propagate it through the panel tree.
    ///
    /// The merge either fully commits before propagation begins or is
    /// rejected wholesale; children receive exactly the delta, not the full
    /// status map.
    pub async fn set_status(&mut self, delta: StatusDelta) -> Result<()> {
        self.store.merge_status(&delta)?;
        self.container.update(&delta).await
    }

    /// Data-change signal: fresh per-cell values for the plotted item
    pub fn set_plotted_values(&self, values: HashMap<CellId, Value>) {
        self.store.set_plotted_values(values);
    }

    /// Data-change signal: fresh signature-info payload
    pub fn set_sig_info(&self, info: SigInfo) {
        self.store.set_sig_info(info);
    }

    /// Data-change signal: fresh cluster assignments
    pub fn set_clusters(&self, clusters: HashMap<CellId, String>) {
        self.store.set_clusters(clusters);
    }

    /// Viewport resize signal (debounced by the container)
    pub fn resize(&mut self) {
        self.container.resize();
    }

    /// Execute a settled resize burst, if any
    pub fn flush_resize(&mut self) -> bool {
        self.container.flush_resize()
    }

    /// A user activated a tab directly
    pub async fn activate_tab(&mut self, kind: ViewKind) -> Result<()> {
        self.container.activate_tab(kind).await
    }

    /// A chart brush/box selection completed
    pub fn handle_brush(&mut self, brush: &BrushSelection) {
        self.container.handle_brush(brush);
    }

    /// Export the current selected-cell list
    pub fn export_selected_cells(&self) -> CellListExport {
        self.container.export_selected_cells()
    }

    pub fn store(&self) -> &Arc<GlobalState> {
        &self.store
    }

    pub fn container(&self) -> &Container {
        &self.container
    }
}
