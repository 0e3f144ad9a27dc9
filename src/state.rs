//! Global status store and data payload cache
//!
//! [`GlobalState`] is the single source of truth read by every view. It holds
//! two kinds of state:
//!
//! - **Status**: small, synchronously updated description of what is currently
//!   selected/plotted
//! - **Data payloads**: larger fetched results in typed cache slots, each
//!   holding the most recent successful fetch until superseded
//!
//! Status is mutated only through [`GlobalState::merge_status`], which commits
//! a partial delta atomically or rejects it wholesale. Views receiving a delta
//! must read any "current full state" back from the store, never assume the
//! delta is complete.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::{CellVisError, Result};
use crate::fetch::SigInfo;
use crate::types::{CellId, ItemType, SelectionType, Value};

/// The authoritative status map: what is selected/plotted right now
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Status {
    /// Name of the plotted gene or signature
    pub plotted_item: String,
    /// Kind of the plotted item
    pub plotted_item_type: Option<ItemType>,
    /// Cardinality class of the current selection
    pub selection_type: SelectionType,
    /// Currently selected cell ids (length 1 when `selection_type` is `Cell`)
    pub selected_cells: Vec<CellId>,
    /// Display name of the current selection
    pub selection_name: String,
    /// Metadata variable used for cluster assignments in the heatmap
    pub cluster_var: String,
}

/// A partial status update: only the keys that changed in one cycle.
///
/// `None` means "unchanged", never "cleared".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusDelta {
    pub plotted_item: Option<String>,
    pub plotted_item_type: Option<ItemType>,
    pub selection_type: Option<SelectionType>,
    pub selected_cells: Option<Vec<CellId>>,
    pub selection_name: Option<String>,
    pub cluster_var: Option<String>,
}

impl StatusDelta {
    /// True when no key is present
    pub fn is_empty(&self) -> bool {
        *self == StatusDelta::default()
    }

    /// Set the plotted item together with its kind
    pub fn with_plotted_item(mut self, item: impl Into<String>, item_type: ItemType) -> Self {
        self.plotted_item = Some(item.into());
        self.plotted_item_type = Some(item_type);
        self
    }

    /// Set the current selection
    pub fn with_selection(
        mut self,
        selection_type: SelectionType,
        cells: Vec<CellId>,
        name: impl Into<String>,
    ) -> Self {
        self.selection_type = Some(selection_type);
        self.selected_cells = Some(cells);
        self.selection_name = Some(name.into());
        self
    }

    /// Set the cluster variable
    pub fn with_cluster_var(mut self, var: impl Into<String>) -> Self {
        self.cluster_var = Some(var.into());
        self
    }

    fn apply_to(&self, status: &mut Status) {
        if let Some(item) = &self.plotted_item {
            status.plotted_item = item.clone();
        }
        if let Some(item_type) = self.plotted_item_type {
            status.plotted_item_type = Some(item_type);
        }
        if let Some(selection_type) = self.selection_type {
            status.selection_type = selection_type;
        }
        if let Some(cells) = &self.selected_cells {
            status.selected_cells = cells.clone();
        }
        if let Some(name) = &self.selection_name {
            status.selection_name = name.clone();
        }
        if let Some(var) = &self.cluster_var {
            status.cluster_var = var.clone();
        }
    }
}

/// Cached data payloads, each reflecting the most recent successful fetch
#[derive(Debug, Clone, Default)]
pub struct DataCache {
    /// Per-cell values for the currently plotted item
    plotted_values: Arc<HashMap<CellId, Value>>,
    /// Info payload for the currently bound signature
    sig_info: Option<Arc<SigInfo>>,
    /// Cluster assignment per cell for the current cluster variable
    clusters: Arc<HashMap<CellId, String>>,
}

/// Process-wide key/value store for status and data payloads.
///
/// Explicitly constructed and injected (not an ambient global), so isolated
/// unit tests and multiple dashboard instances are possible.
#[derive(Debug, Default)]
pub struct GlobalState {
    status: RwLock<Status>,
    data: RwLock<DataCache>,
}

impl GlobalState {
    /// Snapshot of the current status
    pub fn status(&self) -> Status {
        self.status
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Merge a partial update into the status map.
    ///
    /// The merged candidate is validated first; a malformed delta is rejected
    /// wholesale and the status is left untouched. Returns the post-merge
    /// status.
    pub fn merge_status(&self, delta: &StatusDelta) -> Result<Status> {
        let mut guard = self.status.write().unwrap_or_else(PoisonError::into_inner);
        let mut candidate = guard.clone();
        delta.apply_to(&mut candidate);
        validate(&candidate)?;
        *guard = candidate.clone();
        tracing::debug!(?delta, "status delta committed");
        Ok(candidate)
    }

    /// Per-cell values for the currently plotted item
    pub fn plotted_values(&self) -> Arc<HashMap<CellId, Value>> {
        self.data
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .plotted_values
            .clone()
    }

    /// Replace the plotted-values payload
    pub fn set_plotted_values(&self, values: HashMap<CellId, Value>) {
        self.data
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .plotted_values = Arc::new(values);
    }

    /// Info payload for the currently bound signature, if resident
    pub fn sig_info(&self) -> Option<Arc<SigInfo>> {
        self.data
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .sig_info
            .clone()
    }

    /// Replace the signature-info payload
    pub fn set_sig_info(&self, info: SigInfo) {
        self.data
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .sig_info = Some(Arc::new(info));
    }

    /// Cluster assignments for the current cluster variable
    pub fn clusters(&self) -> Arc<HashMap<CellId, String>> {
        self.data
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clusters
            .clone()
    }

    /// Replace the cluster-assignment payload
    pub fn set_clusters(&self, clusters: HashMap<CellId, String>) {
        self.data
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clusters = Arc::new(clusters);
    }
}

/// Cross-key invariants a merged status must satisfy before it commits
fn validate(status: &Status) -> Result<()> {
    match status.selection_type {
        SelectionType::Cell if status.selected_cells.len() != 1 => {
            Err(CellVisError::InvalidUpdate(format!(
                "selection_type 'cell' requires exactly one selected cell, got {}",
                status.selected_cells.len()
            )))
        }
        st if st.is_multi() && status.selected_cells.is_empty() => {
            Err(CellVisError::InvalidUpdate(format!(
                "selection_type '{:?}' requires at least one selected cell",
                st
            )))
        }
        _ => Ok(()),
    }
}
