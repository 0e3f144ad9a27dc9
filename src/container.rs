//! Container for the panel tree: child views, tab nav policy, resize
//!
//! The container fans each status delta out to every child unchanged,
//! translates high-level delta semantics (item-type changed, selection-type
//! changed) into tab visibility/activation policy, and coalesces resize
//! bursts. Its completion never resolves before every child has settled.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::future::join_all;

use crate::chart::BrushSelection;
use crate::config::DashboardConfig;
use crate::debounce::Debouncer;
use crate::error::{CellVisError, Result};
use crate::fetch::DataFetcher;
use crate::format::slugify;
use crate::notify::Notifier;
use crate::render::{
    CellInfoSurface, ChartSurface, HeatmapSurface, SelectionSurface, SigInfoSurface,
};
use crate::state::{GlobalState, StatusDelta};
use crate::types::ViewKind;
use crate::views::{
    CellInfoView, SelectionInfoView, SigHeatmapView, SigInfoView, ValuesPlot, View,
};

/// Injected draw targets, one per leaf panel
pub struct Surfaces {
    pub values: Box<dyn ChartSurface>,
    pub sig_info: Box<dyn SigInfoSurface>,
    pub sig_heatmap: Box<dyn HeatmapSurface>,
    pub cell_info: Box<dyn CellInfoSurface>,
    pub selection_info: Box<dyn SelectionSurface>,
}

/// Tab nav state: which entries are shown and which one is active
#[derive(Debug)]
struct NavState {
    shown: HashSet<ViewKind>,
    active: ViewKind,
}

impl Default for NavState {
    fn default() -> Self {
        let mut shown = HashSet::new();
        shown.insert(ViewKind::Values);
        Self {
            shown,
            active: ViewKind::Values,
        }
    }
}

/// A cell-id list export ready to be written to disk
#[derive(Debug, Clone, PartialEq)]
pub struct CellListExport {
    /// Filesystem-safe file name derived from the selection name
    pub filename: String,
    /// Newline-joined cell ids
    pub contents: String,
}

impl CellListExport {
    /// Write the export into `dir`, returning the created path
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&self.filename);
        std::fs::write(&path, &self.contents)?;
        Ok(path)
    }
}

/// Owns the child views and all cross-cutting tab policy
pub struct Container {
    store: Arc<GlobalState>,
    children: Vec<Box<dyn View>>,
    nav: NavState,
    resize_debouncer: Debouncer,
}

impl Container {
    /// Construct the container and all child views
    pub fn new(
        store: Arc<GlobalState>,
        config: Arc<DashboardConfig>,
        fetcher: Arc<dyn DataFetcher>,
        notifier: Arc<dyn Notifier>,
        surfaces: Surfaces,
    ) -> Self {
        let children: Vec<Box<dyn View>> = vec![
            Box::new(SigInfoView::new(store.clone(), surfaces.sig_info)),
            Box::new(ValuesPlot::new(
                store.clone(),
                config.clone(),
                notifier,
                surfaces.values,
            )),
            Box::new(SigHeatmapView::new(
                store.clone(),
                fetcher.clone(),
                surfaces.sig_heatmap,
            )),
            Box::new(CellInfoView::new(
                store.clone(),
                fetcher.clone(),
                surfaces.cell_info,
            )),
            Box::new(SelectionInfoView::new(
                store.clone(),
                fetcher,
                surfaces.selection_info,
            )),
        ];

        let mut container = Self {
            store,
            children,
            nav: NavState::default(),
            resize_debouncer: Debouncer::new(config.resize_debounce()),
        };
        let active = container.nav.active;
        for child in &mut container.children {
            let visible = child.kind() == active;
            child.set_visible(visible);
        }
        container
    }

    /// One-time setup of every child.
    ///
    /// A failing child does not prevent its siblings from initializing; the
    /// combined result surfaces after all have settled.
    pub async fn init(&mut self) -> Result<()> {
        let results = join_all(self.children.iter_mut().map(|child| child.init())).await;
        aggregate(results)
    }

    /// Fan a status delta out to every child, then apply nav policy.
    ///
    /// Children do not resolve in any guaranteed order, but this method's
    /// completion resolves only after all of them have settled; partial
    /// completion is not observable from outside.
    pub async fn update(&mut self, delta: &StatusDelta) -> Result<()> {
        let mut results =
            join_all(self.children.iter_mut().map(|child| child.update(delta))).await;
        results.push(self.apply_nav_policy(delta).await);
        aggregate(results)
    }

    async fn apply_nav_policy(&mut self, delta: &StatusDelta) -> Result<()> {
        if let Some(item_type) = delta.plotted_item_type {
            // Drilling into a signature gene keeps whichever tab is open
            if !matches!(item_type, crate::types::ItemType::SignatureGene) {
                self.activate_tab(ViewKind::Values).await?;
            }

            let current = self.store.status().plotted_item_type;
            let signature_backed =
                current.is_some_and(crate::types::ItemType::is_signature_backed);
            self.set_tab_shown(ViewKind::SigInfo, signature_backed);
            self.set_tab_shown(ViewKind::SigHeatmap, signature_backed);
        }

        if delta.selection_type.is_some() {
            let current = self.store.status().selection_type;
            self.set_tab_shown(ViewKind::CellInfo, current.is_single_cell());
            self.set_tab_shown(ViewKind::SelectionInfo, current.is_multi());

            if current.is_single_cell() {
                self.activate_tab(ViewKind::CellInfo).await?;
            } else if self.nav.active == ViewKind::CellInfo {
                self.activate_tab(ViewKind::Values).await?;
            } else if !current.is_multi() && self.nav.active == ViewKind::SelectionInfo {
                self.activate_tab(ViewKind::Values).await?;
            }
        }
        Ok(())
    }

    /// Make `kind` the active tab and run its deferred resize/draw work
    pub async fn activate_tab(&mut self, kind: ViewKind) -> Result<()> {
        self.nav.shown.insert(kind);
        self.nav.active = kind;
        for child in &mut self.children {
            let visible = child.kind() == kind;
            child.set_visible(visible);
        }
        if let Some(child) = self.children.iter_mut().find(|c| c.kind() == kind) {
            child.activate().await?;
        }
        Ok(())
    }

    fn set_tab_shown(&mut self, kind: ViewKind, shown: bool) {
        if shown {
            self.nav.shown.insert(kind);
        } else {
            self.nav.shown.remove(&kind);
        }
    }

    /// Viewport resize signal. Synchronous and burst-safe: bursts within the
    /// quiet window coalesce to one trailing execution via
    /// [`Container::flush_resize`].
    pub fn resize(&mut self) {
        self.resize_debouncer.signal();
    }

    /// Execute a settled resize burst, if any.
    ///
    /// The outer event loop calls this periodically (or after
    /// [`Debouncer::wait`]-style sleeping). Dispatches only to the active
    /// plot-bearing child; inactive charts get a deferred-resize flag to be
    /// honored on their next activation. Returns whether a dispatch happened.
    pub fn flush_resize(&mut self) -> bool {
        if !self.resize_debouncer.fire() {
            return false;
        }
        let active = self.nav.active;
        for child in &mut self.children {
            if !child.kind().is_plot_bearing() {
                continue;
            }
            if child.kind() == active {
                child.resize();
            } else {
                child.defer_resize();
            }
        }
        true
    }

    /// Sleep until the pending resize burst settles, then dispatch it
    pub async fn settle_resize(&mut self) -> bool {
        self.resize_debouncer.wait().await;
        self.flush_resize()
    }

    /// Route a completed chart brush to the distribution plot
    pub fn handle_brush(&mut self, brush: &BrushSelection) {
        if let Some(plot) = self
            .children
            .iter_mut()
            .find(|c| c.kind() == ViewKind::Values)
            .and_then(|c| c.as_any_mut().downcast_mut::<ValuesPlot>())
        {
            plot.handle_brush(brush);
        }
    }

    /// Export the current selected-cell list as a text file payload
    pub fn export_selected_cells(&self) -> CellListExport {
        let status = self.store.status();
        CellListExport {
            filename: format!("{}.txt", slugify(&status.selection_name)),
            contents: status.selected_cells.join("\n"),
        }
    }

    /// The currently active tab
    pub fn active_tab(&self) -> ViewKind {
        self.nav.active
    }

    /// Whether a tab is present in the nav
    pub fn is_tab_shown(&self, kind: ViewKind) -> bool {
        self.nav.shown.contains(&kind)
    }

    /// Borrow a child view by kind (flag inspection in tests)
    pub fn child(&self, kind: ViewKind) -> Option<&dyn View> {
        self.children
            .iter()
            .find(|c| c.kind() == kind)
            .map(AsRef::as_ref)
    }
}

/// Surface the first failure after all children settled, logging every one
fn aggregate(results: Vec<Result<()>>) -> Result<()> {
    let total = results.len();
    let mut failures: Vec<CellVisError> = Vec::new();
    for result in results {
        if let Err(e) = result {
            tracing::warn!(error = %e, "child view failed");
            failures.push(e);
        }
    }
    match failures.len() {
        0 => Ok(()),
        failed => {
            let first = failures.remove(0);
            Err(CellVisError::ChildFailures {
                failed,
                total,
                first: Box::new(first),
            })
        }
    }
}
