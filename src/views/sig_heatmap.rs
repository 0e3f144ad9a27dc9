//! Per-gene-per-sample expression heatmap for the plotted signature
//!
//! Tracks its own bound signature, distinct from `plotted_item`: drilling
//! into a signature gene changes the plotted item without retriggering the
//! heatmap. Recomputes only when the plotted item changes while the item type
//! is exactly `Signature`, or when the cluster variable changes.

use std::any::Any;
use std::sync::Arc;

use async_trait::async_trait;

use crate::chart::HeatmapSpec;
use crate::error::{Result, ResultExt};
use crate::fetch::DataFetcher;
use crate::render::HeatmapSurface;
use crate::state::{GlobalState, StatusDelta};
use crate::types::{ItemType, ViewKind};
use crate::views::View;

pub struct SigHeatmapView {
    store: Arc<GlobalState>,
    fetcher: Arc<dyn DataFetcher>,
    surface: Box<dyn HeatmapSurface>,
    visible: bool,
    needs_plot: bool,
    needs_resize: bool,
    /// Signature the heatmap is (or will be) drawn for
    plotted_signature: String,
}

impl SigHeatmapView {
    pub fn new(
        store: Arc<GlobalState>,
        fetcher: Arc<dyn DataFetcher>,
        surface: Box<dyn HeatmapSurface>,
    ) -> Self {
        Self {
            store,
            fetcher,
            surface,
            visible: false,
            // Nothing has been drawn yet, so the first activation must draw
            needs_plot: true,
            needs_resize: false,
            plotted_signature: String::new(),
        }
    }

    /// Fetch the expression matrix for the bound signature and draw it.
    ///
    /// A failed fetch leaves the previously rendered heatmap intact. If the
    /// bound signature moved on while the fetch was in flight, the stale
    /// response is discarded without touching the surface.
    async fn draw_heat(&mut self) -> Result<()> {
        if self.plotted_signature.is_empty() {
            return Ok(());
        }
        let sig_key = self.plotted_signature.clone();
        let expression = self
            .fetcher
            .signature_expression(&sig_key)
            .await
            .with_context(|| format!("fetching expression matrix for '{}'", sig_key))?;

        if self.plotted_signature != sig_key {
            tracing::debug!(
                stale = %sig_key,
                current = %self.plotted_signature,
                "discarding superseded heatmap fetch"
            );
            return Ok(());
        }

        let sig_dict = self
            .store
            .sig_info()
            .map(|info| info.sig_dict.clone())
            .unwrap_or_default();
        let gene_signs = expression
            .gene_labels
            .iter()
            .map(|gene| sig_dict.get(gene).copied())
            .collect();

        let clusters = self.store.clusters();
        let assignments = expression
            .sample_labels
            .iter()
            .map(|sample| clusters.get(sample).cloned())
            .collect();

        self.surface.draw(&HeatmapSpec {
            values: expression.data,
            gene_labels: expression.gene_labels,
            gene_signs,
            sample_labels: expression.sample_labels,
            assignments,
        });
        self.needs_plot = false;
        Ok(())
    }
}

#[async_trait]
impl View for SigHeatmapView {
    fn kind(&self) -> ViewKind {
        ViewKind::SigHeatmap
    }

    async fn update(&mut self, delta: &StatusDelta) -> Result<()> {
        let status = self.store.status();

        // Only a true signature rebinds the heatmap; signature-gene must not
        let rebind_sig = delta.plotted_item.is_some()
            && status.plotted_item_type == Some(ItemType::Signature);
        if rebind_sig {
            self.plotted_signature = status.plotted_item.clone();
        }

        let cluster_changed = delta.cluster_var.is_some();
        if !(rebind_sig || cluster_changed) {
            return Ok(());
        }

        if self.visible {
            self.draw_heat().await
        } else {
            self.needs_plot = true;
            Ok(())
        }
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn needs_plot(&self) -> bool {
        self.needs_plot
    }

    fn needs_resize(&self) -> bool {
        self.needs_resize
    }

    fn resize(&mut self) {
        self.surface.resize();
        self.needs_resize = false;
    }

    fn defer_resize(&mut self) {
        self.needs_resize = true;
    }

    async fn activate(&mut self) -> Result<()> {
        if self.needs_resize {
            self.resize();
        }
        if self.needs_plot {
            self.draw_heat().await?;
        }
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
