//! Distribution plot of the currently plotted item
//!
//! Redraws when the plotted item or the selection changes. For a multi-cell
//! selection the plotted values are split into selected vs remainder and
//! rendered as a percentage-normalized comparison; otherwise a single
//! unconditioned distribution is drawn. Chart brushes resolve back to cell-id
//! sets and leave the tree through the notifier.

use std::any::Any;
use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::chart::{resolve_brush, split_values, BrushSelection, DistChart};
use crate::config::DashboardConfig;
use crate::error::{CellVisError, Result};
use crate::notify::Notifier;
use crate::render::{ChartSurface, PanelTitle};
use crate::state::{GlobalState, StatusDelta};
use crate::types::{ItemType, Value, ViewKind};
use crate::views::View;

pub struct ValuesPlot {
    store: Arc<GlobalState>,
    config: Arc<DashboardConfig>,
    notifier: Arc<dyn Notifier>,
    surface: Box<dyn ChartSurface>,
    visible: bool,
    needs_plot: bool,
    needs_resize: bool,
}

impl ValuesPlot {
    pub fn new(
        store: Arc<GlobalState>,
        config: Arc<DashboardConfig>,
        notifier: Arc<dyn Notifier>,
        surface: Box<dyn ChartSurface>,
    ) -> Self {
        Self {
            store,
            config,
            notifier,
            surface,
            visible: false,
            needs_plot: false,
            needs_resize: false,
        }
    }

    fn title_for(&self, item: &str, item_type: Option<ItemType>) -> PanelTitle {
        if item_type.is_some_and(ItemType::is_gene_like) {
            PanelTitle::linked(item, format!("{}{}", self.config.gene_url_base, item))
        } else {
            PanelTitle::plain(item)
        }
    }

    /// Draw the distribution chart from the current store state
    fn plot(&mut self) -> Result<()> {
        let values = self.store.plotted_values();
        if values.is_empty() {
            tracing::debug!("no plotted values resident, skipping draw");
            return Ok(());
        }
        let status = self.store.status();

        let chart = if status.selection_type.is_comparison() {
            let (selected, remainder) = split_values(&values, &status.selected_cells);
            DistChart::comparison(
                &selected,
                &remainder,
                &status.selection_name,
                &self.config,
            )
        } else {
            // Sorted by cell id so the series is deterministic
            let ordered: Vec<Value> = values
                .iter()
                .collect::<BTreeMap<_, _>>()
                .into_values()
                .cloned()
                .collect();
            DistChart::distribution(&ordered, &self.config)
        };

        if let Some(chart) = chart {
            self.surface.draw(&chart);
        } else {
            // Values are resident but none are drawable (e.g. an all-NA column)
            let err = CellVisError::NotPlottable(format!(
                "'{}' has no plottable values",
                status.plotted_item
            ));
            tracing::warn!(error = %err, "skipping distribution draw");
            self.notifier.notice(&err.to_string());
        }
        self.needs_plot = false;
        Ok(())
    }

    /// Resolve a completed chart brush to cell ids and emit the notification.
    ///
    /// Always emits, including the empty set on deselect: that is how the
    /// outer controller observes a cleared selection.
    pub fn handle_brush(&self, brush: &BrushSelection) {
        let cells = resolve_brush(&self.store.plotted_values(), brush);
        self.notifier.cells_selected(cells);
    }
}

#[async_trait]
impl View for ValuesPlot {
    fn kind(&self) -> ViewKind {
        ViewKind::Values
    }

    async fn update(&mut self, delta: &StatusDelta) -> Result<()> {
        if delta.plotted_item.is_none()
            && delta.selected_cells.is_none()
            && delta.selection_type.is_none()
        {
            return Ok(());
        }

        let status = self.store.status();
        let title = self.title_for(&status.plotted_item, status.plotted_item_type);
        self.surface.set_title(&title);

        if self.visible {
            self.plot()
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
            self.plot()?;
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
