//! Metadata table for a single selected cell

use std::any::Any;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{Result, ResultExt};
use crate::fetch::DataFetcher;
use crate::format::format_meta;
use crate::render::CellInfoSurface;
use crate::state::{GlobalState, StatusDelta};
use crate::types::ViewKind;
use crate::views::View;

pub struct CellInfoView {
    store: Arc<GlobalState>,
    fetcher: Arc<dyn DataFetcher>,
    surface: Box<dyn CellInfoSurface>,
    visible: bool,
    /// Cell currently rendered in the table
    bound_cell: String,
}

impl CellInfoView {
    pub fn new(
        store: Arc<GlobalState>,
        fetcher: Arc<dyn DataFetcher>,
        surface: Box<dyn CellInfoSurface>,
    ) -> Self {
        Self {
            store,
            fetcher,
            surface,
            visible: false,
            bound_cell: String::new(),
        }
    }
}

#[async_trait]
impl View for CellInfoView {
    fn kind(&self) -> ViewKind {
        ViewKind::CellInfo
    }

    async fn update(&mut self, delta: &StatusDelta) -> Result<()> {
        let Some(cells) = &delta.selected_cells else {
            return Ok(());
        };
        if !self.store.status().selection_type.is_single_cell() {
            return Ok(());
        }
        let Some(cell_id) = cells.first().cloned() else {
            return Ok(());
        };
        // Reselecting the rendered cell is a no-op
        if cell_id == self.bound_cell {
            return Ok(());
        }

        let meta = self
            .fetcher
            .cell_meta(&cell_id)
            .await
            .with_context(|| format!("fetching metadata for cell '{}'", cell_id))?;

        // The selection may have moved on while the fetch was in flight
        let current = self.store.status();
        if !current.selection_type.is_single_cell()
            || current.selected_cells.first() != Some(&cell_id)
        {
            tracing::debug!(stale = %cell_id, "discarding superseded cell-meta fetch");
            return Ok(());
        }

        let mut rows: Vec<(String, String)> = meta
            .iter()
            .map(|(property, value)| (property.clone(), format_meta(value)))
            .collect();
        rows.sort_by(|a, b| a.0.cmp(&b.0));

        self.surface.set_cell_id(&cell_id);
        self.surface.set_properties(&rows);
        self.bound_cell = cell_id;
        Ok(())
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
