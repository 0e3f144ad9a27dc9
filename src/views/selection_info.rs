//! Aggregate statistics for a multi-cell selection
//!
//! Numeric properties render as min/median/max rows; factor properties render
//! as one header per property plus one row per observed level with its
//! percentage share to one decimal place.

use std::any::Any;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{Result, ResultExt};
use crate::fetch::DataFetcher;
use crate::format::format_number;
use crate::render::{FactorBreakdown, NumericSummaryRow, SelectionSurface};
use crate::state::{GlobalState, StatusDelta};
use crate::types::ViewKind;
use crate::views::View;

pub struct SelectionInfoView {
    store: Arc<GlobalState>,
    fetcher: Arc<dyn DataFetcher>,
    surface: Box<dyn SelectionSurface>,
    visible: bool,
}

impl SelectionInfoView {
    pub fn new(
        store: Arc<GlobalState>,
        fetcher: Arc<dyn DataFetcher>,
        surface: Box<dyn SelectionSurface>,
    ) -> Self {
        Self {
            store,
            fetcher,
            surface,
            visible: false,
        }
    }
}

#[async_trait]
impl View for SelectionInfoView {
    fn kind(&self) -> ViewKind {
        ViewKind::SelectionInfo
    }

    async fn update(&mut self, delta: &StatusDelta) -> Result<()> {
        let Some(cells) = &delta.selected_cells else {
            return Ok(());
        };
        if !self.store.status().selection_type.is_multi() {
            return Ok(());
        }
        let cells = cells.clone();
        self.surface.set_cell_count(cells.len());

        let meta = self
            .fetcher
            .cells_meta(&cells)
            .await
            .with_context(|| format!("fetching summary for {} cells", cells.len()))?;

        // Bound-key check before committing the render
        if self.store.status().selected_cells != cells {
            tracing::debug!("discarding superseded cells-meta fetch");
            return Ok(());
        }

        let mut numeric_rows: Vec<NumericSummaryRow> = meta
            .numeric
            .iter()
            .map(|(property, summary)| NumericSummaryRow {
                property: property.clone(),
                min: format_number(summary.min),
                median: format_number(summary.median),
                max: format_number(summary.max),
            })
            .collect();
        numeric_rows.sort_by(|a, b| a.property.cmp(&b.property));
        self.surface.set_numeric_rows(&numeric_rows);

        let mut factor_rows: Vec<FactorBreakdown> = meta
            .factor
            .iter()
            .map(|(property, levels)| {
                let mut levels: Vec<(String, String)> = levels
                    .iter()
                    .map(|(level, percent)| (level.clone(), format!("{:.1}%", percent)))
                    .collect();
                levels.sort_by(|a, b| a.0.cmp(&b.0));
                FactorBreakdown {
                    property: property.clone(),
                    levels,
                }
            })
            .collect();
        factor_rows.sort_by(|a, b| a.property.cmp(&b.property));
        self.surface.set_factor_rows(&factor_rows);
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
