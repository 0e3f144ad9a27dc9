//! Ranked gene table for the currently bound signature

use std::any::Any;
use std::cmp::Ordering;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::format::shorten_source;
use crate::render::{GeneRow, SigInfoSurface};
use crate::state::{GlobalState, StatusDelta};
use crate::types::ViewKind;
use crate::views::View;

pub struct SigInfoView {
    store: Arc<GlobalState>,
    surface: Box<dyn SigInfoSurface>,
    visible: bool,
    /// Signature currently rendered; rebinding to the same name is a no-op
    bound_sig: String,
}

impl SigInfoView {
    pub fn new(store: Arc<GlobalState>, surface: Box<dyn SigInfoSurface>) -> Self {
        Self {
            store,
            surface,
            visible: false,
            bound_sig: String::new(),
        }
    }
}

#[async_trait]
impl View for SigInfoView {
    fn kind(&self) -> ViewKind {
        ViewKind::SigInfo
    }

    async fn update(&mut self, _delta: &StatusDelta) -> Result<()> {
        let Some(info) = self.store.sig_info() else {
            return Ok(());
        };
        // Empty payloads, an unchanged binding, and composite/meta signatures
        // all decline to update
        if info.is_empty() || info.name == self.bound_sig || info.is_meta {
            return Ok(());
        }

        self.bound_sig = info.name.clone();
        tracing::debug!(signature = %info.name, "rebinding signature info table");

        self.surface.set_title(&info.name);
        self.surface.set_source(&shorten_source(&info.source));

        let mut rows: Vec<GeneRow> = info
            .sig_dict
            .iter()
            .map(|(gene, &signed)| GeneRow {
                gene: gene.clone(),
                sign: if signed > 0.0 { '+' } else { '-' },
                score: info.gene_importance.get(gene).copied().unwrap_or(0.0),
            })
            .collect();
        rows.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.gene.cmp(&b.gene))
        });
        self.surface.set_rows(&rows);
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
