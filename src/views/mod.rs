//! View trait: polymorphic interface for all panel state types
//!
//! Each leaf panel implements [`View`], and the container dispatches to its
//! children via vtable. A view reacts only to the status-delta keys it cares
//! about; when it must redraw while hidden it records a lazy flag instead and
//! performs the deferred work on the next activation.

use std::any::Any;

use async_trait::async_trait;

use crate::error::Result;
use crate::state::StatusDelta;
use crate::types::ViewKind;

mod cell_info;
mod selection_info;
mod sig_heatmap;
mod sig_info;
mod values_plot;

pub use cell_info::CellInfoView;
pub use selection_info::SelectionInfoView;
pub use sig_heatmap::SigHeatmapView;
pub use sig_info::SigInfoView;
pub use values_plot::ValuesPlot;

/// Trait implemented by all panel state types.
///
/// `update` must be a no-op for deltas that carry none of the view's keys,
/// and must never read a delta key it has not checked for presence; an
/// absent key means "unchanged", not "cleared".
#[async_trait]
pub trait View: Send {
    /// Panel identifier (also names the nav tab bound to this view)
    fn kind(&self) -> ViewKind;

    /// One-time setup; may prefetch
    async fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// React to a status delta
    async fn update(&mut self, delta: &StatusDelta) -> Result<()>;

    /// Visibility follows tab activation, never data changes
    fn set_visible(&mut self, visible: bool);

    fn is_visible(&self) -> bool;

    /// A redraw was deferred while hidden
    fn needs_plot(&self) -> bool {
        false
    }

    /// A resize was deferred while hidden
    fn needs_resize(&self) -> bool {
        false
    }

    /// Adjust to a new viewport (dispatched only to the active chart)
    fn resize(&mut self) {}

    /// Record a resize to honor on next activation
    fn defer_resize(&mut self) {}

    /// Perform deferred resize/draw work after this view's tab became active
    async fn activate(&mut self) -> Result<()> {
        Ok(())
    }

    /// Downcast support
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
