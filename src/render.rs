//! Injected view-surface handles
//!
//! Each leaf view owns one opaque surface: an abstract draw target the outer
//! application backs with its charting/table toolkit. The core only hands
//! structured data across these seams, so it is testable without a rendering
//! environment.

use crate::chart::{DistChart, HeatmapSpec};

/// Title of the distribution panel, optionally hyperlinked
#[derive(Debug, Clone, PartialEq)]
pub struct PanelTitle {
    pub text: String,
    /// Reference link (gene-like items link to the gene-reference page)
    pub link: Option<String>,
}

impl PanelTitle {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: None,
        }
    }

    pub fn linked(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: Some(link.into()),
        }
    }
}

/// One ranked row of the signature-info gene table
#[derive(Debug, Clone, PartialEq)]
pub struct GeneRow {
    pub gene: String,
    /// `+` iff the gene's signed contribution is positive
    pub sign: char,
    pub score: f64,
}

/// One numeric-property row of the selection summary
#[derive(Debug, Clone, PartialEq)]
pub struct NumericSummaryRow {
    pub property: String,
    pub min: String,
    pub median: String,
    pub max: String,
}

/// Rows for one factor property of the selection summary
#[derive(Debug, Clone, PartialEq)]
pub struct FactorBreakdown {
    pub property: String,
    /// (level, percentage text) rows, one per observed level
    pub levels: Vec<(String, String)>,
}

/// Surface of the distribution-plot panel
pub trait ChartSurface: Send {
    fn set_title(&mut self, title: &PanelTitle);
    fn draw(&mut self, chart: &DistChart);
    fn resize(&mut self);
}

/// Surface of the signature heatmap panel
pub trait HeatmapSurface: Send {
    fn draw(&mut self, heatmap: &HeatmapSpec);
    fn resize(&mut self);
}

/// Surface of the signature-info table panel
pub trait SigInfoSurface: Send {
    fn set_title(&mut self, name: &str);
    fn set_source(&mut self, source: &str);
    fn set_rows(&mut self, rows: &[GeneRow]);
}

/// Surface of the single-cell metadata panel
pub trait CellInfoSurface: Send {
    fn set_cell_id(&mut self, cell_id: &str);
    fn set_properties(&mut self, rows: &[(String, String)]);
}

/// Surface of the multi-cell selection summary panel
pub trait SelectionSurface: Send {
    fn set_cell_count(&mut self, count: usize);
    fn set_numeric_rows(&mut self, rows: &[NumericSummaryRow]);
    fn set_factor_rows(&mut self, rows: &[FactorBreakdown]);
}
