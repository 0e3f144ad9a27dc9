//! Fetch capability and payload shapes
//!
//! The REST endpoints themselves are external; this module defines the async
//! [`DataFetcher`] seam the views consume and the JSON payload shapes it
//! yields. Implementations are injected so the core runs against a real HTTP
//! client or a scripted test double interchangeably.
//!
//! There is no explicit fetch cancellation: a superseded fetch is allowed to
//! complete, but views check their bound key before committing its result.

use std::collections::HashMap;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::CellId;

/// A metadata value: numeric or free-text/factor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    Num(f64),
    Text(String),
}

/// Full metadata record for one cell: property name to value
pub type CellMeta = HashMap<String, MetaValue>;

/// Min/median/max summary of one numeric property over a selection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    #[serde(rename = "Min")]
    pub min: f64,
    #[serde(rename = "Median")]
    pub median: f64,
    #[serde(rename = "Max")]
    pub max: f64,
}

/// Aggregate statistics for a multi-cell selection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CellsMeta {
    /// Numeric properties summarized as min/median/max
    #[serde(default)]
    pub numeric: HashMap<String, NumericSummary>,
    /// Factor properties as level -> percentage share
    #[serde(default)]
    pub factor: HashMap<String, HashMap<String, f64>>,
}

/// Per-gene-per-sample expression matrix for a signature
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignatureExpression {
    /// Row-major matrix, one row per gene
    pub data: Vec<Vec<f64>>,
    pub gene_labels: Vec<String>,
    pub sample_labels: Vec<String>,
}

/// Info payload for a signature (cached in the store by the outer controller)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SigInfo {
    pub name: String,
    /// Provenance string, often a file path
    pub source: String,
    /// Composite/meta signatures are not supported by the info table
    #[serde(rename = "isMeta", default)]
    pub is_meta: bool,
    /// Gene to signed contribution
    #[serde(rename = "sigDict", default)]
    pub sig_dict: HashMap<String, f64>,
    /// Gene to importance score
    #[serde(rename = "geneImportance", default)]
    pub gene_importance: HashMap<String, f64>,
}

impl SigInfo {
    /// True when the payload carries nothing to display
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.sig_dict.is_empty()
    }
}

/// Async request functions keyed by resource name.
///
/// Plotted values are *not* fetched here: their fetch path is owned by an
/// external controller and the payload arrives through the store's data cache.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DataFetcher: Send + Sync {
    /// Full metadata record for one cell
    async fn cell_meta(&self, cell_id: &str) -> Result<CellMeta>;

    /// Aggregate statistics for a set of cells
    async fn cells_meta(&self, cell_ids: &[CellId]) -> Result<CellsMeta>;

    /// Expression matrix for a signature
    async fn signature_expression(&self, sig_name: &str) -> Result<SignatureExpression>;
}
