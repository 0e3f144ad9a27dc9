//! Core domain types shared across the view tree

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a single cell (or pooled micro-cluster) in the data set
pub type CellId = String;

/// What kind of item is currently plotted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemType {
    /// A single gene's expression values
    Gene,
    /// A signature's per-cell scores
    Signature,
    /// A gene drilled into from a signature table
    SignatureGene,
}

impl ItemType {
    /// True for items that link out to the gene-reference page
    pub fn is_gene_like(self) -> bool {
        matches!(self, ItemType::Gene | ItemType::SignatureGene)
    }

    /// True when the plotted item is backed by a signature
    pub fn is_signature_backed(self) -> bool {
        matches!(self, ItemType::Signature | ItemType::SignatureGene)
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ItemType::Gene => "gene",
            ItemType::Signature => "signature",
            ItemType::SignatureGene => "signature-gene",
        };
        write!(f, "{}", s)
    }
}

/// Cardinality class of the current cell selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionType {
    /// Nothing selected
    #[default]
    None,
    /// Exactly one cell
    Cell,
    /// An ad hoc set of cells
    Cells,
    /// One pooled micro-cluster
    Pool,
    /// Several pooled micro-clusters
    Pools,
}

impl SelectionType {
    /// Exactly one cell is selected
    pub fn is_single_cell(self) -> bool {
        matches!(self, SelectionType::Cell)
    }

    /// A multi-cell kind (set of cells, one pool, or several pools)
    pub fn is_multi(self) -> bool {
        matches!(
            self,
            SelectionType::Cells | SelectionType::Pool | SelectionType::Pools
        )
    }

    /// Selection kinds rendered as a selected-vs-remainder comparison chart
    pub fn is_comparison(self) -> bool {
        matches!(self, SelectionType::Cells | SelectionType::Pools)
    }
}

/// Sentinel used by the data provider for missing factor levels
pub const NA_SENTINEL: &str = "NA";

/// A single plotted value: numeric score or categorical (factor) level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Numeric score/expression value
    Num(f64),
    /// Factor level (categorical metadata)
    Factor(String),
}

impl Value {
    /// Numeric view of the value, if it is numeric
    pub fn as_num(&self) -> Option<f64> {
        match self {
            Value::Num(v) => Some(*v),
            Value::Factor(_) => None,
        }
    }

    /// Factor view of the value, if it is a factor level
    pub fn as_factor(&self) -> Option<&str> {
        match self {
            Value::Num(_) => None,
            Value::Factor(s) => Some(s.as_str()),
        }
    }

    /// True for a factor level that is a real category, not the NA sentinel
    pub fn is_category(&self) -> bool {
        match self {
            Value::Num(_) => false,
            Value::Factor(s) => s != NA_SENTINEL,
        }
    }
}

/// Identifies one leaf panel in the container's tab nav
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    /// Distribution plot of the currently plotted item
    Values,
    /// Ranked gene table for the bound signature
    SigInfo,
    /// Per-gene-per-sample expression heatmap
    SigHeatmap,
    /// Metadata table for a single selected cell
    CellInfo,
    /// Aggregate statistics for a multi-cell selection
    SelectionInfo,
}

impl ViewKind {
    /// Panels that own a chart and therefore participate in resize dispatch
    pub fn is_plot_bearing(self) -> bool {
        matches!(self, ViewKind::Values | ViewKind::SigHeatmap)
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ViewKind::Values => "values",
            ViewKind::SigInfo => "sig_info",
            ViewKind::SigHeatmap => "sig_heatmap",
            ViewKind::CellInfo => "cell_info",
            ViewKind::SelectionInfo => "selection_info",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_type_gene_like() {
        assert!(ItemType::Gene.is_gene_like());
        assert!(ItemType::SignatureGene.is_gene_like());
        assert!(!ItemType::Signature.is_gene_like());
    }

    #[test]
    fn test_selection_type_classes() {
        assert!(SelectionType::Cell.is_single_cell());
        assert!(!SelectionType::Cell.is_multi());
        for st in [SelectionType::Cells, SelectionType::Pool, SelectionType::Pools] {
            assert!(st.is_multi());
            assert!(!st.is_single_cell());
        }
        assert!(!SelectionType::None.is_multi());
        // A single pool renders as an unconditioned distribution, not a comparison
        assert!(!SelectionType::Pool.is_comparison());
        assert!(SelectionType::Pools.is_comparison());
    }

    #[test]
    fn test_value_na_sentinel() {
        assert!(Value::Factor("CD4 T".to_string()).is_category());
        assert!(!Value::Factor("NA".to_string()).is_category());
        assert!(!Value::Num(1.5).is_category());
    }

    #[test]
    fn test_value_untagged_deserialization() {
        let v: Value = serde_json::from_str("2.5").unwrap();
        assert_eq!(v, Value::Num(2.5));
        let v: Value = serde_json::from_str("\"Cluster 1\"").unwrap();
        assert_eq!(v, Value::Factor("Cluster 1".to_string()));
    }

    #[test]
    fn test_item_type_serde_kebab() {
        let t: ItemType = serde_json::from_str("\"signature-gene\"").unwrap();
        assert_eq!(t, ItemType::SignatureGene);
        assert_eq!(serde_json::to_string(&ItemType::Gene).unwrap(), "\"gene\"");
    }
}
