//! Structured chart descriptions for the distribution panel
//!
//! The actual drawing (binning pixels, SVG/canvas) is an external renderer
//! capability; this module builds the structured description it consumes:
//! which series to draw, the bin layout for numeric values, and the
//! percentage-normalized category bars for factor values. It also resolves
//! chart brush selections back to cell-id sets.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::config::DashboardConfig;
use crate::types::{CellId, Value};

/// Series name used for the unselected remainder in comparison charts
const REMAINDER_NAME: &str = "Remainder";

/// Bin layout for a numeric distribution.
///
/// `end` carries a small buffer past the max value because the final bin's
/// end is exclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinSpec {
    pub start: f64,
    pub end: f64,
    pub size: f64,
}

impl BinSpec {
    /// Compute the bin layout over a value collection.
    ///
    /// Returns `None` when there are no numeric values to bin.
    pub fn compute(values: &[f64], bins: usize, end_buffer: f64) -> Option<Self> {
        if values.is_empty() || bins == 0 {
            return None;
        }
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let start = min;
        let end = max + end_buffer;
        Some(Self {
            start,
            end,
            size: (end - start) / bins as f64,
        })
    }
}

/// One histogram series (raw values; the renderer bins them)
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramSeries {
    /// Legend name; `None` for a single unconditioned distribution
    pub name: Option<String>,
    pub values: Vec<f64>,
}

/// One bar series over category labels
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub name: Option<String>,
    /// (label, y) pairs sorted by label
    pub points: Vec<(String, f64)>,
}

/// Structured description of a distribution chart
#[derive(Debug, Clone, PartialEq)]
pub enum DistChart {
    /// Numeric values binned into a histogram
    Histogram {
        series: Vec<HistogramSeries>,
        bins: BinSpec,
        /// Series normalized to percentages (comparison charts)
        percent_normalized: bool,
        /// Overlaid rather than stacked/side-by-side
        overlay: bool,
    },
    /// Categorical values as count or percentage bars
    Bars {
        series: Vec<BarSeries>,
        /// Side-by-side series (comparison charts)
        grouped: bool,
    },
}

impl DistChart {
    /// Build a single unconditioned distribution chart.
    ///
    /// Returns `None` when the value collection is empty (nothing to draw).
    pub fn distribution(values: &[Value], config: &DashboardConfig) -> Option<Self> {
        let first = values.first()?;
        if first.is_category() {
            let counts = label_counts(values);
            let points = counts
                .into_iter()
                .map(|(label, n)| (label, n as f64))
                .collect();
            Some(DistChart::Bars {
                series: vec![BarSeries { name: None, points }],
                grouped: false,
            })
        } else {
            let nums = numeric_values(values);
            let bins = BinSpec::compute(&nums, config.histogram_bins, config.bin_end_buffer)?;
            Some(DistChart::Histogram {
                series: vec![HistogramSeries {
                    name: None,
                    values: nums,
                }],
                bins,
                percent_normalized: false,
                overlay: false,
            })
        }
    }

    /// Build a selected-vs-remainder comparison chart, percentage-normalized.
    ///
    /// Numeric values overlay two histograms over a shared bin layout;
    /// categorical values render grouped bars over the union of observed
    /// levels (absent levels appear with a zero bar).
    pub fn comparison(
        selected: &[Value],
        remainder: &[Value],
        selection_name: &str,
        config: &DashboardConfig,
    ) -> Option<Self> {
        let first = selected.first().or_else(|| remainder.first())?;
        if first.is_category() {
            let mut all_labels: HashSet<String> = HashSet::new();
            for v in selected.iter().chain(remainder.iter()) {
                if let Some(label) = v.as_factor() {
                    all_labels.insert(label.to_string());
                }
            }
            let remainder_series = percent_series(remainder, &all_labels, REMAINDER_NAME);
            let selected_series = percent_series(selected, &all_labels, selection_name);
            Some(DistChart::Bars {
                series: vec![remainder_series, selected_series],
                grouped: true,
            })
        } else {
            let selected_nums = numeric_values(selected);
            let remainder_nums = numeric_values(remainder);
            let mut all = selected_nums.clone();
            all.extend_from_slice(&remainder_nums);
            let bins = BinSpec::compute(&all, config.histogram_bins, config.bin_end_buffer)?;
            Some(DistChart::Histogram {
                series: vec![
                    HistogramSeries {
                        name: Some(REMAINDER_NAME.to_string()),
                        values: remainder_nums,
                    },
                    HistogramSeries {
                        name: Some(selection_name.to_string()),
                        values: selected_nums,
                    },
                ],
                bins,
                percent_normalized: true,
                overlay: true,
            })
        }
    }
}

/// Structured description of the signature heatmap
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapSpec {
    /// Row-major expression matrix, one row per gene
    pub values: Vec<Vec<f64>>,
    pub gene_labels: Vec<String>,
    /// Signed contribution per gene, where the signature defines one
    pub gene_signs: Vec<Option<f64>>,
    pub sample_labels: Vec<String>,
    /// Cluster assignment per sample under the current cluster variable
    pub assignments: Vec<Option<String>>,
}

/// A completed chart brush/box selection, as reported by the renderer
#[derive(Debug, Clone, PartialEq)]
pub enum BrushSelection {
    /// Box over discrete category bars
    Categories(Vec<String>),
    /// Closed numeric range along the value axis
    Range { min: f64, max: f64 },
    /// Deselect (empty selection)
    Cleared,
}

/// Split plotted values into selected and remainder by cell-id membership.
///
/// Every id present in both `values` and `selected_ids` lands in the selected
/// bucket exactly once; everything else is remainder.
pub fn split_values(
    values: &HashMap<CellId, Value>,
    selected_ids: &[CellId],
) -> (Vec<Value>, Vec<Value>) {
    let member: HashSet<&str> = selected_ids.iter().map(String::as_str).collect();
    let mut selected = Vec::new();
    let mut remainder = Vec::new();
    // BTreeMap iteration keeps the split deterministic
    let ordered: BTreeMap<&String, &Value> = values.iter().collect();
    for (id, value) in ordered {
        if member.contains(id.as_str()) {
            selected.push(value.clone());
        } else {
            remainder.push(value.clone());
        }
    }
    (selected, remainder)
}

/// Resolve a brush selection to the matching cell ids, sorted.
///
/// String brushes match discrete categories exactly; numeric brushes match the
/// closed range `[min, max]`.
pub fn resolve_brush(values: &HashMap<CellId, Value>, brush: &BrushSelection) -> Vec<CellId> {
    let mut ids: Vec<CellId> = match brush {
        BrushSelection::Cleared => Vec::new(),
        BrushSelection::Categories(labels) => {
            let wanted: HashSet<&str> = labels.iter().map(String::as_str).collect();
            values
                .iter()
                .filter(|(_, v)| v.as_factor().is_some_and(|f| wanted.contains(f)))
                .map(|(id, _)| id.clone())
                .collect()
        }
        BrushSelection::Range { min, max } => values
            .iter()
            .filter(|(_, v)| v.as_num().is_some_and(|n| n >= *min && n <= *max))
            .map(|(id, _)| id.clone())
            .collect(),
    };
    ids.sort_unstable();
    ids
}

fn numeric_values(values: &[Value]) -> Vec<f64> {
    values.iter().filter_map(Value::as_num).collect()
}

/// Counts per factor level, sorted by label
fn label_counts(values: &[Value]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for v in values {
        if let Some(label) = v.as_factor() {
            *counts.entry(label.to_string()).or_insert(0) += 1;
        }
    }
    counts
}

/// Percentage share per level over the union of labels, zero-filled
fn percent_series(values: &[Value], all_labels: &HashSet<String>, name: &str) -> BarSeries {
    let counts = label_counts(values);
    let total = values.len();
    let mut points: Vec<(String, f64)> = all_labels
        .iter()
        .map(|label| {
            let n = counts.get(label).copied().unwrap_or(0);
            let pct = if total == 0 {
                0.0
            } else {
                n as f64 / total as f64 * 100.0
            };
            (label.clone(), pct)
        })
        .collect();
    points.sort_by(|a, b| a.0.cmp(&b.0));
    BarSeries {
        name: Some(name.to_string()),
        points,
    }
}
