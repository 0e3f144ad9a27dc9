//! Dashboard configuration
//!
//! Tunables for the view layer, loadable from TOML. Everything has a default
//! matching the shipped dashboard behavior, so configuration is optional.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{CellVisError, Result};

fn default_resize_debounce_ms() -> u64 {
    300
}

fn default_histogram_bins() -> usize {
    40
}

fn default_bin_end_buffer() -> f64 {
    // Bin ends are exclusive; the buffer keeps the max value inside the last bin
    1e-4
}

fn default_gene_url_base() -> String {
    "http://www.genecards.org/cgi-bin/carddisp.pl?gene=".to_string()
}

/// Configuration for one dashboard instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Quiet window for coalescing resize bursts (milliseconds)
    #[serde(default = "default_resize_debounce_ms")]
    pub resize_debounce_ms: u64,

    /// Number of bins for numeric distribution charts
    #[serde(default = "default_histogram_bins")]
    pub histogram_bins: usize,

    /// Constant added past the max value so it falls inside the last bin
    #[serde(default = "default_bin_end_buffer")]
    pub bin_end_buffer: f64,

    /// Base URL for gene-reference links in panel titles
    #[serde(default = "default_gene_url_base")]
    pub gene_url_base: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            resize_debounce_ms: default_resize_debounce_ms(),
            histogram_bins: default_histogram_bins(),
            bin_end_buffer: default_bin_end_buffer(),
            gene_url_base: default_gene_url_base(),
        }
    }
}

impl DashboardConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| CellVisError::Config(e.to_string()))
    }

    /// Resize debounce window as a [`Duration`]
    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = DashboardConfig::default();
        assert_eq!(cfg.resize_debounce_ms, 300);
        assert_eq!(cfg.histogram_bins, 40);
        assert!(cfg.gene_url_base.contains("genecards"));
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let cfg = DashboardConfig::from_toml_str("resize_debounce_ms = 50\n").unwrap();
        assert_eq!(cfg.resize_debounce_ms, 50);
        assert_eq!(cfg.histogram_bins, 40);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = DashboardConfig::from_toml_str("histogram_bins = \"forty\"").unwrap_err();
        assert!(matches!(err, CellVisError::Config(_)));
    }
}
