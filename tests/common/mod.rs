//! Common test utilities and helpers

#![allow(dead_code)] // Test utilities may not all be used in every test file

pub mod recorders;
pub mod stubs;

use std::collections::HashMap;
use std::sync::Arc;

use crossbeam_channel::Receiver;

use cellvis_rs::container::Surfaces;
use cellvis_rs::fetch::DataFetcher;
use cellvis_rs::notify::{ChannelNotifier, DashboardEvent};
use cellvis_rs::{CellId, Dashboard, DashboardConfig, GlobalState, Value};

use recorders::{
    CellInfoRecord, ChartRecord, HeatmapRecord, RecordingCellInfoSurface,
    RecordingChartSurface, RecordingHeatmapSurface, RecordingSelectionSurface,
    RecordingSigInfoSurface, SelectionRecord, Shared, SigInfoRecord,
};
use stubs::StubFetcher;

/// A fully wired dashboard over recording surfaces and a stub fetcher
pub struct Harness {
    pub dashboard: Dashboard,
    pub store: Arc<GlobalState>,
    pub chart: Shared<ChartRecord>,
    pub sig_info: Shared<SigInfoRecord>,
    pub heatmap: Shared<HeatmapRecord>,
    pub cell_info: Shared<CellInfoRecord>,
    pub selection: Shared<SelectionRecord>,
    pub events: Receiver<DashboardEvent>,
}

/// Install the test log subscriber once; `RUST_LOG` controls verbosity
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn harness() -> Harness {
    harness_with(StubFetcher::default())
}

pub fn harness_with(fetcher: StubFetcher) -> Harness {
    init_tracing();
    let store = Arc::new(GlobalState::default());
    let (notifier, events) = ChannelNotifier::new();

    let (chart_surface, chart) = RecordingChartSurface::new();
    let (sig_info_surface, sig_info) = RecordingSigInfoSurface::new();
    let (heatmap_surface, heatmap) = RecordingHeatmapSurface::new();
    let (cell_info_surface, cell_info) = RecordingCellInfoSurface::new();
    let (selection_surface, selection) = RecordingSelectionSurface::new();

    let fetcher: Arc<dyn DataFetcher> = Arc::new(fetcher);
    let dashboard = Dashboard::new(
        store.clone(),
        DashboardConfig::default(),
        fetcher,
        Arc::new(notifier),
        Surfaces {
            values: Box::new(chart_surface),
            sig_info: Box::new(sig_info_surface),
            sig_heatmap: Box::new(heatmap_surface),
            cell_info: Box::new(cell_info_surface),
            selection_info: Box::new(selection_surface),
        },
    );

    Harness {
        dashboard,
        store,
        chart,
        sig_info,
        heatmap,
        cell_info,
        selection,
        events,
    }
}

/// Numeric plotted-values payload from (id, value) pairs
pub fn numeric_values(pairs: &[(&str, f64)]) -> HashMap<CellId, Value> {
    pairs
        .iter()
        .map(|(id, v)| (id.to_string(), Value::Num(*v)))
        .collect()
}

/// Categorical plotted-values payload from (id, level) pairs
pub fn factor_values(pairs: &[(&str, &str)]) -> HashMap<CellId, Value> {
    pairs
        .iter()
        .map(|(id, level)| (id.to_string(), Value::Factor(level.to_string())))
        .collect()
}

pub fn cell_ids(ids: &[&str]) -> Vec<CellId> {
    ids.iter().map(|s| s.to_string()).collect()
}
