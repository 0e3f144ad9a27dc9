//! Recording surface fakes
//!
//! Each fake implements one surface trait and appends every call into a
//! shared record the test inspects afterwards.

use std::sync::{Arc, Mutex};

use cellvis_rs::chart::{DistChart, HeatmapSpec};
use cellvis_rs::render::{
    CellInfoSurface, ChartSurface, FactorBreakdown, GeneRow, HeatmapSurface,
    NumericSummaryRow, PanelTitle, SelectionSurface, SigInfoSurface,
};

pub type Shared<T> = Arc<Mutex<T>>;

#[derive(Debug, Default)]
pub struct ChartRecord {
    pub titles: Vec<PanelTitle>,
    pub charts: Vec<DistChart>,
    pub resizes: usize,
}

pub struct RecordingChartSurface {
    record: Shared<ChartRecord>,
}

impl RecordingChartSurface {
    pub fn new() -> (Self, Shared<ChartRecord>) {
        let record = Shared::default();
        (
            Self {
                record: record.clone(),
            },
            record,
        )
    }
}

impl ChartSurface for RecordingChartSurface {
    fn set_title(&mut self, title: &PanelTitle) {
        self.record.lock().unwrap().titles.push(title.clone());
    }

    fn draw(&mut self, chart: &DistChart) {
        self.record.lock().unwrap().charts.push(chart.clone());
    }

    fn resize(&mut self) {
        self.record.lock().unwrap().resizes += 1;
    }
}

#[derive(Debug, Default)]
pub struct HeatmapRecord {
    pub draws: Vec<HeatmapSpec>,
    pub resizes: usize,
}

pub struct RecordingHeatmapSurface {
    record: Shared<HeatmapRecord>,
}

impl RecordingHeatmapSurface {
    pub fn new() -> (Self, Shared<HeatmapRecord>) {
        let record = Shared::default();
        (
            Self {
                record: record.clone(),
            },
            record,
        )
    }
}

impl HeatmapSurface for RecordingHeatmapSurface {
    fn draw(&mut self, heatmap: &HeatmapSpec) {
        self.record.lock().unwrap().draws.push(heatmap.clone());
    }

    fn resize(&mut self) {
        self.record.lock().unwrap().resizes += 1;
    }
}

#[derive(Debug, Default)]
pub struct SigInfoRecord {
    pub titles: Vec<String>,
    pub sources: Vec<String>,
    pub rows: Vec<Vec<GeneRow>>,
}

pub struct RecordingSigInfoSurface {
    record: Shared<SigInfoRecord>,
}

impl RecordingSigInfoSurface {
    pub fn new() -> (Self, Shared<SigInfoRecord>) {
        let record = Shared::default();
        (
            Self {
                record: record.clone(),
            },
            record,
        )
    }
}

impl SigInfoSurface for RecordingSigInfoSurface {
    fn set_title(&mut self, name: &str) {
        self.record.lock().unwrap().titles.push(name.to_string());
    }

    fn set_source(&mut self, source: &str) {
        self.record.lock().unwrap().sources.push(source.to_string());
    }

    fn set_rows(&mut self, rows: &[GeneRow]) {
        self.record.lock().unwrap().rows.push(rows.to_vec());
    }
}

#[derive(Debug, Default)]
pub struct CellInfoRecord {
    pub cell_ids: Vec<String>,
    pub properties: Vec<Vec<(String, String)>>,
}

pub struct RecordingCellInfoSurface {
    record: Shared<CellInfoRecord>,
}

impl RecordingCellInfoSurface {
    pub fn new() -> (Self, Shared<CellInfoRecord>) {
        let record = Shared::default();
        (
            Self {
                record: record.clone(),
            },
            record,
        )
    }
}

impl CellInfoSurface for RecordingCellInfoSurface {
    fn set_cell_id(&mut self, cell_id: &str) {
        self.record.lock().unwrap().cell_ids.push(cell_id.to_string());
    }

    fn set_properties(&mut self, rows: &[(String, String)]) {
        self.record.lock().unwrap().properties.push(rows.to_vec());
    }
}

#[derive(Debug, Default)]
pub struct SelectionRecord {
    pub counts: Vec<usize>,
    pub numeric_rows: Vec<Vec<NumericSummaryRow>>,
    pub factor_rows: Vec<Vec<FactorBreakdown>>,
}

pub struct RecordingSelectionSurface {
    record: Shared<SelectionRecord>,
}

impl RecordingSelectionSurface {
    pub fn new() -> (Self, Shared<SelectionRecord>) {
        let record = Shared::default();
        (
            Self {
                record: record.clone(),
            },
            record,
        )
    }
}

impl SelectionSurface for RecordingSelectionSurface {
    fn set_cell_count(&mut self, count: usize) {
        self.record.lock().unwrap().counts.push(count);
    }

    fn set_numeric_rows(&mut self, rows: &[NumericSummaryRow]) {
        self.record.lock().unwrap().numeric_rows.push(rows.to_vec());
    }

    fn set_factor_rows(&mut self, rows: &[FactorBreakdown]) {
        self.record.lock().unwrap().factor_rows.push(rows.to_vec());
    }
}
