//! Scripted [`DataFetcher`] test double
//!
//! Responses are configured up front; every call is logged. An optional
//! semaphore gate lets a test hold fetches open and release them later, to
//! observe what happens while a fetch is still in flight.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Semaphore;

use cellvis_rs::error::{CellVisError, Result};
use cellvis_rs::fetch::{CellMeta, CellsMeta, DataFetcher, SignatureExpression};
use cellvis_rs::CellId;

/// Every fetch call made against the stub, in order per resource
#[derive(Debug, Default)]
pub struct FetchLog {
    pub cell_meta: Vec<String>,
    pub cells_meta: Vec<Vec<CellId>>,
    pub signature_expression: Vec<String>,
}

impl FetchLog {
    pub fn total(&self) -> usize {
        self.cell_meta.len() + self.cells_meta.len() + self.signature_expression.len()
    }
}

#[derive(Default)]
pub struct StubFetcher {
    cell_meta: HashMap<String, CellMeta>,
    cells_meta: CellsMeta,
    expression: HashMap<String, SignatureExpression>,
    fail_all: bool,
    gate: Option<Arc<Semaphore>>,
    log: Arc<Mutex<FetchLog>>,
}

impl StubFetcher {
    pub fn with_cell_meta(mut self, cell_id: &str, meta: CellMeta) -> Self {
        self.cell_meta.insert(cell_id.to_string(), meta);
        self
    }

    pub fn with_cells_meta(mut self, meta: CellsMeta) -> Self {
        self.cells_meta = meta;
        self
    }

    pub fn with_expression(mut self, sig_name: &str, expr: SignatureExpression) -> Self {
        self.expression.insert(sig_name.to_string(), expr);
        self
    }

    /// Fail every request with a fetch error
    pub fn failing(mut self) -> Self {
        self.fail_all = true;
        self
    }

    /// Block every request on a permit from `gate` until the test releases it
    pub fn gated(mut self, gate: Arc<Semaphore>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Handle to the call log, to keep after the stub moves into the dashboard
    pub fn log(&self) -> Arc<Mutex<FetchLog>> {
        self.log.clone()
    }

    async fn pass_gate(&self, resource: &str) -> Result<()> {
        if let Some(gate) = &self.gate {
            let permit = gate
                .acquire()
                .await
                .map_err(|_| CellVisError::fetch(resource, "gate closed"))?;
            permit.forget();
        }
        if self.fail_all {
            return Err(CellVisError::fetch(resource, "scripted failure"));
        }
        Ok(())
    }
}

#[async_trait]
impl DataFetcher for StubFetcher {
    async fn cell_meta(&self, cell_id: &str) -> Result<CellMeta> {
        self.log
            .lock()
            .unwrap()
            .cell_meta
            .push(cell_id.to_string());
        self.pass_gate("cell_meta").await?;
        Ok(self.cell_meta.get(cell_id).cloned().unwrap_or_default())
    }

    async fn cells_meta(&self, cell_ids: &[CellId]) -> Result<CellsMeta> {
        self.log.lock().unwrap().cells_meta.push(cell_ids.to_vec());
        self.pass_gate("cells_meta").await?;
        Ok(self.cells_meta.clone())
    }

    async fn signature_expression(&self, sig_name: &str) -> Result<SignatureExpression> {
        self.log
            .lock()
            .unwrap()
            .signature_expression
            .push(sig_name.to_string());
        self.pass_gate("signature_expression").await?;
        Ok(self.expression.get(sig_name).cloned().unwrap_or_default())
    }
}
