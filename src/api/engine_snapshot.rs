use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{ChartLayout, ChartMode, DataPoint, Padding, Viewport};
use crate::error::{GraphError, GraphResult};
use crate::render::Renderer;

use super::GraphEngine;

pub const ENGINE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub viewport: Viewport,
    pub padding: Padding,
    pub section_size: f64,
    pub density: f64,
    pub mode: ChartMode,
    pub points: Vec<DataPoint>,
    pub layout: ChartLayout,
    pub series_metadata: IndexMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: EngineSnapshot,
}

impl EngineSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> GraphResult<String> {
        let payload = EngineSnapshotJsonContractV1 {
            schema_version: ENGINE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            GraphError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    pub fn from_json_compat_str(input: &str) -> GraphResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<Self>(input) {
            return Ok(snapshot);
        }
        let payload: EngineSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            GraphError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != ENGINE_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(GraphError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> GraphEngine<R> {
    /// Captures the full engine state plus a freshly computed layout.
    pub fn snapshot(&self) -> GraphResult<EngineSnapshot> {
        Ok(EngineSnapshot {
            viewport: self.viewport,
            padding: self.padding,
            section_size: self.section_size,
            density: self.density,
            mode: self.mode,
            points: self.points.clone(),
            layout: self.compute_layout()?,
            series_metadata: self.series_metadata.clone(),
        })
    }

    pub fn snapshot_json_pretty(&self) -> GraphResult<String> {
        self.snapshot()?.to_json_contract_v1_pretty()
    }
}
