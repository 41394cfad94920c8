use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::ViewConfig;

pub const VIEW_CONFIG_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: ViewConfig,
}

impl ViewConfig {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize view config: {e}")))
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ViewConfigJsonContractV1 {
            schema_version: VIEW_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize view config contract v1: {e}"))
        })
    }

    /// Accepts both the versioned envelope and a bare config payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(payload) = serde_json::from_str::<ViewConfigJsonContractV1>(input) {
            if payload.schema_version != VIEW_CONFIG_JSON_SCHEMA_V1 {
                return Err(ChartError::InvalidData(format!(
                    "unsupported view config schema version: {}",
                    payload.schema_version
                )));
            }
            return Ok(payload.config);
        }
        serde_json::from_str::<ViewConfig>(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse view config json payload: {e}"))
        })
    }
}
