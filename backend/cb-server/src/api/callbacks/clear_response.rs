use serde::{Deserialize, Serialize};

/// Response for DELETE /api/callbacks
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearResponse {
    pub success: bool,
    pub cleared_count: usize,
}
