use serde::{Deserialize, Serialize};

pub const BROADCAST_MESSAGE: &str = "Log broadcasted successfully";

/// Response for POST /api/callback
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestResponse {
    pub success: bool,
    pub message: String,
    /// Open streams when the event was published
    pub client_count: usize,
}

impl IngestResponse {
    pub fn broadcast(client_count: usize) -> Self {
        Self {
            success: true,
            message: BROADCAST_MESSAGE.to_string(),
            client_count,
        }
    }
}
