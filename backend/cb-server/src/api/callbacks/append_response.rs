use serde::{Deserialize, Serialize};

/// Response for POST /api/callbacks
#[derive(Debug, Serialize, Deserialize)]
pub struct AppendResponse {
    pub success: bool,
}
