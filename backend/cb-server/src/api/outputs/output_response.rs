use cb_core::Output;

use serde::{Deserialize, Serialize};

pub const SAVED_MESSAGE: &str = "Output saved";

/// Response for POST /api/outputs
#[derive(Debug, Serialize, Deserialize)]
pub struct OutputResponse {
    pub message: String,
    pub data: Output,
}
