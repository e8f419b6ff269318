use cb_core::Event;

use serde::{Deserialize, Serialize};

/// Response for GET /api/callbacks, newest first
#[derive(Debug, Serialize, Deserialize)]
pub struct CallbackListResponse {
    pub callbacks: Vec<Event>,
    pub count: usize,
}
