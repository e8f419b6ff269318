use serde::{Deserialize, Serialize};

/// One persisted text payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    pub id: i64,
    pub output: String,
}
