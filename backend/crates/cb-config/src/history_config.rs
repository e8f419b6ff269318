use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_HISTORY_CAPACITY, MAX_HISTORY_CAPACITY,
    MIN_HISTORY_CAPACITY,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Most recent callbacks kept for polling viewers
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl HistoryConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.capacity < MIN_HISTORY_CAPACITY || self.capacity > MAX_HISTORY_CAPACITY {
            return Err(ConfigError::config(format!(
                "history.capacity must be {}-{}, got {}",
                MIN_HISTORY_CAPACITY, MAX_HISTORY_CAPACITY, self.capacity
            )));
        }

        Ok(())
    }
}
