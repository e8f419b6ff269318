use cb_stream::{ChannelRegistry, HistoryBuffer, ShutdownCoordinator};

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use sqlx::SqlitePool;
use tokio::sync::RwLock;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub registry: ChannelRegistry,
    pub history: Arc<RwLock<HistoryBuffer>>,
    pub pool: SqlitePool,
    pub shutdown: ShutdownCoordinator,
    /// Present when the Prometheus recorder is installed
    pub metrics_handle: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(registry: ChannelRegistry, history: HistoryBuffer, pool: SqlitePool) -> Self {
        Self {
            registry,
            history: Arc::new(RwLock::new(history)),
            pool,
            shutdown: ShutdownCoordinator::new(),
            metrics_handle: None,
        }
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics_handle = Some(handle);
        self
    }
}
