use crate::config::AppConfig;
use crate::observability::AppMetrics;
use crate::services::gateway::SessionGateway;
use crate::services::progression::{ProgressionEngine, ProgressionRules};
use crate::services::responder::{RandomSource, ResponseSelector, ThreadRandom};
use crate::services::session_store::SessionStore;
use std::sync::Arc;

/// Application state shared by HTTP handlers and WebSocket connections
#[derive(Clone, Debug)]
pub struct AppState {
    /// Session gateway for both real-time and stateless chat
    pub gateway: Arc<SessionGateway>,
    /// Process-wide counters
    pub metrics: Arc<AppMetrics>,
}

impl AppState {
    /// Create new application state
    pub fn new(gateway: SessionGateway, metrics: Arc<AppMetrics>) -> Self {
        Self {
            gateway: Arc::new(gateway.with_metrics(metrics.clone())),
            metrics,
        }
    }

    /// Build state from configuration with the given random source
    pub fn from_config(config: &AppConfig, random: Arc<dyn RandomSource>) -> Self {
        let gateway = SessionGateway::new(
            Arc::new(SessionStore::new()),
            ResponseSelector::new(random),
            ProgressionEngine::new(ProgressionRules::from(&config.chat)),
        );
        Self::new(gateway, Arc::new(AppMetrics::default()))
    }

    /// Create development application state
    pub fn development() -> Self {
        Self::from_config(&AppConfig::development(), Arc::new(ThreadRandom))
    }
}
