use chrono::Utc;
use tracing::{debug, warn};

use crate::{
    dispatcher::Dispatcher,
    models::health::{HealthCheckResponse, HealthStatus},
};

pub struct HealthChecker {
    dispatcher: Dispatcher,
}

impl HealthChecker {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    pub fn check_all(&self) -> HealthCheckResponse {
        let registry = self.dispatcher.registry();
        let missing: Vec<String> = registry
            .missing()
            .into_iter()
            .map(|(event_type, channel)| format!("{}/{}", event_type, channel))
            .collect();

        let status = if missing.is_empty() {
            debug!(creators = registry.len(), "Creator registry complete");
            HealthStatus::Healthy
        } else {
            warn!(missing = ?missing, "Creator registry incomplete");
            HealthStatus::Unhealthy
        };

        HealthCheckResponse {
            status,
            timestamp: Utc::now(),
            transport: self.dispatcher.transport().name().to_string(),
            registered_creators: registry.len(),
            missing_creators: missing,
        }
    }
}
