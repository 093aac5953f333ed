use serde::Serialize;
use std::time::Duration;

pub const CONFIG_SCHEMA_VERSION: &str = "1";

#[derive(Debug, Clone, Serialize)]
pub struct ApiConfig {
    /// Fixed latency of the simulated payment confirmation call.
    pub purchase_confirm_delay: Duration,
    pub catalog_ttl: Duration,
    pub readiness_requires_catalog: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            purchase_confirm_delay: Duration::from_millis(1000),
            catalog_ttl: Duration::from_secs(30),
            readiness_requires_catalog: true,
        }
    }
}
