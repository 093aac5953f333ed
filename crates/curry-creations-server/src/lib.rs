#![forbid(unsafe_code)]

use axum::routing::{get, post};
use axum::Router;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

mod analytics;
mod config;
mod http;
mod purchase;
mod store;
mod telemetry;

#[cfg(test)]
mod service_tests;

pub use analytics::{init_analytics, AnalyticsError, AnalyticsTracker, LoggingTracker};
pub use config::{ApiConfig, CONFIG_SCHEMA_VERSION};
pub use purchase::{
    execute_purchase, PaymentConfirmation, PaymentError, PaymentGateway, PurchaseFlowOutcome,
    PurchaseLedger, SimulatedGateway,
};
pub use store::{InMemoryRepository, RecipeRepository, RepositoryError, UserProfile};
pub use telemetry::RequestMetrics;

pub const CRATE_NAME: &str = "curry-creations-server";

#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn RecipeRepository>,
    pub gateway: Arc<dyn PaymentGateway>,
    pub purchases: Arc<PurchaseLedger>,
    pub analytics: Option<Arc<dyn AnalyticsTracker>>,
    pub metrics: Arc<RequestMetrics>,
    pub request_id_seed: Arc<AtomicU64>,
    pub ready: Arc<AtomicBool>,
    pub accepting_requests: Arc<AtomicBool>,
    pub api: ApiConfig,
}

impl AppState {
    #[must_use]
    pub fn new(repository: Arc<dyn RecipeRepository>, gateway: Arc<dyn PaymentGateway>) -> Self {
        Self::with_config(repository, gateway, None, ApiConfig::default())
    }

    #[must_use]
    pub fn with_config(
        repository: Arc<dyn RecipeRepository>,
        gateway: Arc<dyn PaymentGateway>,
        analytics: Option<Arc<dyn AnalyticsTracker>>,
        api: ApiConfig,
    ) -> Self {
        Self {
            repository,
            gateway,
            purchases: Arc::new(PurchaseLedger::new()),
            analytics,
            metrics: Arc::new(RequestMetrics::default()),
            request_id_seed: Arc::new(AtomicU64::new(1)),
            ready: Arc::new(AtomicBool::new(true)),
            accepting_requests: Arc::new(AtomicBool::new(true)),
            api,
        }
    }

    /// Call once before serving. Absence of a tracker and tracker failures
    /// are both non-fatal.
    pub fn init_analytics(&self) {
        init_analytics(self.analytics.as_ref());
    }

    pub fn begin_shutdown_drain(&self) {
        self.accepting_requests.store(false, Ordering::Relaxed);
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(http::pages::home_page_handler))
        .route("/recipe/:recipe_id", get(http::pages::recipe_page_handler))
        .route(
            "/recipe/:recipe_id/purchase",
            post(http::pages::purchase_action_handler),
        )
        .route("/dashboard", get(http::pages::dashboard_page_handler))
        .route("/healthz", get(http::handlers::healthz_handler))
        .route("/readyz", get(http::handlers::readyz_handler))
        .route("/metrics", get(http::handlers::metrics_handler))
        .route("/v1/version", get(http::handlers::version_handler))
        .route("/v1/recipes", get(http::handlers::list_recipes_handler))
        .route(
            "/v1/recipes/:recipe_id",
            get(http::handlers::recipe_detail_handler),
        )
        .route(
            "/v1/recipes/:recipe_id/purchase",
            post(http::handlers::purchase_handler),
        )
        .route("/v1/dashboard", get(http::handlers::dashboard_data_handler))
        .with_state(state)
}
