#![deny(clippy::redundant_clone)]

use crate::config::CONFIG_SCHEMA_VERSION;
use crate::purchase::{execute_purchase, PurchaseFlowOutcome};
use crate::store::{RecipeRepository, RepositoryError};
use crate::{AppState, CRATE_NAME};
use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use curry_creations_api::{self as api, map_error, ApiError, ApiErrorCode, RecipeListResponseDto};
use curry_creations_model::{RecipeId, UserStats};
use serde_json::json;
use sha2::{Digest, Sha256};
use std::sync::atomic::Ordering;
use std::time::{Duration, Instant};
use tracing::info;

pub(crate) fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

pub(crate) fn api_error_response(status: StatusCode, err: ApiError) -> Response {
    let body = Json(json!({"error": err}));
    (status, body).into_response()
}

pub(crate) fn mapped_error_response(err: ApiError) -> Response {
    let status = StatusCode::from_u16(map_error(&err).status_code)
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    api_error_response(status, err)
}

pub(crate) fn repository_unavailable(e: &RepositoryError) -> ApiError {
    ApiError::new(
        ApiErrorCode::NotReady,
        "recipe backend unavailable",
        json!({"message": e.to_string()}),
    )
}

pub(crate) fn make_request_id(state: &AppState) -> String {
    let id = state.request_id_seed.fetch_add(1, Ordering::Relaxed);
    format!("req-{id:016x}")
}

pub(crate) fn propagated_request_id(headers: &HeaderMap, state: &AppState) -> String {
    if let Some(raw) = headers.get("x-request-id").and_then(|v| v.to_str().ok()) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    make_request_id(state)
}

pub(crate) fn with_request_id(mut response: Response, request_id: &str) -> Response {
    if let Ok(v) = HeaderValue::from_str(request_id) {
        response.headers_mut().insert("x-request-id", v);
    }
    response
}

pub(crate) fn if_none_match(headers: &HeaderMap) -> Option<String> {
    headers
        .get("if-none-match")
        .and_then(|v| v.to_str().ok())
        .map(std::string::ToString::to_string)
}

pub(crate) fn put_cache_headers(headers: &mut HeaderMap, ttl: Duration, etag: &str) {
    if let Ok(value) = HeaderValue::from_str(&format!("public, max-age={}", ttl.as_secs())) {
        headers.insert("cache-control", value);
    }
    if let Ok(value) = HeaderValue::from_str(etag) {
        headers.insert("etag", value);
    }
}

pub(crate) fn is_draining(state: &AppState) -> bool {
    !state.accepting_requests.load(Ordering::Relaxed)
}

pub(crate) async fn healthz_handler(State(state): State<AppState>) -> impl IntoResponse {
    let request_id = make_request_id(&state);
    let started = Instant::now();
    let resp = (StatusCode::OK, "ok").into_response();
    state
        .metrics
        .observe_request("/healthz", StatusCode::OK, started.elapsed())
        .await;
    with_request_id(resp, &request_id)
}

pub(crate) async fn readyz_handler(State(state): State<AppState>) -> impl IntoResponse {
    let request_id = make_request_id(&state);
    let started = Instant::now();
    let catalog_ready = if state.api.readiness_requires_catalog {
        state
            .repository
            .list_recipes()
            .await
            .map(|recipes| !recipes.is_empty())
            .unwrap_or(false)
    } else {
        true
    };
    let (status, body) = if state.ready.load(Ordering::Relaxed) && catalog_ready {
        (StatusCode::OK, "ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "not-ready")
    };
    let resp = (status, body).into_response();
    state
        .metrics
        .observe_request("/readyz", status, started.elapsed())
        .await;
    with_request_id(resp, &request_id)
}

pub(crate) async fn version_handler(State(state): State<AppState>) -> impl IntoResponse {
    let request_id = make_request_id(&state);
    let started = Instant::now();
    let payload = json!({
        "service": {
            "crate": CRATE_NAME,
            "version": env!("CARGO_PKG_VERSION"),
            "config_schema_version": CONFIG_SCHEMA_VERSION,
        },
        "api": {
            "version": api::API_VERSION,
        },
        "backend": state.repository.backend_tag(),
    });
    let mut response = Json(payload).into_response();
    if let Ok(value) = HeaderValue::from_str("public, max-age=30") {
        response.headers_mut().insert("cache-control", value);
    }
    state
        .metrics
        .observe_request("/v1/version", StatusCode::OK, started.elapsed())
        .await;
    with_request_id(response, &request_id)
}

pub(crate) async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    crate::telemetry::metrics_handler(State(state)).await
}

pub(crate) async fn list_recipes_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    info!(request_id = %request_id, route = "/v1/recipes", "request start");
    let recipes = match state.repository.list_recipes().await {
        Ok(v) => v,
        Err(e) => {
            let resp = mapped_error_response(repository_unavailable(&e));
            state
                .metrics
                .observe_request(
                    "/v1/recipes",
                    StatusCode::SERVICE_UNAVAILABLE,
                    started.elapsed(),
                )
                .await;
            return with_request_id(resp, &request_id);
        }
    };
    let payload = RecipeListResponseDto {
        api_version: api::API_VERSION.to_string(),
        recipes: recipes.iter().map(api::recipe_card).collect(),
    };
    let etag = format!(
        "\"{}\"",
        sha256_hex(&serde_json::to_vec(&payload).unwrap_or_default())
    );
    if if_none_match(&headers).as_deref() == Some(etag.as_str()) {
        let mut resp = StatusCode::NOT_MODIFIED.into_response();
        put_cache_headers(resp.headers_mut(), state.api.catalog_ttl, &etag);
        state
            .metrics
            .observe_request("/v1/recipes", StatusCode::NOT_MODIFIED, started.elapsed())
            .await;
        return with_request_id(resp, &request_id);
    }
    let mut response = Json(payload).into_response();
    put_cache_headers(response.headers_mut(), state.api.catalog_ttl, &etag);
    state
        .metrics
        .observe_request("/v1/recipes", StatusCode::OK, started.elapsed())
        .await;
    with_request_id(response, &request_id)
}

pub(crate) async fn recipe_detail_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(recipe_id): Path<String>,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let route = "/v1/recipes/{recipe_id}";
    let id = match RecipeId::parse(&recipe_id) {
        Ok(v) => v,
        Err(e) => {
            let resp =
                mapped_error_response(ApiError::invalid_recipe_id(&recipe_id, &e.to_string()));
            state
                .metrics
                .observe_request(route, StatusCode::BAD_REQUEST, started.elapsed())
                .await;
            return with_request_id(resp, &request_id);
        }
    };
    let detail = match state.repository.get_recipe_by_id(&id).await {
        Ok(Some(v)) => v,
        Ok(None) => {
            let resp = mapped_error_response(ApiError::recipe_not_found(&recipe_id));
            state
                .metrics
                .observe_request(route, StatusCode::NOT_FOUND, started.elapsed())
                .await;
            return with_request_id(resp, &request_id);
        }
        Err(e) => {
            let resp = mapped_error_response(repository_unavailable(&e));
            state
                .metrics
                .observe_request(route, StatusCode::SERVICE_UNAVAILABLE, started.elapsed())
                .await;
            return with_request_id(resp, &request_id);
        }
    };
    let access = state.purchases.access_state(&id).await;
    let resp = Json(api::recipe_detail(&detail, &access)).into_response();
    state
        .metrics
        .observe_request(route, StatusCode::OK, started.elapsed())
        .await;
    with_request_id(resp, &request_id)
}

pub(crate) async fn purchase_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(recipe_id): Path<String>,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let route = "/v1/recipes/{recipe_id}/purchase";
    if is_draining(&state) {
        let resp = api_error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            ApiError::new(
                ApiErrorCode::NotReady,
                "server draining; refusing new purchases",
                json!({}),
            ),
        );
        state
            .metrics
            .observe_request(route, StatusCode::SERVICE_UNAVAILABLE, started.elapsed())
            .await;
        return with_request_id(resp, &request_id);
    }
    let id = match RecipeId::parse(&recipe_id) {
        Ok(v) => v,
        Err(e) => {
            let resp =
                mapped_error_response(ApiError::invalid_recipe_id(&recipe_id, &e.to_string()));
            state
                .metrics
                .observe_request(route, StatusCode::BAD_REQUEST, started.elapsed())
                .await;
            return with_request_id(resp, &request_id);
        }
    };
    let detail = match state.repository.get_recipe_by_id(&id).await {
        Ok(Some(v)) => v,
        Ok(None) => {
            let resp = mapped_error_response(ApiError::recipe_not_found(&recipe_id));
            state
                .metrics
                .observe_request(route, StatusCode::NOT_FOUND, started.elapsed())
                .await;
            return with_request_id(resp, &request_id);
        }
        Err(e) => {
            let resp = mapped_error_response(repository_unavailable(&e));
            state
                .metrics
                .observe_request(route, StatusCode::SERVICE_UNAVAILABLE, started.elapsed())
                .await;
            return with_request_id(resp, &request_id);
        }
    };
    state.metrics.purchase_attempts.fetch_add(1, Ordering::Relaxed);
    let outcome = execute_purchase(
        state.purchases.as_ref(),
        state.gateway.as_ref(),
        &detail.summary,
    )
    .await;
    let (status, resp) = match outcome {
        PurchaseFlowOutcome::Confirmed { .. } | PurchaseFlowOutcome::AlreadyOwned => {
            state
                .metrics
                .purchase_confirmed
                .fetch_add(1, Ordering::Relaxed);
            let access = state.purchases.access_state(&id).await;
            (
                StatusCode::OK,
                Json(api::purchase_outcome(&id, &access)).into_response(),
            )
        }
        PurchaseFlowOutcome::InFlight => {
            state
                .metrics
                .purchase_rejected_busy
                .fetch_add(1, Ordering::Relaxed);
            (
                StatusCode::CONFLICT,
                mapped_error_response(ApiError::purchase_in_flight(&recipe_id)),
            )
        }
        PurchaseFlowOutcome::Failed { reason } => {
            state
                .metrics
                .purchase_failed
                .fetch_add(1, Ordering::Relaxed);
            (
                StatusCode::PAYMENT_REQUIRED,
                mapped_error_response(ApiError::payment_failed(&recipe_id, &reason)),
            )
        }
    };
    state
        .metrics
        .observe_request(route, status, started.elapsed())
        .await;
    with_request_id(resp, &request_id)
}

pub(crate) async fn dashboard_data_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let route = "/v1/dashboard";
    let (purchased, recommended, profile) = match (
        state.repository.purchased_recipes().await,
        state.repository.recommendations().await,
        state.repository.user_profile().await,
    ) {
        (Ok(p), Ok(r), Ok(u)) => (p, r, u),
        (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
            let resp = mapped_error_response(repository_unavailable(&e));
            state
                .metrics
                .observe_request(route, StatusCode::SERVICE_UNAVAILABLE, started.elapsed())
                .await;
            return with_request_id(resp, &request_id);
        }
    };
    let favorites: Vec<_> = purchased
        .iter()
        .filter(|p| profile.favorites.contains(&p.recipe.id))
        .map(|p| p.recipe.clone())
        .collect();
    let stats = UserStats::derive(&purchased, favorites.len() as u64, profile.recipes_made);
    let resp = Json(api::dashboard(&stats, &purchased, &favorites, &recommended)).into_response();
    state
        .metrics
        .observe_request(route, StatusCode::OK, started.elapsed())
        .await;
    with_request_id(resp, &request_id)
}
