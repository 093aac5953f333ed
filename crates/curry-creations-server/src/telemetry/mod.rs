use crate::http::handlers::{make_request_id, with_request_id};
use crate::AppState;
use axum::extract::State;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

pub const METRIC_SUBSYSTEM: &str = "curry";
pub const METRIC_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Default)]
pub struct RequestMetrics {
    counts: Mutex<HashMap<(String, u16), u64>>,
    latency_ns: Mutex<HashMap<String, Vec<u64>>>,
    pub purchase_attempts: AtomicU64,
    pub purchase_confirmed: AtomicU64,
    pub purchase_failed: AtomicU64,
    pub purchase_rejected_busy: AtomicU64,
}

impl RequestMetrics {
    pub async fn observe_request(&self, route: &str, status: StatusCode, latency: Duration) {
        let mut counts = self.counts.lock().await;
        *counts
            .entry((route.to_string(), status.as_u16()))
            .or_insert(0) += 1;
        drop(counts);
        let mut latency_map = self.latency_ns.lock().await;
        latency_map
            .entry(route.to_string())
            .or_insert_with(Vec::new)
            .push(latency.as_nanos() as u64);
    }
}

fn percentile_ns(values: &[u64], pct: f64) -> u64 {
    if values.is_empty() {
        return 0;
    }
    let mut v = values.to_vec();
    v.sort_unstable();
    let idx = ((v.len() as f64 - 1.0) * pct).round() as usize;
    v[idx]
}

pub(crate) async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    let request_id = make_request_id(&state);
    let started = Instant::now();
    let base = format!("subsystem=\"{METRIC_SUBSYSTEM}\",version=\"{METRIC_VERSION}\"");
    let mut body = String::new();

    let counts = state.metrics.counts.lock().await;
    let mut count_rows: Vec<(&(String, u16), &u64)> = counts.iter().collect();
    count_rows.sort_by(|a, b| a.0.cmp(b.0));
    for ((route, status), count) in count_rows {
        body.push_str(&format!(
            "curry_requests_total{{{base},route=\"{route}\",status=\"{status}\"}} {count}\n"
        ));
    }
    drop(counts);

    let latency = state.metrics.latency_ns.lock().await;
    let mut latency_rows: Vec<(&String, &Vec<u64>)> = latency.iter().collect();
    latency_rows.sort_by(|a, b| a.0.cmp(b.0));
    for (route, samples) in latency_rows {
        for (pct, name) in [(0.5, "p50"), (0.95, "p95"), (0.99, "p99")] {
            let seconds = percentile_ns(samples, pct) as f64 / 1_000_000_000.0;
            body.push_str(&format!(
                "curry_request_latency_{name}_seconds{{{base},route=\"{route}\"}} {seconds:.9}\n"
            ));
        }
    }
    drop(latency);

    body.push_str(&format!(
        "curry_purchase_attempts_total{{{base}}} {}\n\
curry_purchase_confirmed_total{{{base}}} {}\n\
curry_purchase_failed_total{{{base}}} {}\n\
curry_purchase_rejected_busy_total{{{base}}} {}\n",
        state.metrics.purchase_attempts.load(Ordering::Relaxed),
        state.metrics.purchase_confirmed.load(Ordering::Relaxed),
        state.metrics.purchase_failed.load(Ordering::Relaxed),
        state.metrics.purchase_rejected_busy.load(Ordering::Relaxed),
    ));

    let mut resp: Response = (StatusCode::OK, body).into_response();
    resp.headers_mut().insert(
        "content-type",
        HeaderValue::from_static("text/plain; version=0.0.4"),
    );
    state
        .metrics
        .observe_request("/metrics", StatusCode::OK, started.elapsed())
        .await;
    with_request_id(resp, &request_id)
}
