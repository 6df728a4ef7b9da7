//! Request count and latency metrics, exposed in Prometheus text format.
//!
//! One [`RequestMetrics`] registry exists per process, created at startup
//! and shared through the router. A middleware layer records every
//! completed request, keyed by method, route, and status code. The
//! `/metrics` handler renders the registry on demand: a monotonically
//! non-decreasing `http_requests_total` counter and a cumulative
//! `http_request_duration_seconds` histogram built from the retained
//! latency samples.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tokio::sync::Mutex;

/// Latency bucket boundaries, in seconds.
const BUCKETS: [f64; 7] = [0.05, 0.1, 0.3, 0.5, 1.0, 2.0, 5.0];

/// (method, route, status code) label set.
type RouteKey = (String, String, u16);

/// Process-scoped registry of per-route request counts and latencies.
///
/// Increments are append-only; concurrent handlers share the registry
/// behind async mutexes and never contend for longer than a map insert.
pub struct RequestMetrics {
    service: &'static str,
    counts: Mutex<HashMap<RouteKey, u64>>,
    latencies_ns: Mutex<HashMap<RouteKey, Vec<u64>>>,
}

impl RequestMetrics {
    pub fn new(service: &'static str) -> Self {
        Self {
            service,
            counts: Mutex::new(HashMap::new()),
            latencies_ns: Mutex::new(HashMap::new()),
        }
    }

    /// Records one completed request.
    pub async fn observe_request(
        &self,
        method: &str,
        route: &str,
        status: StatusCode,
        elapsed: Duration,
    ) {
        let key = (method.to_string(), route.to_string(), status.as_u16());

        let mut counts = self.counts.lock().await;
        *counts.entry(key.clone()).or_insert(0) += 1;
        drop(counts);

        let mut latencies = self.latencies_ns.lock().await;
        latencies
            .entry(key)
            .or_default()
            .push(elapsed.as_nanos() as u64);
    }

    /// Renders the registry in Prometheus text exposition format.
    pub async fn render(&self) -> String {
        let counts = self.counts.lock().await.clone();
        let latencies = self.latencies_ns.lock().await.clone();

        let mut body = String::new();

        body.push_str(&format!(
            "# HELP http_requests_total Total HTTP requests for {}\n\
             # TYPE http_requests_total counter\n",
            self.service
        ));
        let mut count_lines = counts.into_iter().collect::<Vec<_>>();
        count_lines.sort_by(|a, b| a.0.cmp(&b.0));
        for ((method, route, status), count) in count_lines {
            body.push_str(&format!(
                "http_requests_total{{method=\"{}\",route=\"{}\",status_code=\"{}\"}} {}\n",
                method, route, status, count
            ));
        }

        body.push_str(&format!(
            "# HELP http_request_duration_seconds HTTP request latency for {}\n\
             # TYPE http_request_duration_seconds histogram\n",
            self.service
        ));
        let mut latency_lines = latencies.into_iter().collect::<Vec<_>>();
        latency_lines.sort_by(|a, b| a.0.cmp(&b.0));
        for ((method, route, status), samples) in latency_lines {
            let labels = format!(
                "method=\"{}\",route=\"{}\",status_code=\"{}\"",
                method, route, status
            );
            push_histogram_from_samples(&mut body, "http_request_duration_seconds", &labels, &samples);
        }

        body
    }
}

/// Appends one cumulative histogram series rendered from raw samples.
fn push_histogram_from_samples(body: &mut String, name: &str, labels: &str, samples_ns: &[u64]) {
    let mut sum_seconds = 0.0;
    for le in BUCKETS {
        let below = samples_ns
            .iter()
            .filter(|&&ns| ns as f64 / 1_000_000_000.0 <= le)
            .count();
        body.push_str(&format!(
            "{}_bucket{{{},le=\"{}\"}} {}\n",
            name, labels, le, below
        ));
    }
    body.push_str(&format!(
        "{}_bucket{{{},le=\"+Inf\"}} {}\n",
        name,
        labels,
        samples_ns.len()
    ));
    for &ns in samples_ns {
        sum_seconds += ns as f64 / 1_000_000_000.0;
    }
    body.push_str(&format!("{}_sum{{{}}} {:.6}\n", name, labels, sum_seconds));
    body.push_str(&format!("{}_count{{{}}} {}\n", name, labels, samples_ns.len()));
}

/// Middleware that times every request and records it once the response
/// status is known. Wraps the whole router, so `/metrics` requests count
/// themselves.
pub async fn track_requests(
    State(metrics): State<Arc<RequestMetrics>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let method = request.method().to_string();
    let route = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    metrics
        .observe_request(&method, &route, response.status(), started.elapsed())
        .await;

    response
}

/// `GET /metrics` handler.
pub async fn metrics_handler(State(metrics): State<Arc<RequestMetrics>>) -> impl IntoResponse {
    let body = metrics.render().await;
    ([(header::CONTENT_TYPE, "text/plain; version=0.0.4")], body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn counter_accumulates_per_label_set() {
        let metrics = RequestMetrics::new("test-service");

        for _ in 0..3 {
            metrics
                .observe_request("GET", "/api/users", StatusCode::OK, Duration::from_millis(10))
                .await;
        }
        metrics
            .observe_request(
                "POST",
                "/api/users",
                StatusCode::OK,
                Duration::from_millis(20),
            )
            .await;

        let body = metrics.render().await;
        assert!(body.contains(
            "http_requests_total{method=\"GET\",route=\"/api/users\",status_code=\"200\"} 3"
        ));
        assert!(body.contains(
            "http_requests_total{method=\"POST\",route=\"/api/users\",status_code=\"200\"} 1"
        ));
    }

    #[tokio::test]
    async fn histogram_buckets_are_cumulative() {
        let metrics = RequestMetrics::new("test-service");

        // One fast request, one slow one.
        metrics
            .observe_request("GET", "/", StatusCode::OK, Duration::from_millis(10))
            .await;
        metrics
            .observe_request("GET", "/", StatusCode::OK, Duration::from_millis(700))
            .await;

        let body = metrics.render().await;
        let labels = "method=\"GET\",route=\"/\",status_code=\"200\"";
        assert!(body.contains(&format!(
            "http_request_duration_seconds_bucket{{{labels},le=\"0.05\"}} 1"
        )));
        assert!(body.contains(&format!(
            "http_request_duration_seconds_bucket{{{labels},le=\"1\"}} 2"
        )));
        assert!(body.contains(&format!(
            "http_request_duration_seconds_bucket{{{labels},le=\"+Inf\"}} 2"
        )));
        assert!(body.contains(&format!(
            "http_request_duration_seconds_count{{{labels}}} 2"
        )));
    }
}
