// ABOUTME: HTTP load tester that drives POST /api/calculate with concurrent workers
// ABOUTME: Reports throughput, error count, and latency percentiles for a fixed duration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Load testing
//!
//! Each worker owns one logical connection and sends requests back to back
//! until the deadline. Every request carries a freshly generated random meal.
//!
//! Every request is bounded by `request_timeout`, so a stalled server delays
//! the end of a run by at most one timeout past the deadline. Timed-out and
//! refused requests count as errors but not as completed requests; non-2xx
//! responses count as both.

use crate::intelligence::random_meal;
use crate::resources::{ResourceMonitor, ResourceUsage};
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;
use tracing::{debug, info};

/// Load test failures that prevent a report from being produced
#[derive(Debug, Error)]
pub enum LoadTestError {
    /// The requested parameters cannot run
    #[error("invalid load test configuration: {0}")]
    InvalidConfig(String),
    /// The HTTP client could not be built
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
    /// A worker task panicked or was cancelled
    #[error("load test worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

/// Load test parameters
#[derive(Debug, Clone)]
pub struct LoadTestConfig {
    /// Full URL of the scoring endpoint
    pub url: String,
    /// Number of concurrent workers
    pub connections: usize,
    /// How long to keep sending requests
    pub duration: Duration,
    /// Upper bound for a single request, including reading the body
    pub request_timeout: Duration,
}

impl Default for LoadTestConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:3000/api/calculate".to_owned(),
            connections: 100,
            duration: Duration::from_secs(10),
            request_timeout: Duration::from_secs(10),
        }
    }
}

/// Latency distribution in milliseconds
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LatencySummary {
    /// Arithmetic mean
    pub mean_ms: f64,
    /// Median
    pub p50_ms: f64,
    /// 99th percentile
    pub p99_ms: f64,
    /// Slowest request
    pub max_ms: f64,
}

impl LatencySummary {
    /// Summarize latency samples; sorts `samples` in place
    #[must_use]
    pub fn from_samples(samples: &mut [f64]) -> Self {
        if samples.is_empty() {
            return Self::default();
        }

        samples.sort_by(f64::total_cmp);
        let mean_ms = samples.iter().sum::<f64>() / samples.len() as f64;

        Self {
            mean_ms,
            p50_ms: percentile(samples, 50.0),
            p99_ms: percentile(samples, 99.0),
            max_ms: samples[samples.len() - 1],
        }
    }
}

/// Nearest-rank percentile over sorted, non-empty samples
fn percentile(sorted: &[f64], pct: f64) -> f64 {
    let rank = (pct / 100.0 * sorted.len() as f64).ceil() as usize;
    sorted[rank.clamp(1, sorted.len()) - 1]
}

/// Aggregated result of a load test
#[derive(Debug, Clone, Serialize)]
pub struct LoadTestReport {
    /// Requests that received a response, successful or not
    pub total_requests: u64,
    /// Non-2xx responses plus requests that failed or timed out
    pub errors: u64,
    /// Requests abandoned after `request_timeout`
    pub timeouts: u64,
    /// Average completed requests per second
    pub requests_per_sec: f64,
    /// Average response bytes per second, in KiB
    pub transfer_kib_per_sec: f64,
    /// Latency distribution of completed requests
    pub latency: LatencySummary,
    /// Memory and CPU of the load-testing process before and after the run
    pub resources: ResourceUsage,
}

#[derive(Debug, Default)]
struct WorkerStats {
    latencies_ms: Vec<f64>,
    errors: u64,
    timeouts: u64,
    bytes_received: u64,
}

/// Run a load test against `config.url`
///
/// # Errors
///
/// Returns an error if the configuration is unusable, the HTTP client cannot
/// be built, or a worker task fails. Individual request failures are counted
/// in the report instead.
pub async fn run_load_test(config: &LoadTestConfig) -> Result<LoadTestReport, LoadTestError> {
    if config.connections == 0 {
        return Err(LoadTestError::InvalidConfig(
            "connections must be at least 1".to_owned(),
        ));
    }
    if config.duration.is_zero() {
        return Err(LoadTestError::InvalidConfig(
            "duration must be positive".to_owned(),
        ));
    }
    if config.request_timeout.is_zero() {
        return Err(LoadTestError::InvalidConfig(
            "request timeout must be positive".to_owned(),
        ));
    }

    let client = reqwest::Client::builder()
        .pool_max_idle_per_host(config.connections)
        .timeout(config.request_timeout)
        .build()?;

    info!(
        url = %config.url,
        connections = config.connections,
        duration_secs = config.duration.as_secs_f64(),
        request_timeout_secs = config.request_timeout.as_secs_f64(),
        "Starting load test"
    );

    let mut monitor = ResourceMonitor::new();
    let before = monitor.sample();
    let started = Instant::now();
    let deadline = started + config.duration;

    let workers = (0..config.connections).map(|_| {
        let client = client.clone();
        let url = config.url.clone();
        tokio::spawn(run_worker(client, url, deadline))
    });
    let results = futures_util::future::join_all(workers).await;
    let elapsed_secs = started.elapsed().as_secs_f64();
    let resources = ResourceUsage {
        before,
        after: monitor.sample(),
    };

    let mut latencies_ms = Vec::new();
    let mut errors = 0;
    let mut timeouts = 0;
    let mut bytes_received = 0;
    for result in results {
        let stats = result?;
        latencies_ms.extend(stats.latencies_ms);
        errors += stats.errors;
        timeouts += stats.timeouts;
        bytes_received += stats.bytes_received;
    }

    let total_requests = latencies_ms.len() as u64;
    let report = LoadTestReport {
        total_requests,
        errors,
        timeouts,
        requests_per_sec: total_requests as f64 / elapsed_secs,
        transfer_kib_per_sec: bytes_received as f64 / 1024.0 / elapsed_secs,
        latency: LatencySummary::from_samples(&mut latencies_ms),
        resources,
    };

    info!(
        total_requests = report.total_requests,
        errors = report.errors,
        timeouts = report.timeouts,
        requests_per_sec = report.requests_per_sec,
        "Load test finished"
    );

    Ok(report)
}

async fn run_worker(client: reqwest::Client, url: String, deadline: Instant) -> WorkerStats {
    let mut stats = WorkerStats::default();

    while Instant::now() < deadline {
        let meal = random_meal(&mut rand::thread_rng());
        let sent = Instant::now();

        match client.post(&url).json(&meal).send().await {
            Ok(response) => {
                let success = response.status().is_success();
                let body = response.bytes().await;
                stats
                    .latencies_ms
                    .push(sent.elapsed().as_secs_f64() * 1000.0);

                match body {
                    Ok(bytes) if success => stats.bytes_received += bytes.len() as u64,
                    Ok(bytes) => {
                        stats.bytes_received += bytes.len() as u64;
                        stats.errors += 1;
                    }
                    Err(e) => {
                        debug!("Failed to read response body: {e}");
                        stats.errors += 1;
                        if e.is_timeout() {
                            stats.timeouts += 1;
                        }
                    }
                }
            }
            Err(e) => {
                debug!("Request failed: {e}");
                stats.errors += 1;
                if e.is_timeout() {
                    stats.timeouts += 1;
                }
                // Connection refused returns immediately; avoid a hot loop
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        }
    }

    stats
}
