// ABOUTME: Load test binary that hammers POST /api/calculate with random meals
// ABOUTME: Prints throughput and latency percentiles once the run completes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutritional Score Load Test
//!
//! Expects a server to already be running at `--url`.

use anyhow::Result;
use clap::Parser;
use nutritional_score::{
    constants::service_names,
    loadtest::{run_load_test, LoadTestConfig},
    logging::{AppLogger, LoggingConfig},
};
use serde_json::json;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "nutritional-score-loadtest")]
#[command(about = "Load test the nutritional score calculate endpoint")]
pub struct Args {
    /// Endpoint to POST meals to
    #[arg(long, default_value = "http://localhost:3000/api/calculate")]
    url: String,

    /// Concurrent connections
    #[arg(long, default_value_t = 100)]
    connections: usize,

    /// Test duration in seconds
    #[arg(long, default_value_t = 10)]
    duration: u64,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    LoggingConfig::from_env()
        .with_service_name(service_names::NUTRITIONAL_SCORE_LOADTEST)
        .init()?;

    let config = LoadTestConfig {
        url: args.url,
        connections: args.connections,
        duration: Duration::from_secs(args.duration),
        request_timeout: Duration::from_secs(args.timeout),
    };

    let report = run_load_test(&config).await?;

    let tags = json!({ "connections": config.connections, "url": config.url });
    AppLogger::log_performance_metric(
        "requests_per_sec",
        report.requests_per_sec,
        "req/s",
        Some(&tags),
    );
    AppLogger::log_performance_metric("latency_p99", report.latency.p99_ms, "ms", Some(&tags));

    println!("Requests/sec:  {:.2}", report.requests_per_sec);
    println!("Transfer/sec:  {:.2} KiB", report.transfer_kib_per_sec);
    println!("Total:         {}", report.total_requests);
    println!("Errors:        {}", report.errors);
    println!("Timeouts:      {}", report.timeouts);
    println!("Latency mean:  {:.2}ms", report.latency.mean_ms);
    println!("Latency p50:   {:.2}ms", report.latency.p50_ms);
    println!("Latency p99:   {:.2}ms", report.latency.p99_ms);
    println!("Latency max:   {:.2}ms", report.latency.max_ms);

    let usage = report.resources;
    println!("CPU before:    {:.2}%", usage.before.cpu_percent);
    println!("CPU after:     {:.2}%", usage.after.cpu_percent);
    println!("Memory before: {:.2} MiB", usage.before.rss_mib());
    println!("Memory after:  {:.2} MiB", usage.after.rss_mib());

    Ok(())
}
