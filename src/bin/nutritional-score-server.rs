// ABOUTME: Server binary for the nutritional score HTTP API
// ABOUTME: Also runs the in-process batch scoring benchmark via a subcommand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutritional Score Server Binary
//!
//! Starts the HTTP API on the configured port (3000 unless `PORT` or
//! `--port` says otherwise). `benchmark` scores a batch of random meals
//! in-process and prints the timing instead of serving.

use anyhow::Result;
use clap::{Parser, Subcommand};
use nutritional_score::{
    config::environment::ServerConfig,
    constants::{defaults, routes},
    intelligence::run_benchmark,
    logging,
    server::NutritionServer,
};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "nutritional-score-server")]
#[command(about = "MountainKid Nutritional Score Calculator API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    port: Option<u16>,

    /// Override bind host
    #[arg(long)]
    host: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the HTTP API (default)
    Serve,
    /// Score random meals in-process and report timing
    Benchmark {
        /// Number of meals to generate and score
        #[arg(long, default_value_t = defaults::DEFAULT_BENCHMARK_MEALS)]
        meals: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(args.port, args.host).await,
        Command::Benchmark { meals } => {
            benchmark(meals);
            Ok(())
        }
    }
}

async fn serve(port: Option<u16>, host: Option<String>) -> Result<()> {
    let mut config = ServerConfig::from_env()?;
    if let Some(port) = port {
        config = config.with_port(port);
    }
    if let Some(host) = host {
        config = config.with_host(host);
    }

    info!("Starting MountainKid Nutritional Score Calculator API");
    info!("{}", config.summary());
    display_available_endpoints(&config);

    let server = NutritionServer::new(config);
    if let Err(e) = server.run().await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}

fn benchmark(meals: usize) {
    let report = run_benchmark(meals, &mut rand::thread_rng());

    println!(
        "Processed {} meals in {:.2}ms",
        report.meal_count, report.execution_time_ms
    );
    println!("Average score: {:.2}", report.average_score);

    let usage = report.resources;
    println!("Initial CPU usage: {:.2}%", usage.before.cpu_percent);
    println!("Initial memory usage: {:.2} MiB", usage.before.rss_mib());
    println!("Final CPU usage: {:.2}%", usage.after.cpu_percent);
    println!("Final memory usage: {:.2} MiB", usage.after.rss_mib());
    println!("Memory delta: {} bytes", usage.memory_delta_bytes());
}

fn display_available_endpoints(config: &ServerConfig) {
    let base = format!("http://{}", config.bind_address());

    info!("=== Available API Endpoints ===");
    info!("  GET  {base}/");
    info!("  GET  {base}/health");
    info!("  GET  {base}/ready");
    info!("  POST {base}{}", routes::CALCULATE);
    info!("  POST {base}{}", routes::CALCULATE_BATCH);
}
