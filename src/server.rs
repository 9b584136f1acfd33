// ABOUTME: NutritionServer service object owning configuration, scorer, and listener
// ABOUTME: Builds the layered axum router and serves it with graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! HTTP server
//!
//! Nothing binds a port at load time. Callers construct a [`NutritionServer`]
//! from a [`ServerConfig`] and a scorer, then either take its [`Router`] for
//! in-process testing or call [`NutritionServer::run`] / [`NutritionServer::serve`].

use crate::config::environment::ServerConfig;
use crate::intelligence::{LinearScorer, MealScorer};
use crate::middleware::{create_request_span, setup_cors};
use crate::routes::{HealthRoutes, HomeRoutes, NutritionRoutes};
use anyhow::{Context, Result};
use axum::{extract::DefaultBodyLimit, Router};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// The nutritional score HTTP service
pub struct NutritionServer {
    config: Arc<ServerConfig>,
    scorer: Arc<dyn MealScorer>,
}

impl NutritionServer {
    /// Create a server that scores with the linear formula
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self::with_scorer(config, Arc::new(LinearScorer))
    }

    /// Create a server with an injected scorer
    #[must_use]
    pub fn with_scorer(config: ServerConfig, scorer: Arc<dyn MealScorer>) -> Self {
        Self {
            config: Arc::new(config),
            scorer,
        }
    }

    /// Configuration this server was built with
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the complete router with all middleware layers
    #[must_use]
    pub fn router(&self) -> Router {
        let middleware = ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http().make_span_with(create_request_span))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TimeoutLayer::new(self.config.http.request_timeout()))
            .layer(setup_cors(&self.config));

        Router::new()
            .merge(HomeRoutes::routes())
            .merge(HealthRoutes::routes())
            .merge(NutritionRoutes::routes(Arc::clone(&self.scorer)))
            .fallback(HomeRoutes::handle_not_found)
            .layer(DefaultBodyLimit::max(self.config.http.max_request_body_bytes))
            .layer(middleware)
    }

    /// Bind the configured host and port
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be resolved or bound
    pub async fn bind(&self) -> Result<TcpListener> {
        let address = self.config.bind_address();
        TcpListener::bind(&address)
            .await
            .with_context(|| format!("Failed to bind {address}"))
    }

    /// Bind and serve until Ctrl+C
    ///
    /// # Errors
    ///
    /// Returns an error if binding fails or the server stops abnormally
    pub async fn run(self) -> Result<()> {
        let listener = self.bind().await?;
        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` resolves
    ///
    /// # Errors
    ///
    /// Returns an error if the server stops abnormally
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local_addr: SocketAddr = listener.local_addr()?;
        info!("Server running on http://{local_addr}");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
            .context("HTTP server terminated with an error")?;

        info!("Server stopped");
        Ok(())
    }
}

/// Resolves on Ctrl+C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
