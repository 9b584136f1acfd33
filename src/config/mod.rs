// ABOUTME: Configuration module for environment-driven server settings
// ABOUTME: Exposes ServerConfig and its typed sub-configurations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration management

/// Environment-based configuration for production deployment
pub mod environment;

pub use environment::{CorsConfig, Environment, HttpConfig, LogLevel, ServerConfig};
