// ABOUTME: Main library entry point for the gym home screen client core
// ABOUTME: Exposes backend sync, inactivity metric derivation and push tag propagation
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![deny(unsafe_code)]

//! # Gym Home Client
//!
//! Client-side core for the home screen of a gym training app. The crate
//! covers everything behind the screen except rendering:
//!
//! - **Gateway**: authenticated HTTP access to muscle groups, exercises by
//!   group, and workout history ([`gateway`])
//! - **Inactivity metric**: derives "days since last logged workout" from the
//!   loosely-typed history payload ([`inactivity`])
//! - **Tag propagation**: forwards the metric to the push-notification
//!   service as a durable `days_off` user tag, best-effort ([`notifications`])
//! - **Screen controller**: fetch lifecycle, loading flags, group selection
//!   and transient error notices ([`home`])
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use gym_home_client::config::ClientConfig;
//! use gym_home_client::gateway::{GymApi, HttpGateway};
//! use gym_home_client::home::HomeController;
//! use gym_home_client::models::MuscleGroup;
//! use gym_home_client::notifications::{NoopTagger, UserTagger};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ClientConfig::from_env()?;
//!     let api: Arc<dyn GymApi> = Arc::new(HttpGateway::new(&config));
//!     let tagger: Arc<dyn UserTagger> = Arc::new(NoopTagger);
//!     let (notices, _rx) = tokio::sync::mpsc::unbounded_channel();
//!     let mut home = HomeController::new(
//!         api,
//!         tagger,
//!         notices,
//!         MuscleGroup::new(config.default_group.clone()),
//!     );
//!     home.on_mount().await;
//!     home.on_focus().await;
//!     Ok(())
//! }
//! ```

/// Environment-based client configuration
pub mod config;
/// Unified error types for gateway, tagging and configuration
pub mod errors;
/// Remote Data Gateway: typed, authenticated backend access
pub mod gateway;
/// Home screen controller and notice channel
pub mod home;
/// Pure inactivity metric derivation
pub mod inactivity;
/// Structured logging setup
pub mod logging;
/// Wire data model with lenient boundary parsing
pub mod models;
/// Push-notification user tag propagation
pub mod notifications;
/// Shared utilities (HTTP client lifecycle)
pub mod utils;

pub use errors::{ConfigError, GatewayError, TagError};
pub use inactivity::{days_off, DaysOff};
