// ABOUTME: gym-home CLI - runs the home screen fetch pipeline against a live backend
// ABOUTME: Prints groups, exercises for the selected group and the derived days-off metric
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//!
//! Usage:
//! ```bash
//! # Fetch the home screen for the default group
//! GYM_API_BASE_URL=http://localhost:3333 GYM_ACCESS_TOKEN=... gym-home
//!
//! # Select a specific muscle group
//! gym-home --group costas
//!
//! # With tag propagation to the notification service
//! GYM_PUSH_APP_ID=... GYM_PUSH_API_KEY=... GYM_PUSH_EXTERNAL_USER_ID=... gym-home
//! ```

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tokio::sync::mpsc;

use gym_home_client::config::ClientConfig;
use gym_home_client::gateway::{GymApi, HttpGateway};
use gym_home_client::home::HomeController;
use gym_home_client::logging::{self, LogFormat, LoggingConfig};
use gym_home_client::models::MuscleGroup;
use gym_home_client::notifications::{NoopTagger, PushTagClient, UserTagger};
use gym_home_client::utils::http_client::initialize_http_client;

#[derive(Parser)]
#[command(
    name = "gym-home",
    about = "Gym home screen client",
    long_about = "Fetches muscle groups, exercises and workout history from the gym backend, derives the days-off inactivity metric and propagates it as a push-notification tag."
)]
struct Cli {
    /// Muscle group to select instead of the configured default
    #[arg(long)]
    group: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(&LoggingConfig {
        level: if cli.verbose { "debug" } else { "info" }.into(),
        format: LogFormat::Pretty,
    })?;

    let config = ClientConfig::from_env()?;
    initialize_http_client(config.http_timeout_secs, config.http_connect_timeout_secs);

    let api: Arc<dyn GymApi> = Arc::new(HttpGateway::new(&config));
    let tagger: Arc<dyn UserTagger> = match &config.notifications {
        Some(notification_config) => Arc::new(PushTagClient::new(notification_config)),
        None => Arc::new(NoopTagger),
    };

    let (notices, mut notice_rx) = mpsc::unbounded_channel();
    let mut home = HomeController::new(
        api,
        tagger,
        notices,
        MuscleGroup::new(config.default_group.clone()),
    );

    home.on_mount().await;
    match cli.group {
        Some(group) => home.select_group(MuscleGroup::new(group)).await,
        None => home.on_focus().await,
    }

    while let Ok(notice) = notice_rx.try_recv() {
        eprintln!("[{}] {}", notice.severity, notice.title);
    }

    println!("Grupos musculares:");
    for group in home.groups() {
        let marker = if group == home.selected_group() { "*" } else { " " };
        println!("  {marker} {group}");
    }

    println!("\nExercícios ({}):", home.selected_group());
    for exercise in home.exercises() {
        match (exercise.series, exercise.repetitions) {
            (Some(series), Some(repetitions)) => {
                println!("  {}: {series} séries x {repetitions} repetições", exercise.name);
            }
            _ => println!("  {}", exercise.name),
        }
    }

    match home.last_days_off() {
        Some(metric) => println!("\ndays_off: {metric}"),
        None => println!("\ndays_off: não calculado"),
    }

    // Give the detached tag update a moment to finish before the runtime
    // shuts down.
    tokio::time::sleep(Duration::from_millis(250)).await;

    Ok(())
}
