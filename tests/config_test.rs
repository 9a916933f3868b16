// ABOUTME: Integration tests for environment-based client configuration
// ABOUTME: Serialized because they mutate process-wide environment variables
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::env;

use serial_test::serial;

use gym_home_client::config::ClientConfig;
use gym_home_client::errors::ConfigError;

const ALL_VARS: &[&str] = &[
    "GYM_API_BASE_URL",
    "GYM_ACCESS_TOKEN",
    "GYM_HTTP_TIMEOUT_SECS",
    "GYM_HTTP_CONNECT_TIMEOUT_SECS",
    "GYM_DEFAULT_GROUP",
    "GYM_PUSH_API_BASE_URL",
    "GYM_PUSH_APP_ID",
    "GYM_PUSH_API_KEY",
    "GYM_PUSH_EXTERNAL_USER_ID",
];

fn clear_env() {
    for key in ALL_VARS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn base_url_is_required() {
    clear_env();
    match ClientConfig::from_env() {
        Err(ConfigError::Missing { key }) => assert_eq!(key, "GYM_API_BASE_URL"),
        other => panic!("expected missing base URL, got {other:?}"),
    }
}

#[test]
#[serial]
fn defaults_apply_when_only_base_url_is_set() {
    clear_env();
    env::set_var("GYM_API_BASE_URL", "http://localhost:3333");

    let config = ClientConfig::from_env().unwrap();
    assert_eq!(config.api_base_url.as_str(), "http://localhost:3333/");
    assert_eq!(config.access_token, None);
    assert_eq!(config.http_timeout_secs, 30);
    assert_eq!(config.http_connect_timeout_secs, 10);
    assert_eq!(config.default_group, "antebraço");
    assert!(config.notifications.is_none());

    clear_env();
}

#[test]
#[serial]
fn full_configuration_round_trips() {
    clear_env();
    env::set_var("GYM_API_BASE_URL", "https://api.gym.example");
    env::set_var("GYM_ACCESS_TOKEN", "token-123");
    env::set_var("GYM_HTTP_TIMEOUT_SECS", "5");
    env::set_var("GYM_HTTP_CONNECT_TIMEOUT_SECS", "2");
    env::set_var("GYM_DEFAULT_GROUP", "costas");
    env::set_var("GYM_PUSH_APP_ID", "app-1");
    env::set_var("GYM_PUSH_API_KEY", "key-1");
    env::set_var("GYM_PUSH_EXTERNAL_USER_ID", "user-1");

    let config = ClientConfig::from_env().unwrap();
    assert_eq!(config.access_token.as_deref(), Some("token-123"));
    assert_eq!(config.http_timeout_secs, 5);
    assert_eq!(config.http_connect_timeout_secs, 2);
    assert_eq!(config.default_group, "costas");

    let push = config.notifications.unwrap();
    assert_eq!(push.api_base_url, "https://api.onesignal.com");
    assert_eq!(push.app_id, "app-1");
    assert_eq!(push.api_key, "key-1");
    assert_eq!(push.external_user_id, "user-1");

    clear_env();
}

#[test]
#[serial]
fn invalid_timeout_is_rejected() {
    clear_env();
    env::set_var("GYM_API_BASE_URL", "http://localhost:3333");
    env::set_var("GYM_HTTP_TIMEOUT_SECS", "soon");

    match ClientConfig::from_env() {
        Err(ConfigError::Invalid { key, .. }) => assert_eq!(key, "GYM_HTTP_TIMEOUT_SECS"),
        other => panic!("expected invalid timeout, got {other:?}"),
    }

    clear_env();
}

#[test]
#[serial]
fn partial_push_block_is_rejected() {
    clear_env();
    env::set_var("GYM_API_BASE_URL", "http://localhost:3333");
    env::set_var("GYM_PUSH_APP_ID", "app-1");

    match ClientConfig::from_env() {
        Err(ConfigError::Missing { key }) => assert_eq!(key, "GYM_PUSH_API_KEY"),
        other => panic!("expected missing push key, got {other:?}"),
    }

    clear_env();
}
