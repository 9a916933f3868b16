// ABOUTME: Process-wide HTTP client shared by the gateway and the tag propagation client
// ABOUTME: Explicit init-at-startup timeout configuration instead of ambient per-call clients
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use std::sync::OnceLock;
use std::time::Duration;

use reqwest::{Client, ClientBuilder};

/// Fallback request timeout in seconds when the client was never initialized
const FALLBACK_TIMEOUT_SECS: u64 = 30;

/// Fallback connection timeout in seconds
const FALLBACK_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Configured timeout values for the shared client
static CLIENT_TIMEOUTS: OnceLock<(u64, u64)> = OnceLock::new();

/// Global shared HTTP client with connection pooling
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Configure the shared HTTP client timeouts.
///
/// Call once at startup, before the gateway or tag client issue their first
/// request. Later calls are ignored; if never called, fallback timeouts
/// apply. All timeout semantics for the fetch pipeline live here; the
/// screen controller imposes none of its own.
pub fn initialize_http_client(timeout_secs: u64, connect_timeout_secs: u64) {
    let _ = CLIENT_TIMEOUTS.set((timeout_secs, connect_timeout_secs));
}

/// The shared HTTP client used for backend and tagging-service calls.
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        let (timeout, connect_timeout) = CLIENT_TIMEOUTS
            .get()
            .copied()
            .unwrap_or((FALLBACK_TIMEOUT_SECS, FALLBACK_CONNECT_TIMEOUT_SECS));

        ClientBuilder::new()
            .timeout(Duration::from_secs(timeout))
            .connect_timeout(Duration::from_secs(connect_timeout))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}
