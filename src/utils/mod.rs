// ABOUTME: Shared utility modules for the gym home client
// ABOUTME: Currently the process-wide HTTP client lifecycle
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

/// Shared HTTP client with init-at-startup timeout configuration
pub mod http_client;
