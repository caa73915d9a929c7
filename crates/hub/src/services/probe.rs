// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Concurrent bounded-timeout health probes.

use std::time::Duration;

use futures_util::future::join_all;
use serde::Serialize;

use crate::services::ServiceDescriptor;

/// Probe outcome for one service.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResult {
    pub id: String,
    pub name: String,
    pub healthy: bool,
}

/// Probe a single URL.
///
/// Healthy means a response with status below 500 arrived before the
/// deadline. Timeouts, connection failures, and 5xx all count as
/// unhealthy. When the deadline wins the race the in-flight request is
/// dropped, which tears down its connection.
pub async fn check_one(http: &reqwest::Client, url: &str, timeout: Duration) -> bool {
    match tokio::time::timeout(timeout, http.get(url).send()).await {
        Ok(Ok(resp)) => resp.status().as_u16() < 500,
        Ok(Err(e)) => {
            tracing::debug!(url, err = %e, "health probe failed");
            false
        }
        Err(_) => {
            tracing::debug!(url, timeout_ms = timeout.as_millis() as u64, "health probe timed out");
            false
        }
    }
}

/// Probe every service concurrently.
///
/// All probes start together, so a stalled service costs its own timeout
/// and nothing more. Results come back in the same order as the input
/// list, one per descriptor; an unreachable service is reported as
/// unhealthy rather than failing the batch.
pub async fn check_all(
    http: &reqwest::Client,
    services: &[ServiceDescriptor],
    timeout: Duration,
) -> Vec<HealthResult> {
    let probes = services.iter().map(|svc| async move {
        let healthy = check_one(http, &svc.url, timeout).await;
        HealthResult { id: svc.id.clone(), name: svc.name.clone(), healthy }
    });
    join_all(probes).await
}

#[cfg(test)]
#[path = "probe_tests.rs"]
mod tests;
