// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Proactive token refresh on a fixed schedule.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::powerwall::client::PowerwallClient;

/// Spawn the background task that reauthenticates on a fixed period.
///
/// The first tick fires immediately, then every `period`. A failed
/// refresh is logged and the schedule keeps going; the task stops only
/// on shutdown.
pub fn spawn_refresh_task(
    client: Arc<PowerwallClient>,
    period: Duration,
    shutdown: CancellationToken,
) {
    tokio::spawn(async move {
        let mut timer = tokio::time::interval(period);
        timer.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = timer.tick() => {}
            }

            match client.refresh_token().await {
                Ok(()) => tracing::debug!("token refreshed"),
                Err(e) => tracing::warn!(err = %e, "token refresh failed"),
            }
        }
    });
}

#[cfg(test)]
#[path = "refresh_tests.rs"]
mod tests;
