// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Gridhub: local dashboard backend for home energy, weather, and
//! self-hosted services.

pub mod config;
pub mod error;
pub mod powerwall;
pub mod services;
pub mod state;
pub mod transport;
pub mod weather;

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::config::HubConfig;
use crate::powerwall::client::PowerwallClient;
use crate::powerwall::refresh::spawn_refresh_task;
use crate::state::HubState;
use crate::transport::build_router;

/// Run the hub server until shutdown.
pub async fn run(config: HubConfig) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let shutdown = CancellationToken::new();

    let services = match config.services_config {
        Some(ref path) => crate::services::load_services(path)?,
        None => vec![],
    };

    let powerwall = Arc::new(PowerwallClient::new(
        config.powerwall_url.clone(),
        config.powerwall_email.clone(),
        config.powerwall_password.clone(),
    )?);

    let state =
        Arc::new(HubState::new(config, Arc::clone(&powerwall), services, shutdown.clone()));

    spawn_refresh_task(powerwall, state.config.token_refresh_interval(), state.shutdown.clone());

    tracing::info!(
        services = state.services.len(),
        weather = state.weather.is_some(),
        "gridhub listening on {addr}"
    );

    {
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("shutting down");
                shutdown.cancel();
            }
        });
    }

    let router = build_router(state);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown.cancelled_owned()).await?;

    Ok(())
}
