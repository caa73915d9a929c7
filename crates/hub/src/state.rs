// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::config::HubConfig;
use crate::powerwall::client::PowerwallClient;
use crate::services::ServiceDescriptor;
use crate::weather::client::WeatherClient;

/// Shared hub state.
pub struct HubState {
    pub config: HubConfig,
    pub powerwall: Arc<PowerwallClient>,
    /// Present only when coordinates are configured.
    pub weather: Option<WeatherClient>,
    pub services: Vec<ServiceDescriptor>,
    /// Plain client for health probes; per-probe deadlines are applied
    /// by the probe itself.
    pub probe_http: reqwest::Client,
    pub shutdown: CancellationToken,
}

impl HubState {
    pub fn new(
        config: HubConfig,
        powerwall: Arc<PowerwallClient>,
        services: Vec<ServiceDescriptor>,
        shutdown: CancellationToken,
    ) -> Self {
        let weather = match (config.latitude, config.longitude) {
            (Some(lat), Some(lon)) => {
                Some(WeatherClient::new(config.weather_url.clone(), lat, lon))
            }
            (None, None) => None,
            _ => {
                tracing::warn!("only one of latitude/longitude is set, weather disabled");
                None
            }
        };
        let probe_http = reqwest::Client::builder().build().unwrap_or_default();
        Self { config, powerwall, weather, services, probe_http, shutdown }
    }
}
