// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

/// Configuration for the gridhub server.
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "gridhub", version, about = "Local dashboard hub for home energy, weather, and self-hosted services")]
pub struct HubConfig {
    /// Host to bind on.
    #[arg(long, default_value = "127.0.0.1", env = "GRIDHUB_HOST")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, default_value_t = 3000, env = "GRIDHUB_PORT")]
    pub port: u16,

    /// Base URL of the Powerwall gateway, e.g. https://192.168.91.1.
    #[arg(long, env = "POWERWALL_URL")]
    pub powerwall_url: String,

    /// Customer email for the gateway login.
    #[arg(long, env = "POWERWALL_EMAIL")]
    pub powerwall_email: String,

    /// Customer password for the gateway login.
    #[arg(long, env = "POWERWALL_PASSWORD", hide_env_values = true)]
    pub powerwall_password: String,

    /// Proactive token refresh period in milliseconds.
    #[arg(long, default_value_t = 1_800_000, env = "GRIDHUB_TOKEN_REFRESH_MS")]
    pub token_refresh_ms: u64,

    /// Per-service health probe timeout in milliseconds.
    #[arg(long, default_value_t = 5000, env = "GRIDHUB_PROBE_TIMEOUT_MS")]
    pub probe_timeout_ms: u64,

    /// Path to the monitored services JSON file.
    #[arg(long, env = "GRIDHUB_SERVICES")]
    pub services_config: Option<std::path::PathBuf>,

    /// Latitude for the weather lookup.
    #[arg(long, env = "GRIDHUB_LATITUDE")]
    pub latitude: Option<f64>,

    /// Longitude for the weather lookup.
    #[arg(long, env = "GRIDHUB_LONGITUDE")]
    pub longitude: Option<f64>,

    /// Base URL of the weather service.
    #[arg(long, default_value = "https://api.open-meteo.com", env = "GRIDHUB_WEATHER_URL")]
    pub weather_url: String,
}

impl HubConfig {
    pub fn token_refresh_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.token_refresh_ms)
    }

    pub fn probe_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.probe_timeout_ms)
    }
}
