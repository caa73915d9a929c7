// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Authenticated requests against the gateway.

use crate::error::PowerwallError;
use crate::powerwall::auth::AuthClient;
use crate::powerwall::token::TokenStore;

/// Final response from an authenticated gateway request.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

/// Instant power readings from the gateway meters, in watts.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct PowerFlows {
    pub solar_w: f64,
    pub load_w: f64,
    pub battery_w: f64,
    pub grid_w: f64,
}

/// Client for the gateway's authenticated local API.
///
/// Owns the bearer token lifecycle: lazy login on first use, reactive
/// reauthentication on 401/403 with exactly one retry, and the proactive
/// refresh used by the background task.
pub struct PowerwallClient {
    http: reqwest::Client,
    base_url: String,
    auth: AuthClient,
    tokens: TokenStore,
}

impl PowerwallClient {
    /// Build a client for the gateway at `base_url`.
    ///
    /// The gateway serves a self-signed certificate, so verification is
    /// disabled. No request timeout is set: an authenticated call is
    /// bounded by its retry count, not by wall clock.
    pub fn new(base_url: String, email: String, password: String) -> Result<Self, PowerwallError> {
        let http = reqwest::Client::builder().danger_accept_invalid_certs(true).build()?;
        let base_url = base_url.trim_end_matches('/').to_owned();
        let auth = AuthClient::new(http.clone(), base_url.clone(), email, password);
        Ok(Self { http, base_url, auth, tokens: TokenStore::new() })
    }

    /// One authenticated GET against the gateway.
    ///
    /// Logs in first when no token is stored. A 401/403 response clears
    /// the stored token, logs in again, and reissues the request exactly
    /// once; a second rejection fails with
    /// [`PowerwallError::UpstreamAuth`]. Any other status, success or
    /// not, is returned as data for the caller to interpret.
    pub async fn request_authenticated(
        &self,
        endpoint: &str,
    ) -> Result<ApiResponse, PowerwallError> {
        if self.tokens.get().await.is_none() {
            let token = self.auth.authenticate().await?;
            self.tokens.set(token).await;
        }

        let resp = self.send(endpoint).await?;
        if !is_auth_rejection(resp.status) {
            return Ok(resp);
        }

        tracing::debug!(endpoint, status = resp.status, "token rejected, reauthenticating");
        self.tokens.clear().await;
        let token = self.auth.authenticate().await?;
        self.tokens.set(token).await;

        let retried = self.send(endpoint).await?;
        if is_auth_rejection(retried.status) {
            return Err(PowerwallError::UpstreamAuth { status: retried.status });
        }
        Ok(retried)
    }

    /// Battery state of energy as a percentage.
    pub async fn battery_level(&self) -> Result<f64, PowerwallError> {
        let resp = self.request_authenticated("/api/system_status/soe").await?;
        resp.body.get("percentage").and_then(serde_json::Value::as_f64).ok_or_else(|| {
            PowerwallError::UnexpectedBody(format!("no percentage in soe response: {}", resp.body))
        })
    }

    /// Instant power flow through each meter.
    pub async fn meter_aggregates(&self) -> Result<PowerFlows, PowerwallError> {
        let resp = self.request_authenticated("/api/meters/aggregates").await?;
        Ok(PowerFlows {
            solar_w: instant_power(&resp.body, "solar"),
            load_w: instant_power(&resp.body, "load"),
            battery_w: instant_power(&resp.body, "battery"),
            grid_w: instant_power(&resp.body, "site"),
        })
    }

    /// Log in and replace the stored token (the proactive refresh path).
    pub async fn refresh_token(&self) -> Result<(), PowerwallError> {
        let token = self.auth.authenticate().await?;
        self.tokens.set(token).await;
        Ok(())
    }

    async fn send(&self, endpoint: &str) -> Result<ApiResponse, PowerwallError> {
        let mut req = self.http.get(format!("{}{}", self.base_url, endpoint));
        if let Some(token) = self.tokens.get().await {
            req = req.bearer_auth(token);
        }
        let resp = req.send().await?;
        let status = resp.status().as_u16();
        let text = resp.text().await?;
        // Some endpoints answer plain text; keep the raw string in that case.
        let body = match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(_) => serde_json::Value::String(text),
        };
        Ok(ApiResponse { status, body })
    }
}

fn is_auth_rejection(status: u16) -> bool {
    status == 401 || status == 403
}

/// `instant_power` of one meter block, 0 when the block is absent.
fn instant_power(body: &serde_json::Value, meter: &str) -> f64 {
    body.get(meter)
        .and_then(|m| m.get("instant_power"))
        .and_then(serde_json::Value::as_f64)
        .unwrap_or(0.0)
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
