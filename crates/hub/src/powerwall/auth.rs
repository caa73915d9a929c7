// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Login exchange with the gateway.

use serde::Deserialize;

use crate::error::PowerwallError;

/// Fixed login identity for the local gateway API.
const LOGIN_USERNAME: &str = "customer";

/// Performs the `POST /api/login/Basic` exchange.
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
    email: String,
    password: String,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    token: Option<String>,
}

impl AuthClient {
    pub fn new(http: reqwest::Client, base_url: String, email: String, password: String) -> Self {
        Self { http, base_url, email, password }
    }

    /// Log in and return a fresh bearer token. The caller stores it.
    pub async fn authenticate(&self) -> Result<String, PowerwallError> {
        let body = serde_json::json!({
            "username": LOGIN_USERNAME,
            "email": self.email,
            "password": self.password,
        });
        let resp = self
            .http
            .post(format!("{}/api/login/Basic", self.base_url))
            .json(&body)
            .send()
            .await?;

        let text = resp.text().await?;
        let login: LoginResponse = serde_json::from_str(&text)
            .map_err(|e| PowerwallError::Auth(format!("malformed login response: {e}")))?;
        match login.token {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(PowerwallError::Auth("no token in response".to_owned())),
        }
    }
}
