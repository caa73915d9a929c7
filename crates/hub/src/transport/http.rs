// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP handlers for the hub.

use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::error::HubError;
use crate::services::probe;
use crate::state::HubState;
use crate::weather::codes;

// -- Response types -----------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub services: usize,
}

#[derive(Debug, Serialize)]
pub struct BatteryResponse {
    pub percentage: f64,
}

#[derive(Debug, Serialize)]
pub struct WeatherResponse {
    pub temperature_c: f64,
    pub wind_speed_kmh: f64,
    pub code: u8,
    pub description: &'static str,
}

// -- Handlers -----------------------------------------------------------------

/// `GET /api/health`
pub async fn health(State(s): State<Arc<HubState>>) -> impl IntoResponse {
    Json(HealthResponse { status: "running".to_owned(), services: s.services.len() })
}

/// `GET /api/battery`
pub async fn battery(State(s): State<Arc<HubState>>) -> impl IntoResponse {
    match s.powerwall.battery_level().await {
        Ok(percentage) => Json(BatteryResponse { percentage }).into_response(),
        Err(e) => {
            tracing::warn!(err = %e, "battery level fetch failed");
            HubError::Internal.to_http_response(e.to_string()).into_response()
        }
    }
}

/// `GET /api/power`
pub async fn power(State(s): State<Arc<HubState>>) -> impl IntoResponse {
    match s.powerwall.meter_aggregates().await {
        Ok(flows) => Json(flows).into_response(),
        Err(e) => {
            tracing::warn!(err = %e, "meter aggregates fetch failed");
            HubError::Internal.to_http_response(e.to_string()).into_response()
        }
    }
}

/// `GET /api/weather`
pub async fn weather(State(s): State<Arc<HubState>>) -> impl IntoResponse {
    let Some(client) = s.weather.as_ref() else {
        return HubError::BadRequest.to_http_response("weather not configured").into_response();
    };
    match client.current().await {
        Ok(current) => Json(WeatherResponse {
            temperature_c: current.temperature,
            wind_speed_kmh: current.windspeed,
            code: current.weathercode,
            description: codes::description(current.weathercode),
        })
        .into_response(),
        Err(e) => {
            tracing::warn!(err = %e, "weather fetch failed");
            HubError::Internal.to_http_response(e.to_string()).into_response()
        }
    }
}

/// `GET /api/services`
pub async fn services(State(s): State<Arc<HubState>>) -> impl IntoResponse {
    let results = probe::check_all(&s.probe_http, &s.services, s.config.probe_timeout()).await;
    Json(results)
}

/// Fallback for unknown routes.
pub async fn not_found() -> impl IntoResponse {
    HubError::NotFound.to_http_response("no such route")
}
