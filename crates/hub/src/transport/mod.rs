// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP transport for the hub.

pub mod http;

use std::sync::Arc;

use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::state::HubState;

/// Embedded dashboard HTML.
const DASHBOARD_HTML: &str = include_str!("../web/dashboard.html");

/// Build the axum `Router` with all hub routes.
pub fn build_router(state: Arc<HubState>) -> Router {
    Router::new()
        // Device data
        .route("/api/battery", get(http::battery))
        .route("/api/power", get(http::power))
        // Collaborator data
        .route("/api/weather", get(http::weather))
        .route("/api/services", get(http::services))
        // Hub self-check
        .route("/api/health", get(http::health))
        // Dashboard page
        .route("/", get(|| async { Html(DASHBOARD_HTML) }))
        .fallback(http::not_found)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
