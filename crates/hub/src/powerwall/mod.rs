// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Powerwall gateway access: token lifecycle, authenticated requests,
//! proactive refresh.

pub mod auth;
pub mod client;
pub mod refresh;
pub mod token;

pub use auth::AuthClient;
pub use client::{ApiResponse, PowerFlows, PowerwallClient};
pub use token::TokenStore;
