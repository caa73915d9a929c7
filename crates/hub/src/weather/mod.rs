// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Current weather via an Open-Meteo compatible API.

pub mod client;
pub mod codes;

pub use client::{CurrentWeather, WeatherClient};
