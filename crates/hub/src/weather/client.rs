// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use serde::Deserialize;

/// Current conditions as reported by the weather service.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub windspeed: f64,
    pub weathercode: u8,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: CurrentWeather,
}

/// HTTP client for the weather service.
pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
    latitude: f64,
    longitude: f64,
}

impl WeatherClient {
    pub fn new(base_url: String, latitude: f64, longitude: f64) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_default();
        Self { http, base_url: base_url.trim_end_matches('/').to_owned(), latitude, longitude }
    }

    /// Fetch current conditions for the configured coordinates.
    pub async fn current(&self) -> anyhow::Result<CurrentWeather> {
        let url = format!(
            "{}/v1/forecast?latitude={}&longitude={}&current_weather=true",
            self.base_url, self.latitude, self.longitude
        );
        let resp = self.http.get(url).send().await?;
        let forecast: ForecastResponse = resp.error_for_status()?.json().await?;
        Ok(forecast.current_weather)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_forecast_response() {
        let json = r#"{
            "latitude": 37.76,
            "longitude": -122.43,
            "current_weather": {
                "temperature": 17.3,
                "windspeed": 12.9,
                "winddirection": 285.0,
                "weathercode": 3,
                "is_day": 1,
                "time": "2026-08-25T16:00"
            }
        }"#;
        let forecast: ForecastResponse = serde_json::from_str(json).expect("parse");
        assert_eq!(forecast.current_weather.temperature, 17.3);
        assert_eq!(forecast.current_weather.windspeed, 12.9);
        assert_eq!(forecast.current_weather.weathercode, 3);
    }
}
