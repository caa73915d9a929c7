// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Monitored self-hosted services.

pub mod probe;

use std::path::Path;

use serde::{Deserialize, Serialize};

/// One monitored service from the services config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    pub id: String,
    pub name: String,
    pub url: String,
}

/// Top-level shape of the services config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicesConfig {
    pub services: Vec<ServiceDescriptor>,
}

/// Load service descriptors from a JSON config file.
pub fn load_services(path: &Path) -> anyhow::Result<Vec<ServiceDescriptor>> {
    let contents = std::fs::read_to_string(path)?;
    let config: ServicesConfig = serde_json::from_str(&contents)?;
    Ok(config.services)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_services_config() {
        let json = r#"{
            "services": [
                {"id": "nas", "name": "NAS", "url": "http://nas.local:5000"},
                {"id": "pihole", "name": "Pi-hole", "url": "http://pihole.local"}
            ]
        }"#;
        let config: ServicesConfig = serde_json::from_str(json).expect("parse");
        assert_eq!(config.services.len(), 2);
        assert_eq!(config.services[0].id, "nas");
        assert_eq!(config.services[1].name, "Pi-hole");
    }
}
