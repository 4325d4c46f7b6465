//! App Configuration
//!
//! Loaded from the bundled `assets/config.json`; missing keys use defaults.

use leptos_swipe::SwipeConfig;
use serde::{Deserialize, Serialize};

const CONFIG_JSON: &str = include_str!("../assets/config.json");

/// Naira per US dollar, used to total mixed-currency subscriptions
pub const USD_TO_NAIRA: f64 = 415.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub usd_to_naira: f64,
    pub swipe: SwipeConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            usd_to_naira: USD_TO_NAIRA,
            swipe: SwipeConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn parse(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    /// Bundled configuration, or the defaults if it does not parse
    pub fn load() -> Self {
        match Self::parse(CONFIG_JSON) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("[CONFIG] Invalid bundled config, using defaults: {}", e);
                Self::default()
            }
        }
    }
}
