//! Settings Models
//!
//! Application configuration and settings data structures.

use serde::{Deserialize, Serialize};

/// Application configuration stored in config.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base address of the analysis endpoint (no trailing slash)
    #[serde(default = "default_api_host")]
    pub api_host: String,
}

fn default_api_host() -> String {
    "http://localhost:3000".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_host: default_api_host(),
        }
    }
}

/// Settings update request (partial update)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SettingsUpdate {
    pub api_host: Option<String>,
}

impl AppConfig {
    /// Apply a partial update to the configuration
    pub fn apply_update(&mut self, update: SettingsUpdate) {
        if let Some(api_host) = update.api_host {
            self.api_host = api_host;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.api_host.is_empty() {
            return Err("api_host must not be empty".to_string());
        }
        if !self.api_host.starts_with("http://") && !self.api_host.starts_with("https://") {
            return Err(format!(
                "Invalid api_host: {}. Must start with http:// or https://",
                self.api_host
            ));
        }
        if self.api_host.ends_with('/') {
            return Err("api_host must not end with a trailing slash".to_string());
        }
        Ok(())
    }
}
