use crate::log_debug;
use crate::providers::Provider;

use anyhow::{Result, anyhow};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Configuration structure for the company-scout application
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Config {
    /// Per-service configuration, keyed by provider name
    #[serde(default)]
    pub services: HashMap<String, ServiceConfig>,
    /// How many headlines to request per research run
    #[serde(default = "default_max_headlines")]
    pub max_headlines: u8,
    /// Upper bound on any single provider request, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Output-length cap for the generated overview, in tokens
    #[serde(default = "default_overview_max_tokens")]
    pub overview_max_tokens: u32,
    /// Whether to include HTTP-layer logs from external libraries
    #[serde(default)]
    pub verbose_logging: bool,
}

/// Service-specific configuration structure
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct ServiceConfig {
    /// API key for the service (environment variables take precedence)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_key: String,
    /// Model to request, for services that take one
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub model: String,
    /// Endpoint override, mainly for self-hosted gateways
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

fn default_max_headlines() -> u8 {
    3
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_overview_max_tokens() -> u32 {
    256
}

impl Config {
    /// Load the configuration from the file, falling back to defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        let config = if config_path.exists() {
            let config_content = fs::read_to_string(&config_path)?;
            toml::from_str(&config_content)?
        } else {
            Self::default()
        };

        log_debug!("Configuration loaded: {:?}", config);
        Ok(config)
    }

    /// Save the configuration to the file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        let config_content = toml::to_string(self)?;
        fs::write(config_path, config_content)?;
        log_debug!("Configuration saved");
        Ok(())
    }

    /// Get the path to the configuration file
    fn get_config_path() -> Result<PathBuf> {
        let mut path =
            config_dir().ok_or_else(|| anyhow!("Unable to determine config directory"))?;
        path.push("company-scout");
        std::fs::create_dir_all(&path)?;
        path.push("config.toml");
        Ok(path)
    }

    /// Get the configuration for a specific service
    pub fn service(&self, provider: Provider) -> Option<&ServiceConfig> {
        self.services.get(provider.name())
    }

    /// Effective endpoint for a service (configured override or the default)
    pub fn endpoint_for(&self, provider: Provider) -> String {
        self.service(provider)
            .and_then(|s| s.endpoint.clone())
            .unwrap_or_else(|| provider.endpoint().to_string())
    }

    /// Effective model for a service (configured or the default)
    pub fn model_for(&self, provider: Provider) -> String {
        self.service(provider)
            .map(|s| s.model.clone())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| provider.default_model().to_string())
    }

    /// Update the configuration with new values for one service
    pub fn update(
        &mut self,
        provider: Provider,
        api_key: Option<String>,
        model: Option<String>,
        endpoint: Option<String>,
    ) {
        let service = self
            .services
            .entry(provider.name().to_string())
            .or_default();

        if let Some(key) = api_key {
            service.api_key = key;
        }
        if let Some(model) = model {
            service.model = model;
        }
        if let Some(endpoint) = endpoint {
            service.endpoint = if endpoint.is_empty() {
                None
            } else {
                Some(endpoint)
            };
        }

        log_debug!("Configuration updated for service: {}", provider);
    }
}

impl Default for Config {
    fn default() -> Self {
        let mut services = HashMap::new();
        for provider in Provider::ALL {
            services.insert(
                provider.name().to_string(),
                ServiceConfig::default_for(*provider),
            );
        }

        Self {
            services,
            max_headlines: default_max_headlines(),
            request_timeout_secs: default_request_timeout_secs(),
            overview_max_tokens: default_overview_max_tokens(),
            verbose_logging: false,
        }
    }
}

impl ServiceConfig {
    /// Create a default service configuration for a given provider
    pub fn default_for(provider: Provider) -> Self {
        Self {
            api_key: String::new(),
            model: provider.default_model().to_string(),
            endpoint: None,
        }
    }
}
