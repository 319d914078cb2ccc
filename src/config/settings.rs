//! Settings structures for Corelens configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main settings structure matching settings.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub server: ServerSettings,
    pub upstream: UpstreamSettings,
    pub outgoing: OutgoingSettings,
    pub translator: TranslatorSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables
    ///
    /// API credentials are only read from the environment, never from the
    /// settings file.
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("CORELENS_DEBUG") {
            self.general.debug = val.parse().unwrap_or(false);
        }
        if let Ok(val) = std::env::var("CORELENS_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("CORELENS_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Ok(val) = std::env::var("CORESIGNAL_API_KEY") {
            self.upstream.api_key = val;
        }
        if let Ok(val) = std::env::var("OPENAI_API_KEY") {
            self.translator.api_key = val;
        }
    }
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable debug mode
    pub debug: bool,
    /// Instance name displayed in UI
    pub instance_name: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            debug: false,
            instance_name: "Corelens".to_string(),
        }
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 10000,
            bind_address: "0.0.0.0".to_string(),
        }
    }
}

/// Upstream data provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamSettings {
    /// Base URL of the provider API
    pub base_url: String,
    /// Bearer token, read from CORESIGNAL_API_KEY
    #[serde(skip)]
    pub api_key: String,
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.coresignal.com/cdapi/v1".to_string(),
            api_key: String::new(),
        }
    }
}

impl UpstreamSettings {
    /// Company filter-search endpoint (POST, returns an array of IDs)
    pub fn company_search_url(&self) -> String {
        format!(
            "{}/professional_network/company/search/filter",
            self.base_url
        )
    }

    /// Per-company collect endpoint (GET by ID)
    pub fn company_collect_url(&self, id: &str) -> String {
        format!(
            "{}/professional_network/company/collect/{}",
            self.base_url, id
        )
    }

    /// Employee filter-search endpoint (POST, returns an array of IDs)
    pub fn employee_search_url(&self) -> String {
        format!(
            "{}/professional_network/employee/search/filter",
            self.base_url
        )
    }

    /// Per-employee collect endpoint (GET by ID)
    pub fn employee_collect_url(&self, id: &str) -> String {
        format!(
            "{}/professional_network/employee/collect/{}",
            self.base_url, id
        )
    }

    /// Multi-source Elasticsearch-DSL search endpoint (POST)
    pub fn es_dsl_url(&self) -> String {
        format!("{}/multi_source/company/search/es_dsl", self.base_url)
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds
    pub request_timeout: f64,
    /// Delay between per-entity collect calls, in seconds
    pub collect_delay: f64,
    /// Pool max size
    pub pool_maxsize: usize,
    /// Verify SSL certificates
    pub verify_ssl: bool,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: 30.0,
            collect_delay: 1.0,
            pool_maxsize: 20,
            verify_ssl: true,
        }
    }
}

/// Query-to-filter translator settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorSettings {
    /// Chat-completions endpoint
    pub api_url: String,
    /// API key, read from OPENAI_API_KEY
    #[serde(skip)]
    pub api_key: String,
    /// Model identifier
    pub model: String,
    /// Sampling temperature
    pub temperature: f64,
}

impl Default for TranslatorSettings {
    fn default() -> Self {
        Self {
            api_url: "https://api.openai.com/v1/chat/completions".to_string(),
            api_key: String::new(),
            model: "gpt-4-turbo".to_string(),
            temperature: 0.3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 10000);
        assert!(!settings.general.debug);
        assert_eq!(settings.outgoing.collect_delay, 1.0);
        assert!(settings.upstream.api_key.is_empty());
    }

    #[test]
    fn test_endpoint_urls() {
        let upstream = UpstreamSettings::default();
        assert_eq!(
            upstream.company_collect_url("77"),
            "https://api.coresignal.com/cdapi/v1/professional_network/company/collect/77"
        );
        assert!(upstream.company_search_url().ends_with("/company/search/filter"));
        assert!(upstream.employee_search_url().ends_with("/employee/search/filter"));
        assert!(upstream.es_dsl_url().ends_with("/multi_source/company/search/es_dsl"));
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
server:
  port: 8080
outgoing:
  collect_delay: 0.0
"#;
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.outgoing.collect_delay, 0.0);
        // untouched sections keep their defaults
        assert_eq!(settings.outgoing.request_timeout, 30.0);
        assert_eq!(settings.translator.model, "gpt-4-turbo");
    }
}
